use std::sync::Arc;

use crate::application::services::SpeechPipelineService;
use crate::presentation::config::{ScaffoldConfig, Settings};

/// Shared by every request; the pipeline holds the long-lived capability
/// handles.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SpeechPipelineService>,
    pub settings: Settings,
    pub scaffold_config: ScaffoldConfig,
}

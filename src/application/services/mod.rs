mod speech_pipeline_service;

pub use speech_pipeline_service::{PipelineError, PipelineTimeouts, SpeechPipelineService};

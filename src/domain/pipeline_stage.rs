use std::fmt;

/// Progress of one request through the speech pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    ReceivedUpload,
    Decoded,
    Denoised,
    Transcribed,
    AnalyzedAndTranslated,
    Responded,
    Errored,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::ReceivedUpload => "RECEIVED_UPLOAD",
            PipelineStage::Decoded => "DECODED",
            PipelineStage::Denoised => "DENOISED",
            PipelineStage::Transcribed => "TRANSCRIBED",
            PipelineStage::AnalyzedAndTranslated => "ANALYZED_AND_TRANSLATED",
            PipelineStage::Responded => "RESPONDED",
            PipelineStage::Errored => "ERRORED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Responded | PipelineStage::Errored)
    }

    /// Stage reached on success, `None` once terminal.
    pub fn next(&self) -> Option<PipelineStage> {
        match self {
            PipelineStage::ReceivedUpload => Some(PipelineStage::Decoded),
            PipelineStage::Decoded => Some(PipelineStage::Denoised),
            PipelineStage::Denoised => Some(PipelineStage::Transcribed),
            PipelineStage::Transcribed => Some(PipelineStage::AnalyzedAndTranslated),
            PipelineStage::AnalyzedAndTranslated => Some(PipelineStage::Responded),
            PipelineStage::Responded | PipelineStage::Errored => None,
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

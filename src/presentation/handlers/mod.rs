mod health;
mod process_speech;

pub use health::health_handler;
pub use process_speech::{ErrorResponse, ProcessSpeechResponse, process_speech_handler};

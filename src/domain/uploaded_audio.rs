use super::audio_format::AudioFormat;

/// Raw upload as received from the client, alive only until decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub data: Vec<u8>,
    pub filename: Option<String>,
    pub format: AudioFormat,
}

impl UploadedAudio {
    pub fn new(data: Vec<u8>, filename: Option<String>, declared_mime: Option<&str>) -> Self {
        let format = AudioFormat::detect(declared_mime, filename.as_deref(), &data);
        Self {
            data,
            filename,
            format,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

use std::fmt;

/// Container format of an uploaded recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Ogg,
    Webm,
    Mp4,
    Aac,
    Unknown,
}

impl AudioFormat {
    /// Magic bytes win over the declared type: browsers label WebM/Opus
    /// recordings as `audio/wav`.
    pub fn detect(declared_mime: Option<&str>, filename: Option<&str>, data: &[u8]) -> Self {
        if let Some(sniffed) = Self::sniff(data) {
            return sniffed;
        }

        if let Some(declared) = declared_mime.and_then(Self::from_mime) {
            return declared;
        }

        filename
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(Self::Unknown)
    }

    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE" {
            return Some(Self::Wav);
        }
        if data.starts_with(b"fLaC") {
            return Some(Self::Flac);
        }
        if data.starts_with(b"OggS") {
            return Some(Self::Ogg);
        }
        if data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]) {
            return Some(Self::Webm);
        }
        if data.len() >= 8 && &data[4..8] == b"ftyp" {
            return Some(Self::Mp4);
        }
        if data.starts_with(b"ID3") {
            return Some(Self::Mp3);
        }
        if data.len() >= 2 && data[0] == 0xFF {
            // ADTS sync words have layer bits 00, MPEG audio frames do not.
            return match data[1] & 0xF6 {
                0xF0 => Some(Self::Aac),
                _ if data[1] & 0xE0 == 0xE0 => Some(Self::Mp3),
                _ => None,
            };
        }
        None
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        match essence.to_ascii_lowercase().as_str() {
            "audio/wav" | "audio/wave" | "audio/x-wav" | "audio/vnd.wave" => Some(Self::Wav),
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/flac" | "audio/x-flac" => Some(Self::Flac),
            "audio/ogg" | "application/ogg" => Some(Self::Ogg),
            "audio/webm" | "video/webm" => Some(Self::Webm),
            "audio/mp4" | "audio/m4a" | "audio/x-m4a" | "video/mp4" => Some(Self::Mp4),
            "audio/aac" | "audio/x-aac" => Some(Self::Aac),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" | "wave" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "flac" => Some(Self::Flac),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "webm" => Some(Self::Webm),
            "mp4" | "m4a" => Some(Self::Mp4),
            "aac" => Some(Self::Aac),
            _ => None,
        }
    }

    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Wav => Some("wav"),
            Self::Mp3 => Some("mp3"),
            Self::Flac => Some("flac"),
            Self::Ogg => Some("ogg"),
            Self::Webm => Some("webm"),
            Self::Mp4 => Some("m4a"),
            Self::Aac => Some("aac"),
            Self::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
            Self::Webm => "webm",
            Self::Mp4 => "mp4",
            Self::Aac => "aac",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

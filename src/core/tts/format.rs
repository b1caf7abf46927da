//! Audio container detection from leading magic bytes.
//!
//! Parasail returns WAV from the streaming endpoint and MP3 from the buffered
//! speech endpoint, but neither response declares its container reliably. The
//! classifier inspects the first bytes of the assembled buffer:
//!
//! | Leading bytes                          | Tag   |
//! |----------------------------------------|-------|
//! | `52 49 46 46` (`RIFF`)                 | WAV   |
//! | `49 44 33` (`ID3`)                     | MP3   |
//! | `FF` then a byte with top 3 bits set   | MP3   |
//! | anything else, or fewer than 4 bytes   | fallback |

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Minimum number of bytes inspected before trusting a magic number
pub const MIN_SNIFF_LEN: usize = 4;

/// Format tag attached to synthesized audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// RIFF/WAVE container
    Wav,
    /// MPEG audio, with or without an ID3 tag
    Mp3,
    /// No known signature, treated as WAV
    UnknownAssumedWav,
    /// No known signature, treated as MP3
    UnknownAssumedMp3,
}

impl AudioFormat {
    /// File extension / host format string
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav | Self::UnknownAssumedWav => "wav",
            Self::Mp3 | Self::UnknownAssumedMp3 => "mp3",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Container assumed when no signature matches.
///
/// The streaming endpoint falls back to WAV and the buffered endpoint to MP3;
/// each deployment may override its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackFormat {
    #[default]
    Wav,
    Mp3,
}

impl FallbackFormat {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }

    /// Parse `wav` / `mp3` (case insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wav" | "wave" => Some(Self::Wav),
            "mp3" | "mpeg" => Some(Self::Mp3),
            _ => None,
        }
    }

    fn unknown_tag(self) -> AudioFormat {
        match self {
            Self::Wav => AudioFormat::UnknownAssumedWav,
            Self::Mp3 => AudioFormat::UnknownAssumedMp3,
        }
    }
}

/// Classify an assembled audio buffer by its leading bytes
pub fn classify(data: &[u8], fallback: FallbackFormat) -> AudioFormat {
    if data.len() < MIN_SNIFF_LEN {
        debug!(
            "Audio buffer too short for format detection ({} bytes), assuming {}",
            data.len(),
            fallback.as_str()
        );
        return fallback.unknown_tag();
    }

    let magic = &data[..MIN_SNIFF_LEN];
    debug!("Audio magic bytes: {}", hex::encode(magic));

    if magic == b"RIFF" {
        info!("Detected WAV format from API");
        return AudioFormat::Wav;
    }

    if &magic[..3] == b"ID3" || (magic[0] == 0xFF && (magic[1] & 0xE0) == 0xE0) {
        info!("Detected MP3 format from API");
        return AudioFormat::Mp3;
    }

    warn!(
        "Unknown audio format, magic bytes: {}. Assuming {}.",
        hex::encode(magic),
        fallback.as_str().to_uppercase()
    );
    fallback.unknown_tag()
}

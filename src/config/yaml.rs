use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// This structure represents the full configuration that can be loaded from a YAML file.
/// All fields are optional to allow partial configuration. Environment variables fill in
/// anything not specified here.
///
/// # Example YAML structure
/// ```yaml
/// provider:
///   name: "parasail"
///   api_url: "https://voice-demo.parasail.io/api/tts-stream"
///   auth_header: true
///
/// credentials:
///   api_key: "your-parasail-key"
///
/// voice:
///   model: "parasail-resemble-tts-en"
///   voice: "oai_nova"
///   temperature: 0.1
///   exaggeration: 0.0
///   cfg_weight: 3.0
///   response_format: "mp3"
///   fallback_format: "wav"
///
/// timeouts:
///   request_seconds: 30
///   validation_seconds: 10
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub provider: Option<ProviderYaml>,
    pub credentials: Option<CredentialsYaml>,
    pub voice: Option<VoiceYaml>,
    pub timeouts: Option<TimeoutsYaml>,
}

/// Provider selection from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ProviderYaml {
    /// `parasail` (streaming) or `parasail-speech` (buffered)
    pub name: Option<String>,
    pub api_url: Option<String>,
    pub auth_header: Option<bool>,
}

/// Credentials from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CredentialsYaml {
    pub api_key: Option<String>,
}

/// Synthesis parameters from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VoiceYaml {
    pub model: Option<String>,
    pub voice: Option<String>,
    pub temperature: Option<f64>,
    pub exaggeration: Option<f64>,
    pub cfg_weight: Option<f64>,
    /// Buffered provider only
    pub response_format: Option<String>,
    pub fallback_format: Option<String>,
}

/// Timeouts from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TimeoutsYaml {
    pub request_seconds: Option<u64>,
    pub validation_seconds: Option<u64>,
}

impl YamlConfig {
    /// Load YAML configuration from a file
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;

        let config: YamlConfig = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse YAML config: {e}"))?;

        Ok(config)
    }
}

use super::ClientConfig;
use super::merge::merge_config;
use super::validation::validate_config;

pub const ENV_PROVIDER: &str = "PARASAIL_PROVIDER";
pub const ENV_API_KEY: &str = "PARASAIL_API_KEY";
pub const ENV_API_URL: &str = "PARASAIL_API_URL";
pub const ENV_AUTH_HEADER: &str = "PARASAIL_AUTH_HEADER";
pub const ENV_MODEL: &str = "PARASAIL_MODEL";
pub const ENV_VOICE: &str = "PARASAIL_VOICE";
pub const ENV_TEMPERATURE: &str = "PARASAIL_TEMPERATURE";
pub const ENV_EXAGGERATION: &str = "PARASAIL_EXAGGERATION";
pub const ENV_CFG_WEIGHT: &str = "PARASAIL_CFG_WEIGHT";
pub const ENV_RESPONSE_FORMAT: &str = "PARASAIL_RESPONSE_FORMAT";
pub const ENV_FALLBACK_FORMAT: &str = "PARASAIL_FALLBACK_FORMAT";
pub const ENV_REQUEST_TIMEOUT: &str = "PARASAIL_REQUEST_TIMEOUT_SECONDS";
pub const ENV_VALIDATION_TIMEOUT: &str = "PARASAIL_VALIDATION_TIMEOUT_SECONDS";

/// Every variable the loader reads
pub const ENV_VARS: &[&str] = &[
    ENV_PROVIDER,
    ENV_API_KEY,
    ENV_API_URL,
    ENV_AUTH_HEADER,
    ENV_MODEL,
    ENV_VOICE,
    ENV_TEMPERATURE,
    ENV_EXAGGERATION,
    ENV_CFG_WEIGHT,
    ENV_RESPONSE_FORMAT,
    ENV_FALLBACK_FORMAT,
    ENV_REQUEST_TIMEOUT,
    ENV_VALIDATION_TIMEOUT,
];

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Reads configuration from `PARASAIL_*` environment variables, with sensible
    /// defaults. Also loads from .env file if present using dotenvy.
    ///
    /// # Returns
    /// * `Result<Self, Box<dyn std::error::Error>>` - The loaded configuration or an error
    ///
    /// # Errors
    /// Returns an error if:
    /// - A numeric or boolean variable is malformed
    /// - A value is out of range or the API URL is not allowed
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let _ = dotenvy::dotenv();

        let config = merge_config(None)?;
        validate_config(&config)?;

        Ok(config)
    }
}

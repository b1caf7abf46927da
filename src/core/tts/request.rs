//! Per-call synthesis request and its numeric tuning parameters.

use std::ops::RangeInclusive;

use super::base::{TTSConfig, TTSError, TTSResult};

pub const DEFAULT_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_EXAGGERATION: f64 = 0.0;
pub const DEFAULT_CFG_WEIGHT: f64 = 3.0;

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=2.0;
pub const EXAGGERATION_RANGE: RangeInclusive<f64> = 0.0..=2.0;
pub const CFG_WEIGHT_RANGE: RangeInclusive<f64> = 0.0..=5.0;

/// Numeric tuning parameters sent with every synthesis call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub temperature: f64,
    pub exaggeration: f64,
    pub cfg_weight: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            exaggeration: DEFAULT_EXAGGERATION,
            cfg_weight: DEFAULT_CFG_WEIGHT,
        }
    }
}

impl Tuning {
    /// Read tuning from the options store, clamping each value into its range.
    /// Missing or non-finite values fall back to the defaults.
    pub fn from_config(config: &TTSConfig) -> Self {
        Self {
            temperature: bounded(config.temperature, DEFAULT_TEMPERATURE, &TEMPERATURE_RANGE),
            exaggeration: bounded(
                config.exaggeration,
                DEFAULT_EXAGGERATION,
                &EXAGGERATION_RANGE,
            ),
            cfg_weight: bounded(config.cfg_weight, DEFAULT_CFG_WEIGHT, &CFG_WEIGHT_RANGE),
        }
    }
}

fn bounded(value: Option<f64>, default: f64, range: &RangeInclusive<f64>) -> f64 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(*range.start(), *range.end()))
        .unwrap_or(default)
}

/// One synthesis call's input. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    text: String,
    voice: String,
    model: String,
    tuning: Tuning,
}

impl SynthesisRequest {
    /// Create a request with default tuning.
    ///
    /// Fails with `InvalidConfiguration` when `text` is empty or whitespace.
    pub fn new(
        text: impl Into<String>,
        voice: impl Into<String>,
        model: impl Into<String>,
    ) -> TTSResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TTSError::InvalidConfiguration(
                "Text to synthesize must not be empty".to_string(),
            ));
        }

        Ok(Self {
            text,
            voice: voice.into(),
            model: model.into(),
            tuning: Tuning::default(),
        })
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tuning(&self) -> Tuning {
        self.tuning
    }
}

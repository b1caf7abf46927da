//! Parasail streaming TTS provider.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://voice-demo.parasail.io/api/tts-stream`
//! - Authentication: optional `Authorization: Bearer {api_key}`
//! - Response: `text/event-stream`, base64 audio fragments (WAV)
//!
//! A synthesis call is one request and one sequentially consumed response:
//! status → lines → [`reassemble`] → [`classify`]. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info};
use zeroize::Zeroizing;

use super::config::{PARASAIL_TTS_MODELS, ParasailTTSConfig, VALIDATION_TEXT};
use super::messages::ParasailStreamRequest;
use super::reassembler::{DecodePolicy, reassemble};
use crate::core::tts::base::{
    BaseTTS, InvalidAuth, SynthesizedAudio, TTSConfig, TTSError, TTSResult, ValidationInfo,
};
use crate::core::tts::format::classify;
use crate::core::tts::request::{SynthesisRequest, Tuning};
use crate::core::tts::transport::{HttpTransport, ReqwestTransport, TransportRequest};

/// Parasail TTS provider using the SSE streaming endpoint
pub struct ParasailTTS {
    settings: ParasailTTSConfig,
    api_key: Zeroizing<String>,
    transport: Arc<dyn HttpTransport>,
}

impl ParasailTTS {
    /// Create a provider backed by `reqwest`
    pub fn new(config: TTSConfig) -> TTSResult<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(config, transport)
    }

    /// Create a provider on top of a caller-supplied transport
    pub fn with_transport(config: TTSConfig, transport: Arc<dyn HttpTransport>) -> TTSResult<Self> {
        let settings = ParasailTTSConfig::from_tts_config(&config)?;
        Ok(Self {
            settings,
            api_key: Zeroizing::new(config.api_key.clone()),
            transport,
        })
    }

    pub fn settings(&self) -> &ParasailTTSConfig {
        &self.settings
    }

    fn build_request(
        &self,
        request: &SynthesisRequest,
        bearer: Option<&str>,
        timeout: Duration,
    ) -> TTSResult<TransportRequest> {
        let body = serde_json::to_value(ParasailStreamRequest::from(request)).map_err(|e| {
            TTSError::InvalidConfiguration(format!("Failed to encode request body: {e}"))
        })?;

        let transport_request = TransportRequest::new(&self.settings.api_url, body, timeout);
        Ok(match bearer {
            Some(key) => transport_request.with_bearer(key),
            None => transport_request,
        })
    }

    /// Issue the request and reassemble the streamed fragments.
    ///
    /// The whole exchange, headers and body, is bounded by `timeout`.
    async fn stream_audio(
        &self,
        request: &SynthesisRequest,
        bearer: Option<&str>,
        timeout: Duration,
        policy: DecodePolicy,
    ) -> TTSResult<Vec<u8>> {
        let transport_request = self.build_request(request, bearer, timeout)?;

        let exchange = async {
            let response = self.transport.post_json(transport_request).await?;

            if !response.is_success() {
                let status = response.status();
                let body = response.text().await;
                error!("API request failed with status {}: {}", status, body);
                return Err(TTSError::RemoteRejected { status, body });
            }

            reassemble(response.lines(), policy).await
        };

        match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result,
            Err(_) => {
                error!("Parasail TTS request timed out after {:?}", timeout);
                Err(TTSError::ConnectionFailed(format!(
                    "Request timed out after {timeout:?}"
                )))
            }
        }
    }

    /// Check that `api_key` can synthesize before accepting it.
    ///
    /// Stricter than [`BaseTTS::synthesize`]: any malformed line, error event,
    /// or missing audio fails validation. Every failure is reported as
    /// [`InvalidAuth`]; the detail is logged and kept as its source.
    pub async fn validate_credentials(
        &self,
        api_key: &str,
        voice: Option<&str>,
    ) -> Result<ValidationInfo, InvalidAuth> {
        let voice = voice
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(&self.settings.voice);

        if api_key.trim().is_empty() {
            error!("API validation failed: no API key supplied");
            return Err(InvalidAuth::new(TTSError::InvalidConfiguration(
                "API key is empty".to_string(),
            )));
        }

        let request = SynthesisRequest::new(VALIDATION_TEXT, voice, &self.settings.model)?
            .with_tuning(Tuning::default());

        match self
            .stream_audio(
                &request,
                Some(api_key),
                self.settings.validation_timeout,
                DecodePolicy::Strict,
            )
            .await
        {
            Ok(_) => Ok(ValidationInfo {
                title: format!("Parasail TTS ({voice})"),
            }),
            Err(reason) => {
                error!("API validation failed: {}", reason);
                Err(InvalidAuth::new(reason))
            }
        }
    }
}

#[async_trait]
impl BaseTTS for ParasailTTS {
    async fn synthesize(&self, text: &str) -> TTSResult<SynthesizedAudio> {
        let request = SynthesisRequest::new(text, &self.settings.voice, &self.settings.model)?
            .with_tuning(self.settings.tuning);

        let tuning = request.tuning();
        debug!(
            "Requesting TTS: voice={}, message_length={}, temperature={}, exaggeration={}, cfg_weight={}",
            request.voice(),
            request.text().len(),
            tuning.temperature,
            tuning.exaggeration,
            tuning.cfg_weight
        );

        let bearer = self
            .settings
            .auth_header
            .then(|| self.api_key.as_str());
        let audio = self
            .stream_audio(
                &request,
                bearer,
                self.settings.request_timeout,
                DecodePolicy::Tolerant,
            )
            .await?;

        let format = classify(&audio, self.settings.fallback_format);
        info!("Parasail TTS produced {} bytes of {}", audio.len(), format);

        Ok(SynthesizedAudio::new(format, audio))
    }

    fn voice(&self) -> &str {
        &self.settings.voice
    }

    fn model(&self) -> &str {
        &self.settings.model
    }

    fn get_provider_info(&self) -> serde_json::Value {
        serde_json::json!({
            "provider": "parasail",
            "version": "1.0.0",
            "api_type": "HTTP SSE streaming",
            "endpoint": self.settings.api_url,
            "supported_models": PARASAIL_TTS_MODELS,
            "supported_languages": self.supported_languages(),
            "supported_formats": ["wav", "mp3"],
            "fallback_format": self.settings.fallback_format.as_str(),
            "voice": self.settings.voice,
            "model": self.settings.model,
            "tuning": {
                "temperature": self.settings.tuning.temperature,
                "exaggeration": self.settings.tuning.exaggeration,
                "cfg_weight": self.settings.tuning.cfg_weight,
            },
        })
    }
}

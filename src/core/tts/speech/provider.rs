//! Buffered Parasail TTS provider implementation.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://api.parasail.io/v1/audio/speech`
//! - Authentication: `Authorization: Bearer {api_key}`
//! - Output: raw mp3 (default) or wav in the response body

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};
use zeroize::Zeroizing;

use super::config::SpeechTTSConfig;
use super::messages::SpeechRequest;
use crate::core::tts::base::{BaseTTS, SynthesizedAudio, TTSConfig, TTSError, TTSResult};
use crate::core::tts::format::classify;
use crate::core::tts::parasail::PARASAIL_TTS_MODELS;
use crate::core::tts::request::{SynthesisRequest, Tuning};
use crate::core::tts::transport::{HttpTransport, ReqwestTransport, TransportRequest};

/// Parasail TTS provider using the OpenAI-compatible speech endpoint
///
/// # Example
///
/// ```rust,ignore
/// use parasail_tts::core::tts::{BaseTTS, SpeechTTS, TTSConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let config = TTSConfig {
///         api_key: "psk-...".to_string(),
///         audio_format: Some("wav".to_string()),
///         ..Default::default()
///     };
///
///     let tts = SpeechTTS::new(config).unwrap();
///     let audio = tts.synthesize("Hello, world!").await.unwrap();
/// }
/// ```
pub struct SpeechTTS {
    settings: SpeechTTSConfig,
    api_key: Zeroizing<String>,
    transport: Arc<dyn HttpTransport>,
}

impl SpeechTTS {
    pub fn new(config: TTSConfig) -> TTSResult<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: TTSConfig, transport: Arc<dyn HttpTransport>) -> TTSResult<Self> {
        Ok(Self {
            settings: SpeechTTSConfig::from_tts_config(&config)?,
            api_key: Zeroizing::new(config.api_key.clone()),
            transport,
        })
    }

    pub fn settings(&self) -> &SpeechTTSConfig {
        &self.settings
    }

    fn build_request(&self, request: &SynthesisRequest) -> TTSResult<TransportRequest> {
        let body = serde_json::to_value(SpeechRequest {
            model: request.model(),
            voice: request.voice(),
            input: request.text(),
            response_format: self.settings.response_format,
            temperature: request.tuning().temperature,
        })
        .map_err(|e| TTSError::InvalidConfiguration(format!("Failed to encode request body: {e}")))?;

        Ok(
            TransportRequest::new(&self.settings.api_url, body, self.settings.request_timeout)
                .with_bearer(&self.api_key),
        )
    }

    async fn fetch_audio(&self, request: &SynthesisRequest) -> TTSResult<Vec<u8>> {
        let transport_request = self.build_request(request)?;
        let timeout = self.settings.request_timeout;

        let exchange = async {
            let response = self.transport.post_json(transport_request).await?;
            if !response.is_success() {
                let status = response.status();
                let body = response.text().await;
                error!("API request failed with status {}: {}", status, body);
                return Err(TTSError::RemoteRejected { status, body });
            }
            response.bytes().await
        };

        let audio = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| {
                error!("Parasail speech request timed out after {:?}", timeout);
                TTSError::ConnectionFailed(format!("Request timed out after {timeout:?}"))
            })??;

        if audio.is_empty() {
            error!("No audio received from API");
            return Err(TTSError::NoAudioReceived);
        }
        Ok(audio)
    }
}

#[async_trait]
impl BaseTTS for SpeechTTS {
    async fn synthesize(&self, text: &str) -> TTSResult<SynthesizedAudio> {
        let request = SynthesisRequest::new(text, &self.settings.voice, &self.settings.model)?
            .with_tuning(Tuning {
                temperature: self.settings.temperature,
                ..Tuning::default()
            });

        debug!(
            "Requesting buffered TTS: model={}, voice={}, message_length={}",
            request.model(),
            request.voice(),
            request.text().len()
        );

        let audio = self.fetch_audio(&request).await?;
        let format = classify(&audio, self.settings.fallback_format);
        info!("Parasail speech produced {} bytes of {}", audio.len(), format);

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
            "provider": "parasail-speech",
            "version": "1.0.0",
            "api_type": "HTTP REST",
            "endpoint": self.settings.api_url,
            "supported_models": PARASAIL_TTS_MODELS,
            "supported_languages": self.supported_languages(),
            "supported_formats": ["mp3", "wav"],
            "fallback_format": self.settings.fallback_format.as_str(),
            "response_format": self.settings.response_format.map(|f| f.as_str()),
            "voice": self.settings.voice,
            "model": self.settings.model,
        })
    }
}

//! Stream reassembler.
//!
//! Drives [`decode_line`] over the response body and concatenates audio
//! fragments in the order they arrive. The remote service delivers fragments
//! in order within a response, so `chunk` numbers are only logged.

use futures::{Stream, StreamExt};
use tracing::{debug, error, info, warn};

use super::decoder::{FragmentError, decode_line};
use super::messages::{AudioFragment, StreamEvent};
use crate::core::tts::base::{TTSError, TTSResult};

/// How per-line decoding faults are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Regular synthesis: log the bad line, skip it, keep reading
    #[default]
    Tolerant,
    /// Credential validation: any bad line is fatal, and the first valid
    /// audio fragment is enough to succeed
    Strict,
}

/// Outcome of feeding one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Keep reading
    Continue,
    /// Enough has been seen; the rest of the body can be abandoned
    Complete,
}

/// Accumulates fragments for one response
#[derive(Debug)]
pub struct Reassembler {
    policy: DecodePolicy,
    fragments: Vec<AudioFragment>,
    events: usize,
    warnings: usize,
}

impl Reassembler {
    pub fn new(policy: DecodePolicy) -> Self {
        Self {
            policy,
            fragments: Vec::new(),
            events: 0,
            warnings: 0,
        }
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Lines skipped because they failed to decode
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Data lines that decoded into an event
    pub fn event_count(&self) -> usize {
        self.events
    }

    /// Feed one line of the body.
    ///
    /// An error event aborts with `RemoteError` and drops anything accumulated.
    pub fn push_line(&mut self, line: &str) -> TTSResult<Progress> {
        let event = match decode_line(line) {
            Ok(Some(event)) => event,
            Ok(None) => return Ok(Progress::Continue),
            Err(e) => return self.on_bad_line(e),
        };
        self.events += 1;

        match event {
            StreamEvent::Audio(fragment) => {
                debug!(
                    "Received audio chunk {} ({} bytes)",
                    fragment.chunk.unwrap_or(self.fragments.len() as u64 + 1),
                    fragment.data.len()
                );
                self.fragments.push(fragment);

                if self.policy == DecodePolicy::Strict {
                    return Ok(Progress::Complete);
                }
            }
            StreamEvent::Error { payload } => {
                error!("API returned error event: {}", payload);
                self.fragments.clear();
                return Err(TTSError::RemoteError(payload));
            }
            StreamEvent::Start { priority } => {
                debug!("Stream started (priority: {:?})", priority);
            }
            StreamEvent::Done => {
                debug!("Stream done after {} events", self.events);
            }
            StreamEvent::Unrecognized { payload } => {
                debug!("Ignoring unrecognized stream event: {}", payload);
            }
        }

        Ok(Progress::Continue)
    }

    fn on_bad_line(&mut self, err: FragmentError) -> TTSResult<Progress> {
        match self.policy {
            DecodePolicy::Tolerant => {
                warn!("{}", err);
                self.warnings += 1;
                Ok(Progress::Continue)
            }
            DecodePolicy::Strict => {
                error!("Failed to parse or decode API response: {}", err);
                Err(TTSError::MalformedFragment(err.to_string()))
            }
        }
    }

    /// Close the stream and produce the assembled buffer
    pub fn finish(self) -> TTSResult<Vec<u8>> {
        if self.fragments.is_empty() {
            error!("No audio chunks received from API");
            return Err(TTSError::NoAudioReceived);
        }

        let total: usize = self.fragments.iter().map(|f| f.data.len()).sum();
        let mut audio = Vec::with_capacity(total);
        for fragment in &self.fragments {
            audio.extend_from_slice(&fragment.data);
        }

        info!(
            "Generated {} bytes of audio from {} chunks",
            audio.len(),
            self.fragments.len()
        );
        if self.warnings > 0 {
            warn!("Skipped {} malformed stream lines", self.warnings);
        }

        Ok(audio)
    }
}

/// Consume a line stream to completion (or until [`Progress::Complete`]).
///
/// Errors from the stream itself are transport failures and propagate unchanged.
pub async fn reassemble<S>(mut lines: S, policy: DecodePolicy) -> TTSResult<Vec<u8>>
where
    S: Stream<Item = TTSResult<String>> + Unpin,
{
    let mut reassembler = Reassembler::new(policy);

    while let Some(line) = lines.next().await {
        if reassembler.push_line(&line?)? == Progress::Complete {
            break;
        }
    }

    reassembler.finish()
}

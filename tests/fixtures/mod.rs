//! Test Fixtures Module
//!
//! This module provides test fixtures for Parasail TTS testing:
//! - Audio fixtures (programmatically generated WAV and MP3 bytes)
//! - Event-stream fixtures (SSE line builders)

// Not every integration test binary uses every fixture
#![allow(dead_code)]

pub mod audio_fixtures;
pub mod sse_fixtures;

pub use audio_fixtures::*;
pub use sse_fixtures::*;

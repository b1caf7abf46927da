//! Audio Test Fixtures
//!
//! This module provides programmatically generated audio test data.
//! Using generated audio ensures:
//! - Consistent, reproducible test inputs
//! - No external file dependencies
//! - Byte-exact control over container headers
//!
//! PCM format:
//! - Sample rate: 24kHz (what Parasail voices produce)
//! - Bit depth: 16-bit signed PCM
//! - Channels: Mono

use std::f32::consts::PI;

/// Sample rate of generated audio
pub const SAMPLE_RATE: u32 = 24000;

/// 100ms at 24kHz
pub const MS_100: usize = 2400;

/// Generate silence (zeros)
pub fn generate_silence(duration_samples: usize) -> Vec<i16> {
    vec![0i16; duration_samples]
}

/// Generate a sine wave tone
pub fn generate_sine_wave(duration_samples: usize, frequency: f32, amplitude: f32) -> Vec<i16> {
    let max_amplitude = amplitude * i16::MAX as f32;
    let angular_freq = 2.0 * PI * frequency / SAMPLE_RATE as f32;

    (0..duration_samples)
        .map(|i| {
            let sample = (angular_freq * i as f32).sin() * max_amplitude;
            sample as i16
        })
        .collect()
}

/// Convert i16 samples to little-endian bytes
pub fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Wrap PCM samples in a canonical 44-byte RIFF/WAVE header
pub fn wav_file(samples: &[i16]) -> Vec<u8> {
    let data = samples_to_bytes(samples);
    let byte_rate = SAMPLE_RATE * 2;

    let mut wav = Vec::with_capacity(44 + data.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data.len() as u32).to_le_bytes());
    wav.extend_from_slice(&data);
    wav
}

/// 100ms A440 tone as a WAV file
pub fn a440_wav() -> Vec<u8> {
    wav_file(&generate_sine_wave(MS_100, 440.0, 0.5))
}

/// One MPEG-1 Layer III frame header followed by zeroed payload
pub fn mp3_frame() -> Vec<u8> {
    let mut frame = vec![0xFF, 0xFB, 0x90, 0x64];
    frame.extend(std::iter::repeat_n(0u8, 413));
    frame
}

/// MP3 data preceded by a minimal ID3v2.4 tag
pub fn id3_tagged_mp3() -> Vec<u8> {
    let mut data = b"ID3".to_vec();
    data.extend_from_slice(&[0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    data.extend(mp3_frame());
    data
}

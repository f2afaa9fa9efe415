//! Raw PCM decoding
//!
//! The upstream speech model returns raw signed 16-bit little-endian PCM
//! with no container. This module turns those bytes into an [`AudioBuffer`]
//! of normalized float samples.

use log::debug;

use crate::audio::buffer::AudioBuffer;
use crate::error::{Result, VoxError};

/// Bytes per 16-bit PCM sample
pub const BYTES_PER_SAMPLE: usize = 2;

/// Decode raw 16-bit little-endian PCM into an audio buffer
///
/// Each consecutive 2-byte group is read as a signed little-endian 16-bit
/// integer and normalized by 32768.0, mapping [-32768, 32767] onto
/// approximately [-1.0, 0.999969]. Samples are assigned to channels in
/// interleaved order: `sample[i]` lands in channel `i % num_channels` at
/// frame `i / num_channels`.
///
/// # Arguments
/// * `bytes` - Raw PCM payload
/// * `sample_rate` - Sample rate in Hz
/// * `num_channels` - Channel count of the interleaved stream
///
/// # Errors
/// Returns `Decode` if the byte length is not a multiple of
/// `2 * num_channels`. Malformed input fails loudly; it is never truncated
/// or padded to fit.
pub fn decode_audio_data(
    bytes: &[u8],
    sample_rate: u32,
    num_channels: usize,
) -> Result<AudioBuffer> {
    if num_channels == 0 {
        return Err(VoxError::Decode {
            reason: "channel count must be positive".to_string(),
        });
    }
    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(VoxError::Decode {
            reason: format!(
                "PCM byte length {} is not a multiple of {}",
                bytes.len(),
                BYTES_PER_SAMPLE
            ),
        });
    }

    let total_samples = bytes.len() / BYTES_PER_SAMPLE;
    if total_samples % num_channels != 0 {
        return Err(VoxError::Decode {
            reason: format!(
                "{} samples cannot be split across {} channels",
                total_samples, num_channels
            ),
        });
    }

    let frames = total_samples / num_channels;
    let mut channels = vec![Vec::with_capacity(frames); num_channels];

    for (i, chunk) in bytes.chunks_exact(BYTES_PER_SAMPLE).enumerate() {
        let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
        channels[i % num_channels].push(sample as f32 / 32768.0);
    }

    debug!(
        "decoded {} bytes into {} frames ({} ch @ {} Hz)",
        bytes.len(),
        frames,
        num_channels,
        sample_rate
    );

    AudioBuffer::from_channels(channels, sample_rate)
}

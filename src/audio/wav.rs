//! WAV encoding
//!
//! Builds a complete canonical RIFF/PCM file from an [`AudioBuffer`]. The
//! 44-byte header layout is part of the download contract, so the bytes are
//! written by hand rather than through a writer library.

use crate::audio::buffer::AudioBuffer;

/// Length of the canonical PCM WAV header in bytes
pub const WAV_HEADER_LEN: usize = 44;

/// Bits per sample in the output file
pub const WAV_BITS_PER_SAMPLE: u16 = 16;

/// MIME type of the encoded file
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// Encode an audio buffer as a complete 16-bit PCM WAV file
///
/// Samples are interleaved frame-by-frame, clamped to [-1.0, 1.0], and
/// quantized asymmetrically: negative values scale by 32768, non-negative
/// by 32767, truncating toward zero. The asymmetry avoids overflow at +1.0
/// while keeping the full negative range; a decode-encode pass reproduces
/// zero and negative integer samples exactly and positive ones to within
/// one step.
///
/// The header declares `ChunkSize = 36 + data_len` and
/// `Subchunk2Size = data_len` where
/// `data_len = num_channels * num_samples * 2`.
pub fn audio_buffer_to_wav(buffer: &AudioBuffer) -> Vec<u8> {
    let num_channels = buffer.num_channels() as u16;
    let sample_rate = buffer.sample_rate();
    let interleaved = buffer.to_interleaved();

    let block_align = num_channels as u32 * 2;
    let byte_rate = sample_rate * block_align;
    let data_len = interleaved.len() as u32 * 2;

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + data_len as usize);

    // RIFF chunk descriptor
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt subchunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16_u32.to_le_bytes());
    out.extend_from_slice(&1_u16.to_le_bytes()); // PCM
    out.extend_from_slice(&num_channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&(block_align as u16).to_le_bytes());
    out.extend_from_slice(&WAV_BITS_PER_SAMPLE.to_le_bytes());

    // data subchunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in interleaved {
        out.extend_from_slice(&quantize(sample).to_le_bytes());
    }

    out
}

/// Quantize a float sample to signed 16-bit PCM
#[inline]
fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped < 0.0 {
        (clamped * 32768.0) as i16
    } else {
        (clamped * 32767.0) as i16
    }
}

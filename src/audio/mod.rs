//! Audio core
//!
//! The two binary-format transforms at the heart of the pipeline:
//! - PCM decoding: raw 16-bit LE bytes from the speech model into an
//!   [`AudioBuffer`] of normalized floats
//! - WAV encoding: an [`AudioBuffer`] into a complete downloadable file
//!
//! Both are pure and deterministic; encode-then-decode round-trips audio to
//! within one quantization step.

pub mod buffer;
pub mod pcm;
pub mod wav;

pub use buffer::AudioBuffer;
pub use pcm::{decode_audio_data, BYTES_PER_SAMPLE};
pub use wav::{audio_buffer_to_wav, WAV_HEADER_LEN, WAV_MIME_TYPE};

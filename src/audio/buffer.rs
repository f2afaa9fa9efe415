//! In-memory audio buffer
//!
//! Decoded speech audio lives here as non-interleaved 32-bit float samples,
//! one `Vec<f32>` per channel. Buffers are created once by the PCM decoder
//! and treated as read-only by playback and the WAV encoder.

use crate::error::{Result, VoxError};

/// Decoded audio as per-channel floating-point samples plus a sample rate
///
/// # Invariants
/// - Every channel holds the same number of samples.
/// - Sample values are nominally within [-1.0, 1.0]; the WAV encoder clamps
///   before quantizing, so out-of-range values cannot corrupt output.
///
/// # Example
/// ```
/// use voxgen::audio::AudioBuffer;
///
/// let buffer = AudioBuffer::from_channels(vec![vec![0.0; 24000]], 24000).unwrap();
/// assert_eq!(buffer.num_channels(), 1);
/// assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    /// Sample data: outer Vec is channels, inner Vec is samples
    channels: Vec<Vec<f32>>,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a buffer from per-channel sample data
    ///
    /// # Errors
    /// Returns `Decode` if no channels are given, the sample rate is zero,
    /// or the channels have differing lengths.
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        if channels.is_empty() {
            return Err(VoxError::Decode {
                reason: "audio buffer requires at least one channel".to_string(),
            });
        }
        if sample_rate == 0 {
            return Err(VoxError::Decode {
                reason: "sample rate must be positive".to_string(),
            });
        }

        let expected = channels[0].len();
        if let Some((idx, ch)) = channels
            .iter()
            .enumerate()
            .find(|(_, ch)| ch.len() != expected)
        {
            return Err(VoxError::Decode {
                reason: format!(
                    "channel {} has {} samples, expected {}",
                    idx,
                    ch.len(),
                    expected
                ),
            });
        }

        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Create a silent buffer with the given shape
    pub fn silent(num_samples: usize, num_channels: usize, sample_rate: u32) -> Result<Self> {
        Self::from_channels(vec![vec![0.0_f32; num_samples]; num_channels], sample_rate)
    }

    /// Number of channels
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel
    #[inline]
    pub fn num_samples(&self) -> usize {
        self.channels.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Alias for `num_samples`
    #[inline]
    pub fn len(&self) -> usize {
        self.num_samples()
    }

    /// Check if the buffer holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_samples() == 0
    }

    /// Sample rate in Hz
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds (`num_samples / sample_rate`)
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.num_samples() as f64 / self.sample_rate as f64
    }

    /// Get a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// Convert to interleaved frame order
    ///
    /// Produces channel 0's sample for frame 0, then channel 1's sample for
    /// frame 0, and so on for each frame.
    pub fn to_interleaved(&self) -> Vec<f32> {
        let num_channels = self.num_channels();
        let num_samples = self.num_samples();

        let mut interleaved = Vec::with_capacity(num_channels * num_samples);
        for frame in 0..num_samples {
            for channel in &self.channels {
                interleaved.push(channel[frame]);
            }
        }

        interleaved
    }

    /// Peak absolute sample value across all channels
    pub fn peak(&self) -> f32 {
        self.channels
            .iter()
            .flat_map(|ch| ch.iter())
            .map(|s| s.abs())
            .fold(0.0_f32, f32::max)
    }
}

//! Playback state machine
//!
//! A [`Player`] drives one clip at a time through an [`AudioSink`] (the
//! output-device seam). Starting a new clip stops the active one first, so
//! two sources are never audible at once, and the sink is released on drop
//! whether or not playback ran to completion.

use std::fmt;

use log::{debug, warn};

use crate::audio::AudioBuffer;
use crate::error::Result;

/// Output-device seam for rendered audio
///
/// `begin` hands the sink a buffer to render; `cancel` must silence it
/// immediately. Implementations are expected to tolerate a `cancel` with no
/// active render.
pub trait AudioSink {
    /// Start rendering a buffer
    fn begin(&mut self, buffer: &AudioBuffer) -> Result<()>;

    /// Stop rendering immediately, with no fade-out
    fn cancel(&mut self);
}

/// Sink that discards audio; for headless use and tests
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn begin(&mut self, _buffer: &AudioBuffer) -> Result<()> {
        Ok(())
    }

    fn cancel(&mut self) {}
}

/// Playback states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// No active source (default state)
    #[default]
    Idle,
    /// A source is rendering
    Playing,
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerState::Idle => write!(f, "Idle"),
            PlayerState::Playing => write!(f, "Playing"),
        }
    }
}

/// Events reported by [`Player::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The active source ran to the end of its scheduled duration
    Finished,
}

/// Scheduling state for the active source
#[derive(Debug)]
struct ActiveSource {
    total_samples: u64,
    samples_elapsed: u64,
}

/// Single-source playback controller
///
/// State transitions:
/// - `Idle --play--> Playing`: acquires a source scoped to the buffer and
///   starts immediately
/// - `Playing --stop--> Idle`: releases the source at once
/// - `Playing --advance past end--> Idle`: natural completion, reported as
///   [`PlaybackEvent::Finished`]
///
/// Only one source is ever active; `play` while playing stops the previous
/// source first. Dropping the player cancels the sink, so release does not
/// depend on the owner remembering to call [`Player::stop`].
pub struct Player {
    sink: Box<dyn AudioSink>,
    active: Option<ActiveSource>,
}

impl Player {
    /// Create a player on top of an output sink
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self { sink, active: None }
    }

    /// Start playing a buffer, stopping any active source first
    ///
    /// # Errors
    /// Propagates sink failures; the player stays idle if the sink refuses
    /// the buffer.
    pub fn play(&mut self, buffer: &AudioBuffer) -> Result<()> {
        if self.active.is_some() {
            debug!("[PLAYER] Restart requested; stopping active source");
            self.release();
        }

        self.sink.begin(buffer)?;
        self.active = Some(ActiveSource {
            total_samples: buffer.num_samples() as u64,
            samples_elapsed: 0,
        });
        debug!(
            "[PLAYER] Playing {} samples ({:.3}s)",
            buffer.num_samples(),
            buffer.duration_secs()
        );
        Ok(())
    }

    /// Stop playback immediately
    ///
    /// No-op when idle. No completion event fires for an explicit stop.
    pub fn stop(&mut self) {
        if self.active.is_none() {
            debug!("[PLAYER] Stop while idle; nothing to do");
            return;
        }
        self.release();
        debug!("[PLAYER] Stopped");
    }

    /// Account for rendered samples and detect natural completion
    ///
    /// The owner calls this as render time elapses. When the scheduled
    /// duration has fully elapsed the player transitions to idle, releases
    /// the source, and reports [`PlaybackEvent::Finished`] exactly once.
    pub fn advance(&mut self, samples: u64) -> Option<PlaybackEvent> {
        let source = self.active.as_mut()?;
        source.samples_elapsed = source.samples_elapsed.saturating_add(samples);

        if source.samples_elapsed >= source.total_samples {
            self.release();
            debug!("[PLAYER] Source finished");
            return Some(PlaybackEvent::Finished);
        }
        None
    }

    /// Current state
    pub fn state(&self) -> PlayerState {
        if self.active.is_some() {
            PlayerState::Playing
        } else {
            PlayerState::Idle
        }
    }

    /// Check if a source is active
    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    fn release(&mut self) {
        self.sink.cancel();
        self.active = None;
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        if self.active.is_some() {
            warn!("[PLAYER] Dropped while playing; releasing source");
            self.release();
        }
    }
}

//! Audio-related small types.
//!
//! This module defines the command set the audio thread accepts, the
//! identity attached to every load attempt, and the lifecycle
//! notifications the thread reports back.

use std::fmt;

use crate::library::{MediaUrl, TrackId};

/// Identity of one load attempt. Reloading the same track yields a new
/// `attempt`, so results of the earlier load can be told apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LoadId {
    pub track: TrackId,
    pub attempt: u64,
}

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.track, self.attempt)
    }
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the current media with `url`, paused at the start.
    Load { load: LoadId, url: MediaUrl },
    /// Start or resume playback of the given load; ignored if superseded.
    Play(LoadId),
    /// Pause playback.
    Pause,
    /// Jump to an absolute position in seconds.
    Seek(f64),
    /// Set the output volume (0.0 - 1.0).
    SetVolume(f32),
    /// Drop the current media.
    Stop,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Lifecycle events of a single load attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    LoadStart,
    CanPlay,
    /// Duration in seconds, `None` when the container does not say.
    MetadataReady { duration: Option<f64> },
    /// Current position in seconds.
    TimeUpdate { position: f64 },
    Ended,
    Error { reason: String },
    /// The media loaded, but starting playback failed.
    PlayRejected { reason: String },
}

/// A [`MediaEvent`] tagged with the load attempt it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub load: LoadId,
    pub event: MediaEvent,
}

impl Notification {
    pub fn new(load: LoadId, event: MediaEvent) -> Self {
        Self { load, event }
    }
}

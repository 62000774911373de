use thiserror::Error;

use crate::library::MediaUrl;

use super::types::LoadId;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("audio thread is not running")]
    Disconnected,
}

/// The playable-media primitive the playlist controller drives.
///
/// Every call returns immediately. Outcomes arrive later as
/// [`Notification`](super::Notification)s tagged with the `LoadId` passed to
/// [`load`](MediaBackend::load).
pub trait MediaBackend {
    fn load(&mut self, load: LoadId, url: &MediaUrl);
    /// Request playback. An `Err` means the request could not even be issued.
    fn play(&mut self, load: LoadId) -> Result<(), BackendError>;
    fn pause(&mut self);
    fn seek(&mut self, position: f64);
    fn set_volume(&mut self, volume: f32);
    fn stop(&mut self);
}

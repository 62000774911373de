//! Media backend: the rodio playback thread and the contract the playlist
//! controller uses to drive it.

mod backend;
mod player;
mod sink;
mod thread;
mod types;

pub use backend::{BackendError, MediaBackend};
pub use player::AudioPlayer;
pub use types::{LoadId, MediaEvent, Notification};

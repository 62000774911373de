//! Application module: the playlist/playback controller driven by the TUI
//! and runtime.
//!
//! `App` lives in `app::model` and owns the playlist, the playback intent
//! and the load/error pipeline. Errors it can record or return live in
//! `app::error`.

mod error;
mod model;

pub use error::{PlayerError, PlaylistError};
pub use model::*;

//! Playlist entries and everything needed to produce them: file picking,
//! directory scanning and path-to-URL resolution.

mod model;
mod picker;
mod resolve;
mod scan;

pub use model::{Track, TrackId};
pub use picker::{FilePicker, PathPicker};
pub use resolve::{MediaUrl, resolve_media_url};

//! Filesystem path to playable URL conversion.
//!
//! The media backend only ever sees `file://` URLs. Conversion is pure and
//! deterministic, so the controller can recompute it on every load.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaUrl(Url);

impl MediaUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decode the URL back into a filesystem path.
    pub fn to_path(&self) -> Option<PathBuf> {
        self.0.to_file_path().ok()
    }
}

impl fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Map an absolute filesystem path to a backend-playable URL.
///
/// Relative paths have no stable URL and resolve to `None`; the picker only
/// ever hands out canonical paths.
pub fn resolve_media_url(path: &Path) -> Option<MediaUrl> {
    Url::from_file_path(path).ok().map(MediaUrl)
}

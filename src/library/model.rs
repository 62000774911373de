use std::fmt;
use std::path::{Path, PathBuf};

use super::resolve::{MediaUrl, resolve_media_url};

/// Session-unique track identity. Never reused after a track is removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A playlist entry. Immutable once imported.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub source_path: PathBuf,
    /// `None` when the path cannot be expressed as a `file://` URL.
    pub resolved_url: Option<MediaUrl>,
}

impl Track {
    pub fn from_path(id: TrackId, path: PathBuf) -> Self {
        let name = display_name(&path);
        let resolved_url = resolve_media_url(&path);
        Self {
            id,
            name,
            source_path: path,
            resolved_url,
        }
    }
}

/// Base name of `path` including its extension, or `"Unknown"` when the
/// path has no final component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "Unknown".to_string())
}

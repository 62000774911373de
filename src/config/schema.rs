use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadence/config.toml` or `~/.config/cadence/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENCE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// How often the audio thread reports the playback position (milliseconds).
    pub tick_ms: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Language used for every piece of UI text and error messages.
    pub language: Language,

    /// The text rendered under the title in the top header box.
    pub header_text: String,

    /// Delay between marquee steps for track names that do not fit (milliseconds).
    pub marquee_step_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: Language::Ru,
            header_text: " ~ cadence ~ ".to_string(),
            marquee_step_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Advance to the next track when the current one ends.
    pub auto_play: bool,
    /// Initial volume in percent (0-100).
    pub volume: u8,
    /// Volume change per mouse-wheel notch or `+`/`-` key press.
    pub volume_step: u8,
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            auto_play: true,
            volume: 70,
            volume_step: 5,
            scrub_seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions the import picker accepts (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when importing a directory.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: ["mp3", "wav", "ogg", "flac", "m4a", "aac", "wma"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file path. When unset, a file under the XDG state directory is used.
    pub file: Option<PathBuf>,
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

use thiserror::Error;

use crate::i18n::Language;

/// The single user-visible error slot of the player.
///
/// A new error overwrites the previous one; errors never leave the
/// controller, they are only rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("file selection failed: {reason}")]
    FileSelection { reason: String },
    #[error("could not load audio: {track}")]
    Load { track: String },
    #[error("playback error: {track}")]
    Playback { track: String },
}

impl PlayerError {
    /// Render the error for the status line in `language`.
    pub fn localized(&self, language: Language) -> String {
        let s = language.strings();
        match self {
            PlayerError::FileSelection { .. } => s.file_selection_error.to_string(),
            PlayerError::Load { track } => format!("{}: {track}", s.could_not_load_audio),
            PlayerError::Playback { track } => format!("{}: {track}", s.playback_error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("index {index} out of range for playlist of {len} tracks")]
    IndexOutOfRange { index: usize, len: usize },
}

//! File selection.
//!
//! A picker returns `Ok(None)` when the user cancels, `Ok(Some(paths))` with
//! absolute audio-file paths on confirm, and `Err` when selection itself
//! failed. Only the picker applies the extension allow-list; the playlist
//! trusts whatever it is handed.

use std::env;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::LibrarySettings;

use super::scan::{is_audio_file, scan};

#[derive(Debug, Error)]
pub enum PickError {
    #[error("no such file or directory: {0}")]
    NotFound(PathBuf),
    #[error("not a supported audio file: {0}")]
    Unsupported(PathBuf),
    #[error("failed to read directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to resolve path: {0}")]
    Io(#[from] io::Error),
}

pub trait FilePicker {
    fn pick(&mut self) -> Result<Option<Vec<PathBuf>>, PickError>;
}

/// Picker backed by typed paths: the import prompt, or command-line arguments.
pub struct PathPicker<'a> {
    inputs: Vec<String>,
    settings: &'a LibrarySettings,
}

impl<'a> PathPicker<'a> {
    pub fn new(inputs: Vec<String>, settings: &'a LibrarySettings) -> Self {
        Self { inputs, settings }
    }
}

impl FilePicker for PathPicker<'_> {
    fn pick(&mut self) -> Result<Option<Vec<PathBuf>>, PickError> {
        let inputs: Vec<&str> = self
            .inputs
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if inputs.is_empty() {
            return Ok(None);
        }

        let mut picked = Vec::new();
        for input in inputs {
            let path = expand_home(input, env::var_os("HOME").as_deref());
            picked.extend(expand(&path, self.settings)?);
        }
        Ok(Some(picked))
    }
}

/// Resolve one user-supplied path into absolute audio-file paths.
fn expand(path: &Path, settings: &LibrarySettings) -> Result<Vec<PathBuf>, PickError> {
    if !path.exists() {
        return Err(PickError::NotFound(path.to_path_buf()));
    }
    let path = path.canonicalize()?;

    if path.is_dir() {
        return Ok(scan(&path, settings)?);
    }
    if is_audio_file(&path, settings) {
        Ok(vec![path])
    } else {
        Err(PickError::Unsupported(path))
    }
}

fn expand_home(input: &str, home: Option<&OsStr>) -> PathBuf {
    match (input.strip_prefix('~'), home) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            PathBuf::from(home).join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn blank_input_is_a_cancel() {
        let settings = LibrarySettings::default();
        let mut picker = PathPicker::new(vec!["   ".to_string()], &settings);
        assert!(picker.pick().unwrap().is_none());

        let mut picker = PathPicker::new(Vec::new(), &settings);
        assert!(picker.pick().unwrap().is_none());
    }

    #[test]
    fn single_file_resolves_to_an_absolute_path() {
        let dir = tempdir().unwrap();
        let song = dir.path().join("song.mp3");
        fs::write(&song, b"x").unwrap();

        let settings = LibrarySettings::default();
        let mut picker = PathPicker::new(vec![song.to_string_lossy().into_owned()], &settings);
        let picked = picker.pick().unwrap().unwrap();

        assert_eq!(picked, vec![song.canonicalize().unwrap()]);
        assert!(picked[0].is_absolute());
    }

    #[test]
    fn directory_expands_to_its_audio_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.wav"), b"x").unwrap();
        fs::write(dir.path().join("a.flac"), b"x").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"x").unwrap();

        let settings = LibrarySettings::default();
        let mut picker =
            PathPicker::new(vec![dir.path().to_string_lossy().into_owned()], &settings);
        let picked = picker.pick().unwrap().unwrap();

        let names: Vec<_> = picked
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.flac", "b.wav"]);
    }

    #[test]
    fn missing_and_unsupported_paths_are_errors() {
        let dir = tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, b"x").unwrap();
        let settings = LibrarySettings::default();

        let mut picker = PathPicker::new(
            vec![dir.path().join("missing.mp3").to_string_lossy().into_owned()],
            &settings,
        );
        assert!(matches!(picker.pick(), Err(PickError::NotFound(_))));

        let mut picker = PathPicker::new(vec![notes.to_string_lossy().into_owned()], &settings);
        assert!(matches!(picker.pick(), Err(PickError::Unsupported(_))));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = Some(OsStr::new("/home/me"));
        assert_eq!(expand_home("~/Music", home), PathBuf::from("/home/me/Music"));
        assert_eq!(expand_home("~", home), PathBuf::from("/home/me"));
        assert_eq!(expand_home("/abs/x.mp3", home), PathBuf::from("/abs/x.mp3"));
        assert_eq!(expand_home("~user/x", home), PathBuf::from("~user/x"));
        assert_eq!(expand_home("~/Music", None), PathBuf::from("~/Music"));
    }
}

//! Application model types: `App` and `PlaybackStatus`.
//!
//! `App` holds the playlist, the current track, the playback intent and the
//! state of the single active load. It is the only place where playback
//! state changes; the UI reads it and the runtime feeds it user actions and
//! backend notifications.

use std::path::PathBuf;

use crate::audio::{LoadId, MediaBackend, MediaEvent, Notification};
use crate::library::{Track, TrackId, resolve_media_url};

use super::error::{PlayerError, PlaylistError};

/// What the player is doing, derived from the controller state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Loading,
    Playing,
    Paused,
    Errored,
}

/// The playlist/playback controller.
pub struct App<B: MediaBackend> {
    tracks: Vec<Track>,
    current: usize,

    /// Intent: whether the user wants audio to be playing.
    playing: bool,
    loading: bool,
    /// The current media reported `Ended` and was not restarted yet.
    at_end: bool,
    error: Option<PlayerError>,

    current_time: f64,
    duration: Option<f64>,
    volume: u8,

    next_track_id: u64,
    active_load: Option<LoadId>,
    attempts: u64,

    backend: B,
}

impl<B: MediaBackend> App<B> {
    /// Create an empty player driving `backend`, with the initial `volume` applied.
    pub fn new(backend: B, volume: u8) -> Self {
        let mut app = Self {
            tracks: Vec::new(),
            current: 0,
            playing: false,
            loading: false,
            at_end: false,
            error: None,
            current_time: 0.0,
            duration: None,
            volume: 0,
            next_track_id: 0,
            active_load: None,
            attempts: 0,
            backend,
        };
        app.set_volume(i32::from(volume));
        app
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
    /// Return true if the playlist contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }
    pub fn current_index(&self) -> usize {
        self.current
    }
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }
    pub fn is_playing(&self) -> bool {
        self.playing
    }
    pub fn is_loading(&self) -> bool {
        self.loading
    }
    pub fn error(&self) -> Option<&PlayerError> {
        self.error.as_ref()
    }
    pub fn current_time(&self) -> f64 {
        self.current_time
    }
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }
    pub fn volume(&self) -> u8 {
        self.volume
    }
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Duration if it is known and usable for seeking.
    fn seekable_duration(&self) -> Option<f64> {
        self.duration.filter(|d| d.is_finite() && *d > 0.0)
    }

    /// Playback position as a percentage of the duration, `0.0` when unknown.
    pub fn progress_percent(&self) -> f64 {
        match self.seekable_duration() {
            Some(d) => (self.current_time / d * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.current_track().is_none() {
            PlaybackStatus::Stopped
        } else if self.error.is_some() {
            PlaybackStatus::Errored
        } else if self.loading {
            PlaybackStatus::Loading
        } else if self.playing {
            PlaybackStatus::Playing
        } else if self.current_time > 0.0 {
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Stopped
        }
    }

    fn current_name(&self) -> String {
        self.current_track()
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    fn check_index(&self, index: usize) -> Result<(), PlaylistError> {
        if index < self.tracks.len() {
            Ok(())
        } else {
            Err(PlaylistError::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            })
        }
    }

    /// Append one track per path. The first import into an empty playlist
    /// loads track 0 without starting playback.
    pub fn import(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        self.error = None;

        let was_empty = self.tracks.is_empty();
        let count = paths.len();
        for path in paths {
            self.next_track_id += 1;
            self.tracks
                .push(Track::from_path(TrackId(self.next_track_id), path));
        }
        tracing::info!(count, total = self.tracks.len(), "tracks imported");

        if was_empty {
            self.current = 0;
            self.playing = false;
            self.sync_current();
        }
    }

    /// Remove the track at `index`, keeping `current` on a valid track.
    pub fn remove(&mut self, index: usize) -> Result<Track, PlaylistError> {
        self.check_index(index)?;

        let removed = self.tracks.remove(index);
        self.error = None;

        if self.tracks.is_empty() {
            self.current = 0;
            self.playing = false;
        } else if index < self.current {
            self.current -= 1;
        } else if index == self.current && self.current >= self.tracks.len() {
            self.current = self.tracks.len() - 1;
        }

        self.sync_current();
        Ok(removed)
    }

    /// Drop every track and stop playback.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.current = 0;
        self.playing = false;
        self.error = None;
        self.unload();
    }

    /// Play the track at `index` from the start.
    pub fn select(&mut self, index: usize) -> Result<(), PlaylistError> {
        self.check_index(index)?;
        self.current = index;
        self.playing = true;
        self.load_current();
        Ok(())
    }

    /// Advance to the next track, wrapping to the first.
    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.tracks.len();
        self.playing = true;
        self.load_current();
    }

    /// Go back to the previous track, wrapping to the last.
    pub fn previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let len = self.tracks.len();
        self.current = (self.current + len - 1) % len;
        self.playing = true;
        self.load_current();
    }

    pub fn toggle_play_pause(&mut self) {
        if self.current_track().is_none() || self.error.is_some() {
            return;
        }
        if self.playing {
            self.backend.pause();
            self.playing = false;
        } else {
            self.playing = true;
            self.start_playback();
        }
    }

    /// Restart the current track if it is playing, otherwise start it.
    pub fn restart_current(&mut self) {
        if self.current_track().is_none() || self.error.is_some() {
            return;
        }
        if self.playing {
            self.backend.seek(0.0);
            self.current_time = 0.0;
            self.at_end = false;
        } else {
            self.playing = true;
            self.start_playback();
        }
    }

    /// Jump to `percent` (0-100) of the duration. Ignored while the duration is unknown.
    pub fn seek(&mut self, percent: f64) {
        let Some(duration) = self.seekable_duration() else {
            return;
        };
        if percent.is_nan() {
            return;
        }
        let position = percent.clamp(0.0, 100.0) / 100.0 * duration;
        self.backend.seek(position);
        self.current_time = position;
        self.at_end = false;
    }

    /// Move the position by `seconds` (negative goes back).
    pub fn scrub(&mut self, seconds: i64) {
        let Some(duration) = self.seekable_duration() else {
            return;
        };
        let target = self.current_time + seconds as f64;
        self.seek(target / duration * 100.0);
    }

    /// Set the volume, clamped to 0-100, and apply it immediately.
    pub fn set_volume(&mut self, percent: i32) {
        self.volume = percent.clamp(0, 100) as u8;
        self.backend.set_volume(f32::from(self.volume) / 100.0);
    }

    pub fn adjust_volume(&mut self, delta: i32) {
        self.set_volume(i32::from(self.volume) + delta);
    }

    /// Record that picking files failed.
    pub fn report_file_selection_error(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(%reason, "file selection failed");
        self.error = Some(PlayerError::FileSelection { reason });
    }

    /// Reload when the track under `current` is not the one loaded.
    fn sync_current(&mut self) {
        let wanted = self.current_track().map(|t| t.id);
        let loaded = self.active_load.map(|l| l.track);
        match wanted {
            None => self.unload(),
            Some(id) if Some(id) != loaded => self.load_current(),
            Some(_) => {}
        }
    }

    fn load_current(&mut self) {
        let Some(track) = self.tracks.get(self.current) else {
            self.unload();
            return;
        };

        self.attempts += 1;
        let load = LoadId {
            track: track.id,
            attempt: self.attempts,
        };
        let Some(url) = resolve_media_url(&track.source_path) else {
            tracing::warn!(%load, path = %track.source_path.display(), "no file url for track");
            self.unload();
            self.playing = false;
            self.error = Some(PlayerError::Load {
                track: self.current_name(),
            });
            return;
        };
        tracing::debug!(%load, track = %track.name, "loading track");

        self.active_load = Some(load);
        self.error = None;
        self.loading = true;
        self.current_time = 0.0;
        self.duration = None;
        self.at_end = false;

        self.backend.load(load, &url);
        if self.playing {
            self.start_playback();
        }
    }

    fn start_playback(&mut self) {
        let Some(load) = self.active_load else {
            // Nothing loaded yet, e.g. the last attempt never reached the backend.
            self.load_current();
            return;
        };
        if self.at_end {
            self.backend.seek(0.0);
            self.current_time = 0.0;
            self.at_end = false;
        }
        if let Err(err) = self.backend.play(load) {
            tracing::warn!(%load, error = %err, "play request failed");
            self.playing = false;
            self.error = Some(PlayerError::Playback {
                track: self.current_name(),
            });
        }
    }

    fn unload(&mut self) {
        if self.active_load.take().is_some() {
            self.backend.stop();
        }
        self.loading = false;
        self.current_time = 0.0;
        self.duration = None;
        self.at_end = false;
    }

    /// Apply one backend notification. Notifications for a load other than
    /// the active one are dropped.
    pub fn handle_notification(&mut self, notification: Notification, auto_play: bool) {
        let Notification { load, event } = notification;
        if self.active_load != Some(load) {
            tracing::debug!(%load, ?event, "ignoring stale notification");
            return;
        }

        match event {
            MediaEvent::LoadStart => {
                self.loading = true;
                self.error = None;
            }
            MediaEvent::CanPlay => {
                self.loading = false;
                self.error = None;
            }
            MediaEvent::MetadataReady { duration } => {
                self.duration = duration;
                self.loading = false;
                self.error = None;
            }
            MediaEvent::TimeUpdate { position } => {
                self.current_time = position;
            }
            MediaEvent::Ended => {
                if auto_play {
                    self.next();
                } else {
                    self.playing = false;
                    self.at_end = true;
                }
            }
            MediaEvent::Error { reason } => {
                tracing::warn!(%load, %reason, "media failed to load");
                self.loading = false;
                self.playing = false;
                self.error = Some(PlayerError::Load {
                    track: self.current_name(),
                });
            }
            MediaEvent::PlayRejected { reason } => {
                tracing::warn!(%load, %reason, "playback rejected");
                self.playing = false;
                self.error = Some(PlayerError::Playback {
                    track: self.current_name(),
                });
            }
        }
    }
}

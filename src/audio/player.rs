use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::library::MediaUrl;

use super::backend::{BackendError, MediaBackend};
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, LoadId, Notification};

/// Handle to the rodio playback thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the audio thread. Lifecycle notifications arrive on the returned receiver.
    pub fn new(audio_settings: AudioSettings) -> (Self, Receiver<Notification>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (events_tx, events_rx) = mpsc::channel::<Notification>();

        let audio_handle = spawn_audio_thread(rx, events_tx, audio_settings);

        let player = Self {
            tx,
            join: Mutex::new(Some(audio_handle)),
        };
        (player, events_rx)
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    fn send_or_log(&self, cmd: AudioCmd) {
        if let Err(err) = self.send(cmd) {
            tracing::error!(cmd = ?err.0, "audio thread is gone");
        }
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl MediaBackend for AudioPlayer {
    fn load(&mut self, load: LoadId, url: &MediaUrl) {
        self.send_or_log(AudioCmd::Load {
            load,
            url: url.clone(),
        });
    }

    fn play(&mut self, load: LoadId) -> Result<(), BackendError> {
        self.send(AudioCmd::Play(load))
            .map_err(|_| BackendError::Disconnected)
    }

    fn pause(&mut self) {
        self.send_or_log(AudioCmd::Pause);
    }

    fn seek(&mut self, position: f64) {
        self.send_or_log(AudioCmd::Seek(position));
    }

    fn set_volume(&mut self, volume: f32) {
        self.send_or_log(AudioCmd::SetVolume(volume));
    }

    fn stop(&mut self) {
        self.send_or_log(AudioCmd::Stop);
    }
}

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::library::MediaUrl;

use super::sink::{Opened, create_sink_at};
use super::types::{AudioCmd, LoadId, MediaEvent, Notification};

/// Where new sinks get connected.
pub(super) enum Output {
    Device(OutputStream),
    /// No device could be opened; every load fails.
    Unavailable,
    /// Sinks exist but nothing drains them.
    #[cfg(test)]
    Detached,
}

impl Output {
    fn open_default() -> Self {
        match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                stream.log_on_drop(false);
                Output::Device(stream)
            }
            Err(err) => {
                tracing::error!(error = %err, "no audio output device");
                Output::Unavailable
            }
        }
    }

    pub(super) fn connect(&self) -> Option<Sink> {
        match self {
            Output::Device(stream) => Some(Sink::connect_new(stream.mixer())),
            Output::Unavailable => None,
            #[cfg(test)]
            Output::Detached => Some(Sink::new().0),
        }
    }
}

struct Current {
    load: LoadId,
    path: PathBuf,
    sink: Sink,
    duration: Option<Duration>,
    ended: bool,
}

/// State owned by the audio thread.
pub(super) struct Core {
    output: Output,
    events: Sender<Notification>,
    current: Option<Current>,
    /// Load whose media could not be opened.
    failed: Option<LoadId>,
    playing: bool,
    volume: f32,
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<Notification>,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let tick = Duration::from_millis(audio_settings.tick_ms.max(1));
        let mut core = Core::new(Output::open_default(), events);

        loop {
            match rx.recv_timeout(tick) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    core.shutdown(fade_out_ms);
                    break;
                }
                Ok(cmd) => core.handle(cmd),
                Err(RecvTimeoutError::Timeout) => core.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

impl Core {
    pub(super) fn new(output: Output, events: Sender<Notification>) -> Self {
        Self {
            output,
            events,
            current: None,
            failed: None,
            playing: false,
            volume: 1.0,
        }
    }

    fn emit(&self, load: LoadId, event: MediaEvent) {
        let _ = self.events.send(Notification::new(load, event));
    }

    pub(super) fn handle(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::Load { load, url } => self.load(load, &url),
            AudioCmd::Play(load) => self.play(load),
            AudioCmd::Pause => {
                if let Some(cur) = self.current.as_ref() {
                    cur.sink.pause();
                }
                self.playing = false;
            }
            AudioCmd::Seek(secs) => self.seek(secs),
            AudioCmd::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(cur) = self.current.as_ref() {
                    cur.sink.set_volume(self.volume);
                }
            }
            AudioCmd::Stop => self.stop(),
            AudioCmd::Quit { .. } => self.shutdown(0),
        }
    }

    fn stop(&mut self) {
        if let Some(cur) = self.current.take() {
            cur.sink.stop();
        }
        self.failed = None;
        self.playing = false;
    }

    fn fail(&mut self, load: LoadId, reason: String) {
        self.failed = Some(load);
        self.emit(load, MediaEvent::Error { reason });
    }

    fn load(&mut self, load: LoadId, url: &MediaUrl) {
        self.stop();
        self.emit(load, MediaEvent::LoadStart);

        let Some(path) = url.to_path() else {
            self.fail(load, format!("unsupported url: {url}"));
            return;
        };

        match create_sink_at(&self.output, &path, Duration::ZERO, self.volume) {
            Ok(Opened { sink, duration }) => {
                tracing::debug!(%load, path = %path.display(), ?duration, "media loaded");
                self.current = Some(Current {
                    load,
                    path,
                    sink,
                    duration,
                    ended: false,
                });
                self.emit(
                    load,
                    MediaEvent::MetadataReady {
                        duration: duration.map(|d| d.as_secs_f64()),
                    },
                );
                self.emit(load, MediaEvent::CanPlay);
            }
            Err(err) => {
                tracing::warn!(%load, path = %path.display(), error = %err, "failed to load media");
                self.fail(load, err.to_string());
            }
        }
    }

    fn play(&mut self, load: LoadId) {
        let Some(cur) = self.current.as_ref() else {
            if self.failed == Some(load) {
                self.emit(
                    load,
                    MediaEvent::PlayRejected {
                        reason: "media failed to load".to_string(),
                    },
                );
            }
            return;
        };
        if cur.load != load {
            return;
        }

        if cur.ended {
            if let Err(reason) = self.rebuild_at(Duration::ZERO) {
                self.emit(load, MediaEvent::PlayRejected { reason });
                return;
            }
        }

        if let Some(cur) = self.current.as_ref() {
            cur.sink.play();
            self.playing = true;
        }
    }

    fn seek(&mut self, secs: f64) {
        let Some(cur) = self.current.as_ref() else {
            return;
        };
        let load = cur.load;
        let mut target = Duration::from_secs_f64(secs.max(0.0));
        if let Some(total) = cur.duration {
            target = target.min(total);
        }

        let seeked = !cur.ended && cur.sink.try_seek(target).is_ok();
        if !seeked {
            // Scrubbing fallback: rebuild the sink and skip into the file.
            if let Err(reason) = self.rebuild_at(target) {
                tracing::warn!(%load, reason, "seek failed");
                return;
            }
            if self.playing {
                if let Some(cur) = self.current.as_ref() {
                    cur.sink.play();
                }
            }
        }

        self.emit(
            load,
            MediaEvent::TimeUpdate {
                position: target.as_secs_f64(),
            },
        );
    }

    /// Replace the current sink with a fresh, paused one positioned at `start_at`.
    fn rebuild_at(&mut self, start_at: Duration) -> Result<(), String> {
        let Some(cur) = self.current.as_mut() else {
            return Err("nothing loaded".to_string());
        };
        let opened = create_sink_at(&self.output, &cur.path, start_at, self.volume)
            .map_err(|e| e.to_string())?;
        cur.sink.stop();
        cur.sink = opened.sink;
        cur.ended = false;
        Ok(())
    }

    /// Periodic position report and end-of-media detection.
    pub(super) fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let Some(cur) = self.current.as_mut() else {
            return;
        };
        if cur.ended {
            return;
        }

        let load = cur.load;
        if cur.sink.empty() {
            cur.ended = true;
            let position = cur.duration.unwrap_or_else(|| cur.sink.get_pos());
            self.playing = false;
            self.emit(
                load,
                MediaEvent::TimeUpdate {
                    position: position.as_secs_f64(),
                },
            );
            self.emit(load, MediaEvent::Ended);
        } else {
            let position = cur.sink.get_pos().as_secs_f64();
            self.emit(load, MediaEvent::TimeUpdate { position });
        }
    }

    fn shutdown(&mut self, fade_out_ms: u64) {
        if let Some(cur) = self.current.as_ref() {
            if self.playing {
                // Fade out gently before stopping.
                fade_out_sink(&cur.sink, self.volume, fade_out_ms);
            }
        }
        self.stop();
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

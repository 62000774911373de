use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioPlayer, Notification};
use crate::config;
use crate::ui::{self, Overlay, ScreenLayout, View};

use super::gesture::{self, Gesture, Surface};
use super::import_inputs;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    pub view: View,
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Geometry of the last drawn frame, for mouse hit-testing.
    screen: ScreenLayout,
    last_marquee_step: Instant,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `settings`.
    pub fn new(settings: &config::Settings) -> Self {
        Self {
            view: View::new(settings.ui.language, settings.playback.auto_play),
            pending_gg: false,
            screen: ScreenLayout::default(),
            last_marquee_step: Instant::now(),
        }
    }

    fn clamp_cursor(&mut self, len: usize) {
        self.view.cursor = self.view.cursor.min(len.saturating_sub(1));
    }
}

/// Main terminal event loop: applies backend notifications, draws the UI and
/// handles input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    notifications: &Receiver<Notification>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let marquee_step = Duration::from_millis(settings.ui.marquee_step_ms.max(1));

    loop {
        while let Ok(notification) = notifications.try_recv() {
            app.handle_notification(notification, state.view.auto_play);
        }

        state.clamp_cursor(app.tracks().len());
        if state.last_marquee_step.elapsed() >= marquee_step {
            state.view.marquee_offset = state.view.marquee_offset.wrapping_add(1);
            state.last_marquee_step = Instant::now();
        }

        let mut screen = state.screen;
        terminal.draw(|f| {
            screen = ui::screen_layout(f.area());
            ui::draw(f, app, &state.view, settings);
        })?;
        state.screen = screen;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, settings, app, state) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, settings, app, state),
                _ => {}
            }
        }
    }

    Ok(())
}

fn handle_mouse_event(
    mouse: MouseEvent,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    state: &mut EventLoopState,
) {
    let rows = state.screen.playlist_rows();
    let (window_start, _) =
        ui::visible_window(app.tracks().len(), rows.height as usize, state.view.cursor);
    let surface = Surface {
        screen: &state.screen,
        window_start,
        track_count: app.tracks().len(),
        overlay_open: state.view.overlay.is_open(),
        volume_step: settings.playback.volume_step,
    };

    let Some(gesture) = gesture::route(&mouse, &surface) else {
        return;
    };
    match gesture {
        Gesture::Seek(percent) => app.seek(percent),
        Gesture::Select(index) => {
            state.view.cursor = index;
            if let Err(e) = app.select(index) {
                tracing::warn!(error = %e, "select failed");
            }
        }
        Gesture::CursorUp => state.view.cursor = state.view.cursor.saturating_sub(1),
        Gesture::CursorDown => {
            state.view.cursor = (state.view.cursor + 1).min(app.tracks().len().saturating_sub(1));
        }
        Gesture::Restart => app.restart_current(),
        Gesture::Next => app.next(),
        Gesture::Previous => app.previous(),
        Gesture::Volume(delta) => app.adjust_volume(delta),
    }
}

/// Handle a key press. Returns `true` when the app should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    state: &mut EventLoopState,
) -> bool {
    match &mut state.view.overlay {
        Overlay::Import(input) => {
            match key.code {
                KeyCode::Esc => state.view.overlay = Overlay::None,
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Enter => {
                    let typed = std::mem::take(input);
                    state.view.overlay = Overlay::None;
                    let was_empty = !app.has_tracks();
                    import_inputs(app, vec![typed], &settings.library);
                    if was_empty {
                        state.view.cursor = 0;
                    }
                }
                KeyCode::Char(c) if !c.is_control() => input.push(c),
                _ => {}
            }
            return false;
        }
        Overlay::Settings => {
            match key.code {
                KeyCode::Char('a') => state.view.auto_play = !state.view.auto_play,
                KeyCode::Char('l') => state.view.language = state.view.language.next(),
                KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => {
                    state.view.overlay = Overlay::None
                }
                _ => {}
            }
            return false;
        }
        Overlay::About => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                state.view.overlay = Overlay::None;
            }
            return false;
        }
        Overlay::None => {}
    }

    let len = app.tracks().len();
    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            app.backend()
                .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                state.view.cursor = 0;
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            state.view.cursor = len.saturating_sub(1);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            state.view.cursor = (state.view.cursor + 1).min(len.saturating_sub(1));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            state.view.cursor = state.view.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            if app.has_tracks() {
                if let Err(e) = app.select(state.view.cursor) {
                    tracing::warn!(error = %e, "select failed");
                }
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            state.pending_gg = false;
            app.toggle_play_pause();
        }
        KeyCode::Char('r') => {
            state.pending_gg = false;
            app.restart_current();
        }
        KeyCode::Char('l') => {
            state.pending_gg = false;
            app.next();
            state.view.cursor = app.current_index();
        }
        KeyCode::Char('h') => {
            state.pending_gg = false;
            app.previous();
            state.view.cursor = app.current_index();
        }
        KeyCode::Char('L') => {
            state.pending_gg = false;
            app.scrub(scrub_seconds(settings));
        }
        KeyCode::Char('H') => {
            state.pending_gg = false;
            app.scrub(-scrub_seconds(settings));
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            state.pending_gg = false;
            app.adjust_volume(i32::from(settings.playback.volume_step));
        }
        KeyCode::Char('-') => {
            state.pending_gg = false;
            app.adjust_volume(-i32::from(settings.playback.volume_step));
        }
        KeyCode::Char('d') => {
            state.pending_gg = false;
            if app.has_tracks() {
                if let Err(e) = app.remove(state.view.cursor) {
                    tracing::warn!(error = %e, "remove failed");
                }
                state.clamp_cursor(app.tracks().len());
            }
        }
        KeyCode::Char('C') => {
            state.pending_gg = false;
            app.clear();
            state.view.cursor = 0;
        }
        KeyCode::Char('o') => {
            state.pending_gg = false;
            state.view.overlay = Overlay::Import(String::new());
        }
        KeyCode::Char('s') => {
            state.pending_gg = false;
            state.view.overlay = Overlay::Settings;
        }
        KeyCode::Char('?') => {
            state.pending_gg = false;
            state.view.overlay = Overlay::About;
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}

fn scrub_seconds(settings: &config::Settings) -> i64 {
    settings.playback.scrub_seconds.min(i64::MAX as u64) as i64
}

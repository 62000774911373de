use std::env;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioPlayer, MediaBackend};
use crate::config::LibrarySettings;
use crate::library::{FilePicker, PathPicker};

mod event_loop;
mod gesture;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, warning) = settings::load_settings();

    let mut inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.iter().any(|a| a == "--print-config") {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }
    inputs.retain(|a| !a.starts_with("--"));

    let log_path = logging::init(&settings.log);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = ?log_path, "starting cadence");
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let (audio_player, notifications) = AudioPlayer::new(settings.audio.clone());
    let mut app = App::new(audio_player, settings.playback.volume);
    import_inputs(&mut app, inputs, &settings.library);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(&settings);
        event_loop::run(&mut terminal, &settings, &mut app, &notifications, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        tracing::error!(error = %e, "event loop failed");
    }
    run_result
}

/// Resolve typed paths with a [`PathPicker`] and append the result to the
/// playlist. A failed pick is shown to the user instead.
fn import_inputs<B: MediaBackend>(app: &mut App<B>, inputs: Vec<String>, library: &LibrarySettings) {
    match PathPicker::new(inputs, library).pick() {
        Ok(Some(paths)) => app.import(paths),
        Ok(None) => {}
        Err(e) => app.report_file_selection_error(e.to_string()),
    }
}

//! UI rendering helpers for the terminal user interface.
//!
//! `draw` renders the player with `ratatui`. Geometry lives in `ui::layout`
//! so mouse routing can hit-test the same rectangles; text helpers live in
//! `ui::format`.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::MediaBackend;
use crate::config::Settings;
use crate::i18n::{Language, Strings};

mod format;
mod layout;

pub use format::*;
pub use layout::{ScreenLayout, contains, percent_at, screen_layout, visible_window};

use layout::centered_rect_sized;

/// Dialog currently drawn on top of the player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Settings,
    About,
    /// Import prompt with the path typed so far.
    Import(String),
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        *self != Overlay::None
    }
}

/// Presentation state owned by the runtime, not by the controller.
#[derive(Debug, Clone)]
pub struct View {
    /// Playlist row under the keyboard cursor.
    pub cursor: usize,
    pub language: Language,
    pub auto_play: bool,
    pub overlay: Overlay,
    /// Scroll step of the now-playing title.
    pub marquee_offset: usize,
}

impl View {
    pub fn new(language: Language, auto_play: bool) -> Self {
        Self {
            cursor: 0,
            language,
            auto_play,
            overlay: Overlay::None,
            marquee_offset: 0,
        }
    }
}

fn padded() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<B: MediaBackend>(frame: &mut Frame, app: &App<B>, view: &View, settings: &Settings) {
    let s = view.language.strings();
    let screen = screen_layout(frame.area());

    let header = Paragraph::new(settings.ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", s.audio_player))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, screen.header);

    draw_playlist(frame, app, view, s, screen.playlist);
    draw_now_playing(frame, app, view, s, screen.now_playing);
    draw_progress(frame, app, screen.progress);

    let footer = Paragraph::new(vec![
        Line::from(format!(
            "{}: {}% • {}: {} • {}: {}",
            s.volume,
            app.volume(),
            s.auto_play,
            on_off(view.auto_play, s),
            s.language,
            view.language.native_name()
        )),
        Line::from(mouse_text(s)),
        Line::from(controls_text(s, settings.playback.scrub_seconds)),
    ])
    .block(Block::bordered().padding(padded()))
    .wrap(Wrap { trim: true });
    frame.render_widget(footer, screen.footer);

    match &view.overlay {
        Overlay::None => {}
        Overlay::Settings => draw_settings(frame, view, s),
        Overlay::About => draw_about(frame, s),
        Overlay::Import(input) => draw_import(frame, s, input),
    }
}

fn draw_playlist<B: MediaBackend>(
    frame: &mut Frame,
    app: &App<B>,
    view: &View,
    s: &Strings,
    area: Rect,
) {
    let tracks = app.tracks();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", s.playlist, tracks.len()));

    if tracks.is_empty() {
        let empty = Paragraph::new(vec![Line::from(s.no_audio_files), Line::from(s.click_upload)])
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    }

    // Only build ListItems for the visible window.
    let height = area.height.saturating_sub(2) as usize;
    let (start, end) = visible_window(tracks.len(), height, view.cursor);

    let items: Vec<ListItem> = tracks[start..end]
        .iter()
        .enumerate()
        .map(|(offset, track)| {
            let index = start + offset;
            let line = format!("{:>3}. {}", index + 1, track.name);
            if index == app.current_index() {
                ListItem::new(format!("♪ {line}")).style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(format!("  {line}"))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if view.cursor < tracks.len() {
        state.select(Some(view.cursor - start));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_now_playing<B: MediaBackend>(
    frame: &mut Frame,
    app: &App<B>,
    view: &View,
    s: &Strings,
    area: Rect,
) {
    let width = area.width.saturating_sub(3) as usize;
    let mut lines: Vec<Line> = Vec::new();

    match app.current_track() {
        Some(track) => lines.push(Line::from(marquee(&track.name, width, view.marquee_offset)).bold()),
        None => {
            lines.push(Line::from(s.select_track).bold());
            lines.push(Line::from(s.upload_files));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "[ {} ]",
        track_badge(app.is_loading(), app.has_tracks(), app.current_index())
    )));

    if let Some(err) = app.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(err.localized(view.language)).fg(Color::Red));
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .padding(padded())
                .title(format!(" {} ", status_label(app.status(), s))),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn draw_progress<B: MediaBackend>(frame: &mut Frame, app: &App<B>, area: Rect) {
    let label = format!(
        "{} / {}",
        format_time(app.current_time()),
        format_time(app.duration().unwrap_or(0.0))
    );
    let gauge = Gauge::default()
        .block(Block::bordered())
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio((app.progress_percent() / 100.0).clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

fn popup(frame: &mut Frame, width: u16, height: u16, title: &str, lines: Vec<Line>) {
    let area = centered_rect_sized(width, height, frame.area());
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .padding(padded())
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_settings(frame: &mut Frame, view: &View, s: &Strings) {
    let lines = vec![
        Line::from(format!("[a] {}: {}", s.auto_play, on_off(view.auto_play, s))),
        Line::from(format!(
            "[l] {}: {} ({})",
            s.language,
            view.language.native_name(),
            view.language.code()
        )),
        Line::from(""),
        Line::from(format!("[esc] {}", s.close)),
    ];
    popup(frame, 48, 7, s.settings, lines);
}

fn draw_about(frame: &mut Frame, s: &Strings) {
    let lines = vec![
        Line::from(s.about_title).bold(),
        Line::from(s.about_description),
        Line::from(""),
        Line::from(format!("{}: {}", s.version, env!("CARGO_PKG_VERSION"))),
        Line::from(format!("[esc] {}", s.close)),
    ];
    popup(frame, 60, 11, s.about, lines);
}

fn draw_import(frame: &mut Frame, s: &Strings, input: &str) {
    let lines = vec![
        Line::from(s.import_prompt),
        Line::from(format!("> {input}_")),
        Line::from(""),
        Line::from(format!("[esc] {}", s.close)),
    ];
    popup(frame, 70, 7, s.upload_tooltip, lines);
}

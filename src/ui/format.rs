//! Pure text helpers for the TUI: time labels, the scrolling title and
//! small status strings. Nothing here looks at terminal state.

use crate::app::PlaybackStatus;
use crate::i18n::Strings;

/// Gap inserted between the end of a scrolling title and its restart.
const MARQUEE_GAP: &str = "   ";

/// Format seconds as `m:ss`. Unknown or invalid values render as `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }
    let total = secs.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// The `width`-character window of `text` at scroll step `offset`.
///
/// Text that fits is returned unchanged; longer text scrolls left and wraps
/// around with a small gap.
pub fn marquee(text: &str, width: usize, offset: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    let cycle: Vec<char> = text.chars().chain(MARQUEE_GAP.chars()).collect();
    let start = offset % cycle.len();
    cycle
        .iter()
        .cycle()
        .skip(start)
        .take(width)
        .collect()
}

/// Text of the big track badge: `...` while loading, the 1-based position
/// of the current track, or `?` for an empty playlist.
pub fn track_badge(is_loading: bool, has_tracks: bool, current_index: usize) -> String {
    if is_loading {
        "...".to_string()
    } else if has_tracks {
        (current_index + 1).to_string()
    } else {
        "?".to_string()
    }
}

pub fn status_label(status: PlaybackStatus, s: &Strings) -> &'static str {
    match status {
        PlaybackStatus::Loading => s.loading,
        PlaybackStatus::Playing => s.playing,
        PlaybackStatus::Paused => s.paused,
        PlaybackStatus::Stopped | PlaybackStatus::Errored => s.stopped,
    }
}

pub fn on_off(value: bool, s: &Strings) -> &'static str {
    if value { s.on } else { s.off }
}

/// Render the key bindings help line.
pub fn controls_text(s: &Strings, scrub_seconds: u64) -> String {
    let bindings = [
        ("j/k", "up/down".to_string()),
        ("gg/G", "top/bottom".to_string()),
        ("enter", "play".to_string()),
        ("space/p", "play/pause".to_string()),
        ("r", "restart".to_string()),
        ("h/l", "prev/next".to_string()),
        ("H/L", format!("-/+{scrub_seconds}s")),
        ("+/-", s.volume.to_string()),
        ("o", s.upload_tooltip.to_string()),
        ("d", s.remove_track.to_string()),
        ("C", s.clear_playlist.to_string()),
        ("s", s.settings.to_string()),
        ("?", s.about.to_string()),
        ("q", "quit".to_string()),
    ];
    bindings
        .iter()
        .map(|(key, what)| format!("[{key}] {what}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render the mouse help line.
pub fn mouse_text(s: &Strings) -> String {
    format!(
        "{} {} | {} | {} | {}",
        s.mouse_controls, s.left_click, s.right_click, s.middle_click, s.mouse_wheel
    )
}

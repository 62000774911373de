//! Mouse routing.
//!
//! Clicks and wheel turns on the player background are transport shortcuts.
//! Over the playlist and the progress bar they act on that widget instead,
//! and while a dialog is open they do nothing.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::ui::{ScreenLayout, contains, percent_at};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Seek(f64),
    Select(usize),
    CursorUp,
    CursorDown,
    Restart,
    Next,
    Previous,
    Volume(i32),
}

/// Where the pointer is and what the screen looks like.
pub struct Surface<'a> {
    pub screen: &'a ScreenLayout,
    /// Index of the first playlist row on screen.
    pub window_start: usize,
    pub track_count: usize,
    pub overlay_open: bool,
    pub volume_step: u8,
}

pub fn route(event: &MouseEvent, surface: &Surface<'_>) -> Option<Gesture> {
    if surface.overlay_open {
        return None;
    }
    let (column, row) = (event.column, event.row);
    let screen = surface.screen;

    if contains(screen.progress, column, row) {
        return match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(Gesture::Seek(percent_at(screen.progress_bar(), column)))
            }
            _ => None,
        };
    }

    if contains(screen.playlist, column, row) {
        return match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let rows = screen.playlist_rows();
                if !contains(rows, column, row) {
                    return None;
                }
                let index = surface.window_start + usize::from(row - rows.y);
                (index < surface.track_count).then_some(Gesture::Select(index))
            }
            MouseEventKind::ScrollUp => Some(Gesture::CursorUp),
            MouseEventKind::ScrollDown => Some(Gesture::CursorDown),
            _ => None,
        };
    }

    let step = i32::from(surface.volume_step);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Gesture::Restart),
        MouseEventKind::Down(MouseButton::Right) => Some(Gesture::Next),
        MouseEventKind::Down(MouseButton::Middle) => Some(Gesture::Previous),
        MouseEventKind::ScrollUp => Some(Gesture::Volume(step)),
        MouseEventKind::ScrollDown => Some(Gesture::Volume(-step)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use super::*;
    use crate::ui::screen_layout;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click(button: MouseButton, column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(button), column, row)
    }

    fn surface(screen: &ScreenLayout) -> Surface<'_> {
        Surface {
            screen,
            window_start: 0,
            track_count: 3,
            overlay_open: false,
            volume_step: 5,
        }
    }

    fn screen() -> ScreenLayout {
        screen_layout(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn background_clicks_are_transport_shortcuts() {
        let screen = screen();
        let s = surface(&screen);
        let (x, y) = (screen.now_playing.x + 2, screen.now_playing.y + 2);
        assert_eq!(route(&click(MouseButton::Left, x, y), &s), Some(Gesture::Restart));
        assert_eq!(route(&click(MouseButton::Right, x, y), &s), Some(Gesture::Next));
        assert_eq!(route(&click(MouseButton::Middle, x, y), &s), Some(Gesture::Previous));
    }

    #[test]
    fn wheel_on_background_changes_volume() {
        let screen = screen();
        let s = surface(&screen);
        let (x, y) = (screen.header.x + 5, screen.header.y + 1);
        assert_eq!(route(&mouse(MouseEventKind::ScrollUp, x, y), &s), Some(Gesture::Volume(5)));
        assert_eq!(route(&mouse(MouseEventKind::ScrollDown, x, y), &s), Some(Gesture::Volume(-5)));
    }

    #[test]
    fn clicking_the_progress_bar_seeks() {
        let screen = screen();
        let s = surface(&screen);
        let bar = screen.progress_bar();
        let got = route(&click(MouseButton::Left, bar.x, bar.y), &s);
        assert_eq!(got, Some(Gesture::Seek(0.0)));
        assert_eq!(route(&click(MouseButton::Right, bar.x, bar.y), &s), None);
        assert_eq!(route(&mouse(MouseEventKind::ScrollUp, bar.x, bar.y), &s), None);
    }

    #[test]
    fn playlist_clicks_select_rows() {
        let screen = screen();
        let mut s = surface(&screen);
        let rows = screen.playlist_rows();
        assert_eq!(route(&click(MouseButton::Left, rows.x, rows.y + 1), &s), Some(Gesture::Select(1)));
        // Past the last track.
        assert_eq!(route(&click(MouseButton::Left, rows.x, rows.y + 5), &s), None);
        // Scrolled list.
        s.window_start = 10;
        s.track_count = 40;
        assert_eq!(route(&click(MouseButton::Left, rows.x, rows.y + 2), &s), Some(Gesture::Select(12)));
        assert_eq!(route(&click(MouseButton::Right, rows.x, rows.y), &s), None);
    }

    #[test]
    fn wheel_over_playlist_moves_cursor() {
        let screen = screen();
        let s = surface(&screen);
        let rows = screen.playlist_rows();
        assert_eq!(route(&mouse(MouseEventKind::ScrollUp, rows.x, rows.y), &s), Some(Gesture::CursorUp));
        assert_eq!(route(&mouse(MouseEventKind::ScrollDown, rows.x, rows.y), &s), Some(Gesture::CursorDown));
    }

    #[test]
    fn open_dialog_suppresses_everything() {
        let screen = screen();
        let mut s = surface(&screen);
        s.overlay_open = true;
        let (x, y) = (screen.now_playing.x + 2, screen.now_playing.y + 2);
        assert_eq!(route(&click(MouseButton::Left, x, y), &s), None);
        assert_eq!(route(&mouse(MouseEventKind::ScrollUp, x, y), &s), None);
    }

    #[test]
    fn releases_and_moves_are_ignored() {
        let screen = screen();
        let s = surface(&screen);
        let (x, y) = (screen.now_playing.x + 2, screen.now_playing.y + 2);
        assert_eq!(route(&mouse(MouseEventKind::Up(MouseButton::Left), x, y), &s), None);
        assert_eq!(route(&mouse(MouseEventKind::Moved, x, y), &s), None);
    }
}

//! Screen geometry shared by the renderer and the mouse router.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Outer rectangles of every panel on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    pub playlist: Rect,
    pub now_playing: Rect,
    pub progress: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    /// Rows of the playlist inside its border.
    pub fn playlist_rows(&self) -> Rect {
        self.playlist.inner(Margin::new(1, 1))
    }

    /// The gauge inside the progress border.
    pub fn progress_bar(&self) -> Rect {
        self.progress.inner(Margin::new(1, 1))
    }
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(5),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let player = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(body[1]);

    ScreenLayout {
        header: rows[0],
        playlist: body[0],
        now_playing: player[0],
        progress: player[1],
        footer: rows[2],
    }
}

/// Whether `(column, row)` lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Percentage (0-100) of `bar` at `column`.
pub fn percent_at(bar: Rect, column: u16) -> f64 {
    if bar.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(bar.x).min(bar.width - 1);
    f64::from(offset) / f64::from(bar.width - 1) * 100.0
}

/// Window `[start, end)` of a list of `total` rows shown in `height` rows,
/// keeping `selected` centered when possible.
pub fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

/// Compute a centered rectangle with given size constrained to `r`.
pub fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

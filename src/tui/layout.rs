//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, screen body, status bar,
//! and the per-screen splits.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    /// Title bar across the top
    pub header: Rect,
    /// Screen content
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the overview screen
pub struct OverviewLayout {
    /// Main balance hero section
    pub hero: Rect,
    /// Account card row
    pub cards: Rect,
    /// Recent activity feed
    pub feed: Rect,
}

impl OverviewLayout {
    /// Calculate overview layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Hero
                Constraint::Length(7), // Cards
                Constraint::Min(5),    // Feed
            ])
            .split(area);

        Self {
            hero: chunks[0],
            cards: chunks[1],
            feed: chunks[2],
        }
    }

    /// Split the card row into equal columns
    pub fn card_columns(cards: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let constraints: Vec<Constraint> = (0..count)
            .map(|_| Constraint::Ratio(1, count as u32))
            .collect();
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(cards)
            .to_vec()
    }
}

/// Layout for the account detail screen
pub struct DetailLayout {
    /// Account summary header
    pub summary: Rect,
    /// Filtered activity feed
    pub feed: Rect,
}

impl DetailLayout {
    /// Calculate detail layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Summary
                Constraint::Min(5),    // Feed
            ])
            .split(area);

        Self {
            summary: chunks[0],
            feed: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

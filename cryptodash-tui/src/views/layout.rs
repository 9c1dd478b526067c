//! Screen partitioning for the two shell modes.
//!
//! Shared by rendering and mouse hit testing so both agree on where the
//! rail, drawer and menu button sit.

use cryptodash_core::RailPresentation;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const RAIL_WIDTH: u16 = 28;
pub const TOP_BAR_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
/// Columns at the left of the top bar that act as the sidebar toggle.
pub const MENU_BUTTON_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    /// Column in fixed mode, drawer in overlay mode; `None` when hidden.
    pub rail: Option<Rect>,
    /// Full-screen dim layer under an open drawer.
    pub backdrop: Option<Rect>,
    pub top_bar: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub fn shell_areas(area: Rect, presentation: RailPresentation) -> ShellAreas {
    let rail_width = RAIL_WIDTH.min(area.width);
    match presentation {
        RailPresentation::Column => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(rail_width), Constraint::Min(0)])
                .split(area);
            let (top_bar, content, footer) = stack(columns[1]);
            ShellAreas {
                rail: Some(columns[0]),
                backdrop: None,
                top_bar,
                content,
                footer,
            }
        }
        RailPresentation::Drawer | RailPresentation::Hidden => {
            let (top_bar, content, footer) = stack(area);
            let drawer = (presentation == RailPresentation::Drawer).then_some(Rect {
                width: rail_width,
                ..area
            });
            ShellAreas {
                rail: drawer,
                backdrop: drawer.map(|_| area),
                top_bar,
                content,
                footer,
            }
        }
    }
}

fn stack(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOP_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    (rows[0], rows[1], rows[2])
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

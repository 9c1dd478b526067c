//! Top utility bar and the user menu popup.

use crate::state::{App, USER_MENU_ITEMS};
use crate::views::layout::MENU_BUTTON_WIDTH;
use cryptodash_core::ShellMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub const USER_NAME: &str = "Emily Smith";
const USER_MENU_WIDTH: u16 = 18;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let overlay = app.shell.mode() == ShellMode::Overlay;
    let button = if overlay { MENU_BUTTON_WIDTH.saturating_sub(1) } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button),
            Constraint::Min(10),
            Constraint::Length(right_width()),
        ])
        .split(inner);

    if overlay {
        let hint = Paragraph::new(Span::styled(
            " ≡ ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(hint, chunks[0]);
    }

    let search = Paragraph::new(Span::styled(
        " ⌕ Search...",
        Style::default().fg(theme.text_muted),
    ));
    f.render_widget(search, chunks[1]);

    let mode_label = if theme.is_dark() { "◐ Dark" } else { "◑ Light" };
    let indicators = Line::from(vec![
        Span::styled("EN  ", Style::default().fg(theme.text_dim)),
        Span::styled("⊞  ", Style::default().fg(theme.text_dim)),
        Span::styled(
            format!("✉ {}  ", app.notifications.len()),
            Style::default().fg(theme.info),
        ),
        Span::styled(format!("{}  ", mode_label), Style::default().fg(theme.secondary)),
        Span::styled(
            format!("{} ▾ ", USER_NAME),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(indicators).alignment(Alignment::Right),
        chunks[2],
    );
}

fn right_width() -> u16 {
    // "EN  ⊞  ✉ 99  ◑ Light  " plus the user name and caret.
    22 + USER_NAME.chars().count() as u16 + 3
}

/// Dropdown anchored under the right edge of the top bar.
pub fn render_user_menu(f: &mut Frame<'_>, app: &App, top_bar: Rect) {
    let Some(selected) = app.top_bar.user_menu else {
        return;
    };
    let theme = &app.theme;
    let width = USER_MENU_WIDTH.min(top_bar.width);
    let area = Rect {
        x: top_bar.x + top_bar.width.saturating_sub(width + 1),
        y: top_bar.y + top_bar.height.saturating_sub(1),
        width,
        height: USER_MENU_ITEMS.len() as u16 + 2,
    }
    .intersection(f.size());

    let items: Vec<ListItem> = USER_MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let style = if index == selected {
                Style::default().fg(theme.bg).bg(theme.primary)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(format!(" {}", item)).style(style)
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focus))
                .style(Style::default().bg(theme.bg_secondary)),
        ),
        area,
    );
}

//! View rendering dispatch.

pub mod crypto;
pub mod dashboard;
pub mod layout;
pub mod market;
pub mod portfolio;
pub mod rail;
pub mod topbar;

use crate::notifications::NotificationLevel;
use crate::state::App;
use cryptodash_core::RailPresentation;
use layout::{centered, shell_areas};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let screen = f.size();
    let presentation = app.shell.rail_presentation();
    let areas = shell_areas(screen, presentation);

    f.render_widget(Block::default().style(Style::default().bg(app.theme.bg)), screen);

    if let (RailPresentation::Column, Some(rail_area)) = (presentation, areas.rail) {
        rail::render(f, app, rail_area, false);
    }
    topbar::render(f, app, areas.top_bar);
    dashboard::render(f, app, areas.content);
    render_footer(f, app, areas.footer);

    if let Some(backdrop) = areas.backdrop {
        f.buffer_mut().set_style(
            backdrop,
            Style::default().bg(app.theme.backdrop).add_modifier(Modifier::DIM),
        );
    }
    if let (RailPresentation::Drawer, Some(drawer)) = (presentation, areas.rail) {
        rail::render(f, app, drawer, true);
    }

    topbar::render_user_menu(f, app, areas.top_bar);
    render_modal(f, app, screen);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = "j/k move • Enter open • b sidebar • i interval • c currency • t theme • ? help • q quit";
    let (text, style) = if let Some(note) = app.notifications.last() {
        let color = match note.level {
            NotificationLevel::Info => app.theme.info,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (note.stamped(), Style::default().fg(color))
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, screen: Rect) {
    let Some(modal) = &app.modal else {
        return;
    };
    let area = centered(screen, 60, 9);
    f.render_widget(Clear, area);
    let body = Paragraph::new(modal.message.as_str())
        .style(Style::default().fg(app.theme.text).bg(app.theme.bg_secondary))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", modal.title),
                    Style::default().fg(app.theme.primary),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(body, area);
}

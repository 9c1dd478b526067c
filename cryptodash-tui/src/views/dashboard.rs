//! Content region: page header, stat cards and the dashboard panels.

use crate::state::App;
use crate::theme::change_color;
use crate::views::{crypto, market, portfolio};
use crate::widgets::StatusIndicator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HEADER_HEIGHT: u16 = 3;
const STAT_CARD_HEIGHT: u16 = 4;
const CRYPTO_ROW_HEIGHT: u16 = 6;

/// Title for the page header: the deepest crumb, or the raw location when
/// the menu has no entry for it.
pub fn page_title(app: &App) -> String {
    app.shell
        .breadcrumbs()
        .last()
        .map(|crumb| crumb.label.clone())
        .unwrap_or_else(|| app.shell.active_location().to_string())
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let wide = app.shell.is_wide();
    let stats_height = if wide { STAT_CARD_HEIGHT } else { STAT_CARD_HEIGHT * 2 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(stats_height),
            Constraint::Min(8),
            Constraint::Length(CRYPTO_ROW_HEIGHT),
        ])
        .split(area);

    render_header(f, app, rows[0]);
    render_stats(f, app, rows[1], wide);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(if wide {
            [Constraint::Percentage(35), Constraint::Percentage(65)]
        } else {
            [Constraint::Percentage(45), Constraint::Percentage(55)]
        })
        .split(rows[2]);
    portfolio::render(f, app, panels[0]);
    market::render(f, app, panels[1]);
    crypto::render(f, app, rows[3]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut trail = vec![Span::styled("Home", Style::default().fg(theme.text_muted))];
    for crumb in app.shell.breadcrumbs() {
        trail.push(Span::styled(" › ", Style::default().fg(theme.text_muted)));
        let style = if crumb.target.is_some() {
            Style::default().fg(theme.text_dim)
        } else {
            Style::default().fg(theme.text_muted)
        };
        trail.push(Span::styled(crumb.label, style));
    }

    let lines = vec![
        Line::from(Span::styled(
            page_title(app),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(trail),
    ];
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM).border_style(
        Style::default().fg(theme.border),
    ));
    f.render_widget(header, area);
}

fn render_stats(f: &mut Frame<'_>, app: &App, area: Rect, wide: bool) {
    let cells: Vec<Rect> = if wide {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area)
            .to_vec()
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(area)
            .iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Ratio(1, 2); 2])
                    .split(*row)
                    .to_vec()
            })
            .collect()
    };

    let theme = &app.theme;
    for (card, cell) in app.content.stats.iter().zip(cells) {
        let arrow = if card.is_positive() { "▲" } else { "▼" };
        StatusIndicator {
            title: format!(" {} {} ", card.icon, card.title),
            status: card.value.to_string(),
            caption: vec![
                Span::styled(
                    format!("{} {:+.2}% ", arrow, card.change_pct),
                    Style::default().fg(change_color(card.change_pct, theme)),
                ),
                Span::styled(card.period, Style::default().fg(theme.text_muted)),
            ],
            style: Style::default().fg(theme.text),
            border_style: Style::default().fg(theme.border),
        }
        .render(f, cell);
    }
}

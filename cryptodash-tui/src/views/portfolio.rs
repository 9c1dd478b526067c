//! Portfolio overview: per-asset share bars and the total.

use crate::state::App;
use crate::theme::rgb;
use crate::widgets::ProgressBar;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let content = &app.content;
    let block = Block::default()
        .title(format!(" Portfolio [{}] (c) ", content.currency.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Two lines for the total, then two per asset: caption and bar.
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(content.portfolio.iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let total = Paragraph::new(Line::from(vec![
        Span::styled("Total ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("${:.2}", content.portfolio_total),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(total, rows[0]);

    for (asset, row) in content.portfolio.iter().zip(rows.iter().skip(1)) {
        if row.height < 2 {
            break;
        }
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*row);
        let caption = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", asset.name), Style::default().fg(theme.text)),
            Span::styled(
                format!("{:.8} {}  ${:.2}", asset.amount, asset.symbol, asset.usd_value),
                Style::default().fg(theme.text_dim),
            ),
        ]));
        f.render_widget(caption, parts[0]);
        ProgressBar {
            label: format!("{}%", asset.share_pct),
            value: f64::from(asset.share_pct),
            max: 100.0,
            style: Style::default().fg(rgb(asset.color)).bg(theme.bg_secondary),
        }
        .render(f, parts[1]);
    }
}

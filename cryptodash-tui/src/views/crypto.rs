//! Row of sparkline cards, one per coin.

use crate::state::App;
use crate::theme::change_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Sparkline},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let stats = &app.content.crypto_stats;
    if stats.is_empty() || area.height < 3 {
        return;
    }
    let count = stats.len() as u32;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(stats.iter().map(|_| Constraint::Ratio(1, count)).collect::<Vec<_>>())
        .split(area);

    for (stat, cell) in stats.iter().zip(cells.iter()) {
        let data: Vec<u64> = stat.sparkline.iter().map(|v| v.round() as u64).collect();
        let color = change_color(stat.change_pct, theme);
        let sparkline = Sparkline::default()
            .block(
                Block::default()
                    .title(format!(
                        " {} {} {:+.2}% ",
                        stat.symbol, stat.value, stat.change_pct
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            )
            .data(&data)
            .style(Style::default().fg(color));
        f.render_widget(sparkline, *cell);
    }
}

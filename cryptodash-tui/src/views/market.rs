//! Market graph with the interval selector and summary.

use crate::content::ChartInterval;
use crate::state::App;
use crate::theme::change_color;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Tabs},
    Frame,
};

const SUMMARY_WIDTH: u16 = 30;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" Market Graph (i/I) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    let tabs = Tabs::new(
        ChartInterval::all()
            .iter()
            .map(|interval| interval.label())
            .collect::<Vec<_>>(),
    )
    .select(app.content.market.interval.index())
    .style(Style::default().fg(theme.text_dim))
    .highlight_style(Style::default().fg(theme.bg).bg(theme.primary));
    f.render_widget(tabs, rows[0]);

    let summary_width = if area.width > SUMMARY_WIDTH * 2 { SUMMARY_WIDTH } else { 0 };
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(summary_width)])
        .split(rows[1]);

    render_chart(f, app, body[0]);
    if summary_width > 0 {
        render_summary(f, app, body[1]);
    }
}

fn render_chart(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let series = &app.content.market.series;
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(index, point)| (index as f64, point.price))
        .collect();
    let (low, high) = app.content.price_bounds();
    let last = series.len().saturating_sub(1);

    let x_labels: Vec<Span> = [0, last / 2, last]
        .iter()
        .filter_map(|index| series.get(*index))
        .map(|point| Span::styled(point.label.clone(), Style::default().fg(theme.text_muted)))
        .collect();
    let y_labels = vec![
        Span::styled(format!("{:.0}", low), Style::default().fg(theme.text_muted)),
        Span::styled(format!("{:.0}", high), Style::default().fg(theme.text_muted)),
    ];

    let dataset = Dataset::default()
        .name(app.content.market.interval.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme.primary))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .style(Style::default().fg(theme.border))
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(theme.border))
                .bounds([low, high])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn render_summary(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let summary = &app.content.market.summary;
    let plain = Style::default().fg(theme.text);
    let change = Style::default().fg(change_color(summary.change_pct, theme));
    DetailPanel {
        title: " Summary ",
        fields: vec![
            ("Price", format!("{:.6} BTC", summary.current_price), plain),
            (
                "Change",
                format!("{:+.2} ({:+.2}%)", summary.change_value, summary.change_pct),
                change,
            ),
            ("High", format!("{:.6}", summary.high), plain),
            ("Low", format!("{:.6}", summary.low), plain),
            ("Balance", format!("${:.2}", summary.total_balance), plain),
            ("Profit", format!("${:.2}", summary.profit), Style::default().fg(theme.success)),
            ("Loss", format!("${:.2}", summary.loss), Style::default().fg(theme.error)),
        ],
        label_style: Style::default().fg(theme.text_muted),
        border_style: Style::default().fg(theme.border),
    }
    .render(f, area);
}

//! Status card widget: a headline value with a caption row.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatusIndicator<'a> {
    pub title: String,
    pub status: String,
    pub caption: Vec<Span<'a>>,
    pub style: Style,
    pub border_style: Style,
}

impl<'a> StatusIndicator<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.status.clone(),
                self.style.add_modifier(Modifier::BOLD),
            )),
            Line::from(self.caption.clone()),
        ];
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(self.title.as_str())
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}

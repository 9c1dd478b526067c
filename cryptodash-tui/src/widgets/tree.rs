//! Collapsible tree widget.
//!
//! Lines are drawn one per terminal row starting at `offset`, so line
//! `offset + n` sits on row `n` inside the border.

use cryptodash_core::NavRow;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub label: String,
    pub icon: String,
    pub badge: Option<String>,
    pub depth: usize,
    pub expanded: bool,
    pub has_children: bool,
    pub highlighted: bool,
}

impl From<&NavRow> for TreeItem {
    fn from(row: &NavRow) -> Self {
        Self {
            label: row.label.clone(),
            icon: row.icon.clone(),
            badge: row.badge.clone(),
            depth: row.depth,
            expanded: row.expanded,
            has_children: row.has_children,
            highlighted: row.highlighted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeLine {
    Heading(String),
    Blank,
    Item(TreeItem),
    /// Clickable entry with its own glyph.
    Action { glyph: &'static str, label: String },
    /// Muted caption text.
    Note(String),
}

#[derive(Debug, Clone)]
pub struct TreeStyle {
    pub normal: Style,
    pub highlighted: Style,
    pub selected: Style,
    pub heading: Style,
    pub badge: Style,
    pub border: Style,
}

pub struct TreeWidget<'a> {
    pub title: &'a str,
    pub lines: &'a [TreeLine],
    /// Line index under the keyboard cursor.
    pub selected: Option<usize>,
    /// First line drawn.
    pub offset: usize,
    pub style: TreeStyle,
}

impl<'a> TreeWidget<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let rows: Vec<ListItem> = self
            .lines
            .iter()
            .enumerate()
            .skip(self.offset)
            .map(|(index, line)| self.line(line, self.selected == Some(index)))
            .collect();

        let list = List::new(rows).block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(self.style.border),
        );
        f.render_widget(list, area);
    }

    fn line(&self, line: &TreeLine, selected: bool) -> ListItem<'static> {
        let item = match line {
            TreeLine::Heading(title) => ListItem::new(Line::from(Span::styled(
                format!(" {}", title.to_uppercase()),
                self.style.heading,
            ))),
            TreeLine::Blank => ListItem::new(""),
            TreeLine::Action { glyph, label } => {
                ListItem::new(format!(" {} {}", glyph, label)).style(self.style.normal)
            }
            TreeLine::Note(text) => ListItem::new(Line::from(Span::styled(
                format!(" {}", text),
                self.style.heading,
            ))),
            TreeLine::Item(item) => {
                let indent = "  ".repeat(item.depth);
                let marker = if item.has_children {
                    if item.expanded { "▾ " } else { "▸ " }
                } else {
                    "  "
                };
                let base = if item.highlighted {
                    self.style.highlighted
                } else {
                    self.style.normal
                };
                let mut spans = vec![
                    Span::styled(format!(" {}{} {} ", indent, item.icon, item.label), base),
                ];
                if let Some(badge) = &item.badge {
                    spans.push(Span::styled(format!("[{}] ", badge), self.style.badge));
                }
                spans.push(Span::styled(marker, base));
                ListItem::new(Line::from(spans))
            }
        };
        if selected {
            item.style(self.style.selected.add_modifier(Modifier::REVERSED))
        } else {
            item
        }
    }
}

/// Smallest offset that keeps line `selected` inside `height` visible rows.
pub fn scroll_offset(selected: Option<usize>, height: usize) -> usize {
    match selected {
        Some(index) if height > 0 && index >= height => index + 1 - height,
        _ => 0,
    }
}

//! Navigation rail: section titles, tree rows, logout and the upgrade card.

use crate::state::App;
use crate::widgets::{scroll_offset, TreeItem, TreeLine, TreeStyle, TreeWidget};
use cryptodash_core::DashboardShell;
use ratatui::{layout::Rect, style::Style, widgets::Clear, Frame};

pub const LOGOUT_LABEL: &str = "Logout";
pub const UPGRADE_TITLE: &str = "Unlimited Access";
pub const UPGRADE_CAPTION: &str = "Upgrade your plan";
pub const UPGRADE_LABEL: &str = "Upgrade";

/// One terminal row of the rail, as seen by the mouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RailLine {
    Title(String),
    Spacer,
    /// Index into the shell's visible rows.
    Row(usize),
    Logout,
    /// Upgrade card text; inert.
    Promo(&'static str),
    Upgrade,
}

pub fn rail_lines(shell: &DashboardShell) -> Vec<RailLine> {
    let rows = shell.nav_rows();
    let sections = shell.tree().sections();
    let mut lines = Vec::with_capacity(rows.len() + sections.len() * 2 + 2);
    let mut current_section = None;

    for (index, row) in rows.iter().enumerate() {
        if current_section != Some(row.section) {
            if current_section.is_some() {
                lines.push(RailLine::Spacer);
            }
            if let Some(title) = sections.get(row.section).and_then(|s| s.title.as_ref()) {
                lines.push(RailLine::Title(title.clone()));
            }
            current_section = Some(row.section);
        }
        lines.push(RailLine::Row(index));
    }

    lines.push(RailLine::Spacer);
    lines.push(RailLine::Logout);
    lines.push(RailLine::Spacer);
    lines.push(RailLine::Promo(UPGRADE_TITLE));
    lines.push(RailLine::Promo(UPGRADE_CAPTION));
    lines.push(RailLine::Upgrade);
    lines
}

fn inner_height(rail: Rect) -> usize {
    usize::from(rail.height.saturating_sub(2))
}

/// First rail line drawn, chosen so the cursor row stays visible.
pub fn rail_offset(rail: Rect, lines: &[RailLine], selected_row: usize) -> usize {
    let cursor = lines
        .iter()
        .position(|line| *line == RailLine::Row(selected_row));
    scroll_offset(cursor, inner_height(rail))
}

/// Rail line under terminal row `row`, accounting for the border and the
/// scroll `offset`.
pub fn line_at(rail: Rect, lines: &[RailLine], offset: usize, row: u16) -> Option<RailLine> {
    let inner_top = rail.y.saturating_add(1);
    let inner_bottom = rail.y.saturating_add(rail.height).saturating_sub(1);
    if row < inner_top || row >= inner_bottom {
        return None;
    }
    lines.get(offset + usize::from(row - inner_top)).cloned()
}

/// Terminal stand-ins for the menu's icon names.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "layout-dashboard" => "▦",
        "analytics" => "▤",
        "users" => "☺",
        "shopping-cart" => "⊞",
        "wallet" => "₿",
        "briefcase" => "▣",
        "puzzle" => "◈",
        "file-text" => "✎",
        "layout-grid" => "⊟",
        "message-square" => "✉",
        "circle-help" => "?",
        "settings" => "⚙",
        _ => "•",
    }
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect, overlay: bool) {
    let rows = app.shell.nav_rows();
    let lines = rail_lines(&app.shell);
    let selected_row = app.shell.selected_row();
    let offset = rail_offset(area, &lines, selected_row);
    let mut selected = None;

    let tree_lines: Vec<TreeLine> = lines
        .iter()
        .enumerate()
        .map(|(line_index, line)| match line {
            RailLine::Title(title) => TreeLine::Heading(title.clone()),
            RailLine::Spacer => TreeLine::Blank,
            RailLine::Logout => TreeLine::Action {
                glyph: "⏻",
                label: LOGOUT_LABEL.to_string(),
            },
            RailLine::Promo(text) => TreeLine::Note(text.to_string()),
            RailLine::Upgrade => TreeLine::Action {
                glyph: "⛨",
                label: UPGRADE_LABEL.to_string(),
            },
            RailLine::Row(index) => {
                if *index == selected_row {
                    selected = Some(line_index);
                }
                rows.get(*index)
                    .map(|row| {
                        let mut item = TreeItem::from(row);
                        item.icon = icon_glyph(&row.icon).to_string();
                        TreeLine::Item(item)
                    })
                    .unwrap_or(TreeLine::Blank)
            }
        })
        .collect();

    let theme = &app.theme;
    let style = TreeStyle {
        normal: Style::default().fg(theme.text),
        highlighted: Style::default().fg(theme.primary).bg(theme.bg_highlight),
        selected: Style::default().fg(theme.text),
        heading: Style::default().fg(theme.text_muted),
        badge: Style::default().fg(theme.secondary),
        border: Style::default().fg(if overlay { theme.border_focus } else { theme.border }),
    };

    if overlay {
        f.render_widget(Clear, area);
    }
    TreeWidget {
        title: " CRYPTODASH ",
        lines: &tree_lines,
        selected,
        offset,
        style,
    }
    .render(f, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptodash_core::{default_menu, NoopNavigator, ShellSignal};

    fn shell() -> DashboardShell {
        DashboardShell::new(default_menu(), "/crypto", Some(1200))
    }

    #[test]
    fn lines_group_rows_by_section() {
        let lines = rail_lines(&shell());
        assert_eq!(lines[0], RailLine::Title("Menu".to_string()));
        assert_eq!(lines[1], RailLine::Row(0));
        // Seven top-level menu rows, then a spacer before the untitled section.
        assert_eq!(lines[8], RailLine::Spacer);
        assert_eq!(lines[9], RailLine::Row(7));
        assert!(lines.contains(&RailLine::Logout));
        assert_eq!(lines.last(), Some(&RailLine::Upgrade));
    }

    #[test]
    fn cursor_row_scrolls_into_view() {
        let mut shell = shell();
        let lines = rail_lines(&shell);
        // Border plus five inner lines.
        let rail = Rect::new(0, 0, 28, 7);
        assert_eq!(rail_offset(rail, &lines, 0), 0);

        // Settings is the last row, on line 10.
        for _ in 0..8 {
            shell.handle(ShellSignal::SelectNext, &mut NoopNavigator);
        }
        assert_eq!(shell.selected_row(), 8);
        let offset = rail_offset(rail, &lines, shell.selected_row());
        assert_eq!(offset, 6);
        assert_eq!(line_at(rail, &lines, offset, 5), Some(RailLine::Row(8)));
        assert_eq!(line_at(rail, &lines, offset, 1), Some(RailLine::Row(5)));
    }

    #[test]
    fn unknown_icons_fall_back_to_bullet() {
        assert_eq!(icon_glyph("wallet"), "₿");
        assert_eq!(icon_glyph("rocket"), "•");
    }

    #[test]
    fn line_at_skips_border() {
        let lines = rail_lines(&shell());
        let rail = Rect::new(0, 0, 28, 40);
        assert_eq!(line_at(rail, &lines, 0, 0), None);
        assert_eq!(line_at(rail, &lines, 0, 1), Some(RailLine::Title("Menu".to_string())));
        assert_eq!(line_at(rail, &lines, 0, 2), Some(RailLine::Row(0)));
        assert_eq!(line_at(rail, &lines, 0, 39), None);
    }
}

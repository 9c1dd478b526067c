//! Rail composition: walks the authored sections and delegates each node to
//! a [`NavItemController`].

use crate::item::{seed_expanded, Activation, NavItemController, NavRow};
use crate::nav::{NavNode, NavSection};
use crate::state::NavTreeState;
use serde::Serialize;

/// One breadcrumb on the path to the active page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    /// `None` for expand-only groups.
    pub target: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct Visible<'a> {
    node: &'a NavNode,
    depth: usize,
    section: usize,
}

/// The full navigation rail plus its state and keyboard cursor.
#[derive(Debug, Clone)]
pub struct NavTree {
    sections: Vec<NavSection>,
    state: NavTreeState,
    selected: usize,
}

impl NavTree {
    pub fn new(sections: Vec<NavSection>, default_location: &str) -> Self {
        let mut state = NavTreeState::new(default_location);
        for section in &sections {
            seed_expanded(&section.nodes, default_location, &mut state);
        }
        Self {
            sections,
            state,
            selected: 0,
        }
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn state(&self) -> &NavTreeState {
        &self.state
    }

    /// Rows in render order: depth-first, children in authored order,
    /// collapsed groups contribute only their own row.
    pub fn visible_rows(&self) -> Vec<NavRow> {
        collect_visible(&self.sections, &self.state)
            .into_iter()
            .map(|entry| NavItemController::new(entry.node).row(&self.state, entry.depth, entry.section))
            .collect()
    }

    pub fn row_count(&self) -> usize {
        collect_visible(&self.sections, &self.state).len()
    }

    pub fn node_at(&self, index: usize) -> Option<&NavNode> {
        collect_visible(&self.sections, &self.state)
            .get(index)
            .map(|entry| entry.node)
    }

    /// Activates the row at `index`. Out-of-range indices do nothing.
    pub fn activate_row(&mut self, index: usize) -> Option<Activation> {
        let node = collect_visible(&self.sections, &self.state).get(index)?.node;
        let activation = NavItemController::new(node).activate(&mut self.state);
        self.selected = index;
        self.clamp_selection();
        Some(activation)
    }

    pub fn activate_selected(&mut self) -> Option<Activation> {
        self.activate_row(self.selected)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = if self.selected == 0 { count - 1 } else { self.selected - 1 };
        }
    }

    pub fn find_by_target(&self, location: &str) -> Option<&NavNode> {
        self.sections
            .iter()
            .find_map(|section| find_in(&section.nodes, location))
    }

    pub fn contains_target(&self, location: &str) -> bool {
        self.find_by_target(location).is_some()
    }

    /// Labels from the top-level entry down to the node for the active
    /// location. Empty when nothing matches.
    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        let location = self.state.active_location();
        let mut path = Vec::new();
        for section in &self.sections {
            if path_to(&section.nodes, location, &mut path) {
                break;
            }
        }
        path.into_iter()
            .map(|node| Crumb {
                label: node.label.clone(),
                target: node.is_navigable().then(|| node.target.clone()),
            })
            .collect()
    }

    fn clamp_selection(&mut self) {
        let count = self.row_count();
        self.selected = if count == 0 { 0 } else { self.selected.min(count - 1) };
    }
}

fn collect_visible<'a>(sections: &'a [NavSection], state: &NavTreeState) -> Vec<Visible<'a>> {
    let mut out = Vec::new();
    for (section, entry) in sections.iter().enumerate() {
        walk(&entry.nodes, state, 0, section, &mut out);
    }
    out
}

fn walk<'a>(
    nodes: &'a [NavNode],
    state: &NavTreeState,
    depth: usize,
    section: usize,
    out: &mut Vec<Visible<'a>>,
) {
    for node in nodes {
        out.push(Visible {
            node,
            depth,
            section,
        });
        if node.has_children() && state.is_expanded(&node.id) {
            walk(&node.children, state, depth + 1, section, out);
        }
    }
}

fn find_in<'a>(nodes: &'a [NavNode], location: &str) -> Option<&'a NavNode> {
    nodes.iter().find_map(|node| {
        if node.target == location {
            Some(node)
        } else {
            find_in(&node.children, location)
        }
    })
}

fn path_to<'a>(nodes: &'a [NavNode], location: &str, path: &mut Vec<&'a NavNode>) -> bool {
    for node in nodes {
        path.push(node);
        if node.target == location || path_to(&node.children, location, path) {
            return true;
        }
        path.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{default_menu, EXPAND_ONLY};

    fn scenario_tree() -> NavTree {
        NavTree::new(
            vec![NavSection::new(
                None,
                vec![
                    NavNode::leaf("A", "A", "x", "/x"),
                    NavNode::group(
                        "B",
                        "B",
                        "x",
                        EXPAND_ONLY,
                        vec![NavNode::leaf("C", "C", "x", "/y")],
                    ),
                ],
            )],
            "/x",
        )
    }

    fn row<'a>(rows: &'a [NavRow], id: &str) -> Option<&'a NavRow> {
        rows.iter().find(|r| r.id == id)
    }

    #[test]
    fn leaf_then_group_scenario() {
        let mut tree = scenario_tree();
        let rows = tree.visible_rows();
        assert!(row(&rows, "A").unwrap().highlighted);
        assert!(!row(&rows, "B").unwrap().expanded);
        assert!(row(&rows, "C").is_none());

        // C is not visible yet; activate it through its node directly.
        let c = tree.sections[0].nodes[1].children[0].clone();
        NavItemController::new(&c).activate(&mut tree.state);
        assert!(tree.state().is_active_location("/y"));
        let rows = tree.visible_rows();
        assert!(!row(&rows, "B").unwrap().expanded);

        tree.activate_row(1);
        let rows = tree.visible_rows();
        let b = row(&rows, "B").unwrap();
        assert!(b.expanded);
        assert!(b.highlighted);
        assert!(row(&rows, "C").unwrap().highlighted);
        assert!(!row(&rows, "A").unwrap().highlighted);
    }

    #[test]
    fn rows_follow_authored_order() {
        let mut tree = NavTree::new(default_menu(), "/crypto");
        tree.activate_row(0);
        let ids: Vec<_> = tree.visible_rows().into_iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            [
                "dashboards", "analytics", "crm", "ecommerce", "crypto", "projects", "nft", "job",
                "blog", "apps", "support", "settings"
            ]
        );
    }

    #[test]
    fn nested_rows_carry_depth_and_section() {
        let mut tree = NavTree::new(default_menu(), "/crypto");
        tree.activate_row(0);
        let rows = tree.visible_rows();
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows.last().unwrap().section, 1);
    }

    #[test]
    fn unknown_location_highlights_nothing() {
        let tree = NavTree::new(default_menu(), "/missing");
        assert!(tree.visible_rows().iter().all(|r| !r.highlighted));
        assert!(tree.breadcrumbs().is_empty());
    }

    #[test]
    fn seed_uses_navigable_group_prefix() {
        let sections = vec![NavSection::new(
            None,
            vec![NavNode::group(
                "markets",
                "Markets",
                "x",
                "/markets",
                vec![NavNode::leaf("spot", "Spot", "x", "/markets/spot")],
            )],
        )];
        let tree = NavTree::new(sections, "/markets/spot");
        assert!(tree.state().is_expanded("markets"));
    }

    #[test]
    fn navigation_does_not_reseed() {
        let mut tree = NavTree::new(default_menu(), "/crypto");
        // Open Apps, pick Chat, then walk back to Crypto.
        tree.activate_row(6);
        tree.activate_row(8);
        assert!(tree.state().is_active_location("/apps/chat"));
        tree.activate_row(1);
        assert!(tree.state().is_active_location("/crypto"));
        assert!(tree.state().is_expanded("apps"));
        assert!(!tree.state().is_expanded("dashboards"));
    }

    #[test]
    fn activation_moves_cursor_to_row() {
        let mut tree = NavTree::new(default_menu(), "/crypto");
        tree.activate_row(6);
        assert_eq!(tree.selected(), 6);
        assert_eq!(tree.row_count(), 11);
        tree.activate_row(6);
        assert_eq!(tree.row_count(), 9);
        assert!(tree.selected() < tree.row_count());
    }

    #[test]
    fn selection_wraps() {
        let mut tree = NavTree::new(default_menu(), "/crypto");
        tree.select_previous();
        assert_eq!(tree.selected(), tree.row_count() - 1);
        tree.select_next();
        assert_eq!(tree.selected(), 0);
    }

    #[test]
    fn breadcrumbs_follow_nesting() {
        let mut tree = NavTree::new(default_menu(), "/crypto");
        tree.activate_row(0);
        tree.activate_row(2);
        let crumbs = tree.breadcrumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "Dashboards");
        assert_eq!(crumbs[0].target, None);
        assert_eq!(crumbs[1].target.as_deref(), Some("/crm"));
    }

    #[test]
    fn out_of_range_activation_is_ignored() {
        let mut tree = NavTree::new(default_menu(), "/crypto");
        assert!(tree.activate_row(500).is_none());
        assert!(tree.state().is_active_location("/crypto"));
    }
}

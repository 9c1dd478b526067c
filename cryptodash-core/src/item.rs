//! Per-node behavior: highlight computation and activation.

use crate::nav::NavNode;
use crate::state::NavTreeState;
use serde::Serialize;

/// Outcome of activating a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Activation {
    /// A group was opened or closed; the active location did not move.
    Toggled { id: String, expanded: bool },
    /// A leaf was activated and its target became the active location.
    Navigated { target: String },
}

/// Everything the presentation layer needs to draw one rail row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavRow {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub badge: Option<String>,
    pub highlighted: bool,
    pub expanded: bool,
    pub has_children: bool,
    /// 0 for top-level items. Indentation only.
    pub depth: usize,
    /// Index of the rail section the row belongs to.
    pub section: usize,
}

/// Borrowed view of one node, answering questions against the shared state.
#[derive(Debug, Clone, Copy)]
pub struct NavItemController<'a> {
    node: &'a NavNode,
}

impl<'a> NavItemController<'a> {
    pub fn new(node: &'a NavNode) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &'a NavNode {
        self.node
    }

    pub fn is_directly_active(&self, state: &NavTreeState) -> bool {
        state.is_active_location(&self.node.target)
    }

    pub fn is_ancestor_of_active(&self, state: &NavTreeState) -> bool {
        self.node.has_descendant_target(state.active_location())
    }

    pub fn is_highlighted(&self, state: &NavTreeState) -> bool {
        self.is_directly_active(state) || self.is_ancestor_of_active(state)
    }

    /// Groups toggle, leaves navigate. Each path touches only its own half
    /// of the state.
    pub fn activate(&self, state: &mut NavTreeState) -> Activation {
        if self.node.has_children() {
            let expanded = state.toggle_group(&self.node.id);
            tracing::debug!(id = %self.node.id, expanded, "nav group toggled");
            Activation::Toggled {
                id: self.node.id.clone(),
                expanded,
            }
        } else {
            state.set_active(self.node.target.clone());
            tracing::debug!(target_location = %self.node.target, "nav leaf activated");
            Activation::Navigated {
                target: self.node.target.clone(),
            }
        }
    }

    pub fn row(&self, state: &NavTreeState, depth: usize, section: usize) -> NavRow {
        NavRow {
            id: self.node.id.clone(),
            label: self.node.label.clone(),
            icon: self.node.icon.clone(),
            badge: self.node.badge.clone(),
            highlighted: self.is_highlighted(state),
            expanded: state.is_expanded(&self.node.id),
            has_children: self.node.has_children(),
            depth,
            section,
        }
    }
}

/// Opens every group whose target prefixes `default_location`.
///
/// Runs once when the tree is built. Expand-only groups never match.
pub fn seed_expanded(nodes: &[NavNode], default_location: &str, state: &mut NavTreeState) {
    for node in nodes {
        if node.has_children() {
            if node.is_navigable() && default_location.starts_with(node.target.as_str()) {
                state.seed_expanded(&node.id);
            }
            seed_expanded(&node.children, default_location, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::EXPAND_ONLY;

    fn wallets() -> NavNode {
        NavNode::group(
            "wallets",
            "Wallets",
            "wallet",
            "/wallets",
            vec![
                NavNode::leaf("hot", "Hot", "flame", "/wallets/hot"),
                NavNode::leaf("cold", "Cold", "snowflake", "/wallets/cold"),
            ],
        )
    }

    #[test]
    fn leaf_activation_moves_location_only() {
        let node = NavNode::leaf("a", "A", "x", "/a");
        let mut state = NavTreeState::new("/b");
        state.toggle_group("other");
        let before = state.expanded_group_ids().clone();

        let outcome = NavItemController::new(&node).activate(&mut state);

        assert_eq!(outcome, Activation::Navigated { target: "/a".into() });
        assert!(state.is_active_location("/a"));
        assert_eq!(state.expanded_group_ids(), &before);
    }

    #[test]
    fn group_activation_toggles_without_navigating() {
        let node = wallets();
        let mut state = NavTreeState::new("/crypto");
        let outcome = NavItemController::new(&node).activate(&mut state);
        assert_eq!(
            outcome,
            Activation::Toggled {
                id: "wallets".into(),
                expanded: true
            }
        );
        assert!(state.is_active_location("/crypto"));
    }

    #[test]
    fn ancestor_of_active_is_highlighted() {
        let node = wallets();
        let state = NavTreeState::new("/wallets/cold");
        let item = NavItemController::new(&node);
        assert!(!item.is_directly_active(&state));
        assert!(item.is_ancestor_of_active(&state));
        assert!(item.is_highlighted(&state));
    }

    #[test]
    fn seed_opens_matching_navigable_groups_only() {
        let nodes = vec![
            wallets(),
            NavNode::group(
                "misc",
                "Misc",
                "x",
                EXPAND_ONLY,
                vec![NavNode::leaf("m", "M", "x", "/misc")],
            ),
        ];
        let mut state = NavTreeState::new("/wallets/hot");
        seed_expanded(&nodes, "/wallets/hot", &mut state);
        assert!(state.is_expanded("wallets"));
        assert!(!state.is_expanded("misc"));
    }

    #[test]
    fn row_reports_presentation_flags() {
        let node = wallets().with_badge("2");
        let mut state = NavTreeState::new("/wallets");
        state.toggle_group("wallets");
        let row = NavItemController::new(&node).row(&state, 1, 0);
        assert!(row.highlighted);
        assert!(row.expanded);
        assert!(row.has_children);
        assert_eq!(row.badge.as_deref(), Some("2"));
        assert_eq!(row.depth, 1);
    }
}

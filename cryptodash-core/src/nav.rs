//! Navigation tree data.
//!
//! Pure authored data with no behavior beyond structural queries. Nodes are
//! built once in code and never mutated while the shell runs.

use serde::{Deserialize, Serialize};

/// Target of a group header that has no page of its own.
pub const EXPAND_ONLY: &str = "#";

/// One entry in the navigation tree, either a group or a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    /// Unique within one tree.
    pub id: String,
    pub label: String,
    /// Opaque identifier handed to the rendering layer.
    pub icon: String,
    /// Location string, or [`EXPAND_ONLY`].
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn leaf(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            target: target.into(),
            badge: None,
            children: Vec::new(),
        }
    }

    pub fn group(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        target: impl Into<String>,
        children: Vec<NavNode>,
    ) -> Self {
        Self {
            children,
            ..Self::leaf(id, label, icon, target)
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_navigable(&self) -> bool {
        self.target != EXPAND_ONLY
    }

    /// True if this node or any descendant points at `location`.
    pub fn contains_target(&self, location: &str) -> bool {
        self.target == location || self.has_descendant_target(location)
    }

    /// True if this node or a descendant is a navigable page at `location`.
    pub fn contains_page(&self, location: &str) -> bool {
        (self.is_navigable() && self.target == location)
            || self.children.iter().any(|child| child.contains_page(location))
    }

    /// True if a strict descendant points at `location`.
    pub fn has_descendant_target(&self, location: &str) -> bool {
        self.children
            .iter()
            .any(|child| child.contains_target(location))
    }
}

/// Titled run of top-level nodes in the rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub title: Option<String>,
    pub nodes: Vec<NavNode>,
}

impl NavSection {
    pub fn new(title: Option<&str>, nodes: Vec<NavNode>) -> Self {
        Self {
            title: title.map(str::to_string),
            nodes,
        }
    }
}

/// The built-in rail: the main menu followed by the footer links.
pub fn default_menu() -> Vec<NavSection> {
    vec![
        NavSection::new(
            Some("Menu"),
            vec![
                NavNode::group(
                    "dashboards",
                    "Dashboards",
                    "layout-dashboard",
                    EXPAND_ONLY,
                    vec![
                        NavNode::leaf("analytics", "Analytics", "analytics", "/analytics"),
                        NavNode::leaf("crm", "CRM", "users", "/crm"),
                        NavNode::leaf("ecommerce", "Ecommerce", "shopping-cart", "/ecommerce"),
                    ],
                ),
                NavNode::leaf("crypto", "Crypto", "wallet", "/crypto").with_badge("Active"),
                NavNode::leaf("projects", "Projects", "briefcase", "/projects"),
                NavNode::leaf("nft", "NFT", "puzzle", "/nft").with_badge("New"),
                NavNode::leaf("job", "Job", "briefcase", "/job"),
                NavNode::leaf("blog", "Blog", "file-text", "/blog"),
                NavNode::group(
                    "apps",
                    "Apps",
                    "layout-grid",
                    EXPAND_ONLY,
                    vec![
                        NavNode::leaf("calendar", "Calendar", "message-square", "/apps/calendar"),
                        NavNode::leaf("chat", "Chat", "message-square", "/apps/chat"),
                    ],
                ),
            ],
        ),
        NavSection::new(
            None,
            vec![
                NavNode::leaf("support", "Support", "circle-help", "/support"),
                NavNode::leaf("settings", "Settings", "settings", "/settings"),
            ],
        ),
    ]
}

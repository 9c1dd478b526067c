//! Active location and expanded groups.

use std::collections::HashSet;

/// Owns the current location and the set of open groups.
///
/// Both fields are only reachable through the methods below so the shell
/// stays the single writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTreeState {
    active_location: String,
    expanded_group_ids: HashSet<String>,
}

impl NavTreeState {
    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            active_location: default_location.into(),
            expanded_group_ids: HashSet::new(),
        }
    }

    /// Replaces the active location. Unknown locations are accepted and
    /// simply highlight nothing.
    pub fn set_active(&mut self, location: impl Into<String>) {
        self.active_location = location.into();
    }

    /// Flips membership of `node_id` and returns the new expanded flag.
    pub fn toggle_group(&mut self, node_id: &str) -> bool {
        if self.expanded_group_ids.remove(node_id) {
            false
        } else {
            self.expanded_group_ids.insert(node_id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded_group_ids.contains(node_id)
    }

    pub fn is_active_location(&self, location: &str) -> bool {
        self.active_location == location
    }

    pub fn active_location(&self) -> &str {
        &self.active_location
    }

    pub fn expanded_group_ids(&self) -> &HashSet<String> {
        &self.expanded_group_ids
    }

    pub(crate) fn seed_expanded(&mut self, node_id: &str) {
        self.expanded_group_ids.insert(node_id.to_string());
    }
}

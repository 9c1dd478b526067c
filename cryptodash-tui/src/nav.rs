//! Page navigation collaborator.
//!
//! Receives leaf targets from the shell. There is no router, so this only
//! records the current page and logs the transition.

use cryptodash_core::NavigationHandler;

#[derive(Debug, Clone)]
pub struct PageNavigator {
    current_page: String,
    navigations: usize,
}

impl PageNavigator {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current_page: start.into(),
            navigations: 0,
        }
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn navigations(&self) -> usize {
        self.navigations
    }
}

impl NavigationHandler for PageNavigator {
    fn navigate(&mut self, target: &str) {
        tracing::info!(from = %self.current_page, to = %target, "navigating");
        self.current_page = target.to_string();
        self.navigations += 1;
    }
}

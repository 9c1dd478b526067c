//! Fixed/overlay shell state machine and the drawer flag.

use crate::viewport::ShellMode;
use serde::Serialize;

/// What the render layer should draw for the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RailPresentation {
    /// Always-visible column beside the content.
    Column,
    /// Open drawer above the content, with a backdrop.
    Drawer,
    /// Overlay mode with the drawer closed.
    Hidden,
}

/// Mode change produced by a viewport update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: ShellMode,
    pub to: ShellMode,
}

#[derive(Debug, Clone)]
pub struct ShellLayoutController {
    mode: ShellMode,
    drawer_open: bool,
}

impl ShellLayoutController {
    pub fn new(mode: ShellMode) -> Self {
        Self {
            mode,
            drawer_open: false,
        }
    }

    /// Moves to the mode implied by `is_wide`. Either transition closes the
    /// drawer.
    pub fn apply_viewport(&mut self, is_wide: bool) -> Option<Transition> {
        let next = if is_wide { ShellMode::Fixed } else { ShellMode::Overlay };
        if next == self.mode {
            return None;
        }
        let transition = Transition {
            from: self.mode,
            to: next,
        };
        self.mode = next;
        self.drawer_open = false;
        tracing::debug!(from = ?transition.from, to = ?transition.to, "shell mode changed");
        Some(transition)
    }

    /// Flips the drawer in overlay mode; no-op when fixed.
    pub fn toggle_drawer(&mut self) {
        if self.mode == ShellMode::Overlay {
            self.drawer_open = !self.drawer_open;
        }
    }

    pub fn dismiss_drawer(&mut self) {
        if self.mode == ShellMode::Overlay {
            self.drawer_open = false;
        }
    }

    pub fn mode(&self) -> ShellMode {
        self.mode
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn rail_presentation(&self) -> RailPresentation {
        match (self.mode, self.drawer_open) {
            (ShellMode::Fixed, _) => RailPresentation::Column,
            (ShellMode::Overlay, true) => RailPresentation::Drawer,
            (ShellMode::Overlay, false) => RailPresentation::Hidden,
        }
    }

    pub fn rail_visible(&self) -> bool {
        self.rail_presentation() != RailPresentation::Hidden
    }
}

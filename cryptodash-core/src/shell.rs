//! Composition root wiring the rail, viewport and layout together.

use crate::item::{Activation, NavRow};
use crate::layout::{RailPresentation, ShellLayoutController, Transition};
use crate::nav::NavSection;
use crate::tree::{Crumb, NavTree};
use crate::viewport::{ShellMode, ViewportController};

/// Receives the target of every activated leaf and performs the page
/// change.
pub trait NavigationHandler {
    fn navigate(&mut self, target: &str);
}

/// Discards navigations.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl NavigationHandler for NoopNavigator {
    fn navigate(&mut self, _target: &str) {}
}

/// Discrete external signal, processed in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSignal {
    Resize(u32),
    ActivateRow(usize),
    ActivateSelected,
    SelectNext,
    SelectPrevious,
    ToggleDrawer,
    DismissDrawer,
}

/// Observable effect of one signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    None,
    Activated(Activation),
    ModeChanged(Transition),
}

/// Owns the navigation state and the viewport/drawer state of one shell.
#[derive(Debug, Clone)]
pub struct DashboardShell {
    tree: NavTree,
    viewport: ViewportController,
    layout: ShellLayoutController,
}

impl DashboardShell {
    pub fn new(menu: Vec<NavSection>, default_location: &str, initial_width: Option<u32>) -> Self {
        let mut viewport = ViewportController::new();
        viewport.attach(initial_width);
        let layout = ShellLayoutController::new(viewport.mode());
        tracing::debug!(
            default_location,
            mode = ?layout.mode(),
            "dashboard shell mounted"
        );
        Self {
            tree: NavTree::new(menu, default_location),
            viewport,
            layout,
        }
    }

    pub fn handle(
        &mut self,
        signal: ShellSignal,
        navigator: &mut dyn NavigationHandler,
    ) -> ShellEffect {
        match signal {
            ShellSignal::Resize(width) => {
                let is_wide = self.viewport.on_resize(width);
                match self.layout.apply_viewport(is_wide) {
                    Some(transition) => ShellEffect::ModeChanged(transition),
                    None => ShellEffect::None,
                }
            }
            ShellSignal::ActivateRow(index) => self.activate(Some(index), navigator),
            ShellSignal::ActivateSelected => self.activate(None, navigator),
            ShellSignal::SelectNext => {
                if self.layout.rail_visible() {
                    self.tree.select_next();
                }
                ShellEffect::None
            }
            ShellSignal::SelectPrevious => {
                if self.layout.rail_visible() {
                    self.tree.select_previous();
                }
                ShellEffect::None
            }
            ShellSignal::ToggleDrawer => {
                self.layout.toggle_drawer();
                ShellEffect::None
            }
            ShellSignal::DismissDrawer => {
                self.layout.dismiss_drawer();
                ShellEffect::None
            }
        }
    }

    /// Releases the viewport; later resize signals are ignored.
    pub fn detach(&mut self) {
        self.viewport.detach();
    }

    pub fn nav_rows(&self) -> Vec<NavRow> {
        self.tree.visible_rows()
    }

    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn selected_row(&self) -> usize {
        self.tree.selected()
    }

    pub fn mode(&self) -> ShellMode {
        self.layout.mode()
    }

    pub fn rail_presentation(&self) -> RailPresentation {
        self.layout.rail_presentation()
    }

    pub fn is_wide(&self) -> bool {
        self.viewport.is_wide()
    }

    pub fn drawer_open(&self) -> bool {
        self.layout.drawer_open()
    }

    pub fn active_location(&self) -> &str {
        self.tree.state().active_location()
    }

    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        self.tree.breadcrumbs()
    }

    fn activate(
        &mut self,
        index: Option<usize>,
        navigator: &mut dyn NavigationHandler,
    ) -> ShellEffect {
        if !self.layout.rail_visible() {
            tracing::trace!("activation ignored while rail is hidden");
            return ShellEffect::None;
        }
        let activation = match index {
            Some(index) => self.tree.activate_row(index),
            None => self.tree.activate_selected(),
        };
        match activation {
            Some(activation) => {
                if let Activation::Navigated { target } = &activation {
                    navigator.navigate(target);
                }
                ShellEffect::Activated(activation)
            }
            None => ShellEffect::None,
        }
    }
}

//! CRYPTODASH Core - Navigation & Shell Controller
//!
//! Owns the navigation tree, the active location, per-group expansion and
//! the fixed/overlay shell layout. No terminal I/O lives here; front ends
//! feed signals in and read presentation data out.

pub mod item;
pub mod layout;
pub mod nav;
pub mod shell;
pub mod state;
pub mod tree;
pub mod viewport;

pub use item::{Activation, NavItemController, NavRow};
pub use layout::{RailPresentation, ShellLayoutController, Transition};
pub use nav::{default_menu, NavNode, NavSection, EXPAND_ONLY};
pub use shell::{DashboardShell, NavigationHandler, NoopNavigator, ShellEffect, ShellSignal};
pub use state::NavTreeState;
pub use tree::{Crumb, NavTree};
pub use viewport::{ShellMode, ViewportController, WIDE_BREAKPOINT};

//! CRYPTODASH TUI library exports.

pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod keys;
pub mod logging;
pub mod mock;
pub mod nav;
pub mod notifications;
pub mod state;
pub mod subscription;
pub mod theme;
pub mod views;
pub mod widgets;

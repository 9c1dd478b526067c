//! Reusable widget components.

pub mod detail;
pub mod progress;
pub mod status;
pub mod tree;

pub use detail::DetailPanel;
pub use progress::ProgressBar;
pub use status::StatusIndicator;
pub use tree::{scroll_offset, TreeItem, TreeLine, TreeStyle, TreeWidget};

//! Wide/narrow tracking from viewport width samples.

use serde::Serialize;

/// Widths at or above this many logical units count as wide.
pub const WIDE_BREAKPOINT: u32 = 1024;

/// How the shell presents the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShellMode {
    /// Rail is a constant-width column.
    Fixed,
    /// Rail is a dismissible drawer above the content.
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attachment {
    Pending,
    Attached,
    Detached,
}

/// Derives [`ShellMode`] from the latest width sample.
///
/// Only the instantaneous width matters, so coalesced or dropped resize
/// notifications never leave a stale value behind.
#[derive(Debug, Clone)]
pub struct ViewportController {
    is_wide: bool,
    last_width: Option<u32>,
    attachment: Attachment,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self {
            is_wide: false,
            last_width: None,
            attachment: Attachment::Pending,
        }
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples synchronously on attach. `None` means the environment could
    /// not be measured, which falls back to narrow.
    pub fn attach(&mut self, initial_width: Option<u32>) -> bool {
        self.attachment = Attachment::Attached;
        match initial_width {
            Some(width) => self.sample(width),
            None => {
                self.last_width = None;
                self.is_wide = false;
            }
        }
        self.is_wide
    }

    /// Recomputes from `width`. Ignored once detached.
    pub fn on_resize(&mut self, width: u32) -> bool {
        if self.attachment == Attachment::Detached {
            tracing::trace!(width, "resize after detach ignored");
            return self.is_wide;
        }
        self.attachment = Attachment::Attached;
        self.sample(width);
        self.is_wide
    }

    pub fn detach(&mut self) {
        self.attachment = Attachment::Detached;
    }

    pub fn is_attached(&self) -> bool {
        self.attachment == Attachment::Attached
    }

    pub fn is_wide(&self) -> bool {
        self.is_wide
    }

    pub fn last_width(&self) -> Option<u32> {
        self.last_width
    }

    pub fn mode(&self) -> ShellMode {
        if self.is_wide {
            ShellMode::Fixed
        } else {
            ShellMode::Overlay
        }
    }

    fn sample(&mut self, width: u32) {
        self.last_width = Some(width);
        self.is_wide = width >= WIDE_BREAKPOINT;
    }
}

//! Color palettes and color helpers.

use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub bg_secondary: Color,
    pub bg_highlight: Color,
    pub backdrop: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    pub fn synthbrute() -> Self {
        Self {
            name: "synthbrute",
            bg: Color::Rgb(10, 10, 10),
            bg_secondary: Color::Rgb(26, 26, 26),
            bg_highlight: Color::Rgb(42, 42, 42),
            backdrop: Color::Rgb(4, 4, 4),
            primary: Color::Rgb(0, 255, 255),
            primary_dim: Color::Rgb(0, 136, 136),
            secondary: Color::Rgb(255, 0, 255),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),
            info: Color::Rgb(0, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            text_muted: Color::Rgb(68, 68, 68),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(0, 255, 255),
        }
    }

    pub fn daylight() -> Self {
        Self {
            name: "daylight",
            bg: Color::Rgb(248, 248, 251),
            bg_secondary: Color::Rgb(255, 255, 255),
            bg_highlight: Color::Rgb(226, 232, 240),
            backdrop: Color::Rgb(120, 120, 130),
            primary: Color::Rgb(64, 81, 137),
            primary_dim: Color::Rgb(130, 143, 190),
            secondary: Color::Rgb(41, 156, 219),
            success: Color::Rgb(10, 179, 156),
            warning: Color::Rgb(247, 184, 75),
            error: Color::Rgb(240, 101, 72),
            info: Color::Rgb(41, 156, 219),
            text: Color::Rgb(33, 37, 41),
            text_dim: Color::Rgb(135, 138, 153),
            text_muted: Color::Rgb(173, 181, 189),
            border: Color::Rgb(206, 212, 218),
            border_focus: Color::Rgb(64, 81, 137),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::synthbrute()
        } else {
            Self::daylight()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "synthbrute"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::synthbrute()
    }
}

/// Green for gains, red for losses. Zero counts as a gain.
pub fn change_color(change: f64, theme: &Theme) -> Color {
    if change >= 0.0 {
        theme.success
    } else {
        theme.error
    }
}

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

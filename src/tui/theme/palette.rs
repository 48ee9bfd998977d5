//! Color palette - dark grayscale with a single warm accent for favorites

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub favorite: Color,
    pub playing: Color,
    pub error: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        bg_primary: Color::Rgb(24, 24, 24),      // #181818, matches the icon placeholder
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        accent: Color::Rgb(255, 255, 255),       // #ffffff
        accent_alt: Color::Rgb(200, 200, 200),   // #c8c8c8
        border: Color::Rgb(64, 64, 64),          // #404040
        favorite: Color::Rgb(250, 204, 21),      // #facc15
        playing: Color::Rgb(255, 255, 255),      // #ffffff
        error: Color::Rgb(248, 113, 113),        // #f87171
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DARK
    }
}

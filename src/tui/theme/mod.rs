//! Theme configuration

pub mod borders;
pub mod icons;
pub mod palette;

pub use borders::BorderStyle;
pub use icons::{Icons, LoadingSpinner};
pub use palette::Palette;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub icons: Icons,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::DARK,
            icons: Icons::nerd(),
        }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        BorderStyle::to_border_set()
    }

    /// Border set and color for a pane that may hold keyboard focus.
    pub fn pane_border(&self, focused: bool) -> (ratatui::symbols::border::Set<'static>, ratatui::style::Color) {
        if focused {
            (BorderStyle::focused_set(), self.palette.accent)
        } else {
            (BorderStyle::to_border_set(), self.palette.border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}

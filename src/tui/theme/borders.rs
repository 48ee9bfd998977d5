//! Border styles: rounded panes, thick border on the focused one

use ratatui::symbols::border;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    pub fn to_border_set() -> border::Set<'static> {
        border::ROUNDED
    }

    pub fn focused_set() -> border::Set<'static> {
        border::THICK
    }
}

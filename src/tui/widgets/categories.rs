//! Category sidebar: "All", "Favorites", then the server's categories.

use crate::app::state::{AppState, BrowseFocus};
use crate::browse::{Browser, CategoryKey};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::truncate_str;

pub fn render(frame: &mut Frame, state: &AppState, browser: &Browser, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let focused = state.focus == BrowseFocus::Categories;
    let (border_set, border_color) = theme.pane_border(focused);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(Style::default().fg(border_color))
        .title(" Categories ")
        .title_style(Style::default().fg(theme.palette.accent));

    // While a search is active no category is highlighted as current.
    let active = browser.active_category();
    let width = area.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = browser
        .category_keys()
        .iter()
        .map(|key| {
            let is_active = active == Some(key);
            let style = if is_active {
                Style::default()
                    .fg(theme.palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };
            let (icon, icon_color) = match key {
                CategoryKey::Favorites => (icons.star, theme.palette.favorite),
                _ => (icons.folder, theme.palette.fg_secondary),
            };
            let prefix = if is_active { icons.selected } else { icons.unselected };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::raw(" "),
                Span::styled(icon, Style::default().fg(icon_color)),
                Span::raw(" "),
                Span::styled(truncate_str(&browser.category_label(key), width), style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(browser.category_cursor()));
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(theme.palette.bg_primary)
            .bg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, area, &mut list_state);
}

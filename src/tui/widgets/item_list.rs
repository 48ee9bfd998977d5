//! Item list widget with search box and detail line

use crate::app::state::{AppState, BrowseFocus};
use crate::browse::{Browser, LoadState};
use crate::tui::theme::{get_theme, LoadingSpinner, Theme};
use crate::tui::view::{self, ItemCard};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::truncate_str;

pub fn render_search_box(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let focused = state.focus == BrowseFocus::Search;
    let (border_set, border_color) = theme.pane_border(focused);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} Search ", theme.icons.search))
        .title_style(Style::default().fg(theme.palette.accent));

    let line = if state.search_input.is_empty() && !focused {
        Line::from(Span::styled(
            "press / to filter this list",
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(format!("{}{}", state.search_input, cursor))
    };

    let p = Paragraph::new(line)
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(block);
    frame.render_widget(p, area);
}

pub fn render(frame: &mut Frame, state: &AppState, browser: &Browser, area: Rect) {
    let theme = get_theme();
    let focused = state.focus == BrowseFocus::Items;
    let (border_set, border_color) = theme.pane_border(focused);

    let cards = view::cards(browser);
    let title = match browser.section() {
        Some(section) => format!(" {} {} ({}) ", theme.icons.section(section), section.label(), cards.len()),
        None => " Items ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if *browser.load_state() == LoadState::Loading {
        let spinner = LoadingSpinner::frame(state.tick);
        let loading = Paragraph::new(Line::from(format!("{} Loading...", spinner)))
            .style(Style::default().fg(theme.palette.fg_secondary));
        frame.render_widget(loading, inner);
        return;
    }

    if let Some(msg) = view::empty_message(browser, cards.len()) {
        let color = match browser.load_state() {
            LoadState::Failed(_) => theme.palette.error,
            _ => theme.palette.fg_secondary,
        };
        frame.render_widget(
            Paragraph::new(Line::from(msg)).style(Style::default().fg(color)),
            inner,
        );
        return;
    }

    let query = browser.query().to_lowercase();
    let width = inner.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| ListItem::new(card_line(card, &query, width, &theme)))
        .collect();

    // ListState scrolls the viewport to keep the selection visible.
    let mut list_state = ListState::default();
    list_state.select(Some(browser.item_cursor()));

    let highlight = if focused {
        Style::default()
            .fg(theme.palette.bg_primary)
            .bg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("\u{f054} "); // nf-fa-chevron_right

    frame.render_stateful_widget(list, inner, &mut list_state);

    if cards.len() > inner.height as usize {
        let pos_text = format!("{}/{}", browser.item_cursor() + 1, cards.len());
        let pos_len = pos_text.len() as u16;
        let pos_x = inner.x + inner.width.saturating_sub(pos_len);
        if pos_x > inner.x {
            frame.render_widget(
                Paragraph::new(pos_text).style(Style::default().fg(theme.palette.fg_secondary)),
                Rect::new(pos_x, inner.y, pos_len, 1),
            );
        }
    }
}

fn card_line<'a>(card: &'a ItemCard, query: &str, width: usize, theme: &Theme) -> Line<'a> {
    let star = if card.favorite {
        Span::styled(format!("{} ", theme.icons.star), Style::default().fg(theme.palette.favorite))
    } else {
        Span::raw("  ")
    };
    let base = Style::default().fg(theme.palette.fg_primary);

    let mut spans = vec![star];
    if query.is_empty() || card.label.chars().count() > width {
        spans.push(Span::styled(truncate_str(&card.label, width), base));
    } else {
        spans.extend(highlight_text(&card.label, query, base, theme));
    }
    Line::from(spans)
}

/// Splits `text` so the first case-insensitive match of `query` is highlighted.
fn highlight_text<'a>(text: &'a str, query: &str, base_style: Style, theme: &Theme) -> Vec<Span<'a>> {
    let highlight_style = base_style.bg(theme.palette.accent_alt).fg(theme.palette.bg_primary);
    let (lower_text, bounds) = lowercase_with_bounds(text);

    // Only highlight a match that starts and ends on a character of `text`.
    let Some(range) = lower_text.find(query).and_then(|at| {
        let start = bounds.iter().find(|(lower, _)| *lower == at)?.1;
        let end = bounds.iter().find(|(lower, _)| *lower == at + query.len())?.1;
        Some((start, end))
    }) else {
        return vec![Span::styled(text, base_style)];
    };
    let (start, end) = range;

    let mut spans = Vec::with_capacity(3);
    if start > 0 {
        spans.push(Span::styled(&text[..start], base_style));
    }
    spans.push(Span::styled(&text[start..end], highlight_style));
    if end < text.len() {
        spans.push(Span::styled(&text[end..], base_style));
    }
    spans
}

/// Lowercases `text` and records each char boundary as
/// `(offset in lowercase, offset in text)`, end included.
fn lowercase_with_bounds(text: &str) -> (String, Vec<(usize, usize)>) {
    let mut lower = String::with_capacity(text.len());
    let mut bounds = Vec::with_capacity(text.len() + 1);
    for (offset, c) in text.char_indices() {
        bounds.push((lower.len(), offset));
        lower.extend(c.to_lowercase());
    }
    bounds.push((lower.len(), text.len()));
    (lower, bounds)
}

/// Single line under the list describing the highlighted item.
pub fn render_detail(frame: &mut Frame, browser: &Browser, area: Rect) {
    let theme = get_theme();
    let (Some(section), Some(item)) = (browser.section(), browser.selected_item()) else {
        return;
    };
    let card = ItemCard::new(item, browser.is_favorite(section, item.id));
    let text = truncate_str(&view::detail_line(section, &card), area.width.saturating_sub(1) as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(theme.palette.fg_secondary),
        ))),
        area,
    );
}

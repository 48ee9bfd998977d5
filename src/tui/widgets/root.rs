//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, BrowseFocus, Screen, ToastKind};
use crate::browse::Browser;
use crate::tui::PlayerView;
use crate::tui::theme::{get_theme, Theme};
use crate::xtream::models::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{categories, help, item_list, login, player, truncate_str};

/// Browse layout:
/// ┌────────────────────────────────────────────────────┐
/// │ [Live TV]  Movies  Series            account info  │
/// ├────────────┬───────────────────────────────────────┤
/// │ Categories │ Search                                │
/// │  All       ├───────────────────────────────────────┤
/// │  Favorites │ Items                                 │
/// │  News      │                                       │
/// ├────────────┴───────────────────────────────────────┤
/// │ status / toast                          key hints  │
/// └────────────────────────────────────────────────────┘
/// The player screen replaces everything between header and status bar.
pub fn render(frame: &mut Frame, state: &AppState, browser: &Browser, player_view: &PlayerView<'_>) {
    let root = frame.area();

    if state.screen == Screen::Login {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(root);
        login::render(frame, state, rows[0]);
        render_status_bar(frame, state, rows[1]);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(root);

    render_header(frame, state, browser, rows[0]);

    match state.screen {
        Screen::Player => player::render(frame, state, browser, player_view, rows[1]),
        _ => render_browse(frame, state, browser, rows[1]),
    }

    render_status_bar(frame, state, rows[2]);

    if state.show_help {
        let area = centered(rows[1], 70, 80);
        frame.render_widget(Clear, area);
        help::render(frame, area);
    }
}

fn render_browse(frame: &mut Frame, state: &AppState, browser: &Browser, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28), // Categories
            Constraint::Min(30),    // Search + items
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(3),    // Items
            Constraint::Length(1), // Detail line
        ])
        .split(cols[1]);

    categories::render(frame, state, browser, cols[0]);
    item_list::render_search_box(frame, state, main[0]);
    item_list::render(frame, state, browser, main[1]);
    item_list::render_detail(frame, browser, main[2]);
}

fn render_header(frame: &mut Frame, state: &AppState, browser: &Browser, area: Rect) {
    let theme = get_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(" telly ")
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let active = browser.section();
    let mut spans: Vec<Span> = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let is_selected = active == Some(*section);
        spans.extend(section_tab(&theme, *section, i + 1, is_selected));
        spans.push(Span::raw("  "));
    }

    let account = state.account.as_deref().unwrap_or("");
    let tabs_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let room = (inner.width as usize).saturating_sub(tabs_width + 3);
    if !account.is_empty() && room > 0 {
        let account = truncate_str(account, room);
        let pad = room.saturating_sub(account.chars().count());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(
            format!("{} ", theme.icons.user),
            Style::default().fg(theme.palette.fg_secondary),
        ));
        spans.push(Span::styled(account, Style::default().fg(theme.palette.fg_secondary)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn section_tab(theme: &Theme, section: Section, key: usize, is_selected: bool) -> Vec<Span<'static>> {
    let style = if is_selected {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.fg_secondary)
    };
    let (open, close) = if is_selected { ("[", "]") } else { (" ", " ") };
    vec![
        Span::styled(open, style),
        Span::styled(format!("{key} {} {}", theme.icons.section(section), section.label()), style),
        Span::styled(close, style),
    ]
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let width = area.width as usize;

    let hints = match state.screen {
        Screen::Login => "Tab next field · Space remember · Enter login · Esc quit",
        Screen::Player => "Space pause · ←/→ seek · f favorite · t fullscreen · Esc close",
        Screen::Browse if state.focus == BrowseFocus::Search => "type to filter · Enter/Esc done",
        Screen::Browse => "1-3 section · ←/→ pane · Enter open · f fav · / search · L logout · ? help",
    };

    let mut spans = Vec::new();
    let mut used = 0;
    if let Some(toast) = &state.toast {
        let (prefix, color) = match toast.kind {
            ToastKind::Info => (icons.info, theme.palette.fg_primary),
            ToastKind::Error => (icons.error, theme.palette.error),
        };
        let msg = truncate_str(&toast.message, width.saturating_sub(hints.chars().count() + 4));
        used = msg.chars().count() + 3;
        spans.push(Span::styled(format!(" {prefix} "), Style::default().fg(color)));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    } else if !state.status.is_empty() {
        let msg = truncate_str(&state.status, width.saturating_sub(hints.chars().count() + 2));
        used = msg.chars().count() + 1;
        spans.push(Span::raw(" "));
        spans.push(Span::styled(msg, Style::default().fg(theme.palette.fg_secondary)));
    }

    let pad = width.saturating_sub(used + hints.chars().count() + 1);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(hints, Style::default().fg(theme.palette.fg_secondary)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// A rect of `percent_x` x `percent_y` centered in `area`.
pub fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

//! Login form

use crate::app::state::{AppState, LoginField};
use crate::tui::theme::{get_theme, LoadingSpinner, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let form = &state.login;

    let width = area.width.min(60);
    let height = area.height.min(16);
    let boxed = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} IPTV login ", theme.icons.live))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(boxed);
    frame.render_widget(block, boxed);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Host
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Remember
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Error / progress
        ])
        .split(inner);

    let masked = "•".repeat(form.password.chars().count());
    text_field(frame, &theme, "Host (http://server:port)", &form.host, form.focus == LoginField::Host, rows[0]);
    text_field(frame, &theme, "Username", &form.username, form.focus == LoginField::Username, rows[1]);
    text_field(frame, &theme, "Password", &masked, form.focus == LoginField::Password, rows[2]);

    let check = if form.remember { "[x]" } else { "[ ]" };
    let remember_style = if form.focus == LoginField::Remember {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.fg_secondary)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {check} Remember me"), remember_style))),
        rows[3],
    );

    let footer = if form.busy {
        Line::from(Span::styled(
            format!("{} Logging in...", LoadingSpinner::frame(state.tick)),
            Style::default().fg(theme.palette.fg_secondary),
        ))
    } else if let Some(err) = &form.error {
        Line::from(Span::styled(err.as_str(), Style::default().fg(theme.palette.error)))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[5]);
}

fn text_field(frame: &mut Frame, theme: &Theme, title: &str, value: &str, focused: bool, area: Rect) {
    let (border_set, border_color) = theme.pane_border(focused);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(theme.palette.fg_secondary));
    let cursor = if focused { "▏" } else { "" };
    let p = Paragraph::new(Line::from(format!("{value}{cursor}")))
        .style(Style::default().fg(theme.palette.fg_primary))
        .block(block);
    frame.render_widget(p, area);
}

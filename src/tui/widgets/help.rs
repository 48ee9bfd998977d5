//! Help overlay showing keybindings

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Browse", &theme),
        keybind("1 / 2 / 3", "Live TV / Movies / Series", &theme),
        keybind("Tab", "Next section", &theme),
        keybind("h / Left", "Focus categories", &theme),
        keybind("l / Right", "Focus items", &theme),
        keybind("j / k", "Move down / up", &theme),
        keybind("g / G", "Top / bottom", &theme),
        keybind("Ctrl+d / u", "Page down / up", &theme),
        keybind("Enter", "Open category / play", &theme),
        keybind("f", "Toggle favorite", &theme),
        keybind("/", "Search this list", &theme),
        keybind("Ctrl+r", "Reload list", &theme),
    ];

    let left_para = Paragraph::new(left_content).wrap(Wrap { trim: false });
    frame.render_widget(left_para, cols[0]);

    let right_content = vec![
        section_header("Player", &theme),
        keybind("Space", "Play / pause", &theme),
        keybind("Right", "Forward 10s", &theme),
        keybind("Left", "Back 10s", &theme),
        keybind("f", "Toggle favorite", &theme),
        keybind("t", "Toggle fullscreen", &theme),
        keybind("Esc", "Close player", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("L", "Log out", &theme),
        keybind("?", "Toggle this help", &theme),
        keybind("q", "Quit", &theme),
    ];

    let right_para = Paragraph::new(right_content).wrap(Wrap { trim: false });
    frame.render_widget(right_para, cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}

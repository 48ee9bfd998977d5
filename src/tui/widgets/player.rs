//! Now-playing panel. Video itself renders in the engine's own window.

use crate::app::state::AppState;
use crate::browse::Browser;
use crate::player::PlayState;
use crate::tui::PlayerView;
use crate::tui::theme::{get_theme, LoadingSpinner};
use crate::tui::view::UNTITLED;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::truncate_str;

pub fn render(frame: &mut Frame, state: &AppState, browser: &Browser, player: &PlayerView<'_>, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(format!(" {} Player ", icons.play))
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Section
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // State
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Feedback
            Constraint::Min(0),    // Bottom padding
        ])
        .split(inner);

    let width = inner.width.saturating_sub(2) as usize;

    let Some(now) = player.now else {
        let idle = Paragraph::new(Line::from(Span::styled(
            format!("{} Not playing", icons.stop),
            Style::default().fg(theme.palette.fg_secondary),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(idle, rows[4]);
        return;
    };

    let favorite = browser.is_favorite(now.section, now.item.id);
    let mut title = vec![Span::styled(
        truncate_str(now.item.name().unwrap_or(UNTITLED), width.saturating_sub(2)),
        Style::default()
            .fg(theme.palette.fg_primary)
            .add_modifier(Modifier::BOLD),
    )];
    if favorite {
        title.insert(
            0,
            Span::styled(format!("{} ", icons.star), Style::default().fg(theme.palette.favorite)),
        );
    }
    frame.render_widget(Paragraph::new(Line::from(title)).alignment(Alignment::Center), rows[1]);

    let section = Line::from(Span::styled(
        format!("{} {}", icons.section(now.section), now.section.label()),
        Style::default().fg(theme.palette.fg_secondary),
    ));
    frame.render_widget(Paragraph::new(section).alignment(Alignment::Center), rows[2]);

    let status = match player.state {
        PlayState::Loading => Span::styled(
            format!("{} Opening stream...", LoadingSpinner::frame(state.tick)),
            Style::default().fg(theme.palette.fg_secondary),
        ),
        PlayState::Playing if player.paused => Span::styled(
            format!("{} Paused", icons.pause),
            Style::default().fg(theme.palette.playing),
        ),
        PlayState::Playing => Span::styled(
            format!("{} Playing", icons.play),
            Style::default().fg(theme.palette.playing),
        ),
        PlayState::Error => Span::styled(
            format!("{} Stream failed", icons.error),
            Style::default().fg(theme.palette.error),
        ),
        PlayState::Idle => Span::styled(
            format!("{} Stopped", icons.stop),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(status)).alignment(Alignment::Center), rows[4]);

    if let Some(feedback) = &state.feedback {
        let text = Line::from(Span::styled(
            feedback.text,
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), rows[6]);
    }
}

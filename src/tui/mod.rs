use crate::app::state::AppState;
use crate::browse::Browser;
use crate::player::{NowPlaying, PlayState};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub mod theme;
pub mod view;
pub mod widgets;

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Read-only view of the playback session for rendering.
pub struct PlayerView<'a> {
    pub state: PlayState,
    pub now: Option<&'a NowPlaying>,
    pub paused: bool,
}

pub struct TerminalGuard {
    terminal: TuiTerminal,
}

impl TerminalGuard {
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("enter alt screen + mouse capture")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("create terminal")?;

        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best-effort cleanup; don't panic in Drop.
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
    }
}

pub fn draw(
    terminal: &mut TuiTerminal,
    state: &mut AppState,
    browser: &Browser,
    player: &PlayerView<'_>,
) -> anyhow::Result<()> {
    if state.toast.as_ref().is_some_and(|t| t.is_expired()) {
        state.toast = None;
    }
    if state.feedback.as_ref().is_some_and(|f| f.is_expired()) {
        state.feedback = None;
    }

    terminal
        .draw(|f| {
            widgets::root::render(f, state, browser, player);
        })
        .context("terminal draw")?;
    Ok(())
}

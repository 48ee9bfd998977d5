//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

use crate::xtream::models::Section;

#[derive(Debug, Clone)]
pub struct Icons {
    // Playback
    pub play: &'static str,
    pub pause: &'static str,
    pub stop: &'static str,

    // Sections
    pub live: &'static str,
    pub movie: &'static str,
    pub series: &'static str,

    // Navigation
    pub search: &'static str,
    pub folder: &'static str,
    pub help: &'static str,
    pub user: &'static str,

    // Status
    pub info: &'static str,
    pub error: &'static str,

    pub star: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
    pub bullet: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            play: "\u{f04b}",           // nf-fa-play
            pause: "\u{f04c}",          // nf-fa-pause
            stop: "\u{f04d}",           // nf-fa-stop

            live: "\u{f26c}",           // nf-fa-television
            movie: "\u{f008}",          // nf-fa-film
            series: "\u{f03a}",         // nf-fa-list

            search: "\u{f002}",         // nf-fa-search
            folder: "\u{f07b}",         // nf-fa-folder
            help: "\u{f059}",           // nf-fa-question_circle
            user: "\u{f007}",           // nf-fa-user

            info: "\u{f05a}",           // nf-fa-info_circle
            error: "\u{f00d}",          // nf-fa-times

            star: "\u{f005}",           // nf-fa-star
            selected: "\u{f054}",       // nf-fa-chevron_right
            unselected: " ",
            bullet: "•",
        }
    }

    pub fn section(&self, section: Section) -> &'static str {
        match section {
            Section::Live => self.live,
            Section::Movie => self.movie,
            Section::Series => self.series,
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = tick as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}

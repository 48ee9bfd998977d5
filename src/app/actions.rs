use super::state::BrowseFocus;
use crate::xtream::models::Section;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Resize,
    ToggleHelp,

    LoginNextField,
    LoginPrevField,
    ToggleRemember,
    SubmitLogin,
    InputChar(char),
    Backspace,
    ClearInput,

    SelectSection(Section),
    NextSection,
    PrevSection,
    SetFocus(BrowseFocus),
    ListUp,
    ListDown,
    GoTop,
    GoBottom,
    PageUp,
    PageDown,
    /// Enter: open the highlighted category, or play the highlighted item.
    Activate,
    ToggleFavorite,
    Refresh,
    Logout,

    TogglePause,
    SeekForward,
    SeekBack,
    ToggleFullscreen,
    ClosePlayer,
}

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Browse,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Host,
    Username,
    Password,
    Remember,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Host => LoginField::Username,
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Remember,
            LoginField::Remember => LoginField::Host,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Host => LoginField::Remember,
            LoginField::Username => LoginField::Host,
            LoginField::Password => LoginField::Username,
            LoginField::Remember => LoginField::Password,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub host: String,
    pub username: String,
    pub password: String,
    pub remember: bool,
    pub focus: LoginField,
    pub error: Option<String>,
    /// A login request is in flight.
    pub busy: bool,
}

impl LoginForm {
    pub fn field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            LoginField::Host => Some(&mut self.host),
            LoginField::Username => Some(&mut self.username),
            LoginField::Password => Some(&mut self.password),
            LoginField::Remember => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseFocus {
    Categories,
    Items,
    Search,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
            created_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > Duration::from_secs(3)
    }
}

/// Short-lived player overlay text (`▶`, `» +10s`, ...).
#[derive(Debug, Clone)]
pub struct Feedback {
    pub text: &'static str,
    pub created_at: Instant,
}

impl Feedback {
    pub const PLAY: &'static str = "▶";
    pub const PAUSE: &'static str = "❚❚";
    pub const FORWARD: &'static str = "» +10s";
    pub const BACK: &'static str = "« -10s";
    pub const FAVORITE_ADDED: &'static str = "⭐ Added";
    pub const FAVORITE_REMOVED: &'static str = "⭐ Removed";

    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > Duration::from_secs(1)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub show_help: bool,
    pub login: LoginForm,
    pub focus: BrowseFocus,
    /// Raw search box text; the browser only sees it once the debounce fires.
    pub search_input: String,
    pub account: Option<String>,
    pub status: String,
    pub toast: Option<Toast>,
    pub feedback: Option<Feedback>,
    pub should_quit: bool,
    pub tick: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            show_help: false,
            login: LoginForm::default(),
            focus: BrowseFocus::Items,
            search_input: String::new(),
            account: None,
            status: String::new(),
            toast: None,
            feedback: None,
            should_quit: false,
            tick: 0,
        }
    }

    /// Back to the login screen, keeping the form only when `keep_form` is set.
    pub fn to_login(&mut self, keep_form: bool) {
        self.screen = Screen::Login;
        self.show_help = false;
        self.focus = BrowseFocus::Items;
        self.search_input.clear();
        self.account = None;
        self.feedback = None;
        self.login.busy = false;
        if !keep_form {
            self.login.clear();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub mod actions;
pub mod events;
pub mod state;

use crate::browse::{self, Browser, CategoryKey, Fetch, LoadState, Progress, debounce::Debouncer};
use crate::config::Config;
use crate::favorites::FavoritesIndex;
use crate::input;
use crate::player::mpv::MpvLauncher;
use crate::player::{EngineEvent, NowPlaying, PlaybackSession, SEEK_STEP_SECS, STREAM_FAILED, Transition};
use crate::session::{self, Session};
use crate::storage::Storage;
use crate::tui::{self, PlayerView, TuiTerminal};
use crate::xtream::{models::Section, urls};
use actions::Action;
use events::{Event, NetworkEvent};
use state::{AppState, BrowseFocus, Feedback, Screen, Toast};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc;

const PAGE: isize = 10;
const SERIES_NOT_PLAYABLE: &str = "Series need an episode list and cannot be played directly.";

pub struct App {
    cfg: Config,
    config_path: Option<PathBuf>,
    state: AppState,
    store: Rc<Storage>,
    browser: Browser,
    session: Option<Session>,
    player: PlaybackSession<MpvLauncher>,
    search: Debouncer,
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
    redraw_pending: bool,
}

impl App {
    pub fn new(cfg: Config, config_path: Option<PathBuf>, store: Rc<Storage>) -> Self {
        let (tx, rx) = mpsc::channel::<Event>(256);
        let favorites = FavoritesIndex::load(store.clone());
        let launcher = MpvLauncher::new(cfg.player.clone(), Some(cfg.mpv_log_path()), tx.clone());
        let search = Debouncer::new(Duration::from_millis(cfg.ui.search_debounce_ms));

        Self {
            cfg,
            config_path,
            state: AppState::new(),
            store,
            browser: Browser::new(favorites),
            session: None,
            player: PlaybackSession::new(launcher),
            search,
            tx,
            rx,
            redraw_pending: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        input::spawn_input_task(self.tx.clone());

        self.auto_login();
        self.draw(terminal)?;

        while let Some(ev) = self.rx.recv().await {
            self.state.tick = self.state.tick.wrapping_add(1);
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action).await;
                    }
                }
                Event::Player { token, event } => self.handle_player(token, event),
                Event::Network(ne) => self.handle_network(ne),
                Event::SearchTick { generation } => {
                    if self.search.fire(generation) {
                        self.browser.search(&self.state.search_input);
                    }
                }
                Event::Redraw => self.redraw_pending = false,
            }

            if self.state.should_quit {
                break;
            }

            self.draw(terminal)?;
        }

        self.player.stop();
        self.save_state_on_quit();
        Ok(())
    }

    fn draw(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let view = PlayerView {
            state: self.player.state(),
            now: self.player.current(),
            paused: self.player.is_paused(),
        };
        tui::draw(terminal, &mut self.state, &self.browser, &view)?;

        // Keep spinners and overlays moving without a constant ticker.
        let animating = self.state.login.busy || *self.browser.load_state() == LoadState::Loading;
        if animating {
            self.schedule_redraw(Duration::from_millis(120));
        } else if self.state.feedback.is_some() || self.state.toast.is_some() {
            self.schedule_redraw(Duration::from_millis(500));
        }
        Ok(())
    }

    fn schedule_redraw(&mut self, after: Duration) {
        if self.redraw_pending {
            return;
        }
        self.redraw_pending = true;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = tx.send(Event::Redraw).await;
        });
    }

    fn save_state_on_quit(&mut self) {
        if let Some(section) = self.browser.section() {
            self.cfg.ui.last_section = Some(section.as_str().to_string());
        }
        if let Err(e) = crate::config::save(&self.cfg, self.config_path.as_deref()) {
            tracing::warn!("config not saved: {e:#}");
        }
    }

    /// Pre-fills the form from stored credentials and logs in with them.
    fn auto_login(&mut self) {
        let creds = match self.store.load_credentials() {
            Ok(Some(creds)) => creds,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("stored credentials unreadable: {e:#}");
                return;
            }
        };
        tracing::info!("auto-login with stored credentials");
        let form = &mut self.state.login;
        form.host = creds.host;
        form.username = creds.username;
        form.password = creds.password;
        form.remember = true;
        self.submit_login();
    }

    fn submit_login(&mut self) {
        let form = &mut self.state.login;
        let creds = match session::validate(&form.host, &form.username, &form.password) {
            Ok(creds) => creds,
            Err(e) => {
                form.error = Some(e.to_string());
                return;
            }
        };
        form.error = None;
        form.busy = true;

        let xtream_cfg = self.cfg.xtream.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = session::authenticate(creds, &xtream_cfg).await;
            let _ = tx.send(Event::Network(NetworkEvent::Login { result })).await;
        });
    }

    fn on_logged_in(&mut self, session: Session) {
        if let Err(e) =
            session::remember_after_login(&self.store, session.credentials(), self.state.login.remember)
        {
            tracing::warn!("credentials not saved: {e:#}");
            self.state.toast = Some(Toast::error("Could not save credentials"));
        }

        self.state.account = Some(session.account_summary());
        self.session = Some(session);
        self.state.screen = Screen::Browse;
        self.state.focus = BrowseFocus::Items;
        self.state.search_input.clear();

        let section = self
            .cfg
            .ui
            .last_section
            .as_deref()
            .and_then(|s| s.parse::<Section>().ok())
            .unwrap_or(Section::Live);
        let fetch = self.browser.start(section);
        self.spawn_fetch(fetch);
    }

    /// Ends the session. Stored credentials go too unless "remember" is set;
    /// favorites always stay.
    fn logout(&mut self) {
        self.player.stop();
        self.search.cancel();
        self.session = None;
        self.browser.reset();

        let remember = self.state.login.remember;
        match session::forget_on_logout(&self.store, remember) {
            Ok(true) => tracing::info!("stored credentials removed"),
            Ok(false) => {}
            Err(e) => tracing::warn!("stored credentials not removed: {e:#}"),
        }
        self.state.to_login(remember);
        tracing::info!("logged out");
    }

    fn spawn_fetch(&self, fetch: Fetch) {
        let Some(session) = &self.session else {
            return;
        };
        tracing::debug!(ticket = fetch.ticket, kind = ?fetch.kind, "fetch issued");
        let client = session.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = browse::execute(&client, &fetch).await;
            let _ = tx
                .send(Event::Network(NetworkEvent::Fetched {
                    ticket: fetch.ticket,
                    result,
                }))
                .await;
        });
    }

    fn select_section(&mut self, section: Section) {
        if let Some(fetch) = self.browser.select_section(section) {
            self.clear_search_input();
            self.state.focus = BrowseFocus::Items;
            self.spawn_fetch(fetch);
        }
    }

    fn select_category(&mut self, key: CategoryKey) {
        self.clear_search_input();
        if let Some(fetch) = self.browser.select_category(key) {
            self.spawn_fetch(fetch);
        }
    }

    fn clear_search_input(&mut self) {
        self.search.cancel();
        self.state.search_input.clear();
    }

    fn schedule_search(&mut self) {
        self.search
            .schedule(self.tx.clone(), |generation| Event::SearchTick { generation });
    }

    async fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::Resize => {}
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,

            Action::LoginNextField => self.state.login.focus = self.state.login.focus.next(),
            Action::LoginPrevField => self.state.login.focus = self.state.login.focus.prev(),
            Action::ToggleRemember => self.state.login.remember = !self.state.login.remember,
            Action::SubmitLogin => self.submit_login(),

            Action::InputChar(c) => match self.state.screen {
                Screen::Login => {
                    if let Some(field) = self.state.login.field_mut() {
                        field.push(c);
                    }
                }
                _ => {
                    self.state.search_input.push(c);
                    self.schedule_search();
                }
            },
            Action::Backspace => match self.state.screen {
                Screen::Login => {
                    if let Some(field) = self.state.login.field_mut() {
                        field.pop();
                    }
                }
                _ => {
                    self.state.search_input.pop();
                    self.schedule_search();
                }
            },
            Action::ClearInput => match self.state.screen {
                Screen::Login => {
                    if let Some(field) = self.state.login.field_mut() {
                        field.clear();
                    }
                }
                _ => {
                    self.state.search_input.clear();
                    self.schedule_search();
                }
            },

            Action::SelectSection(section) => self.select_section(section),
            Action::NextSection => {
                let next = self.browser.section().map(Section::next).unwrap_or(Section::Live);
                self.select_section(next);
            }
            Action::PrevSection => {
                let prev = self.browser.section().map(Section::prev).unwrap_or(Section::Live);
                self.select_section(prev);
            }
            Action::SetFocus(focus) => {
                // Leaving the search box applies the query at once.
                if self.state.focus == BrowseFocus::Search && focus != BrowseFocus::Search {
                    self.search.cancel();
                    self.browser.search(&self.state.search_input);
                }
                self.state.focus = focus;
            }
            Action::ListUp => self.move_cursor(-1),
            Action::ListDown => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-PAGE),
            Action::PageDown => self.move_cursor(PAGE),
            Action::GoTop => self.move_cursor(isize::MIN),
            Action::GoBottom => self.move_cursor(isize::MAX),
            Action::Activate => match self.state.focus {
                BrowseFocus::Categories => {
                    if let Some(key) = self.browser.cursor_category() {
                        self.select_category(key);
                        self.state.focus = BrowseFocus::Items;
                    }
                }
                _ => self.play_selected().await,
            },
            Action::ToggleFavorite => self.toggle_favorite(),
            Action::Refresh => {
                let key = self.browser.category().clone();
                self.select_category(key);
            }
            Action::Logout => self.logout(),

            Action::TogglePause => match self.player.toggle_pause().await {
                Ok(paused) => {
                    let text = if paused { Feedback::PAUSE } else { Feedback::PLAY };
                    self.state.feedback = Some(Feedback::new(text));
                }
                Err(e) => tracing::warn!("pause failed: {e:#}"),
            },
            Action::SeekForward => self.seek(SEEK_STEP_SECS, Feedback::FORWARD).await,
            Action::SeekBack => self.seek(-SEEK_STEP_SECS, Feedback::BACK).await,
            Action::ToggleFullscreen => {
                if let Err(e) = self.player.toggle_fullscreen().await {
                    tracing::warn!("fullscreen toggle failed: {e:#}");
                }
            }
            Action::ClosePlayer => {
                self.player.stop();
                self.state.feedback = None;
                self.state.screen = Screen::Browse;
            }
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.state.focus {
            BrowseFocus::Categories => self.browser.move_category_cursor(delta),
            _ => self.browser.move_item_cursor(delta),
        }
    }

    async fn seek(&mut self, seconds: f64, feedback: &'static str) {
        match self.player.seek(seconds).await {
            Ok(()) => self.state.feedback = Some(Feedback::new(feedback)),
            Err(e) => tracing::warn!("seek failed: {e:#}"),
        }
    }

    async fn play_selected(&mut self) {
        let (Some(section), Some(item)) = (self.browser.section(), self.browser.selected_item().cloned()) else {
            return;
        };
        let Some(session) = &self.session else {
            return;
        };
        let Some(url) = urls::stream_url(session.credentials(), section, &item) else {
            self.state.toast = Some(Toast::info(SERIES_NOT_PLAYABLE));
            return;
        };

        self.state.screen = Screen::Player;
        self.state.feedback = None;
        if let Err(e) = self.player.play(NowPlaying { section, item }, &url).await {
            tracing::error!("could not start player: {e:#}");
            self.player.stop();
            self.state.toast = Some(Toast::error(STREAM_FAILED));
            self.state.screen = Screen::Browse;
        }
    }

    fn toggle_favorite(&mut self) {
        let target = match self.state.screen {
            Screen::Player => self.player.current().map(|n| (n.section, n.item.id)),
            _ => self
                .browser
                .section()
                .zip(self.browser.selected_item().map(|i| i.id)),
        };
        let Some((section, id)) = target else {
            return;
        };

        match self.browser.toggle_favorite(section, id) {
            Ok(added) => {
                if self.state.screen == Screen::Player {
                    let text = if added { Feedback::FAVORITE_ADDED } else { Feedback::FAVORITE_REMOVED };
                    self.state.feedback = Some(Feedback::new(text));
                } else {
                    let msg = if added { "Added to favorites" } else { "Removed from favorites" };
                    self.state.toast = Some(Toast::info(msg));
                }
            }
            Err(e) => {
                tracing::error!("favorite not saved: {e:#}");
                self.state.toast = Some(Toast::error("Could not save favorites"));
            }
        }
    }

    fn handle_player(&mut self, token: u64, event: EngineEvent) {
        match self.player.on_event(token, event) {
            Transition::Ignored | Transition::Updated => {}
            Transition::Ended => {
                if self.state.screen == Screen::Player {
                    self.state.screen = Screen::Browse;
                    self.state.feedback = None;
                    self.state.toast = Some(Toast::info("Playback ended"));
                }
            }
            Transition::Failed(message) => {
                self.player.stop();
                self.state.feedback = None;
                self.state.toast = Some(Toast::error(message));
                self.state.screen = Screen::Browse;
            }
        }
    }

    fn handle_network(&mut self, ne: NetworkEvent) {
        match ne {
            NetworkEvent::Login { result } => {
                self.state.login.busy = false;
                match result {
                    Ok(session) => self.on_logged_in(session),
                    Err(e) => self.state.login.error = Some(e.to_string()),
                }
            }
            NetworkEvent::Fetched { ticket, result } => match self.browser.complete(ticket, result) {
                Progress::Next(fetch) => self.spawn_fetch(fetch),
                Progress::Done | Progress::Stale => {}
                Progress::Failed { message, fatal: true } => {
                    self.logout();
                    self.state.login.error = Some(message);
                }
                Progress::Failed { message, fatal: false } => {
                    self.state.toast = Some(Toast::error(message));
                }
            },
        }
    }
}

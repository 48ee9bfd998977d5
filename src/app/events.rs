use crate::browse::Fetched;
use crate::player::EngineEvent;
use crate::session::{LoginError, Session};

#[derive(Debug)]
pub enum Event {
    Input(InputEvent),
    /// Tagged with the launch token of the engine that produced it.
    Player { token: u64, event: EngineEvent },
    Network(NetworkEvent),
    SearchTick { generation: u64 },
    /// Redraw request, used to clear expired overlays.
    Redraw,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug)]
pub enum NetworkEvent {
    Login { result: Result<Session, LoginError> },
    Fetched { ticket: u64, result: anyhow::Result<Fetched> },
}

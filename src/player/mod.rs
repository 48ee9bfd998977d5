//! Playback session: owns at most one media engine handle at a time.

pub mod mpv;

use crate::xtream::models::{ContentItem, Section};
use std::future::Future;

pub const SEEK_STEP_SECS: f64 = 10.0;
pub const STREAM_FAILED: &str = "Could not load the stream.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Loading,
    Playing,
    /// Engine failed; the handle is already released. `stop()` returns to Idle.
    Error,
}

/// What an engine reports back, tagged by the app with the launch token.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Loaded,
    Paused(bool),
    Ended,
    Fatal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Ignored,
    Updated,
    Ended,
    Failed(String),
}

pub trait MediaEngine {
    fn toggle_pause(&self) -> impl Future<Output = anyhow::Result<()>>;
    fn seek_relative(&self, seconds: f64) -> impl Future<Output = anyhow::Result<()>>;
    fn toggle_fullscreen(&self) -> impl Future<Output = anyhow::Result<()>>;
}

/// Starts a fresh engine for one URL. Dropping the engine releases it.
pub trait EngineLauncher {
    type Engine: MediaEngine;

    fn launch(&self, url: &str, token: u64) -> impl Future<Output = anyhow::Result<Self::Engine>>;
}

#[derive(Debug, Clone)]
pub struct NowPlaying {
    pub section: Section,
    pub item: ContentItem,
}

pub struct PlaybackSession<L: EngineLauncher> {
    launcher: L,
    engine: Option<L::Engine>,
    state: PlayState,
    current: Option<NowPlaying>,
    token: u64,
    paused: bool,
}

impl<L: EngineLauncher> PlaybackSession<L> {
    pub fn new(launcher: L) -> Self {
        Self {
            launcher,
            engine: None,
            state: PlayState::Idle,
            current: None,
            token: 0,
            paused: false,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn current(&self) -> Option<&NowPlaying> {
        self.current.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Tears down whatever is playing, then launches a new engine for `url`.
    pub async fn play(&mut self, now: NowPlaying, url: &str) -> anyhow::Result<()> {
        self.stop();
        self.token += 1;
        self.state = PlayState::Loading;
        tracing::info!(token = self.token, id = now.item.id, "starting playback");
        self.current = Some(now);

        match self.launcher.launch(url, self.token).await {
            Ok(engine) => {
                self.engine = Some(engine);
                Ok(())
            }
            Err(e) => {
                self.fail(&format!("{e:#}"));
                Err(e)
            }
        }
    }

    pub fn on_event(&mut self, token: u64, event: EngineEvent) -> Transition {
        if token != self.token || self.engine.is_none() {
            tracing::debug!(token, current = self.token, "ignoring engine event");
            return Transition::Ignored;
        }
        match event {
            EngineEvent::Loaded => {
                self.state = PlayState::Playing;
                Transition::Updated
            }
            EngineEvent::Paused(paused) => {
                self.paused = paused;
                Transition::Updated
            }
            EngineEvent::Ended => {
                self.stop();
                Transition::Ended
            }
            EngineEvent::Fatal(reason) => {
                self.fail(&reason);
                Transition::Failed(STREAM_FAILED.to_string())
            }
        }
    }

    fn fail(&mut self, reason: &str) {
        tracing::error!(token = self.token, "playback failed: {reason}");
        self.engine = None;
        self.current = None;
        self.paused = false;
        self.state = PlayState::Error;
    }

    /// Safe to call in any state.
    pub fn stop(&mut self) {
        if self.engine.take().is_some() {
            tracing::info!(token = self.token, "playback stopped");
        }
        self.current = None;
        self.paused = false;
        self.state = PlayState::Idle;
    }

    /// Returns the pause state the engine is expected to reach.
    pub async fn toggle_pause(&mut self) -> anyhow::Result<bool> {
        let Some(engine) = &self.engine else {
            return Ok(self.paused);
        };
        engine.toggle_pause().await?;
        self.paused = !self.paused;
        Ok(self.paused)
    }

    pub async fn seek(&self, seconds: f64) -> anyhow::Result<()> {
        match &self.engine {
            Some(engine) => engine.seek_relative(seconds).await,
            None => Ok(()),
        }
    }

    pub async fn toggle_fullscreen(&self) -> anyhow::Result<()> {
        match &self.engine {
            Some(engine) => engine.toggle_fullscreen().await,
            None => Ok(()),
        }
    }
}

use super::{Config, PathsConfig, PlayerConfig, UiConfig, XtreamConfig};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const TIMEOUT_SECS: u64 = 30;
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

pub fn data_dir() -> PathBuf {
    ProjectDirs::from("dev", "telly", "telly")
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("telly"))
}

pub fn user_agent() -> String {
    format!("telly/{}", env!("CARGO_PKG_VERSION"))
}

pub fn defaults() -> Config {
    Config {
        paths: PathsConfig::default(),
        xtream: XtreamConfig::default(),
        player: PlayerConfig::default(),
        ui: UiConfig::default(),
    }
}

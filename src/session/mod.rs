//! Login, logout and the authenticated session.
//!
//! Saved credentials follow a single rule: they are written on a successful
//! login with "remember" set, and removed only on a logout (explicit, or
//! forced by a failed first load) with "remember" unset. A login without
//! "remember" leaves any saved document untouched.

use crate::config::XtreamConfig;
use crate::storage::Storage;
use crate::xtream::api::XtreamClient;
use crate::xtream::models::UserInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(host: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Host without trailing slashes, ready to have a path appended.
    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid username or password.")]
    Rejected,
    #[error("Login failed. Check the host and credentials.")]
    Transport(String),
}

/// Trims the three fields and refuses empty ones before any network call.
pub fn validate(host: &str, username: &str, password: &str) -> Result<Credentials, LoginError> {
    let (host, username, password) = (host.trim(), username.trim(), password.trim());
    if host.is_empty() || username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }
    Ok(Credentials::new(host, username, password))
}

#[derive(Debug, Clone)]
pub struct Session {
    pub client: XtreamClient,
    pub user: UserInfo,
}

impl Session {
    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    /// One-line account summary for the header.
    pub fn account_summary(&self) -> String {
        let mut parts = Vec::new();
        let name = self
            .user
            .username
            .as_deref()
            .unwrap_or(self.credentials().username.as_str());
        parts.push(name.to_string());
        if let Some(status) = self.user.status.as_deref() {
            parts.push(status.to_string());
        }
        parts.push(match self.user.exp_date.and_then(format_expiry) {
            Some(date) => format!("expires {date}"),
            None => "no expiry".to_string(),
        });
        if let Some(max) = self.user.max_connections.as_deref() {
            let active = self.user.active_cons.as_deref().unwrap_or("0");
            parts.push(format!("{active}/{max} connections"));
        }
        parts.join(" · ")
    }
}

fn format_expiry(unix: i64) -> Option<String> {
    if unix <= 0 {
        return None;
    }
    time::OffsetDateTime::from_unix_timestamp(unix)
        .ok()
        .map(|t| t.date().to_string())
}

pub async fn authenticate(creds: Credentials, cfg: &XtreamConfig) -> Result<Session, LoginError> {
    let client =
        XtreamClient::new(creds, cfg).map_err(|e| LoginError::Transport(format!("{e:#}")))?;
    let user = client.authenticate().await.map_err(|e| {
        tracing::error!("login failed: {e:#}");
        LoginError::Transport(format!("{e:#}"))
    })?;
    if !user.auth {
        tracing::info!("server rejected credentials");
        return Err(LoginError::Rejected);
    }
    tracing::info!(host = client.credentials().base_url(), "logged in");
    Ok(Session { client, user })
}

pub fn remember_after_login(store: &Storage, creds: &Credentials, remember: bool) -> anyhow::Result<()> {
    if remember {
        store.save_credentials(creds)?;
    }
    Ok(())
}

/// Returns whether the saved credentials were removed.
pub fn forget_on_logout(store: &Storage, remember: bool) -> anyhow::Result<bool> {
    if remember {
        return Ok(false);
    }
    store.clear_credentials()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_and_rejects_empty() {
        let c = validate(" http://srv:80 ", " u ", "p").unwrap();
        assert_eq!(c, Credentials::new("http://srv:80", "u", "p"));
        assert!(matches!(validate("", "u", "p"), Err(LoginError::MissingFields)));
        assert!(matches!(validate("h", "   ", "p"), Err(LoginError::MissingFields)));
        assert!(matches!(validate("h", "u", ""), Err(LoginError::MissingFields)));
    }

    #[test]
    fn test_base_url_trims_slashes() {
        assert_eq!(Credentials::new("http://srv//", "u", "p").base_url(), "http://srv");
    }

    #[test]
    fn test_login_without_remember_keeps_saved_document() {
        let store = Storage::open_in_memory().unwrap();
        let saved = Credentials::new("http://old", "a", "b");
        store.save_credentials(&saved).unwrap();

        remember_after_login(&store, &Credentials::new("http://new", "u", "p"), false).unwrap();
        assert_eq!(store.load_credentials().unwrap(), Some(saved));
    }

    #[test]
    fn test_login_with_remember_overwrites() {
        let store = Storage::open_in_memory().unwrap();
        let creds = Credentials::new("http://srv:80", "u", "p");
        remember_after_login(&store, &creds, true).unwrap();
        assert_eq!(store.load_credentials().unwrap(), Some(creds));
    }

    #[test]
    fn test_logout_clears_only_without_remember() {
        let store = Storage::open_in_memory().unwrap();
        let creds = Credentials::new("http://srv:80", "u", "p");
        store.save_credentials(&creds).unwrap();

        assert!(!forget_on_logout(&store, true).unwrap());
        assert!(store.load_credentials().unwrap().is_some());

        assert!(forget_on_logout(&store, false).unwrap());
        assert!(store.load_credentials().unwrap().is_none());
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry(0), None);
        assert_eq!(format_expiry(1_735_689_600).as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn test_login_error_messages() {
        assert_eq!(LoginError::MissingFields.to_string(), "All fields are required.");
        assert_eq!(
            LoginError::Transport("boom".into()).to_string(),
            "Login failed. Check the host and credentials."
        );
    }
}

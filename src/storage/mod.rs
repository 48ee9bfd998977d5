use crate::session::Credentials;
use anyhow::Context;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// Key of the saved-login document.
pub const CREDENTIALS_KEY: &str = "iptv_credentials";
/// Key of the favorites document.
pub const FAVORITES_KEY: &str = "iptv_favorites";

/// Whole-document key-value persistence. Every write replaces the document.
pub trait DocumentStore {
    fn get_document(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn put_document(&self, key: &str, json: &str) -> anyhow::Result<()>;
    fn delete_document(&self, key: &str) -> anyhow::Result<()>;
}

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory store")?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS documents (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL,
  updated_at INTEGER NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }

    pub fn load_credentials(&self) -> anyhow::Result<Option<Credentials>> {
        let Some(raw) = self.get_document(CREDENTIALS_KEY)? else {
            return Ok(None);
        };
        let creds = serde_json::from_str::<Credentials>(&raw).context("parse saved credentials")?;
        Ok(Some(creds))
    }

    /// Stored verbatim, password included.
    pub fn save_credentials(&self, creds: &Credentials) -> anyhow::Result<()> {
        let raw = serde_json::to_string(creds).context("encode credentials")?;
        self.put_document(CREDENTIALS_KEY, &raw)
    }

    pub fn clear_credentials(&self) -> anyhow::Result<()> {
        self.delete_document(CREDENTIALS_KEY)
    }
}

impl DocumentStore for Storage {
    fn get_document(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM documents WHERE key=?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .with_context(|| format!("read document {key}"))
    }

    fn put_document(&self, key: &str, json: &str) -> anyhow::Result<()> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        self.conn
            .execute(
                r#"
INSERT INTO documents(key, value, updated_at)
VALUES(?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET
  value=excluded.value,
  updated_at=excluded.updated_at
"#,
                params![key, json, now],
            )
            .with_context(|| format!("write document {key}"))?;
        Ok(())
    }

    fn delete_document(&self, key: &str) -> anyhow::Result<()> {
        self.conn
            .execute("DELETE FROM documents WHERE key=?1", params![key])
            .with_context(|| format!("delete document {key}"))?;
        Ok(())
    }
}

use crate::app::events::Event;
use crate::config::PlayerConfig;
use crate::player::{EngineEvent, EngineLauncher, MediaEngine};
use anyhow::Context;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::UnixStream,
    process::{Child, Command},
    sync::mpsc,
};

const LOAD_REQUEST_ID: u64 = 1;

/// Spawns one mpv process per play request.
pub struct MpvLauncher {
    cfg: PlayerConfig,
    log_file: Option<PathBuf>,
    event_tx: mpsc::Sender<Event>,
}

impl MpvLauncher {
    pub fn new(cfg: PlayerConfig, log_file: Option<PathBuf>, event_tx: mpsc::Sender<Event>) -> Self {
        Self {
            cfg,
            log_file,
            event_tx,
        }
    }
}

impl EngineLauncher for MpvLauncher {
    type Engine = MpvHandle;

    async fn launch(&self, url: &str, token: u64) -> anyhow::Result<MpvHandle> {
        let handle = MpvHandle::spawn(&self.cfg, self.log_file.as_deref(), token, self.event_tx.clone()).await?;
        handle.load_url(url).await?;
        Ok(handle)
    }
}

#[derive(Debug)]
pub struct MpvHandle {
    child: Child,
    socket_path: PathBuf,
    writer: tokio::sync::Mutex<tokio::io::WriteHalf<UnixStream>>,
    request_id: AtomicU64,
}

impl MpvHandle {
    async fn spawn(
        cfg: &PlayerConfig,
        log_file: Option<&Path>,
        token: u64,
        event_tx: mpsc::Sender<Event>,
    ) -> anyhow::Result<Self> {
        let socket_path =
            std::env::temp_dir().join(format!("telly-mpv-{}-{token}.sock", std::process::id()));
        let _ = std::fs::remove_file(&socket_path);

        let mut cmd = Command::new(&cfg.mpv_path);
        cmd.args([
            "--idle=yes",
            "--force-window=immediate",
            "--input-terminal=no",
            "--really-quiet",
            "--title=telly",
        ]);
        if cfg.start_fullscreen {
            cmd.arg("--fs");
        }
        if let Some(p) = log_file {
            cmd.arg(format!("--log-file={}", p.display()));
        }
        cmd.args(&cfg.extra_args);
        let child = cmd
            .arg(format!("--input-ipc-server={}", socket_path.display()))
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("spawn {}", cfg.mpv_path))?;

        let stream = connect_with_retry(&socket_path).await?;
        let (reader, writer) = tokio::io::split(stream);

        tokio::spawn(read_events_loop(reader, token, event_tx));

        let this = Self {
            child,
            socket_path,
            writer: tokio::sync::Mutex::new(writer),
            request_id: AtomicU64::new(LOAD_REQUEST_ID + 1),
        };
        this.command(json!({"command":["request_log_messages", "warn"]}))
            .await?;
        this.command(json!({"command":["observe_property", 1, "pause"]}))
            .await?;
        Ok(this)
    }

    async fn load_url(&self, url: &str) -> anyhow::Result<()> {
        tracing::debug!("mpv loadfile");
        self.command(json!({"command":["loadfile", url, "replace"], "request_id": LOAD_REQUEST_ID}))
            .await
    }

    async fn command(&self, mut v: Value) -> anyhow::Result<()> {
        if v.get("request_id").is_none() {
            let id = self.request_id.fetch_add(1, Ordering::Relaxed);
            if let Value::Object(ref mut o) = v {
                o.insert("request_id".to_string(), Value::from(id));
            }
        }
        let mut w = self.writer.lock().await;
        let mut line = serde_json::to_vec(&v).context("encode mpv json")?;
        line.push(b'\n');
        w.write_all(&line).await.context("write mpv ipc")?;
        w.flush().await.context("flush mpv ipc")?;
        Ok(())
    }
}

impl MediaEngine for MpvHandle {
    async fn toggle_pause(&self) -> anyhow::Result<()> {
        self.command(json!({"command":["cycle", "pause"]})).await
    }

    async fn seek_relative(&self, seconds: f64) -> anyhow::Result<()> {
        self.command(json!({"command":["seek", seconds, "relative"]}))
            .await
    }

    async fn toggle_fullscreen(&self) -> anyhow::Result<()> {
        self.command(json!({"command":["cycle", "fullscreen"]})).await
    }
}

impl Drop for MpvHandle {
    fn drop(&mut self) {
        let _ = self.child.start_kill();
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

async fn connect_with_retry(path: &Path) -> anyhow::Result<UnixStream> {
    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(5);
    loop {
        match UnixStream::connect(path).await {
            Ok(s) => return Ok(s),
            Err(e) => {
                if tokio::time::Instant::now() > deadline {
                    return Err(e).with_context(|| format!("connect to mpv ipc {}", path.display()));
                }
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            }
        }
    }
}

async fn read_events_loop(reader: tokio::io::ReadHalf<UnixStream>, token: u64, event_tx: mpsc::Sender<Event>) {
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let Ok(v) = serde_json::from_str::<Value>(&line) else {
            continue;
        };
        if let Some(event) = map_mpv_message(&v) {
            let _ = event_tx.send(Event::Player { token, event }).await;
        }
    }
    // Socket closed: mpv exited, either killed by us or closed by the user.
    let _ = event_tx
        .send(Event::Player {
            token,
            event: EngineEvent::Ended,
        })
        .await;
}

fn map_mpv_message(v: &Value) -> Option<EngineEvent> {
    // Command replies: {"request_id":..,"error":".."}
    if let Some(err) = v.get("error").and_then(Value::as_str)
        && err != "success"
    {
        let rid = v.get("request_id").and_then(Value::as_u64);
        if rid == Some(LOAD_REQUEST_ID) {
            return Some(EngineEvent::Fatal(format!("loadfile: {err}")));
        }
        tracing::warn!(request_id = rid, "mpv command failed: {err}");
        return None;
    }

    match v.get("event")?.as_str()? {
        "file-loaded" | "playback-restart" => Some(EngineEvent::Loaded),
        "property-change" if v.get("name")?.as_str()? == "pause" => {
            Some(EngineEvent::Paused(v.get("data")?.as_bool().unwrap_or(false)))
        }
        "end-file" => match v.get("reason").and_then(Value::as_str).unwrap_or("") {
            "error" => {
                let err = v.get("file_error").or_else(|| v.get("error"));
                let err = err.and_then(Value::as_str).unwrap_or("unknown");
                Some(EngineEvent::Fatal(format!("end-file: {err}")))
            }
            "eof" => Some(EngineEvent::Ended),
            _ => None,
        },
        "log-message" => {
            let level = v.get("level")?.as_str().unwrap_or("info");
            let text = v.get("text")?.as_str().unwrap_or("").trim();
            if !text.is_empty() {
                tracing::warn!(target: "mpv", "{level}: {text}");
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_loaded_events() {
        assert_eq!(map_mpv_message(&json!({"event":"file-loaded"})), Some(EngineEvent::Loaded));
        assert_eq!(
            map_mpv_message(&json!({"event":"playback-restart"})),
            Some(EngineEvent::Loaded)
        );
    }

    #[test]
    fn test_map_pause_property() {
        let v = json!({"event":"property-change","id":1,"name":"pause","data":true});
        assert_eq!(map_mpv_message(&v), Some(EngineEvent::Paused(true)));
    }

    #[test]
    fn test_end_file_error_is_fatal() {
        let v = json!({"event":"end-file","reason":"error","file_error":"loading failed"});
        assert_eq!(
            map_mpv_message(&v),
            Some(EngineEvent::Fatal("end-file: loading failed".into()))
        );
        assert_eq!(
            map_mpv_message(&json!({"event":"end-file","reason":"eof"})),
            Some(EngineEvent::Ended)
        );
        assert_eq!(map_mpv_message(&json!({"event":"end-file","reason":"stop"})), None);
    }

    #[test]
    fn test_only_loadfile_reply_errors_are_fatal() {
        let load = json!({"request_id": LOAD_REQUEST_ID, "error":"invalid parameter"});
        assert!(matches!(map_mpv_message(&load), Some(EngineEvent::Fatal(_))));

        let seek = json!({"request_id": 7, "error":"error running command"});
        assert_eq!(map_mpv_message(&seek), None);

        let ok = json!({"request_id": LOAD_REQUEST_ID, "error":"success"});
        assert_eq!(map_mpv_message(&ok), None);
    }
}

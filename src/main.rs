mod app;
mod browse;
mod config;
mod favorites;
mod input;
mod player;
mod session;
mod storage;
mod tui;
mod xtream;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::rc::Rc;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use xtream::Catalog;
use xtream::models::Section;

#[derive(Debug, Parser)]
#[command(name = "telly", version, about = "Terminal IPTV client for Xtream-Codes servers")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print the categories of a section (live, movie, series) using the saved login.
    Categories { section: String },
    /// Print the items of a section using the saved login.
    Items {
        section: String,
        /// Only items of this category id.
        #[arg(long)]
        category: Option<String>,
    },
    /// Print saved favorite ids.
    Favorites { section: Option<String> },
    /// Forget the saved login.
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);
    init_logging(&cfg, matches!(command, Command::Tui))?;

    let store = Rc::new(storage::Storage::open(&cfg.store_path()).context("open store")?);

    match command {
        Command::Tui => {
            tracing::info!("starting");
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg, cli.config, store);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Categories { section } => {
            let section: Section = section.parse()?;
            let session = saved_session(&cfg, &store).await?;
            let categories = session.client.list_categories(section).await?;
            for c in &categories {
                println!("{:>8}  {}", c.id, c.name);
            }
        }
        Command::Items { section, category } => {
            let section: Section = section.parse()?;
            let session = saved_session(&cfg, &store).await?;
            let items = session.client.list_items(section, category.as_deref()).await?;
            print_items(&items);
        }
        Command::Favorites { section } => {
            let sections = match section {
                Some(s) => vec![s.parse::<Section>()?],
                None => Section::ALL.to_vec(),
            };
            let favorites = favorites::FavoritesIndex::load(store.clone());
            for section in sections {
                let ids: Vec<String> = favorites.ids(section).iter().map(u64::to_string).collect();
                println!("{}: {}", section.label(), ids.join(", "));
            }
        }
        Command::Logout => {
            store.clear_credentials().context("clear saved login")?;
            println!("Saved login removed.");
        }
    }

    Ok(())
}

/// TUI mode writes to `<data_dir>/telly.log` so the terminal stays clean.
fn init_logging(cfg: &config::Config, to_file: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if to_file {
        let path = cfg.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
    Ok(())
}

async fn saved_session(cfg: &config::Config, store: &storage::Storage) -> anyhow::Result<session::Session> {
    let creds = store
        .load_credentials()?
        .context("no saved login; log in from the TUI with \"Remember me\" checked")?;
    let session = session::authenticate(creds, &cfg.xtream).await?;
    eprintln!("{}", session.account_summary());
    Ok(session)
}

fn print_items(items: &[xtream::models::ContentItem]) {
    for (i, item) in items.iter().enumerate() {
        println!(
            "{:04}. {}  (id={})",
            i + 1,
            item.name().unwrap_or(tui::view::UNTITLED),
            item.id
        );
    }
}

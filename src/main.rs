//! devlist - local-first task board for the terminal
//!
//! Tasks move through three fixed categories and show up on a calendar by
//! due date. State persists to slot files under the platform data
//! directory.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devlist::config::Config;
use devlist::profile::ProfileStore;
use devlist::storage::Storage;
use devlist::task::TaskStore;
use devlist::ui::board;

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(err) = run() {
        eprintln!("devlist: {err}");
        std::process::exit(1);
    }
}

fn run() -> devlist::Result<()> {
    let config = Config::load_default();
    let storage = match &config.storage.dir {
        Some(dir) => Storage::new(dir.clone()),
        None => Storage::open_default()?,
    };

    let tasks = TaskStore::new(storage.clone());
    let profile = ProfileStore::new(storage);
    board::run(config, tasks, profile)
}

//! Copilot Inbox headless client
//!
//! Reads UI commands from stdin, one per line, and prints view snapshots as
//! JSON on `show`. Logs go to stderr.

use anyhow::Context;
use copilot_inbox_core::storage::load_inbox_settings;
use copilot_inbox_core::{completion_channel, SqlitePreferences, Storage};
use copilot_inbox_ui::controller::{ControllerDeps, LayoutController};
use copilot_inbox_ui::driver::{read_commands, run_event_loop};
use copilot_inbox_ui::theme::layout::DEFAULT_VIEWPORT_WIDTH;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn data_dir() -> Option<PathBuf> {
    std::env::var_os("COPILOT_INBOX_DATA_DIR")
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|dir| dir.join("copilot-inbox")))
}

/// Open the on-disk database, or an in-memory one if that fails
fn open_storage() -> anyhow::Result<Storage> {
    if let Some(dir) = data_dir() {
        match Storage::new_with_path(&dir) {
            Ok(storage) => {
                info!("Using database at {:?}", storage.db_path());
                return Ok(storage);
            }
            Err(e) => warn!("Cannot open database in {:?}: {}", dir, e),
        }
    }
    warn!("Preferences will not persist across sessions");
    Storage::in_memory().context("failed to open in-memory database")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Copilot Inbox v{}", env!("CARGO_PKG_VERSION"));

    let storage = Arc::new(open_storage()?);
    let settings = {
        let conn = storage.connection()?;
        load_inbox_settings(&conn)?
    };

    let viewport_width = std::env::var("COPILOT_INBOX_VIEWPORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH);

    let (completion_tx, completion_rx) = completion_channel();
    let deps = ControllerDeps::simulated(settings, Arc::new(SqlitePreferences::new(storage)));
    let controller = LayoutController::load(deps, viewport_width, completion_tx);

    let (command_tx, command_rx) = mpsc::channel(64);
    let (snapshot_tx, mut snapshot_rx) = mpsc::channel(8);

    tokio::spawn(read_commands(BufReader::new(tokio::io::stdin()), command_tx));

    let printer = tokio::spawn(async move {
        while let Some(snapshot) = snapshot_rx.recv().await {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{}", json),
                Err(e) => warn!("Failed to serialize snapshot: {}", e),
            }
        }
    });

    run_event_loop(controller, command_rx, completion_rx, snapshot_tx).await;
    printer.await?;

    info!("Goodbye");
    Ok(())
}

pub mod app;
pub mod cli;
pub mod db;
pub mod records;
pub mod settings;
pub mod storage;
pub mod timer;
pub mod ui;
mod utils;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tokio::time::Duration;

use app::{Outcome, StopwatchApp};
use cli::Args;
use db::Database;
use records::RecordStore;
use settings::Settings;
use storage::{MemoryStorage, Storage};
use timer::{MonotonicClock, StopwatchController};
use ui::{command::HELP, Display, TerminalDisplay, TerminalUi};

pub use utils::logging::init as init_logging;

pub fn run() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (RUST_LOG still wins over the flag)
    init_logging(args.verbose);

    log::info!("lapwatch starting up...");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(start(args))
}

/// Settings for this run. Ephemeral runs read an existing file but never
/// write one.
fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = if args.ephemeral {
        match args.resolved_settings_path() {
            Ok(path) => Settings::load(&path)?,
            Err(_) => Settings::default(),
        }
    } else {
        Settings::load_or_init(&args.resolved_settings_path()?)?
    };

    if let Some(tick_ms) = args.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }
    Ok(settings)
}

async fn start(args: Args) -> Result<()> {
    let settings = load_settings(&args)?;

    let display: Arc<dyn Display> = Arc::new(TerminalDisplay::new());
    let controller = StopwatchController::new(
        Arc::new(MonotonicClock::new()),
        display.clone(),
        Duration::from_millis(settings.tick_interval_ms()),
    );

    if args.ephemeral {
        info!("Saved times kept in memory only");
        let records = RecordStore::new(
            MemoryStorage::new(),
            settings.namespace.clone(),
            settings.records_key.clone(),
        );
        drive(StopwatchApp::new(controller, records, TerminalUi::new(), display)).await
    } else {
        let data_dir = args.resolved_data_dir()?;
        let database = Database::new(settings.database_path(&data_dir))?;
        let records = RecordStore::new(
            database,
            settings.namespace.clone(),
            settings.records_key.clone(),
        );
        drive(StopwatchApp::new(controller, records, TerminalUi::new(), display)).await
    }
}

async fn drive<S: Storage>(mut app: StopwatchApp<S, TerminalUi>) -> Result<()> {
    app.launch().await?;
    println!("\n{HELP}");

    while let Some(command) = app.prompt_mut().next_command().await? {
        match app.handle(command).await? {
            Outcome::Done => {}
            Outcome::Unavailable => println!("\nnot available right now"),
            Outcome::NoSuchRecord(position) => println!("no saved time #{position}"),
            Outcome::ShowHelp => println!("\n{HELP}"),
            Outcome::Quit => break,
        }
    }

    app.shutdown().await;
    info!("lapwatch shutting down");
    Ok(())
}

//! recordbot - WCA Live record announcement bot
//!
//! CLI entry point for running the poll loop and managing the daemon.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use recordbot::cli::{Cli, Command};
use recordbot::config::Config;
use recordbot::daemon::DaemonManager;
use recordbot::feed::WcaLiveClient;
use recordbot::publish::{NullPublisher, Publisher, TwitterClient};
use recordbot::watcher::RecordWatcher;
use snapstore::SnapStore;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recordbot")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("recordbot.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "recordbot loaded config: feed={}, poll_interval_secs={}",
        config.feed.base_url, config.watcher.poll_interval_secs
    );

    match cli.command {
        Some(Command::Start { foreground }) => cmd_start(&config, foreground).await,
        Some(Command::Stop) => cmd_stop(),
        Some(Command::Status) => cmd_status(&config),
        Some(Command::Once { dry_run }) => cmd_once(&config, dry_run).await,
        Some(Command::RunDaemon) => cmd_run_daemon(&config).await,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Build the watcher from config
///
/// A dry run swaps in the null publisher so no posting credentials are
/// needed to preview announcements.
fn build_watcher(config: &Config, dry_run: bool) -> Result<RecordWatcher> {
    let feed = Arc::new(WcaLiveClient::from_config(&config.feed)?);

    let publisher: Arc<dyn Publisher> = if dry_run {
        Arc::new(NullPublisher)
    } else {
        config.validate()?;
        Arc::new(TwitterClient::from_config(&config.twitter)?)
    };

    let store = SnapStore::open(config.storage.db_path())?;

    Ok(RecordWatcher::new(config.watcher.clone(), feed, publisher, store).dry_run(dry_run))
}

/// Start the bot
async fn cmd_start(config: &Config, foreground: bool) -> Result<()> {
    let daemon = DaemonManager::new();

    if daemon.is_running() {
        println!("recordbot is already running (PID: {})", daemon.running_pid().unwrap());
        return Ok(());
    }

    if foreground {
        println!("Starting recordbot in foreground mode...");
        let watcher = build_watcher(config, false)?;
        watcher.run().await
    } else {
        let pid = daemon.start()?;
        println!("recordbot started (PID: {})", pid);
        Ok(())
    }
}

/// Stop the running bot
fn cmd_stop() -> Result<()> {
    let daemon = DaemonManager::new();

    if !daemon.is_running() {
        println!("recordbot is not running");
        return Ok(());
    }

    daemon.stop()?;
    println!("recordbot stopped");
    Ok(())
}

/// Show bot status
fn cmd_status(config: &Config) -> Result<()> {
    let daemon = DaemonManager::new();

    match daemon.running_pid() {
        Some(pid) => println!("recordbot: {} (PID: {})", "running".green(), pid),
        None => println!("recordbot: {}", "stopped".red()),
    }

    let store = SnapStore::open(config.storage.db_path())?;
    match store.updated_at(&config.watcher.snapshot_name)? {
        Some(ts) => println!("last snapshot: {} ({} ms since epoch)", config.watcher.snapshot_name, ts),
        None => println!("last snapshot: none (first poll will seed silently)"),
    }

    Ok(())
}

/// Run a single poll cycle
async fn cmd_once(config: &Config, dry_run: bool) -> Result<()> {
    let watcher = build_watcher(config, dry_run)?;
    let announced = watcher.check_once().await?;

    if dry_run {
        println!("{} new record(s) found (dry run, nothing published)", announced);
    } else {
        println!("{} announcement(s) published", announced);
    }
    Ok(())
}

/// Run as the daemon process (spawned by `start`)
async fn cmd_run_daemon(config: &Config) -> Result<()> {
    let daemon = DaemonManager::new();
    daemon.register_self()?;

    let watcher = build_watcher(config, false)?;
    watcher.run().await
}

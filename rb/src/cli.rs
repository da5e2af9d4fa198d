//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recordbot - WCA Live record announcement bot
#[derive(Parser)]
#[command(
    name = "recordbot",
    about = "Polls the WCA Live recent-records feed and announces new records",
    version,
    after_help = "Logs are written to: ~/.local/share/recordbot/logs/recordbot.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Start the bot in the background
    Start {
        /// Don't fork to background (run in foreground)
        #[arg(long)]
        foreground: bool,
    },

    /// Stop the running bot
    Stop,

    /// Show bot status
    Status,

    /// Run a single poll cycle and exit
    Once {
        /// Log announcements instead of publishing, and persist nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Internal: Run as daemon process (used by `start`)
    #[command(hide = true)]
    RunDaemon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["rb"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_start() {
        let cli = Cli::parse_from(["rb", "start"]);
        assert!(matches!(cli.command, Some(Command::Start { foreground: false })));
    }

    #[test]
    fn test_cli_parse_start_foreground() {
        let cli = Cli::parse_from(["rb", "start", "--foreground"]);
        assert!(matches!(cli.command, Some(Command::Start { foreground: true })));
    }

    #[test]
    fn test_cli_parse_once_dry_run() {
        let cli = Cli::parse_from(["rb", "once", "--dry-run"]);
        assert!(matches!(cli.command, Some(Command::Once { dry_run: true })));
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["rb", "--config", "/tmp/rb.yml", "status"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/rb.yml")));
        assert!(matches!(cli.command, Some(Command::Status)));
    }
}

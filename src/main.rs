use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use config::Config;
use tasks::TaskList;
use tui::app::App;

mod config;
mod error;
mod logging;
mod tasks;
mod tui;

/// Terminal to-do list. Tasks live in memory for the length of the session.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file (default: <config dir>/smart-todo/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here instead of the configured location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// How long notifications stay visible, in milliseconds
    #[arg(long)]
    toast_ms: Option<u64>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(ms) = self.toast_ms {
            config.toast_duration_ms = ms;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    let log_file = logging::init(&config)?;
    info!(?log_file, toast_ms = config.toast_duration_ms, "starting");

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let app_result = App::new(TaskList::new(), config.toast_duration()).run(&mut terminal);
    ratatui::restore();
    info!("exiting");
    app_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["smart-todo", "--toast-ms", "250", "--log-file", "/tmp/x.log"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.toast_duration_ms, 250);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["smart-todo"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}

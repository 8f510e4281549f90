use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, APP_DIR};

fn log_path(config: &Config) -> Option<PathBuf> {
    config
        .log_file
        .clone()
        .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("smart-todo.log")))
}

/// Sends `tracing` output to the log file. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr. Returns the file in use, if any.
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    let Some(path) = log_path(config) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/todo.log")),
            ..Config::default()
        };
        assert_eq!(log_path(&config), Some(PathBuf::from("/tmp/todo.log")));
    }
}

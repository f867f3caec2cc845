//! Tracing subscriber setup.
//!
//! The fullscreen view owns stdout and stderr shares the same terminal, so in
//! that mode logs only go somewhere when a log file is given. Headless runs
//! log to stderr and keep stdout for the step trace.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Error, Result};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "warn";

/// Where log lines go when no file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Discard,
}

#[derive(Debug, Clone)]
/// Subscriber settings gathered from the command line.
pub struct LogOptions {
    /// `EnvFilter` directive, e.g. `heapviz=debug`.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub fallback: LogTarget,
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|e| Error::Logging(e.to_string()))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Call once, before the controller starts.
pub fn init(options: &LogOptions) -> Result<()> {
    let filter = build_filter(options.level.as_deref())?;

    let installed = match (&options.file, options.fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::Logging(format!("{}: {e}", path.display())))?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, LogTarget::Stderr) => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        (None, LogTarget::Discard) => return Ok(()),
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_filter() {
        assert!(build_filter(Some("heapviz=debug")).is_ok());
        assert!(build_filter(Some("heapviz=loudest")).is_err());
    }

    #[test]
    fn test_discard_installs_nothing() {
        let options = LogOptions {
            level: None,
            file: None,
            fallback: LogTarget::Discard,
        };
        assert!(init(&options).is_ok());
    }
}

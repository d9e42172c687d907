//! # Tracing Setup
//!
//! Installs a global `tracing` subscriber with a console layer and, when a log
//! directory is configured, a non-blocking file layer. Each run writes to a
//! fresh `{app}-{YYYYmmdd_HHMMSS}.log`; older files for the same app are
//! rotated away first, keeping only the most recent one.

use anyhow::Context;
use chrono::Local;
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Prefix of the log file names.
    pub app_name: String,
    /// Level name: trace, debug, info, warn, error or fatal. `RUST_LOG` takes precedence.
    pub log_level: String,
    /// Print to the terminal.
    pub use_tty: bool,
    /// Write to a file in this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            app_name: "polygon".to_string(),
            log_level: "info".to_string(),
            use_tty: true,
            log_dir: None,
        }
    }
}

/// Maps a level name onto an `EnvFilter` directive.
fn level_directive(log_level: &str) -> &'static str {
    match log_level.to_lowercase().as_str() {
        "trace" | "silly" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" | "fatal" => "error",
        _ => "info",
    }
}

/// Deletes all but the newest `{app_name}-*.log` in `log_dir`. Returns how many were removed.
///
/// File names embed a sortable timestamp, so name order is age order.
pub fn rotate_logs(app_name: &str, log_dir: &Path) -> anyhow::Result<usize> {
    let pattern = format!("{}/{}-*.log", log_dir.display(), app_name);
    let mut log_files: Vec<PathBuf> = glob(&pattern)
        .with_context(|| format!("invalid log rotation pattern {}", pattern))?
        .filter_map(Result::ok)
        .collect();

    // Newest first
    log_files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

    let mut removed = 0;
    for old_file in log_files.iter().skip(1) {
        match fs::remove_file(old_file) {
            Ok(()) => removed += 1,
            Err(e) => eprintln!("Error deleting old log file {}: {}", old_file.display(), e),
        }
    }
    Ok(removed)
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive for as long as file logging is needed;
/// dropping it flushes and stops the background writer.
pub fn init_logging(options: &LogOptions) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(&options.log_level)));

    let tty_layer = options.use_tty.then(|| fmt::layer().with_target(true));

    let (file_layer, guard) = match &options.log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            rotate_logs(&options.app_name, dir)?;

            let file_name = format!("{}-{}.log", options.app_name, Local::now().format("%Y%m%d_%H%M%S"));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tty_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rotation_keeps_only_the_newest_file_of_the_app() {
        let dir = tempdir().expect("Failed to create temporary directory");
        for name in [
            "quotes-20240101_090000.log",
            "quotes-20240102_090000.log",
            "quotes-20240103_090000.log",
            "other-20240101_090000.log",
        ] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let removed = rotate_logs("quotes", dir.path()).unwrap();

        let mut left: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();

        assert_eq!(removed, 2);
        assert_eq!(left, vec!["other-20240101_090000.log", "quotes-20240103_090000.log"]);
    }

    #[test]
    fn rotation_of_an_empty_directory_is_a_no_op() {
        let dir = tempdir().unwrap();
        assert_eq!(rotate_logs("quotes", dir.path()).unwrap(), 0);
    }

    #[test]
    fn level_names_map_onto_filter_directives() {
        assert_eq!(level_directive("FATAL"), "error");
        assert_eq!(level_directive("silly"), "trace");
        assert_eq!(level_directive("Debug"), "debug");
        assert_eq!(level_directive("bogus"), "info");
    }
}

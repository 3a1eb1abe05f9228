//! Application logging functionality
//!
//! Configures Bevy's log plugin and, when the user config directory exists,
//! mirrors log output into ~/.config/aligner/logs/.

use crate::core::config_file::ConfigFile;
use bevy::log::{BoxedLayer, Level, LogPlugin};
use bevy::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::Layer;

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// File name of today's log file
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    format!("aligner-{}.log", timestamp)
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Log filter for the given verbosity
pub fn log_filter(verbose: bool) -> String {
    let own_level = if verbose {
        "debug"
    } else if cfg!(debug_assertions) {
        "info"
    } else {
        "warn"
    };
    format!("aligner={own_level},bevy=warn,bevy_ecs::error::handler=error")
}

/// Configure logging; release builds stay quiet unless `verbose` is set
pub fn configure_logging(verbose: bool) -> LogPlugin {
    LogPlugin {
        level: if verbose { Level::DEBUG } else { Level::INFO },
        filter: log_filter(verbose),
        custom_layer: file_log_layer,
        ..default()
    }
}

/// Extra tracing layer writing to today's log file
///
/// Only active once `--new-config` has created the logs directory.
fn file_log_layer(_app: &mut App) -> Option<BoxedLayer> {
    let dir = logs_dir();
    if !dir.is_dir() {
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, current_log_file_name());
    Some(
        tracing_subscriber::fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .boxed(),
    )
}

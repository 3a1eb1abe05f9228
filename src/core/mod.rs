//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - Settings, settings file and CLI handling
//! - Error types
//! - The one-shot runner

pub mod app;
pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use app::{create_app, create_headless_app};
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use errors::AlignError;
pub use runner::run_app;
pub use settings::AlignSettings;

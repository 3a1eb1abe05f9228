//! Application builder and initialization
//!
//! The aligner runs Bevy headless: no window, no renderer, just the ECS world
//! holding the scene, the alignment plugin and logging.

use crate::core::cli::CliArgs;
use crate::core::settings::AlignSettings;
use crate::editing::undo::UndoHistory;
use crate::editing::AlignPlugin;
use crate::logging::configure_logging;
use anyhow::Result;
use bevy::prelude::*;

/// Creates the application for a command line invocation
///
/// Validates the arguments, resolves operator defaults and installs logging.
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let settings = cli_args.resolve_settings();
    let mut app = App::new();
    app.add_plugins(configure_logging(cli_args.verbose));
    configure_resources(&mut app, settings);
    app.insert_resource(cli_args);
    Ok(app)
}

/// Creates an application with the given settings and no logging plugin
pub fn create_headless_app(settings: AlignSettings) -> App {
    let mut app = App::new();
    configure_resources(&mut app, settings);
    app
}

/// Sets up the alignment plugin and resources derived from settings
fn configure_resources(app: &mut App, settings: AlignSettings) {
    debug!("Configuring aligner with {:?}", settings);
    app.add_plugins(AlignPlugin)
        .insert_resource(UndoHistory::with_limit(settings.undo_steps))
        .insert_resource(settings);
}

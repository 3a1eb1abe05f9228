//! Application runner logic
//!
//! Builds the app, loads the scene, runs one operator for one frame and
//! writes the result.

use crate::core::app::create_app;
use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::settings::AlignSettings;
use crate::data::SceneFile;
use crate::editing::{AlignOperatorFinished, AlignOutcome, LastAlignOutcome, RunAlignOperator};
use anyhow::{Context, Result};
use bevy::prelude::*;

/// Run the aligner with the given CLI arguments.
/// Handles special CLI flags and delegates to [`align_scene`].
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    // Validates the arguments and installs logging before the scene is touched
    let app = create_app(cli_args.clone())?;
    align_scene(&cli_args, app)?;
    Ok(())
}

/// Align the scene named by `cli_args` inside `app`
///
/// A cancelled operator leaves the scene file untouched. Otherwise the result
/// is printed (`--dry-run`) or written to `--output`, defaulting to the scene
/// file itself.
pub fn align_scene(cli_args: &CliArgs, mut app: App) -> Result<AlignOperatorFinished> {
    let scene_path = cli_args.scene.as_ref().context("No scene file given")?;
    let mut scene = SceneFile::load(scene_path)?;

    let settings = *app.world().resource::<AlignSettings>();
    let request = cli_args.request(&settings);
    info!(
        "Aligning {} of {} objects in {:?}",
        scene.selected_count(),
        scene.objects.len(),
        scene_path
    );

    let entities = scene.spawn_into(app.world_mut());
    app.world_mut().send_event(RunAlignOperator { request });
    app.update();

    let finished = app
        .world()
        .resource::<LastAlignOutcome>()
        .0
        .context("Alignment operator did not run")?;

    if finished.outcome == AlignOutcome::Cancelled {
        warn!("{} cancelled, scene left unchanged", finished.operator);
        eprintln!("Alignment cancelled: nothing was changed.");
        return Ok(finished);
    }

    scene.read_back(app.world(), &entities);
    if cli_args.dry_run {
        println!("{}", scene.to_json()?);
    } else if let Some(path) = cli_args.output_path() {
        scene.save(path)?;
        info!("Wrote {} moved objects to {:?}", finished.moved, path);
    }
    Ok(finished)
}

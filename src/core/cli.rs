//! Command line interface for the aligner
//!
//! The command line plays the part of the operator's parameter dialog: every
//! operator property has a flag, and flags left out fall back to the settings
//! file and then to the built-in defaults.

use crate::core::config_file::ConfigFile;
use crate::core::settings::AlignSettings;
use crate::editing::align::{AlignmentRequest, Placement, SpacingPolicy};
use crate::geometry::Axis;
use bevy::prelude::*;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which operator to run
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorKind {
    /// Align between bounds
    #[default]
    Bounds,
    /// Align with padding at the 3D cursor
    Padding,
}

/// Long help for `--placement`, one line per choice
fn placement_help() -> String {
    let choices: Vec<String> = Placement::ALL
        .iter()
        .map(|placement| format!("  {}: {}", placement.as_str(), placement.description()))
        .collect();
    format!(
        "Placement around the cursor in padding mode:\n{}",
        choices.join("\n")
    )
}

/// Aligner CLI arguments
///
/// Examples:
///   aligner --scene scene.json                          # Spread along X between bounds
///   aligner --scene scene.json --from y --to x          # Order by Y, move along X
///   aligner --scene scene.json --spacing border         # Equal gaps between borders
///   aligner --scene scene.json --mode padding --padding 2 --placement centered
///   aligner --scene scene.json --dry-run                # Print the result instead of saving
///   aligner --new-config                                # Create ~/.config/aligner
#[derive(Parser, Debug, Resource, Clone, Default)]
#[clap(
    name = "aligner",
    version,
    about = "Align selected scene objects along an axis",
    long_about = "Aligner repositions the selected objects of a scene along one axis, using the order of another axis. Objects are spread either between the extremes of the selection or from the 3D cursor with a fixed padding, measured between centers or between bounding-box borders."
)]
pub struct CliArgs {
    /// Scene file to align (JSON)
    #[clap(long = "scene", short = 's', help = "Scene file to align (JSON)")]
    pub scene: Option<PathBuf>,

    /// Operator to run
    #[clap(long = "mode", short = 'm', value_enum, default_value_t = OperatorKind::Bounds)]
    pub mode: OperatorKind,

    /// Axis that decides the processing order
    #[clap(long = "from", help = "Source axis (x, y or z)")]
    pub source_axis: Option<Axis>,

    /// Axis along which objects are moved
    #[clap(long = "to", help = "Target axis (x, y or z)")]
    pub target_axis: Option<Axis>,

    /// Measure spacing between centers or borders
    #[clap(long = "spacing", help = "Spacing policy (center or border)")]
    pub spacing: Option<SpacingPolicy>,

    /// Distance between objects in padding mode
    #[clap(
        long = "padding",
        short = 'p',
        allow_negative_numbers = true,
        help = "Padding between objects (padding mode)"
    )]
    pub padding: Option<f32>,

    /// Side of the cursor the objects are placed on in padding mode
    #[clap(
        long = "placement",
        help = "Placement around the cursor (positive, centered or negative)",
        long_help = placement_help()
    )]
    pub placement: Option<Placement>,

    /// Where to write the aligned scene
    #[clap(
        long = "output",
        short = 'o',
        help = "Output scene file",
        long_help = "Where to write the aligned scene. Defaults to overwriting the input scene file."
    )]
    pub output: Option<PathBuf>,

    /// Print the aligned scene instead of writing it
    #[clap(long = "dry-run", help = "Print the aligned scene to stdout")]
    pub dry_run: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/aligner directory with a settings.json file holding the default operator properties, and a logs directory."
    )]
    pub new_config: bool,

    /// Log debug output
    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if self.new_config {
            return Ok(());
        }

        let Some(path) = &self.scene else {
            return Err("No scene given\nUse --scene <FILE> to choose a scene file.".to_string());
        };
        if !path.is_file() {
            return Err(format!(
                "Scene file does not exist: {}\nMake sure the path is correct and the file exists.",
                path.display()
            ));
        }

        if let Some(padding) = self.padding {
            if !padding.is_finite() {
                return Err(format!("Padding must be a finite number, got {padding}"));
            }
        }

        Ok(())
    }

    /// Resolve operator defaults: CLI flags, then the settings file, then built-ins
    pub fn resolve_settings(&self) -> AlignSettings {
        let mut settings = AlignSettings::default();
        if let Some(config) = ConfigFile::load() {
            config.apply_to(&mut settings);
        }
        self.apply_to(&mut settings);
        settings
    }

    /// Overlay the flags that were given onto `settings`
    pub fn apply_to(&self, settings: &mut AlignSettings) {
        if let Some(axis) = self.source_axis {
            settings.source_axis = axis;
        }
        if let Some(axis) = self.target_axis {
            settings.target_axis = axis;
        }
        if let Some(spacing) = self.spacing {
            settings.spacing = spacing;
        }
        if let Some(padding) = self.padding {
            settings.padding = padding;
        }
        if let Some(placement) = self.placement {
            settings.placement = placement;
        }
    }

    /// Build the request for the chosen operator
    pub fn request(&self, settings: &AlignSettings) -> AlignmentRequest {
        match self.mode {
            OperatorKind::Bounds => settings.bounds_request(),
            OperatorKind::Padding => settings.padding_request(),
        }
    }

    /// Destination of the aligned scene
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output.as_ref().or(self.scene.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::align::AlignMode;
    use clap::CommandFactory;

    #[test]
    fn test_parse_padding_invocation() {
        let args = CliArgs::try_parse_from([
            "aligner",
            "--scene",
            "scene.json",
            "--mode",
            "padding",
            "--from",
            "y",
            "--to",
            "z",
            "--spacing",
            "border",
            "--padding",
            "-0.5",
            "--placement",
            "negative",
        ])
        .unwrap();

        let mut settings = AlignSettings::default();
        args.apply_to(&mut settings);
        let request = args.request(&settings);
        assert_eq!(request.source, Axis::Y);
        assert_eq!(request.target, Axis::Z);
        assert_eq!(request.spacing, SpacingPolicy::Borders);
        assert_eq!(
            request.mode,
            AlignMode::Padding {
                padding: -0.5,
                placement: Placement::Negative
            }
        );
    }

    #[test]
    fn test_unset_flags_keep_settings() {
        let args = CliArgs::try_parse_from(["aligner", "-s", "scene.json"]).unwrap();
        assert_eq!(args.mode, OperatorKind::Bounds);

        let mut settings = AlignSettings {
            target_axis: Axis::Y,
            spacing: SpacingPolicy::Borders,
            ..Default::default()
        };
        args.apply_to(&mut settings);
        let request = args.request(&settings);
        assert_eq!(request.target, Axis::Y);
        assert_eq!(request.spacing, SpacingPolicy::Borders);
        assert_eq!(request.mode, AlignMode::Bounds);
    }

    #[test]
    fn test_bad_values_are_rejected_by_parser() {
        assert!(CliArgs::try_parse_from(["aligner", "--to", "w"]).is_err());
        assert!(CliArgs::try_parse_from(["aligner", "--spacing", "diagonal"]).is_err());
        assert!(CliArgs::try_parse_from(["aligner", "--mode", "random"]).is_err());
    }

    #[test]
    fn test_validate() {
        let missing = CliArgs::default();
        assert!(missing.validate().is_err());

        let new_config = CliArgs {
            new_config: true,
            ..Default::default()
        };
        assert!(new_config.validate().is_ok());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, r#"{ "objects": [] }"#).unwrap();
        let ok = CliArgs {
            scene: Some(path.clone()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let bad_padding = CliArgs {
            scene: Some(path),
            padding: Some(f32::INFINITY),
            ..Default::default()
        };
        assert!(bad_padding.validate().is_err());
    }

    #[test]
    fn test_output_defaults_to_scene() {
        let args = CliArgs::try_parse_from(["aligner", "-s", "in.json"]).unwrap();
        assert_eq!(args.output_path(), Some(&PathBuf::from("in.json")));

        let args = CliArgs::try_parse_from(["aligner", "-s", "in.json", "-o", "out.json"]).unwrap();
        assert_eq!(args.output_path(), Some(&PathBuf::from("out.json")));
    }

    #[test]
    fn test_placement_help_lists_descriptions() {
        let help = CliArgs::command().render_long_help().to_string();
        for placement in Placement::ALL {
            assert!(help.contains(placement.description()), "{help}");
        }
        assert!(help.contains("centered: Place objects around cursor"));
    }
}

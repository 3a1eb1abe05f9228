//! Align selected scene objects along one axis, ordered by another.
//!
//! Objects are spread between the extremes of the selection or from the 3D
//! cursor with a fixed padding.

use aligner::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}

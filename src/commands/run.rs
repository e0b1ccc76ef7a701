//! Run command - builds, then launches the desktop program.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::device::Device;
use crate::process::Cmd;

use super::build::build_for_desktop;

pub const NON_DESKTOP_UNSUPPORTED: &str = "Running non-desktop is currently not supported";

/// Execute the run command.
///
/// Non-desktop devices are refused before anything is built.
pub fn run_for_device(config: &Config, device: Device) -> Result<()> {
    if !device.is_desktop() {
        bail!(NON_DESKTOP_UNSUPPORTED);
    }

    build_for_desktop(config, device)?;

    let program = desktop_program(config, device)?;
    let build_dir = config.debug_dir(device.target());
    if !program.is_file() {
        bail!(
            "Built program not found at {}. Did the build write to a different target directory?",
            program.display()
        );
    }

    println!("\nLaunching {}...", program.display());
    Cmd::new_path(&program)
        .dir(&build_dir)
        .error_msg(format!("{} exited with an error", program.display()))
        .run_interactive()?;

    Ok(())
}

/// Conventional path of the desktop program built for `device`.
pub fn desktop_program(config: &Config, device: Device) -> Result<PathBuf> {
    let name = device
        .desktop_program_name()
        .with_context(|| format!("No desktop program is known for {}", device))?;
    Ok(config.debug_dir(device.target()).join(name))
}

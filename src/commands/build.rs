//! Build command - builds the Brave Fabric projects for a device.

use anyhow::Result;
use std::time::Instant;

use crate::config::Config;
use crate::device::Device;
use crate::process::Cmd;
use crate::timing::{format_elapsed, Timer};

/// Projects built for desktop devices, in build order.
pub const DESKTOP_PROJECTS: [&str; 2] = ["brave_fabric_desktop", "brave_emulator"];

/// Execute the build command.
pub fn build_for_device(config: &Config, device: Device) -> Result<()> {
    if device.is_desktop() {
        build_for_desktop(config, device)
    } else {
        println!(
            "Building for {} is not supported right now",
            device.display_name()
        );
        Ok(())
    }
}

/// Build every desktop project, stopping at the first failure.
pub fn build_for_desktop(config: &Config, device: Device) -> Result<()> {
    println!("=== Building for {} ({}) ===\n", device, device.target());
    let build_start = Instant::now();

    build_projects(config, device, &DESKTOP_PROJECTS, |cmd| {
        cmd.run_interactive()?;
        Ok(())
    })?;

    println!(
        "\n=== Build complete for {} [{}] ===",
        device,
        format_elapsed(build_start.elapsed())
    );
    Ok(())
}

/// Build `projects` in order, handing each toolchain invocation to `exec`.
///
/// The first error stops the loop; later projects are never attempted.
pub fn build_projects<F>(
    config: &Config,
    device: Device,
    projects: &[&str],
    mut exec: F,
) -> Result<()>
where
    F: FnMut(Cmd) -> Result<()>,
{
    for project in projects {
        let cmd = cargo_build(config, device, project);
        println!("  $ {}", cmd);
        let timer = Timer::start(*project);
        exec(cmd)?;
        timer.finish();
    }
    Ok(())
}

/// Toolchain invocation that builds `project` for `device`.
pub fn cargo_build(config: &Config, device: Device, project: &str) -> Cmd {
    let mut cmd = Cmd::new(&config.cargo);
    if let Some(channel) = &config.toolchain {
        cmd = cmd.arg(format!("+{}", channel));
    }
    cmd.args(["build", "--target", device.target(), "-p", project])
        .dir(&config.root)
        .error_msg(format!(
            "Building {} for {} failed",
            project,
            device.target()
        ))
}

//! Show command - displays information.

use anyhow::Result;

use crate::config::Config;
use crate::device::Device;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show known devices
    Devices,
    /// Show configuration
    Config,
}

/// Execute the show command.
pub fn cmd_show(target: ShowTarget, config: &Config) -> Result<()> {
    match target {
        ShowTarget::Devices => {
            println!("Devices:");
            for device in Device::all() {
                println!("  {}", device_line(device));
            }
        }
        ShowTarget::Config => config.print(),
    }
    Ok(())
}

fn device_line(device: &Device) -> String {
    let kind = if device.is_desktop() {
        "desktop"
    } else {
        "non-desktop"
    };
    format!("{:<10} {:<26} {}", device.name(), device.target(), kind)
}

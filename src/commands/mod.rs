//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `build` - Build the projects for a device
//! - `run` - Build, then launch the desktop program
//! - `show` - Display devices and configuration
//! - `preflight` - Run preflight checks

pub mod build;
mod preflight;
pub mod run;
pub mod show;

pub use build::build_for_device;
pub use preflight::cmd_preflight;
pub use run::run_for_device;
pub use show::cmd_show;

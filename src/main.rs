//! Brave Fabric builder.
//!
//! Builds the Brave Fabric projects for a target device with the Rust
//! toolchain and launches the desktop program.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use brave_builder::commands;
use brave_builder::config::Config;
use brave_builder::device::{self, Device};

#[derive(Parser)]
#[command(name = "brave")]
#[command(about = "Brave Fabric Builder")]
#[command(
    after_help = "QUICK START:\n  brave preflight      Check the toolchain\n  brave build windows  Build the desktop projects\n  brave run windows    Build, then launch the desktop program"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// TODO: add an `install` command (release build, packaged per device).
#[derive(Subcommand)]
enum Commands {
    /// Builds all projects available on a device
    Build {
        #[arg(value_parser = device::value_parser())]
        device: Device,
    },

    /// Runs the main program for a device
    Run {
        #[arg(value_parser = device::value_parser())]
        device: Device,
    },

    /// Check the toolchain and installed targets
    Preflight {
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// List known devices
    Devices,
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_dir = std::env::current_dir().context("Cannot determine the current directory")?;
    // Load .env from the working directory only; real environment wins
    dotenvy::from_path(base_dir.join(".env")).ok();
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Build { device } => commands::build_for_device(&config, device)?,

        Commands::Run { device } => {
            if !device.is_desktop() {
                println!("{}", commands::run::NON_DESKTOP_UNSUPPORTED);
                std::process::exit(1);
            }
            commands::run_for_device(&config, device)?;
        }

        Commands::Preflight { strict } => commands::cmd_preflight(&config, strict)?,

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Devices => commands::show::ShowTarget::Devices,
                ShowTarget::Config => commands::show::ShowTarget::Config,
            };
            commands::cmd_show(show_target, &config)?;
        }
    }

    Ok(())
}

//! Configuration management for the builder.
//!
//! Reads configuration from the environment. `main` loads `.env` through
//! dotenvy first, so real environment variables take precedence over it.

use std::path::{Path, PathBuf};

/// Default toolchain program.
pub const DEFAULT_CARGO: &str = "cargo";

/// The projects only build on nightly.
pub const DEFAULT_TOOLCHAIN: &str = "nightly";

/// Builder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Toolchain program (default: cargo)
    pub cargo: String,
    /// Toolchain channel passed as `+<channel>`, if any
    pub toolchain: Option<String>,
    /// Workspace root holding the projects and the `target/` directory
    pub root: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Relative paths resolve against `base_dir`.
    pub fn load(base_dir: &Path) -> Self {
        Self::from_lookup(base_dir, |key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(base_dir: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cargo = lookup("BRAVE_CARGO")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CARGO.to_string());

        // Set but empty means "use whatever rustup picks"
        let toolchain = match lookup("BRAVE_TOOLCHAIN") {
            Some(s) => {
                let s = s.trim().trim_start_matches('+');
                (!s.is_empty()).then(|| s.to_string())
            }
            None => Some(DEFAULT_TOOLCHAIN.to_string()),
        };

        let root = lookup("BRAVE_ROOT")
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                let path = PathBuf::from(s.trim());
                if path.is_absolute() {
                    path
                } else {
                    base_dir.join(path)
                }
            })
            .unwrap_or_else(|| base_dir.to_path_buf());

        Self {
            cargo,
            toolchain,
            root,
        }
    }

    /// Directory the toolchain writes debug artifacts to for `target`.
    pub fn debug_dir(&self, target: &str) -> PathBuf {
        self.root.join("target").join(target).join("debug")
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  BRAVE_CARGO: {}", self.cargo);
        match &self.toolchain {
            Some(channel) => println!("  BRAVE_TOOLCHAIN: {}", channel),
            None => println!("  BRAVE_TOOLCHAIN: (default)"),
        }
        println!("  BRAVE_ROOT: {}", self.root.display());
        if self.root.join("Cargo.toml").exists() {
            println!("  Workspace: FOUND");
        } else {
            println!("  Workspace: NOT FOUND (no Cargo.toml in BRAVE_ROOT)");
        }
    }
}

//! Preflight checks.
//!
//! Verifies the toolchain is usable for the desktop devices before a build.
//! Nothing here installs anything: missing pieces are reported with a hint.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::device::Device;
use crate::process::Cmd;

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Check failed - build will fail.
    Fail,
    /// Check passed but with a warning.
    Warn,
}

impl CheckResult {
    pub fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: None,
        }
    }

    pub fn pass_with(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: Some(details.to_string()),
        }
    }

    pub fn fail(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            details: Some(details.to_string()),
        }
    }

    pub fn warn(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            details: Some(details.to_string()),
        }
    }
}

/// Results of all preflight checks.
pub struct PreflightReport {
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        !self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    pub fn fail_count(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    pub fn warn_count(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("=== Preflight Check Results ===\n");

        for check in &self.checks {
            let status_str = match check.status {
                CheckStatus::Pass => "PASS",
                CheckStatus::Fail => "FAIL",
                CheckStatus::Warn => "WARN",
            };

            print!("  [{}] {}", status_str, check.name);
            match &check.details {
                Some(details) => println!(": {}", details),
                None => println!(),
            }
        }

        println!();
        let total = self.checks.len();
        let passed = self.count(CheckStatus::Pass);
        println!("Summary: {}/{} passed", passed, total);
        if self.fail_count() > 0 {
            println!("         {} FAILED - build will not succeed", self.fail_count());
        }
        if self.warn_count() > 0 {
            println!("         {} warnings", self.warn_count());
        }
    }
}

/// Run all preflight checks.
pub fn run_preflight(config: &Config) -> PreflightReport {
    let mut checks = Vec::new();

    println!("Running preflight checks...\n");

    let cargo = check_toolchain_program(&config.cargo);
    let cargo_found = cargo.status == CheckStatus::Pass;
    checks.push(cargo);

    checks.push(check_workspace(config));

    if cargo_found {
        checks.extend(check_desktop_targets(config));
    }

    PreflightReport { checks }
}

/// Run preflight and bail if any checks fail.
pub fn run_preflight_or_fail(config: &Config) -> Result<()> {
    let report = run_preflight(config);
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before building.",
            report.fail_count()
        );
    }

    println!("All preflight checks passed!\n");
    Ok(())
}

/// The toolchain program must resolve, either on PATH or as a path.
pub fn check_toolchain_program(program: &str) -> CheckResult {
    match which::which(program) {
        Ok(path) => CheckResult::pass_with(program, &path.display().to_string()),
        Err(_) => CheckResult::fail(
            program,
            "Not found. Install a Rust toolchain (https://rustup.rs) or set BRAVE_CARGO.",
        ),
    }
}

fn check_workspace(config: &Config) -> CheckResult {
    let manifest = config.root.join("Cargo.toml");
    if manifest.is_file() {
        CheckResult::pass_with("workspace", &config.root.display().to_string())
    } else {
        CheckResult::warn(
            "workspace",
            &format!(
                "No Cargo.toml in {}. Run from the workspace root or set BRAVE_ROOT.",
                config.root.display()
            ),
        )
    }
}

fn check_desktop_targets(config: &Config) -> Vec<CheckResult> {
    if which::which("rustup").is_err() {
        return vec![CheckResult::warn(
            "rustup",
            "Not found - cannot verify installed targets",
        )];
    }

    let mut cmd = Cmd::new("rustup").args(["target", "list", "--installed"]);
    if let Some(channel) = &config.toolchain {
        cmd = cmd.args(["--toolchain", channel.as_str()]);
    }

    match cmd.run() {
        Ok(result) => check_installed_targets(&result.stdout, config.toolchain.as_deref()),
        Err(e) => {
            let name = match &config.toolchain {
                Some(channel) => format!("toolchain {}", channel),
                None => "toolchain".to_string(),
            };
            vec![CheckResult::fail(&name, &format!("{:#}", e))]
        }
    }
}

/// Check each desktop device's target against `rustup target list --installed`.
pub fn check_installed_targets(installed: &str, toolchain: Option<&str>) -> Vec<CheckResult> {
    let installed: Vec<&str> = installed.lines().map(str::trim).collect();

    Device::all()
        .iter()
        .filter(|d| d.is_desktop())
        .map(|device| {
            let name = format!("target {}", device.target());
            if installed.contains(&device.target()) {
                CheckResult::pass(&name)
            } else {
                let hint = match toolchain {
                    Some(channel) => format!(
                        "Not installed. Add it with: rustup target add {} --toolchain {}",
                        device.target(),
                        channel
                    ),
                    None => format!(
                        "Not installed. Add it with: rustup target add {}",
                        device.target()
                    ),
                };
                CheckResult::warn(&name, &hint)
            }
        })
        .collect()
}

//! Shared test utilities for the builder tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use brave_builder::config::Config;

pub const WINDOWS_TARGET: &str = "x86_64-pc-windows-msvc";

/// Scratch workspace with a fake toolchain that records its invocations.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Workspace root handed to the builder
    pub root: PathBuf,
    /// Fake toolchain script
    pub cargo: PathBuf,
    /// One line per toolchain invocation: `<cwd>|<args>`
    pub cargo_log: PathBuf,
    /// Written by the fake desktop program when launched
    pub program_log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        let root = base.join("workspace");
        fs::create_dir_all(&root).expect("Failed to create workspace dir");
        fs::write(root.join("Cargo.toml"), "[workspace]\n").expect("Failed to write Cargo.toml");

        let cargo_log = base.join("cargo.log");
        let program_log = base.join("program.log");
        let cargo = base.join("fake-cargo");
        write_script(
            &cargo,
            &format!(
                r#"#!/bin/sh
echo "$(pwd -P)|$*" >> "{log}"
for arg in "$@"; do
    if [ -n "$FAKE_CARGO_FAIL" ] && [ "$arg" = "$FAKE_CARGO_FAIL" ]; then
        exit 3
    fi
done
exit 0
"#,
                log = cargo_log.display()
            ),
        );

        Self {
            _temp_dir: temp_dir,
            root,
            cargo,
            cargo_log,
            program_log,
        }
    }

    /// Builder configuration pointing at the fake toolchain.
    pub fn config(&self) -> Config {
        Config {
            cargo: self.cargo.display().to_string(),
            toolchain: Some("nightly".to_string()),
            root: self.root.clone(),
        }
    }

    pub fn debug_dir(&self) -> PathBuf {
        self.root.join("target").join(WINDOWS_TARGET).join("debug")
    }

    /// Place a fake desktop program where a windows build would put it.
    pub fn install_desktop_program(&self, exit_code: i32) -> PathBuf {
        let dir = self.debug_dir();
        fs::create_dir_all(&dir).expect("Failed to create debug dir");
        let program = dir.join("brave_fabric_desktop.exe");
        write_script(
            &program,
            &format!(
                "#!/bin/sh\necho \"$(pwd -P)|$#\" > \"{}\"\nexit {}\n",
                self.program_log.display(),
                exit_code
            ),
        );
        program
    }

    /// Toolchain invocations recorded so far.
    pub fn cargo_calls(&self) -> Vec<Invocation> {
        match fs::read_to_string(&self.cargo_log) {
            Ok(log) => log.lines().map(Invocation::parse).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// `(cwd, argc)` recorded by the fake desktop program, if it ran.
    pub fn program_launch(&self) -> Option<(PathBuf, usize)> {
        let log = fs::read_to_string(&self.program_log).ok()?;
        let (cwd, argc) = log.trim().split_once('|')?;
        Some((PathBuf::from(cwd), argc.parse().ok()?))
    }

    /// Run the `brave` binary inside the workspace.
    pub fn brave(&self, args: &[&str]) -> Output {
        self.brave_with(args, &[])
    }

    pub fn brave_with(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut cmd = self.command();
        cmd.args(args);
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to run brave")
    }

    /// `brave` command set up for this workspace, not yet run.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_brave"));
        cmd.current_dir(&self.root)
            .env("BRAVE_CARGO", &self.cargo)
            .env("BRAVE_TOOLCHAIN", "nightly")
            .env_remove("BRAVE_ROOT")
            .env_remove("FAKE_CARGO_FAIL");
        cmd
    }
}

/// A recorded toolchain invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub cwd: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    fn parse(line: &str) -> Self {
        let (cwd, args) = line.split_once('|').expect("malformed log line");
        Self {
            cwd: PathBuf::from(cwd),
            args: args.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Value following `-p`.
    pub fn project(&self) -> Option<&str> {
        self.value_of("-p")
    }

    /// Value following `--target`.
    pub fn target(&self) -> Option<&str> {
        self.value_of("--target")
    }

    fn value_of(&self, flag: &str) -> Option<&str> {
        let pos = self.args.iter().position(|a| a == flag)?;
        self.args.get(pos + 1).map(String::as_str)
    }
}

fn write_script(path: &Path, contents: &str) {
    fs::write(path, contents).expect("Failed to write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod script");
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

//! Child process driving for the install, build, and server steps
//!
//! Child processes inherit the parent's stdio and environment so package
//! manager progress and dev-server banners stay visible, and the driver
//! blocks until the child exits.

use std::fmt;
use std::io;
use std::path::Path;
use std::process::Command;

/// Exit status of a finished child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// A process killed by a signal reports no exit code
    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "termination by signal"),
        }
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Capability for running external commands
///
/// `SystemRunner` is the production implementation; tests swap in a
/// recording fake so the pipeline's ordering and failure handling can be
/// exercised without spawning real processes.
pub trait CommandRunner {
    /// Run `program` with `args` in `cwd`, inheriting the parent's stdio and
    /// environment, blocking until the child terminates.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<ExitStatus>;
}

/// Runs commands via `std::process`
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<ExitStatus> {
        Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map(ExitStatus::from)
    }
}

/// Package manager binary for the host platform
pub fn npm_binary() -> &'static str {
    if cfg!(target_os = "windows") {
        "npm.cmd"
    } else {
        "npm"
    }
}

//! Detached process launching
//!
//! A [`LaunchCommand`] is a fully resolved command line plus the working
//! directory to start it in. Building one is pure; [`spawn_detached`] is the
//! only side-effecting step. The child is fire-and-forget: it runs in its own
//! process group, its stderr goes to the null sink, and no handle is kept.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, error};

use crate::error::{ExtensionError, Result};

/// A resolved command line, captured by value at menu-build time
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the child; always the launch target
    pub cwd: PathBuf,
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: cwd.into(),
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Path rendering used when a target directory becomes a command argument
pub fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Spawn a command as a detached, fire-and-forget child
///
/// The child outlives the host process: on Unix it becomes the leader of a
/// new process group. stderr is suppressed so diagnostics from the launched
/// application never leak into the file manager's context. We do not wait
/// and do not capture the exit status.
pub fn spawn_detached(command: &LaunchCommand) -> Result<()> {
    debug!(command = %command, cwd = %command.cwd.display(), "spawning");

    let mut child = Command::new(&command.program);
    child
        .args(&command.args)
        .current_dir(&command.cwd)
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        child.process_group(0);
    }

    match child.spawn() {
        Ok(_) => Ok(()),
        Err(source) => {
            error!(command = %command, error = %source, "failed to spawn");
            Err(ExtensionError::spawn(command.to_string(), source))
        }
    }
}

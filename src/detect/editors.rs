//! Visual Studio Code detection and command construction
//!
//! Prefers the stable `code` binary over `code-insiders`. Unlike the
//! terminal case there is no sandboxed fallback: when neither binary
//! resolves to its canonical install path, no launch command can be built.

use std::path::{Path, PathBuf};

use which::which;

use crate::detect::{resolve_candidates, Candidate};
use crate::error::{ExtensionError, Result};
use crate::launch::{path_arg, LaunchCommand};

/// Code builds, in priority order
const EDITORS: &[Candidate<EditorKind>] = &[
    Candidate {
        command: "code",
        canonical_path: "/usr/bin/code",
        kind: EditorKind::Code,
    },
    Candidate {
        command: "code-insiders",
        canonical_path: "/usr/bin/code-insiders",
        kind: EditorKind::CodeInsiders,
    },
];

/// Which Code build is installed on this host
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EditorKind {
    Code,
    CodeInsiders,
}

/// Detect the installed Code build, `None` when no launcher is available
pub fn resolve() -> Option<EditorKind> {
    resolve_with(|name| which(name).ok())
}

/// Detection against an injected PATH lookup
pub fn resolve_with(lookup: impl Fn(&str) -> Option<PathBuf>) -> Option<EditorKind> {
    resolve_candidates(EDITORS, lookup)
}

/// Like [`resolve`], but a missing launcher is a hard failure
pub fn require() -> Result<EditorKind> {
    resolve().ok_or(ExtensionError::NoLauncher)
}

impl EditorKind {
    /// Canonical install path of this build
    pub fn canonical_path(&self) -> &'static str {
        match self {
            EditorKind::Code => "/usr/bin/code",
            EditorKind::CodeInsiders => "/usr/bin/code-insiders",
        }
    }

    /// Build the command line that opens a new Code window on `target`
    ///
    /// Pure; does not execute anything.
    pub fn launch_command(&self, target: &Path) -> LaunchCommand {
        LaunchCommand::new(
            self.canonical_path(),
            vec!["-n".to_string(), path_arg(target)],
            target,
        )
    }
}

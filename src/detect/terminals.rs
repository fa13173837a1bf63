//! Ptyxis terminal detection and command construction
//!
//! Prefers the native `ptyxis-terminal` package, then `ptyxis`, and falls
//! back to launching the Flatpak build through `flatpak run`. Absence of a
//! native install is an expected, non-exceptional case.

use std::path::{Path, PathBuf};

use which::which;

use crate::detect::{resolve_candidates, Candidate};
use crate::launch::{path_arg, LaunchCommand};

/// Flatpak application id of the Ptyxis build used as the fallback
pub const FLATPAK_APP_ID: &str = "org.gnome.Ptyxis.Devel";

/// Canonical location of the Flatpak runner
const FLATPAK_RUNNER: &str = "/usr/bin/flatpak";

/// Native Ptyxis packages, in priority order
const NATIVE_TERMINALS: &[Candidate<TerminalKind>] = &[
    Candidate {
        command: "ptyxis-terminal",
        canonical_path: "/usr/bin/ptyxis-terminal",
        kind: TerminalKind::PtyxisTerminal,
    },
    Candidate {
        command: "ptyxis",
        canonical_path: "/usr/bin/ptyxis",
        kind: TerminalKind::Ptyxis,
    },
];

/// Which Ptyxis installation is available on this host
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TerminalKind {
    PtyxisTerminal,
    Ptyxis,
    Flatpak,
}

/// Detect the available Ptyxis installation
///
/// Determined once at provider construction and reused for every later
/// activation.
pub fn resolve() -> TerminalKind {
    resolve_with(|name| which(name).ok())
}

/// Detection against an injected PATH lookup
pub fn resolve_with(lookup: impl Fn(&str) -> Option<PathBuf>) -> TerminalKind {
    resolve_candidates(NATIVE_TERMINALS, lookup).unwrap_or(TerminalKind::Flatpak)
}

impl TerminalKind {
    /// Build the command line that opens a new Ptyxis window in `target`
    ///
    /// Pure; does not execute anything.
    pub fn launch_command(&self, target: &Path) -> LaunchCommand {
        let dir = path_arg(target);
        match self {
            TerminalKind::Flatpak => LaunchCommand::new(
                FLATPAK_RUNNER,
                vec![
                    "run".to_string(),
                    FLATPAK_APP_ID.to_string(),
                    "--new-window".to_string(),
                    "-d".to_string(),
                    dir,
                ],
                target,
            ),
            TerminalKind::PtyxisTerminal | TerminalKind::Ptyxis => LaunchCommand::new(
                self.executable(),
                vec!["--new-window".to_string(), "-d".to_string(), dir],
                target,
            ),
        }
    }

    fn executable(&self) -> &'static str {
        match self {
            TerminalKind::PtyxisTerminal => "ptyxis-terminal",
            TerminalKind::Ptyxis => "ptyxis",
            TerminalKind::Flatpak => FLATPAK_RUNNER,
        }
    }
}

//! Host plugin contract
//!
//! Shared types at the boundary between the file manager and the providers.
//! The host's selection model is abstracted behind [`FileEntry`] so the
//! providers can be driven by synthetic event sequences in tests; a glue
//! layer adapts the real `NautilusFileInfo` objects to it.

use std::path::PathBuf;

use tracing::warn;

use crate::error::Result;
use crate::launch::{self, LaunchCommand};

/// One item of the host's selection, or the background directory
pub trait FileEntry {
    /// Whether the entry is a directory
    fn is_directory(&self) -> bool;

    /// Absolute local filesystem path, `None` for virtual or remote locations
    fn local_path(&self) -> Option<PathBuf>;
}

/// What `MenuEntry::activate` does with a spawn failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum FailurePolicy {
    /// Return the error to the caller
    Propagate,
    /// Log and report success; the activation callback has no further recourse
    LogOnly,
}

/// A context-menu entry descriptor
///
/// The launch command is captured by value when the menu is built, so a
/// click always acts on the directory the menu was built for, never on
/// provider state that may have moved on since.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MenuEntry {
    /// Stable identifier, e.g. `PtyxisNautilus::open_in_ptyxis`
    pub name: &'static str,
    pub label: &'static str,
    pub tip: &'static str,
    command: LaunchCommand,
    on_spawn_error: FailurePolicy,
}

impl MenuEntry {
    pub fn new(
        name: &'static str,
        label: &'static str,
        tip: &'static str,
        command: LaunchCommand,
        on_spawn_error: FailurePolicy,
    ) -> Self {
        Self {
            name,
            label,
            tip,
            command,
            on_spawn_error,
        }
    }

    /// The command this entry will run when activated
    pub fn command(&self) -> &LaunchCommand {
        &self.command
    }

    /// Activation callback: launch the captured command
    ///
    /// Never panics; a spawn failure is either returned or, under
    /// [`FailurePolicy::LogOnly`], logged and swallowed.
    pub fn activate(&self) -> Result<()> {
        match launch::spawn_detached(&self.command) {
            Ok(()) => Ok(()),
            Err(err) => match self.on_spawn_error {
                FailurePolicy::Propagate => Err(err),
                FailurePolicy::LogOnly => {
                    warn!(entry = self.name, error = %err, "activation failed");
                    Ok(())
                }
            },
        }
    }
}

/// Entry points the host calls to populate its context menus
///
/// The host delivers these callbacks serially on one thread, which is the
/// only reason the latch below needs no synchronization.
pub trait MenuProvider {
    /// Menu entries for the current selection
    fn file_items(&mut self, selection: &[&dyn FileEntry]) -> Vec<MenuEntry>;

    /// Menu entries for the window background
    fn background_items(&mut self, current: &dyn FileEntry) -> Vec<MenuEntry>;
}

/// One-shot latch that suppresses the duplicate background-menu callback
///
/// After a selection-triggered menu build for a directory, the host fires a
/// background-menu callback for the same window. Arming the latch on the
/// selection build and consuming it on the next background build drops that
/// one callback. Exactly two transitions; no wider debounce.
#[derive(Debug, Default)]
pub struct SelectionLatch {
    armed: bool,
}

impl SelectionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for one suppression
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Drop back to idle without suppressing anything
    pub fn reset(&mut self) {
        self.armed = false;
    }

    /// Clear the latch, reporting whether it was armed
    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

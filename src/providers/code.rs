//! "Open in Code" menu provider
//!
//! Unlike the terminal provider there is no fallback launcher: when neither
//! Code build is installed the provider emits no menu entry at all, and a
//! spawn failure at activation time is logged and swallowed.

use std::path::Path;

use tracing::debug;

use crate::detect::editors::{self, EditorKind};
use crate::host::{FailurePolicy, FileEntry, MenuEntry, MenuProvider, SelectionLatch};
use crate::logging;
use crate::providers::{directory_path, sole_directory};

/// Verbose-logging switch for this extension
pub const DEBUG_ENV_VAR: &str = "NAUTILUS_CODE_DEBUG";

const MENU_NAME: &str = "VSCodeNautilus::open_in_code";
const MENU_LABEL: &str = "Open in Code";
const MENU_TIP: &str = "Open this folder/file in Visual Studio Code";

/// Context-menu provider that opens a folder in a new Code window
pub struct CodeMenuProvider {
    latch: SelectionLatch,
    editor: Option<EditorKind>,
}

impl CodeMenuProvider {
    /// Detect the installed Code build and construct the provider
    pub fn new() -> Self {
        logging::init(DEBUG_ENV_VAR);
        let editor = editors::resolve();
        debug!(?editor, "detected Code installation");
        Self::with_editor(editor)
    }

    /// Construct against a known launcher kind
    pub fn with_editor(editor: Option<EditorKind>) -> Self {
        Self {
            latch: SelectionLatch::new(),
            editor,
        }
    }

    fn entry(&self, target: &Path) -> Option<MenuEntry> {
        // No launcher available means no command can be built
        let editor = self.editor?;
        Some(MenuEntry::new(
            MENU_NAME,
            MENU_LABEL,
            MENU_TIP,
            editor.launch_command(target),
            FailurePolicy::LogOnly,
        ))
    }
}

impl Default for CodeMenuProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuProvider for CodeMenuProvider {
    fn file_items(&mut self, selection: &[&dyn FileEntry]) -> Vec<MenuEntry> {
        self.latch.reset();
        let Some(path) = sole_directory(selection) else {
            return Vec::new();
        };
        let Some(entry) = self.entry(&path) else {
            return Vec::new();
        };
        self.latch.arm();
        debug!(path = %path.display(), "directory selected");
        vec![entry]
    }

    fn background_items(&mut self, current: &dyn FileEntry) -> Vec<MenuEntry> {
        if self.latch.consume() {
            debug!("suppressing duplicate background callback");
            return Vec::new();
        }
        let Some(path) = directory_path(current) else {
            return Vec::new();
        };
        let Some(entry) = self.entry(&path) else {
            return Vec::new();
        };
        debug!(path = %path.display(), "background directory");
        vec![entry]
    }
}

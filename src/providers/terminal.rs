//! "Open in Ptyxis" menu provider

use std::path::Path;

use tracing::debug;

use crate::detect::terminals::{self, TerminalKind};
use crate::host::{FailurePolicy, FileEntry, MenuEntry, MenuProvider, SelectionLatch};
use crate::logging;
use crate::providers::{directory_path, sole_directory};

/// Verbose-logging switch for this extension
pub const DEBUG_ENV_VAR: &str = "NAUTILUS_PTYXIS_DEBUG";

const MENU_NAME: &str = "PtyxisNautilus::open_in_ptyxis";
const MENU_LABEL: &str = "Open in Ptyxis";
const MENU_TIP: &str = "Open this folder in Ptyxis Terminal";

/// Context-menu provider that opens a folder in a new Ptyxis window
pub struct PtyxisMenuProvider {
    latch: SelectionLatch,
    terminal: TerminalKind,
}

impl PtyxisMenuProvider {
    /// Detect the installed Ptyxis build and construct the provider
    pub fn new() -> Self {
        logging::init(DEBUG_ENV_VAR);
        let terminal = terminals::resolve();
        debug!(?terminal, "detected Ptyxis installation");
        Self::with_kind(terminal)
    }

    /// Construct against a known launcher kind
    pub fn with_kind(terminal: TerminalKind) -> Self {
        Self {
            latch: SelectionLatch::new(),
            terminal,
        }
    }

    fn entry(&self, target: &Path) -> MenuEntry {
        MenuEntry::new(
            MENU_NAME,
            MENU_LABEL,
            MENU_TIP,
            self.terminal.launch_command(target),
            // Spawn failures go back to the host glue
            FailurePolicy::Propagate,
        )
    }
}

impl Default for PtyxisMenuProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuProvider for PtyxisMenuProvider {
    fn file_items(&mut self, selection: &[&dyn FileEntry]) -> Vec<MenuEntry> {
        self.latch.reset();
        let Some(path) = sole_directory(selection) else {
            return Vec::new();
        };
        self.latch.arm();
        debug!(path = %path.display(), "directory selected");
        vec![self.entry(&path)]
    }

    fn background_items(&mut self, current: &dyn FileEntry) -> Vec<MenuEntry> {
        if self.latch.consume() {
            debug!("suppressing duplicate background callback");
            return Vec::new();
        }
        let Some(path) = directory_path(current) else {
            return Vec::new();
        };
        debug!(path = %path.display(), "background directory");
        vec![self.entry(&path)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::support::FakeEntry;

    fn provider() -> PtyxisMenuProvider {
        PtyxisMenuProvider::with_kind(TerminalKind::Flatpak)
    }

    #[test]
    fn test_single_directory_selection_yields_one_entry() {
        let mut provider = provider();
        let dir = FakeEntry::directory("/home/u/project");
        let items = provider.file_items(&[&dir]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "PtyxisNautilus::open_in_ptyxis");
        assert_eq!(items[0].label, "Open in Ptyxis");
        assert_eq!(items[0].command().cwd, Path::new("/home/u/project"));
    }

    #[test]
    fn test_flatpak_fallback_command_line() {
        let mut provider = provider();
        let dir = FakeEntry::directory("/home/u/project");
        let items = provider.file_items(&[&dir]);
        let command = items[0].command();
        assert_eq!(command.program, "/usr/bin/flatpak");
        assert_eq!(
            command.args,
            [
                "run",
                "org.gnome.Ptyxis.Devel",
                "--new-window",
                "-d",
                "/home/u/project"
            ]
        );
    }

    #[test]
    fn test_multi_selection_yields_nothing() {
        let mut provider = provider();
        let a = FakeEntry::directory("/a");
        let b = FakeEntry::directory("/b");
        assert!(provider.file_items(&[&a, &b]).is_empty());
    }

    #[test]
    fn test_file_selection_yields_nothing() {
        let mut provider = provider();
        let file = FakeEntry::file("/home/u/notes.txt");
        assert!(provider.file_items(&[&file]).is_empty());
    }

    #[test]
    fn test_background_after_selection_is_suppressed_once() {
        let mut provider = provider();
        let dir = FakeEntry::directory("/home/u/project");

        assert_eq!(provider.file_items(&[&dir]).len(), 1);
        // the duplicate callback the host fires right after the selection build
        assert!(provider.background_items(&dir).is_empty());
        // the next background build behaves normally again
        assert_eq!(provider.background_items(&dir).len(), 1);
    }

    #[test]
    fn test_background_without_prior_selection_yields_entry() {
        let mut provider = provider();
        let dir = FakeEntry::directory("/srv/site");
        let items = provider.background_items(&dir);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].command().cwd, Path::new("/srv/site"));
    }

    #[test]
    fn test_failed_selection_build_does_not_arm_latch() {
        let mut provider = provider();
        let file = FakeEntry::file("/home/u/notes.txt");
        let dir = FakeEntry::directory("/home/u");

        assert!(provider.file_items(&[&file]).is_empty());
        assert_eq!(provider.background_items(&dir).len(), 1);
    }

    #[test]
    fn test_virtual_location_fails_silently() {
        let mut provider = provider();
        let virtual_dir = FakeEntry::pathless_directory();
        let dir = FakeEntry::directory("/home/u");

        assert!(provider.file_items(&[&virtual_dir]).is_empty());
        assert!(provider.background_items(&virtual_dir).is_empty());
        // no arming happened, so a real background build still works
        assert_eq!(provider.background_items(&dir).len(), 1);
    }

    #[test]
    fn test_native_kind_command_line() {
        let mut provider = PtyxisMenuProvider::with_kind(TerminalKind::PtyxisTerminal);
        let dir = FakeEntry::directory("/home/u/project");
        let items = provider.file_items(&[&dir]);
        let command = items[0].command();
        assert_eq!(command.program, "ptyxis-terminal");
        assert_eq!(command.args, ["--new-window", "-d", "/home/u/project"]);
    }
}

//! Nautilus context-menu extensions for opening folders in Ptyxis and Code
//!
//! Two providers, one per extension: [`PtyxisMenuProvider`] opens the
//! selected folder (or the window background) in the Ptyxis terminal,
//! auto-detecting native versus Flatpak installs; [`CodeMenuProvider`] opens
//! it in Visual Studio Code. The host file manager's plugin runtime is
//! abstracted behind the [`host`] traits, so a thin glue layer adapts its
//! selection objects and menu descriptors to this crate.

pub mod detect;
pub mod error;
pub mod host;
pub mod launch;
pub mod logging;
pub mod providers;

pub use detect::editors::EditorKind;
pub use detect::terminals::TerminalKind;
pub use error::{ExtensionError, Result};
pub use host::{FailurePolicy, FileEntry, MenuEntry, MenuProvider, SelectionLatch};
pub use launch::LaunchCommand;
pub use providers::{CodeMenuProvider, PtyxisMenuProvider};

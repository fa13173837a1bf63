//! Custom error types for the extensions
//!
//! This module provides a unified error type shared by both menu providers.
//! Resolution misses and unextractable paths are not errors: they degrade
//! to a fallback launcher or an empty menu.

use thiserror::Error;

/// Main error type for extension operations
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// The operating system refused to start the resolved process
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// No editor binary resolved to its canonical install path
    #[error("no editor launcher available")]
    NoLauncher,
}

impl ExtensionError {
    /// Create a spawn error carrying the rendered command line
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ExtensionError>;

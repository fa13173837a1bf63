//! Installed-launcher detection
//!
//! Each launcher family keeps an ordered table of candidates. A candidate
//! matches only when the PATH lookup for its command lands exactly on its
//! canonical install path; a same-named binary somewhere else on the PATH is
//! treated as absent. Resolution is a pure function of the injected lookup,
//! so tests fabricate hosts with a closure instead of touching the real PATH.

use std::path::{Path, PathBuf};

pub mod editors;
pub mod terminals;

/// One entry in a detection table
///
/// Format: (command, canonical install path, kind it proves)
pub struct Candidate<K> {
    pub command: &'static str,
    pub canonical_path: &'static str,
    pub kind: K,
}

/// Return the kind of the first candidate whose lookup result equals its
/// canonical install path
pub(crate) fn resolve_candidates<K: Copy>(
    table: &[Candidate<K>],
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> Option<K> {
    for candidate in table {
        if let Some(found) = lookup(candidate.command) {
            if found == Path::new(candidate.canonical_path) {
                return Some(candidate.kind);
            }
        }
    }
    None
}

//! Menu providers
//!
//! One provider per extension. Each owns its launcher kind (resolved once at
//! construction) and a [`SelectionLatch`](crate::host::SelectionLatch) for
//! the duplicate-background-callback quirk.

use std::path::PathBuf;

use crate::host::FileEntry;

pub mod code;
pub mod terminal;

pub use code::CodeMenuProvider;
pub use terminal::PtyxisMenuProvider;

/// The absolute path of the selection, when it is exactly one directory with
/// a local path
pub(crate) fn sole_directory(selection: &[&dyn FileEntry]) -> Option<PathBuf> {
    match selection {
        [only] if only.is_directory() => only.local_path(),
        _ => None,
    }
}

/// The absolute path of a background target, when it is a directory with a
/// local path
pub(crate) fn directory_path(entry: &dyn FileEntry) -> Option<PathBuf> {
    if entry.is_directory() {
        entry.local_path()
    } else {
        None
    }
}


#[cfg(test)]
mod tests {
    use super::support::FakeEntry;
    use super::*;

    #[test]
    fn test_sole_directory_accepts_single_directory() {
        let entry = FakeEntry::directory("/home/u/project");
        let selection: Vec<&dyn FileEntry> = vec![&entry];
        assert_eq!(
            sole_directory(&selection),
            Some(PathBuf::from("/home/u/project"))
        );
    }

    #[test]
    fn test_sole_directory_rejects_empty_selection() {
        let selection: Vec<&dyn FileEntry> = vec![];
        assert_eq!(sole_directory(&selection), None);
    }

    #[test]
    fn test_sole_directory_rejects_multi_selection() {
        let a = FakeEntry::directory("/a");
        let b = FakeEntry::directory("/b");
        let selection: Vec<&dyn FileEntry> = vec![&a, &b];
        assert_eq!(sole_directory(&selection), None);
    }

    #[test]
    fn test_sole_directory_rejects_plain_file() {
        let entry = FakeEntry::file("/home/u/notes.txt");
        let selection: Vec<&dyn FileEntry> = vec![&entry];
        assert_eq!(sole_directory(&selection), None);
    }

    #[test]
    fn test_virtual_location_yields_no_path() {
        let entry = FakeEntry::pathless_directory();
        let selection: Vec<&dyn FileEntry> = vec![&entry];
        assert_eq!(sole_directory(&selection), None);
        assert_eq!(directory_path(&entry), None);
    }
}

//! Entry classification for styling.
//!
//! Each listed name is looked up with `lstat` (symlinks are not followed) and
//! classified as a directory, a symbolic link or anything else. A failed
//! lookup, for example an entry removed after the directory was read, is a
//! normal outcome here and yields [`EntryKind::Plain`].
//!
//! # Examples
//!
//! ```
//! use gridls::entry_kind::EntryKind;
//!
//! assert_eq!(EntryKind::Directory.style_name(), "directory");
//! assert_eq!(EntryKind::default(), EntryKind::Plain);
//! ```

use log::debug;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

/// Display attribute of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryKind {
    /// Regular files, devices, sockets and unresolvable entries.
    #[default]
    Plain,
    /// Directories, shown bold blue.
    Directory,
    /// Symbolic links, shown bold cyan.
    SymbolicLink,
}

impl EntryKind {
    /// Classifies `path` without following a final symlink.
    pub fn of(path: &Path) -> Self {
        Self::from_lookup(path, fs::symlink_metadata(path))
    }

    /// Classifies the outcome of an `lstat` on `path`.
    pub fn from_lookup(path: &Path, lookup: io::Result<Metadata>) -> Self {
        match lookup {
            Ok(metadata) => Self::from_file_type(metadata.file_type()),
            Err(e) => {
                debug!("lstat {} failed, rendering plain: {}", path.display(), e);
                EntryKind::Plain
            }
        }
    }

    /// Maps a file type to its display attribute.
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::SymbolicLink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Plain
        }
    }

    /// Short lowercase label, used in log output.
    pub fn style_name(&self) -> &'static str {
        match self {
            EntryKind::Plain => "plain",
            EntryKind::Directory => "directory",
            EntryKind::SymbolicLink => "symlink",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_regular_file_is_plain() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        File::create(&path).unwrap();
        assert_eq!(EntryKind::of(&path), EntryKind::Plain);
    }

    #[test]
    fn test_directory() {
        let temp = TempDir::new().unwrap();
        assert_eq!(EntryKind::of(temp.path()), EntryKind::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_symlink() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert_eq!(EntryKind::of(&link), EntryKind::SymbolicLink);
    }

    #[test]
    fn test_missing_entry_is_plain() {
        let temp = TempDir::new().unwrap();
        assert_eq!(EntryKind::of(&temp.path().join("gone")), EntryKind::Plain);
    }

    #[test]
    fn test_failed_lookup_is_plain() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            EntryKind::from_lookup(Path::new("x"), Err(err)),
            EntryKind::Plain
        );
    }
}

//! Directory enumeration.
//!
//! Reads the names in a single directory (never recursing), applies the
//! hidden-entry policy and returns them sorted by byte order. The directory
//! handle lives only inside [`list_entries`] and is released when it returns,
//! on success and on every error path.

use crate::error::{ListError, ListResult};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// A single directory entry as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The name as stored on disk, used to look the entry up again.
    file_name: OsString,
    /// The printable name.
    name: String,
    /// Character count of `name`.
    display_len: usize,
}

impl Entry {
    /// Creates an entry from an on-disk file name.
    ///
    /// Names that are not valid UTF-8 are displayed with replacement
    /// characters but keep their original bytes for lookups.
    pub fn new(file_name: impl Into<OsString>) -> Self {
        let file_name = file_name.into();
        let name = file_name.to_string_lossy().into_owned();
        let display_len = name.chars().count();
        Self {
            file_name,
            name,
            display_len,
        }
    }

    /// The printable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The on-disk name, for joining onto the listed directory.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Number of characters the name occupies; bytes are not counted.
    pub fn display_len(&self) -> usize {
        self.display_len
    }

    /// Returns true for dotfiles, including `.` and `..`.
    pub fn is_hidden(&self) -> bool {
        self.file_name.as_encoded_bytes().first() == Some(&b'.')
    }
}

/// Lists the visible entries of `dir`, sorted by byte order of their names.
///
/// Names starting with `.` are skipped unless `show_all` is set, in which
/// case `.` and `..` are listed as well.
///
/// # Errors
///
/// Returns [`ListError::DirectoryOpen`] if `dir` cannot be opened and
/// [`ListError::DirectoryRead`] if reading any entry fails.
pub fn list_entries(dir: &Path, show_all: bool) -> ListResult<Vec<Entry>> {
    let read_dir = fs::read_dir(dir).map_err(|source| ListError::DirectoryOpen {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    if show_all {
        entries.push(Entry::new("."));
        entries.push(Entry::new(".."));
    }

    let mut skipped = 0usize;
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|source| ListError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let entry = Entry::new(dir_entry.file_name());
        if !show_all && entry.is_hidden() {
            skipped += 1;
            continue;
        }
        entries.push(entry);
    }

    sort_entries(&mut entries);
    debug!(
        "read {}: {} visible, {} hidden skipped",
        dir.display(),
        entries.len(),
        skipped
    );
    Ok(entries)
}

/// Sorts entries by the raw bytes of their on-disk names.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        a.file_name
            .as_encoded_bytes()
            .cmp(b.file_name.as_encoded_bytes())
    });
}

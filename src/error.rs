//! Error types for directory listing.
//!
//! Only the failures that abort a run live here. A failed `lstat` on a single
//! entry is not an error at this level; it is downgraded to plain rendering in
//! [`crate::entry_kind::EntryKind::from_lookup`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a listing before any grid output is produced.
#[derive(Debug, Error)]
pub enum ListError {
    /// The directory could not be opened.
    #[error("cannot open directory {}: {source}", path.display())]
    DirectoryOpen {
        /// The directory that was requested.
        path: PathBuf,
        source: io::Error,
    },
    /// The directory was opened but reading its entries failed part way.
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryRead {
        /// The directory being listed.
        path: PathBuf,
        source: io::Error,
    },
    /// Writing the rendered grid failed.
    #[error("cannot write listing: {0}")]
    Output(#[from] io::Error),
}

impl ListError {
    /// Returns true for failures to open or read the listed directory.
    pub fn is_directory_access(&self) -> bool {
        matches!(
            self,
            ListError::DirectoryOpen { .. } | ListError::DirectoryRead { .. }
        )
    }
}

/// Result type for listing operations.
pub type ListResult<T> = Result<T, ListError>;

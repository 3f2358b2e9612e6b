//! gridls - A compact, column-packing directory lister
//!
//! This library reads a single directory, lays its entry names out in the
//! fewest rows that fit the terminal width, and renders the grid with
//! directories and symbolic links highlighted.

pub mod cli;
pub mod config;
pub mod entry_kind;
pub mod entry_lister;
pub mod error;
pub mod layout;
pub mod output;

pub use config::{DEFAULT_TERMINAL_WIDTH, ListingConfig};
pub use entry_kind::EntryKind;
pub use entry_lister::{Entry, list_entries};
pub use error::{ListError, ListResult};
pub use layout::{Layout, LayoutCandidate};
pub use output::GridRenderer;

pub use cli::run_cli;

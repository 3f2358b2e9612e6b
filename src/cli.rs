//! Command-line interface module for gridls.
//!
//! This module handles:
//! - Argument parsing into a [`ListingConfig`]
//! - Logging setup
//! - Running the listing pipeline (list, lay out, render)

use crate::config::ListingConfig;
use crate::entry_kind::EntryKind;
use crate::entry_lister::list_entries;
use crate::error::{ListError, ListResult};
use crate::layout::Layout;
use crate::output::GridRenderer;
use clap::Parser;
use log::debug;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// List a directory as a compact grid of columns.
#[derive(Debug, Parser)]
#[command(name = "gridls", version, about)]
pub struct Cli {
    /// Directory to list.
    pub directory: PathBuf,

    /// Include entries whose names start with '.'.
    #[arg(short, long)]
    pub all: bool,

    /// Blank characters between columns.
    #[arg(short, long, value_name = "N", default_value_t = crate::config::DEFAULT_SEPARATOR_WIDTH)]
    pub separator: usize,

    /// Lay out for this many columns instead of the terminal width.
    #[arg(short, long, value_name = "COLS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the listing configuration from the parsed flags.
    pub fn listing_config(&self) -> ListingConfig {
        ListingConfig {
            show_all: self.all,
            separator_width: self.separator,
            terminal_width: self.width.map(usize::from),
        }
    }
}

/// Initialises the logger on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and
/// logging is off.
pub fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "off" }),
    )
    .format_timestamp(None)
    .init();
}

/// Lists `dir` and writes the grid to `out`.
///
/// The directory is read completely before anything is written, so a
/// directory error never leaves a partial grid behind.
///
/// # Examples
///
/// ```no_run
/// use gridls::cli::run_cli;
/// use gridls::config::ListingConfig;
/// use std::path::Path;
///
/// let mut stdout = std::io::stdout().lock();
/// if let Err(e) = run_cli(Path::new("."), &ListingConfig::default(), &mut stdout) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli<W: Write>(dir: &Path, config: &ListingConfig, out: &mut W) -> ListResult<()> {
    let entries = list_entries(dir, config.show_all)?;

    let (terminal_width, source) = config.resolve_terminal_width();
    debug!("terminal width {} ({:?})", terminal_width, source);

    let layout = Layout::for_entries(&entries, terminal_width, config.separator_width);
    if layout.is_empty() {
        debug!("{} has no visible entries", dir.display());
        return Ok(());
    }
    debug!(
        "layout: {} columns x {} rows, widths {:?}",
        layout.cols(),
        layout.rows(),
        layout.column_widths()
    );

    GridRenderer::new(config.separator_width).render(out, &entries, &layout, |entry| {
        let kind = EntryKind::of(&dir.join(entry.file_name()));
        if kind != EntryKind::Plain {
            debug!("{}: {}", entry.name(), kind.style_name());
        }
        kind
    })?;
    out.flush()?;
    Ok(())
}

/// Whether a finished run should exit with a success status.
///
/// A closed stdout (`gridls . | head -1`) ends the listing early but is not
/// a failure.
pub fn run_succeeded(result: &ListResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(ListError::Output(e)) => e.kind() == io::ErrorKind::BrokenPipe,
        Err(_) => false,
    }
}

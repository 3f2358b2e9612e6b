use clap::Parser;
use gridls::cli::{Cli, init_logging, run_cli, run_succeeded};
use log::debug;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing directory argument exits here with clap's usage message.
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.listing_config();
    let mut stdout = BufWriter::new(io::stdout().lock());

    let result = run_cli(&cli.directory, &config, &mut stdout);
    if run_succeeded(&result) {
        return ExitCode::SUCCESS;
    }
    if let Err(e) = result {
        if e.is_directory_access() {
            debug!("listing {} aborted before output", cli.directory.display());
        }
        eprintln!("Error: {}", e);
    }
    ExitCode::FAILURE
}

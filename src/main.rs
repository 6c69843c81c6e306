use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::error;

use proctree::{Config, ProcDirSource, Snapshot, SourceError};

/// Exit code when writing the tree fails.
const EXIT_OUTPUT_FAILED: u8 = 1;
/// Exit code when the process listing cannot be read at all.
const EXIT_SOURCE_UNAVAILABLE: u8 = 2;

fn run(config: &Config) -> Result<()> {
    let source = ProcDirSource::new(&config.proc_root);
    // Nothing is printed unless the whole snapshot was taken.
    let snapshot = Snapshot::build(&source, config.attach)?;

    let stdout = io::stdout();
    snapshot
        .write_tree(BufWriter::new(stdout.lock()), &config.indent)
        .context("failed to write process tree")
}

fn exit_status(err: &anyhow::Error) -> u8 {
    if err.is::<SourceError>() {
        EXIT_SOURCE_UNAVAILABLE
    } else {
        EXIT_OUTPUT_FAILED
    }
}

fn main() -> ExitCode {
    proctree::logging::init();

    let config = Config::default();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(exit_status(&e))
        }
    }
}

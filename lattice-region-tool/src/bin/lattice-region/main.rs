//! Binary for inspecting integer regions from the command line.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use std::io::Write as _;

use anyhow::Context as _;
use clap::Parser as _;

use lattice_region_tool::{execute, logging};

mod command_options;
use command_options::ToolArgs;

fn main() -> Result<(), anyhow::Error> {
    // Destructure as a check that we're using all the args
    let ToolArgs {
        command,
        logging: logging_args,
    } = ToolArgs::parse();

    logging::install(&logging_args)?;

    let query = command.to_query()?;
    log::debug!("evaluating {query:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&query, &mut out)?;
    out.flush().context("failed to flush output")?;

    Ok(())
}

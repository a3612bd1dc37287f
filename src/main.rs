//! pombump CLI entry point

use clap::Parser;
use pombump::cli::{Cli, run_bump};
use std::process;

fn main() {
    let cli = Cli::parse();
    let exit_code = run_bump(&cli);
    process::exit(exit_code);
}

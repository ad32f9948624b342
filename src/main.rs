//! `numerus` command: turns Roman numerals into integers.
//!
//! Numerals come from the command line or an `--input` file; with neither, the
//! three sample numerals III, LVIII and MCMXCIV are converted. Each result is
//! printed on its own line, or as a JSON array with `--format json`.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}

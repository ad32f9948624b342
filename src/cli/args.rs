use clap::Parser;
use std::path::PathBuf;

use numerus::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "numerus", version, about = "Convert Roman numerals to integers")]
pub struct CliArgs {
    /// Numerals to convert. Defaults to III, LVIII and MCMXCIV when neither
    /// numerals nor --input are given
    pub numerals: Vec<String>,

    /// Input file with one numeral per line (blank lines and # comments skipped)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON config file with conversion parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Inputs with this many characters or more are out of range
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Stop at the first numeral that fails to convert and exit non-zero.
    /// Results converted before the failure are still written
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

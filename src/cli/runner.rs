use std::fs::File;
use std::io::{self, BufWriter, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use numerus::io::{read_numerals, write_conversions};
use numerus::{BatchReport, Conversion, ConversionParams, convert_batch, convert_with};

use super::args::CliArgs;
use super::errors::AppError;

/// Converted when no numerals and no input file are given.
pub const DEMO_NUMERALS: [&str; 3] = ["III", "LVIII", "MCMXCIV"];

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Config file first, then command-line overrides.
fn resolve_params(args: &CliArgs) -> Result<ConversionParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            ConversionParams::from_json_file(path)?
        }
        None => ConversionParams::default(),
    };

    if let Some(format) = args.format {
        params.format = format;
    }
    if let Some(max_len) = args.max_len {
        params.max_len = max_len;
    }
    if args.fail_fast {
        params.continue_on_error = false;
    }

    params.validate()?;
    Ok(params)
}

fn collect_inputs(args: &CliArgs) -> Result<Vec<String>, AppError> {
    match (&args.input, args.numerals.is_empty()) {
        (Some(_), false) => Err(AppError::ConflictingArguments {
            first: "--input",
            second: "NUMERALS",
        }),
        (Some(path), true) => Ok(read_numerals(path)?),
        (None, true) => Ok(DEMO_NUMERALS.iter().map(|s| s.to_string()).collect()),
        (None, false) => Ok(args.numerals.clone()),
    }
}

/// Without `continue_on_error`, the records converted before the first failure
/// are still written before the error is returned.
fn execute<W: Write>(
    inputs: &[String],
    params: &ConversionParams,
    out: &mut W,
) -> Result<BatchReport, AppError> {
    if params.continue_on_error {
        let (conversions, report) = convert_batch(inputs, params)?;
        write_conversions(out, &conversions, params.format)?;
        return Ok(report);
    }

    let mut report = BatchReport::default();
    let mut conversions = Vec::with_capacity(inputs.len());
    for input in inputs {
        match convert_with(input, params) {
            Ok(value) => {
                report.converted += 1;
                conversions.push(Conversion::from_result(input, &Ok(value)));
            }
            Err(e) => {
                warn!("Stopping at {:?}: {}", input, e);
                write_conversions(out, &conversions, params.format)?;
                return Err(e.into());
            }
        }
    }
    write_conversions(out, &conversions, params.format)?;
    Ok(report)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    let inputs = collect_inputs(&args)?;

    info!(
        "Converting {} numerals (format={}, max_len={})",
        inputs.len(),
        params.format,
        params.max_len
    );

    let report = match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            let report = execute(&inputs, &params, &mut writer)?;
            info!("Wrote results to {:?}", path);
            report
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            execute(&inputs, &params, &mut lock)?
        }
    };

    info!("Converted: {}", report.converted);
    info!("Failed: {}", report.failed);

    Ok(())
}

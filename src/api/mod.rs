//! High-level, ergonomic library API: convert single numerals, slices of
//! numerals, or whole files, and collect a `BatchReport`. Prefer these
//! entrypoints over the low-level `core` modules when integrating numerus.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::{info, warn};

use crate::core::convert::convert_with;
use crate::core::params::ConversionParams;
use crate::error::Result;
use crate::io::{read_numerals, write_conversions};
use crate::types::Conversion;

/// Batch conversion report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: usize,
    pub failed: usize,
}

/// Convert every input, recording failures instead of stopping.
pub fn convert_all<S: AsRef<str>>(inputs: &[S], params: &ConversionParams) -> Vec<Conversion> {
    inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            Conversion::from_result(input, &convert_with(input, params))
        })
        .collect()
}

/// Convert `inputs` in order.
/// If `params.continue_on_error` is true, failures are counted in the report and
/// conversion continues; otherwise the first conversion error is returned.
pub fn convert_batch<S: AsRef<str>>(
    inputs: &[S],
    params: &ConversionParams,
) -> Result<(Vec<Conversion>, BatchReport)> {
    params.validate()?;

    let mut report = BatchReport::default();
    let mut conversions = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();
        let result = match convert_with(input, params) {
            Ok(value) => {
                report.converted += 1;
                Ok(value)
            }
            Err(e) => {
                warn!("Error converting {:?}: {}", input, e);
                report.failed += 1;
                if !params.continue_on_error {
                    return Err(e);
                }
                Err(e)
            }
        };
        conversions.push(Conversion::from_result(input, &result));
    }

    Ok((conversions, report))
}

/// Convert every numeral listed in `input` and write the records to `output`
/// in `params.format`.
pub fn convert_file_to_path(
    input: &Path,
    output: &Path,
    params: &ConversionParams,
) -> Result<BatchReport> {
    info!("Converting numerals from {:?} -> {:?}", input, output);

    let numerals = read_numerals(input)?;
    let (conversions, report) = convert_batch(&numerals, params)?;

    let mut writer = BufWriter::new(File::create(output)?);
    write_conversions(&mut writer, &conversions, params.format)?;

    info!(
        "Batch conversion complete: converted={} failed={}",
        report.converted, report.failed
    );
    Ok(report)
}

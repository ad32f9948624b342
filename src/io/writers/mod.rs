//! Output writers for conversion records.
pub mod json;
pub mod text;

use std::io::Write;

use crate::error::Result;
use crate::types::{Conversion, OutputFormat};

pub fn write_conversions<W: Write>(
    out: &mut W,
    conversions: &[Conversion],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_text(out, conversions),
        OutputFormat::Json => json::write_json(out, conversions),
    }
}

use std::io::Write;

use crate::error::Result;
use crate::types::Conversion;

/// Pretty-printed JSON array of records, newline terminated.
pub fn write_json<W: Write>(out: &mut W, conversions: &[Conversion]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, conversions)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

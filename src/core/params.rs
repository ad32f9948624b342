use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Exclusive upper bound on input length, in characters.
pub const MAX_INPUT_LEN: usize = 16;

/// Largest configurable `max_len`. Every accepted input then sums to at most
/// `(max_len - 1) * 1000`, which fits in a `u32`.
pub const MAX_CONFIGURABLE_LEN: usize = (u32::MAX / 1000) as usize + 1;

/// Conversion parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    /// Inputs with this many characters or more are out of range
    pub max_len: usize,
    pub format: OutputFormat,
    /// Batch mode: keep going after a numeral fails to convert
    pub continue_on_error: bool,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            max_len: MAX_INPUT_LEN,
            format: OutputFormat::Text,
            continue_on_error: true,
        }
    }
}

impl ConversionParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: ConversionParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_len == 0 || self.max_len > MAX_CONFIGURABLE_LEN {
            return Err(Error::InvalidArgument {
                arg: "max_len",
                value: self.max_len.to_string(),
            });
        }
        Ok(())
    }
}

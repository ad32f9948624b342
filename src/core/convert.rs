//! Roman numeral to integer conversion.
//!
//! A single left-to-right scan with one character of lookahead. A symbol
//! immediately followed by a larger one forms a subtractive pair (IV = 4) and
//! both are consumed together; otherwise the symbol is added as-is.
//!
//! Only symbol membership is checked, not numeral grammar: "IIII" = 4 and
//! "VX" = 5 are accepted.

use tracing::debug;

use crate::core::params::{ConversionParams, MAX_INPUT_LEN};
use crate::error::{Error, Result};
use crate::types::Symbol;

/// Convert `numeral` using the default length bound.
pub fn convert(numeral: &str) -> Result<u32> {
    convert_bounded(numeral, MAX_INPUT_LEN)
}

/// Convert `numeral` using the bounds in `params`.
/// Fails with `InvalidArgument` if `params` does not validate.
pub fn convert_with(numeral: &str, params: &ConversionParams) -> Result<u32> {
    params.validate()?;
    convert_bounded(numeral, params.max_len)
}

fn convert_bounded(numeral: &str, max_len: usize) -> Result<u32> {
    let chars: Vec<char> = numeral.chars().collect();
    let len = chars.len();
    if len == 0 || len >= max_len {
        debug!(input = numeral, len, max_len, "numeral length out of range");
        return Err(Error::OutOfRange { len, max: max_len });
    }

    let symbols: Vec<Option<Symbol>> = chars.iter().map(|&c| Symbol::from_char(c)).collect();
    let value_at = |i: usize| symbols[i].map_or(0, Symbol::value);

    // First unrecognized character; the scan keeps going past it.
    let mut invalid: Option<(char, usize)> = None;
    let mut mark = |i: usize| {
        if symbols[i].is_none() && invalid.is_none() {
            invalid = Some((chars[i], i));
        }
    };

    let mut total: u32 = 0;
    let mut i = 0;
    while i < len {
        mark(i);
        let n1 = value_at(i);
        if i + 1 < len {
            mark(i + 1);
            let n2 = value_at(i + 1);
            if n1 >= n2 {
                total += n1;
            } else {
                total += n2 - n1;
                i += 1;
            }
        } else {
            total += n1;
        }
        i += 1;
    }

    match invalid {
        None => {
            debug!(input = numeral, value = total, "converted numeral");
            Ok(total)
        }
        Some((symbol, position)) => {
            debug!(input = numeral, %symbol, position, "unrecognized symbol");
            Err(Error::InvalidSymbol { symbol, position })
        }
    }
}

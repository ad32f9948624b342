//! Shared types and enums used across numerus.
//! Includes the Roman `Symbol` set, the `OutputFormat` selector and the
//! serializable `Conversion` record produced per input.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    pub fn value(self) -> u32 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Outcome of converting one input, suitable for reports and JSON output.
/// Exactly one of `value` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl Conversion {
    pub fn from_result(input: &str, result: &Result<u32>) -> Self {
        match result {
            Ok(value) => Self {
                input: input.to_string(),
                value: Some(*value),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                value: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn symbol_values_ascend_in_declaration_order() {
        let values: Vec<u32> = Symbol::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1, 5, 10, 50, 100, 500, 1000]);
        assert!(Symbol::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn conversion_record_serializes_only_the_set_side() {
        let ok = Conversion::from_result("XL", &Ok(40));
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"input":"XL","value":40}"#
        );

        let err = Conversion::from_result("", &Err(Error::OutOfRange { len: 0, max: 16 }));
        assert!(!err.is_ok());
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"input":"","error":"Value out of range"}"#
        );
    }

    #[test]
    fn output_format_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&OutputFormat::Json).unwrap(),
            r#""json""#
        );
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}

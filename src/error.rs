//! Crate-level error type and `Result` alias.
//! The two conversion failures keep the short diagnostic texts users see on the
//! console; the remaining variants cover config, I/O and argument validation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input is empty, or at least `max` characters long.
    #[error("Value out of range")]
    OutOfRange { len: usize, max: usize },

    /// A character outside I, V, X, L, C, D, M. `position` is a char index.
    #[error("Invalid Input")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}

impl Error {
    /// True for failures caused by the numeral itself rather than the environment.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::OutOfRange { .. } | Error::InvalidSymbol { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_messages_are_short_diagnostics() {
        let out = Error::OutOfRange { len: 0, max: 16 };
        let bad = Error::InvalidSymbol {
            symbol: 'A',
            position: 0,
        };
        assert_eq!(out.to_string(), "Value out of range");
        assert_eq!(bad.to_string(), "Invalid Input");
        assert!(out.is_conversion());
        assert!(bad.is_conversion());
    }

    #[test]
    fn io_errors_are_not_conversion_errors() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!err.is_conversion());
        assert!(err.to_string().starts_with("I/O error"));
    }
}

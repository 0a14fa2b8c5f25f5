//! Error types for risk engine

use crate::form::FormField;
use thiserror::Error;

/// Risk engine error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// One or more required form fields were left empty
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingField(Vec<FormField>),

    /// A numeric field could not be parsed, or holds a value outside its domain
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Offending field
        field: FormField,
        /// Raw text as entered
        value: String,
    },

    /// Transaction type is not one of the known kinds
    #[error("Unknown transaction type: {0:?}")]
    UnknownTransactionType(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Whether this error came out of form validation (as opposed to setup)
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::InvalidConfig(_))
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_lists_every_field() {
        let err = Error::MissingField(vec![FormField::Amount, FormField::OriginNewBalance]);
        assert_eq!(
            err.to_string(),
            "Missing required fields: amount, originNewBalance"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_number_message() {
        let err = Error::InvalidNumber {
            field: FormField::OriginOldBalance,
            value: "12abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid number for originOldBalance: \"12abc\""
        );
    }
}

//! User-facing notices for a prediction attempt

use crate::{Classification, Error};
use serde::{Deserialize, Serialize};

/// Notice styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Default,
    /// Needs attention
    Destructive,
}

/// Short, non-fatal message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Headline
    pub title: String,
    /// Body text
    pub description: String,
    /// Styling
    pub severity: Severity,
}

impl Notification {
    /// Notice for a finished prediction
    pub fn prediction_complete(classification: Classification) -> Self {
        Self {
            title: "Prediction Complete".to_string(),
            description: format!("Transaction classified as {}", classification.verdict()),
            severity: if classification.is_fraud() {
                Severity::Destructive
            } else {
                Severity::Default
            },
        }
    }

    /// Notice for a rejected submission
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::MissingField(_) => Self {
                title: "Missing Information".to_string(),
                description: "Please fill in all required fields".to_string(),
                severity: Severity::Destructive,
            },
            other => Self {
                title: "Invalid Input".to_string(),
                description: other.to_string(),
                severity: Severity::Destructive,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormField;

    #[test]
    fn test_completion_notices() {
        let fraud = Notification::prediction_complete(Classification::Fraud);
        assert_eq!(fraud.description, "Transaction classified as FRAUDULENT");
        assert_eq!(fraud.severity, Severity::Destructive);

        let ok = Notification::prediction_complete(Classification::Legitimate);
        assert_eq!(ok.description, "Transaction classified as LEGITIMATE");
        assert_eq!(ok.severity, Severity::Default);
    }

    #[test]
    fn test_error_notices() {
        let missing = Notification::from_error(&Error::MissingField(vec![FormField::Type]));
        assert_eq!(missing.title, "Missing Information");
        assert_eq!(missing.description, "Please fill in all required fields");

        let invalid = Notification::from_error(&Error::InvalidNumber {
            field: FormField::Amount,
            value: "x".to_string(),
        });
        assert_eq!(invalid.title, "Invalid Input");
        assert_eq!(invalid.description, "Invalid number for amount: \"x\"");
    }
}

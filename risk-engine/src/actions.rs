//! Follow-up actions for flagged transactions

use crate::Classification;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended response to a fraud verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Stop the transaction
    BlockTransaction,
    /// Put the origin account under review
    FlagAccount,
    /// Verify with the customer
    ContactCustomer,
    /// Escalate to compliance
    ReportToCompliance,
}

const FRAUD_ACTIONS: [RecommendedAction; 4] = [
    RecommendedAction::BlockTransaction,
    RecommendedAction::FlagAccount,
    RecommendedAction::ContactCustomer,
    RecommendedAction::ReportToCompliance,
];

impl RecommendedAction {
    /// Actions to show for a verdict; legitimate transactions get none
    pub fn for_classification(classification: Classification) -> &'static [RecommendedAction] {
        match classification {
            Classification::Fraud => &FRAUD_ACTIONS,
            Classification::Legitimate => &[],
        }
    }

    /// Display text
    pub fn description(&self) -> &'static str {
        match self {
            RecommendedAction::BlockTransaction => "Block transaction immediately",
            RecommendedAction::FlagAccount => "Flag account for review",
            RecommendedAction::ContactCustomer => "Contact customer for verification",
            RecommendedAction::ReportToCompliance => "Report to compliance team",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraud_gets_all_four_in_order() {
        let actions = RecommendedAction::for_classification(Classification::Fraud);
        let texts: Vec<String> = actions.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            texts,
            vec![
                "Block transaction immediately",
                "Flag account for review",
                "Contact customer for verification",
                "Report to compliance team",
            ]
        );
    }

    #[test]
    fn test_legitimate_gets_none() {
        assert!(RecommendedAction::for_classification(Classification::Legitimate).is_empty());
    }
}

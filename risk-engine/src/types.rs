//! Core types for risk engine

use crate::actions::RecommendedAction;
use crate::rules::RiskRule;
use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of money movement, using the upper-case names the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Account-to-account transfer
    Transfer,
    /// Withdrawal to cash through a merchant
    CashOut,
    /// Payment for goods or services
    Payment,
    /// Debit to a bank account
    Debit,
    /// Cash deposit through a merchant
    CashIn,
}

impl TransactionType {
    /// All kinds, in the order the form lists them
    pub const ALL: [TransactionType; 5] = [
        TransactionType::Transfer,
        TransactionType::CashOut,
        TransactionType::Payment,
        TransactionType::Debit,
        TransactionType::CashIn,
    ];

    /// Wire name (e.g. `CASH_OUT`)
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Transfer => "TRANSFER",
            TransactionType::CashOut => "CASH_OUT",
            TransactionType::Payment => "PAYMENT",
            TransactionType::Debit => "DEBIT",
            TransactionType::CashIn => "CASH_IN",
        }
    }

    /// Transfers and cash-outs carry most of the observed fraud
    pub fn is_high_risk(&self) -> bool {
        matches!(self, TransactionType::Transfer | TransactionType::CashOut)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownTransactionType(s.to_string()))
    }
}

/// Validated transaction, ready for scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// Transaction kind
    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Amount moved (non-negative)
    pub amount: Decimal,

    /// Origin account balance before the transaction
    pub origin_old_balance: Decimal,

    /// Origin account balance after the transaction
    pub origin_new_balance: Decimal,

    /// Destination account balance before the transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_old_balance: Option<Decimal>,

    /// Destination account balance after the transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_new_balance: Option<Decimal>,
}

impl TransactionInput {
    /// Create input with the four required fields; destination balances unset
    pub fn new(
        tx_type: TransactionType,
        amount: Decimal,
        origin_old_balance: Decimal,
        origin_new_balance: Decimal,
    ) -> Self {
        Self {
            tx_type,
            amount,
            origin_old_balance,
            origin_new_balance,
            dest_old_balance: None,
            dest_new_balance: None,
        }
    }

    /// Set destination balances
    pub fn with_destination(mut self, old_balance: Decimal, new_balance: Decimal) -> Self {
        self.dest_old_balance = Some(old_balance);
        self.dest_new_balance = Some(new_balance);
        self
    }

    /// Origin balance the account should show if only `amount` left it.
    ///
    /// `None` when the subtraction overflows `Decimal`.
    pub fn expected_origin_balance(&self) -> Option<Decimal> {
        self.origin_old_balance.checked_sub(self.amount)
    }

    /// Absolute gap between the reported and expected origin balance.
    ///
    /// `None` when the gap does not fit in a `Decimal`.
    pub fn origin_balance_gap(&self) -> Option<Decimal> {
        self.expected_origin_balance()
            .and_then(|expected| self.origin_new_balance.checked_sub(expected))
            .map(|gap| gap.abs())
    }
}

/// Risk score (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Highest displayable score
    pub const MAX: u8 = 100;

    /// Create new risk score, saturating at 100
    pub fn new(score: u8) -> Self {
        Self(score.min(Self::MAX))
    }

    /// Get raw score
    pub fn score(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Binary fraud decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Summed rule points exceed the threshold
    Fraud,
    /// Everything else
    Legitimate,
}

impl Classification {
    /// Check if fraud
    pub fn is_fraud(&self) -> bool {
        matches!(self, Classification::Fraud)
    }

    /// Upper-case verdict used in notifications
    pub fn verdict(&self) -> &'static str {
        match self {
            Classification::Fraud => "FRAUDULENT",
            Classification::Legitimate => "LEGITIMATE",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Fraud => f.write_str("fraud"),
            Classification::Legitimate => f.write_str("legitimate"),
        }
    }
}

/// Risk assessment result
///
/// `confidence` is cosmetic: it is the rule score plus random jitter,
/// clamped into [65, 95]. It is not a calibrated probability and must not be
/// read as model certainty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Assessment ID
    pub assessment_id: Uuid,

    /// Fraud or legitimate
    pub classification: Classification,

    /// Display confidence, one decimal place, in [65, 95]
    pub confidence: f64,

    /// Displayed risk score, capped at 100
    pub risk_score: RiskScore,

    /// Uncapped sum of rule points
    pub raw_score: u8,

    /// Rules that fired, in evaluation order
    pub fired_rules: Vec<RiskRule>,

    /// Human-readable explanation lines
    pub factors: Vec<String>,

    /// Assessment timestamp
    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

impl RiskAssessment {
    /// Check if classified as fraud
    pub fn is_fraud(&self) -> bool {
        self.classification.is_fraud()
    }

    /// Follow-up actions to show next to the verdict
    pub fn recommended_actions(&self) -> &'static [RecommendedAction] {
        RecommendedAction::for_classification(self.classification)
    }
}

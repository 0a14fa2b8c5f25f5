//! Risk Engine for FraudScope
//!
//! Rule-based fraud scoring for single transactions, plus the form
//! validation, prediction flow and sample analytics around it

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod actions;
pub mod analytics;
pub mod config;
pub mod error;
pub mod form;
pub mod jitter;
pub mod notification;
pub mod predictor;
pub mod rules;
pub mod scoring;
pub mod types;

pub use actions::RecommendedAction;
pub use analytics::{Dashboard, Insights};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use form::{FormField, TransactionForm};
pub use jitter::{FixedJitter, JitterSource, SeededJitter, ThreadRngJitter};
pub use notification::{Notification, Severity};
pub use predictor::{Prediction, PredictionSession, Predictor};
pub use rules::RiskRule;
pub use scoring::{RiskScorer, RuleEvaluation, FRAUD_THRESHOLD};
pub use types::*;

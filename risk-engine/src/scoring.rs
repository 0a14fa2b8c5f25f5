//! Risk scoring engine

use crate::jitter::{clamp_jitter, JitterSource, ThreadRngJitter};
use crate::rules::RiskRule;
use crate::{Classification, RiskAssessment, RiskScore, TransactionInput};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Raw scores strictly above this are fraud
pub const FRAUD_THRESHOLD: u8 = 50;

/// Display confidence bounds
pub const CONFIDENCE_FLOOR: f64 = 65.0;
/// Display confidence bounds
pub const CONFIDENCE_CEILING: f64 = 95.0;

/// Factors shown when no rule fires
pub const FALLBACK_FACTORS: [&str; 2] =
    ["Normal transaction pattern", "No significant risk indicators"];

/// Jitter-free part of an assessment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEvaluation {
    /// Rules that fired, in evaluation order
    pub fired: Vec<RiskRule>,
    /// Uncapped sum of their weights
    pub raw_score: u8,
}

impl RuleEvaluation {
    /// Threshold the raw score
    pub fn classification(&self) -> Classification {
        if self.raw_score > FRAUD_THRESHOLD {
            Classification::Fraud
        } else {
            Classification::Legitimate
        }
    }
}

/// Risk scorer
#[derive(Clone)]
pub struct RiskScorer {
    jitter: Arc<dyn JitterSource>,
}

impl RiskScorer {
    /// Create new risk scorer with thread-local randomness
    pub fn new() -> Self {
        Self::with_jitter(ThreadRngJitter)
    }

    /// Create a scorer drawing confidence jitter from `source`
    pub fn with_jitter(source: impl JitterSource + 'static) -> Self {
        Self {
            jitter: Arc::new(source),
        }
    }

    /// Run every rule; none short-circuits another
    pub fn evaluate_rules(&self, input: &TransactionInput) -> RuleEvaluation {
        let fired: Vec<RiskRule> = RiskRule::ALL
            .into_iter()
            .filter(|rule| rule.fires(input))
            .collect();
        let raw_score: u8 = fired.iter().map(|rule| rule.weight()).sum();

        RuleEvaluation { fired, raw_score }
    }

    /// Assess transaction risk
    pub fn assess(&self, input: &TransactionInput) -> RiskAssessment {
        let evaluation = self.evaluate_rules(input);
        let classification = evaluation.classification();

        let jitter = clamp_jitter(self.jitter.jitter());
        let confidence = display_confidence(evaluation.raw_score, jitter);

        let mut factors: Vec<String> = evaluation
            .fired
            .iter()
            .map(|rule| rule.factor(input))
            .collect();
        if factors.is_empty() {
            factors = FALLBACK_FACTORS.iter().map(|f| f.to_string()).collect();
        }

        debug!(
            tx_type = %input.tx_type,
            raw_score = evaluation.raw_score,
            fired_rules = evaluation.fired.len(),
            classification = %classification,
            "Transaction assessed"
        );

        RiskAssessment {
            assessment_id: Uuid::new_v4(),
            classification,
            confidence,
            risk_score: RiskScore::new(evaluation.raw_score),
            raw_score: evaluation.raw_score,
            fired_rules: evaluation.fired,
            factors,
            assessed_at: chrono::Utc::now(),
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Score plus jitter, clamped into the display band, one decimal place
fn display_confidence(raw_score: u8, jitter: f64) -> f64 {
    let value = (raw_score as f64 + jitter).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);
    (value * 10.0).round() / 10.0
}

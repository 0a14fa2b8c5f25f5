//! Prediction flow around the scorer
//!
//! `Predictor` validates a form, waits out the simulated latency and scores.
//! `PredictionSession` keeps the form and the latest assessment together and
//! throws the assessment away whenever the form changes.

use crate::config::PredictorConfig;
use crate::{FormField, Notification, Result, RiskAssessment, RiskScorer, TransactionForm};
use std::time::Duration;
use tracing::{info, warn};

/// Outcome of a successful prediction
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Scorer output
    pub assessment: RiskAssessment,
    /// Notice to show the user
    pub notification: Notification,
}

/// Validates, delays, scores
#[derive(Clone)]
pub struct Predictor {
    scorer: RiskScorer,
    latency: Duration,
}

impl Predictor {
    /// Create a predictor with an explicit latency
    pub fn new(scorer: RiskScorer, latency: Duration) -> Self {
        Self { scorer, latency }
    }

    /// Create from configuration
    pub fn from_config(scorer: RiskScorer, config: &PredictorConfig) -> Self {
        Self::new(scorer, Duration::from_millis(config.latency_ms))
    }

    /// Predictor with no artificial delay
    pub fn immediate(scorer: RiskScorer) -> Self {
        Self::new(scorer, Duration::ZERO)
    }

    /// Simulated latency
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Underlying scorer
    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    /// Validate the form and score it.
    ///
    /// Invalid forms fail straight away, with no delay and no scoring. The
    /// delay is not cancellable; once started it always runs to completion.
    pub async fn predict(&self, form: &TransactionForm) -> Result<Prediction> {
        let input = match form.validate() {
            Ok(input) => input,
            Err(e) => {
                warn!(error = %e, "Prediction rejected");
                return Err(e);
            }
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let assessment = self.scorer.assess(&input);
        let notification = Notification::prediction_complete(assessment.classification);

        info!(
            assessment_id = %assessment.assessment_id,
            classification = %assessment.classification,
            risk_score = assessment.risk_score.score(),
            confidence = assessment.confidence,
            "Prediction complete"
        );

        Ok(Prediction {
            assessment,
            notification,
        })
    }
}

/// Form state plus the assessment currently on display
#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    form: TransactionForm,
    assessment: Option<RiskAssessment>,
}

impl PredictionSession {
    /// Create empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form
    pub fn form(&self) -> &TransactionForm {
        &self.form
    }

    /// Assessment on display, if any
    pub fn assessment(&self) -> Option<&RiskAssessment> {
        self.assessment.as_ref()
    }

    /// Edit one field; any displayed assessment is discarded
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        self.assessment = None;
    }

    /// Run a prediction and keep the result on success.
    ///
    /// Returns the notice to show either way.
    pub async fn submit(&mut self, predictor: &Predictor) -> Notification {
        match predictor.predict(&self.form).await {
            Ok(prediction) => {
                self.assessment = Some(prediction.assessment);
                prediction.notification
            }
            Err(e) => Notification::from_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::FixedJitter;
    use crate::notification::Severity;
    use crate::{Classification, Error};
    use std::time::Instant;

    fn predictor(latency: Duration) -> Predictor {
        Predictor::new(RiskScorer::with_jitter(FixedJitter::new(10.0)), latency)
    }

    fn fraud_form() -> TransactionForm {
        TransactionForm::new()
            .with(FormField::Type, "TRANSFER")
            .with(FormField::Amount, "200000")
            .with(FormField::OriginOldBalance, "0")
            .with(FormField::OriginNewBalance, "0")
    }

    #[tokio::test]
    async fn test_predict_fraud() {
        let prediction = predictor(Duration::ZERO)
            .predict(&fraud_form())
            .await
            .unwrap();

        assert_eq!(prediction.assessment.classification, Classification::Fraud);
        assert_eq!(prediction.assessment.risk_score.score(), 100);
        assert_eq!(prediction.notification.severity, Severity::Destructive);
    }

    #[tokio::test]
    async fn test_latency_is_waited() {
        let latency = Duration::from_millis(30);
        let start = Instant::now();
        predictor(latency).predict(&fraud_form()).await.unwrap();
        assert!(start.elapsed() >= latency);
    }

    #[tokio::test]
    async fn test_invalid_form_skips_delay() {
        let form = fraud_form().with(FormField::Amount, "");
        let start = Instant::now();
        let result = predictor(Duration::from_secs(5)).predict(&form).await;

        assert_eq!(
            result.unwrap_err(),
            Error::MissingField(vec![FormField::Amount])
        );
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_session_keeps_and_clears_assessment() {
        let predictor = predictor(Duration::ZERO);
        let mut session = PredictionSession::new();
        for (field, value) in [
            (FormField::Type, "PAYMENT"),
            (FormField::Amount, "500"),
            (FormField::OriginOldBalance, "1000"),
            (FormField::OriginNewBalance, "500"),
        ] {
            session.set_field(field, value);
        }

        let notice = session.submit(&predictor).await;
        assert_eq!(notice.description, "Transaction classified as LEGITIMATE");
        assert!(session.assessment().is_some());

        session.set_field(FormField::Amount, "600");
        assert!(session.assessment().is_none());
        assert_eq!(session.form().amount, "600");
    }

    #[tokio::test]
    async fn test_session_failed_submit_keeps_nothing() {
        let predictor = predictor(Duration::ZERO);
        let mut session = PredictionSession::new();
        session.set_field(FormField::Type, "DEBIT");

        let notice = session.submit(&predictor).await;
        assert_eq!(notice.title, "Missing Information");
        assert!(session.assessment().is_none());
    }
}

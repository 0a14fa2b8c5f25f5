//! Engine configuration
//!
//! Layered as: built-in defaults, then an optional TOML file, then
//! `FRAUDSCOPE__SECTION__KEY` environment variables.

use crate::jitter::{SeededJitter, ThreadRngJitter};
use crate::{Result, RiskScorer};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FRAUDSCOPE";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Prediction flow
    #[serde(default)]
    pub predictor: PredictorConfig,
    /// Confidence jitter
    #[serde(default)]
    pub jitter: JitterConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Prediction flow settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PredictorConfig {
    /// Simulated analysis delay before a result is shown
    pub latency_ms: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self { latency_ms: 2_000 }
    }
}

/// Jitter settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct JitterConfig {
    /// Fixed seed for reproducible confidence values; unset means random
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Check if JSON lines were requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl EngineConfig {
    /// Load defaults and environment, plus `path` when given (must exist)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("predictor.latency_ms", 2_000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config: EngineConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Scorer wired to the configured jitter source
    pub fn scorer(&self) -> RiskScorer {
        match self.jitter.seed {
            Some(seed) => RiskScorer::with_jitter(SeededJitter::new(seed)),
            None => RiskScorer::with_jitter(ThreadRngJitter),
        }
    }
}

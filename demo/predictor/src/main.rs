// FraudScope demo - scores transactions from the command line
//
// Usage:
//   fraudscope-demo dashboard
//   fraudscope-demo scenarios
//   fraudscope-demo predict --type TRANSFER --amount 200000 --origin-old 0 --origin-new 0

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use risk_engine::{Dashboard, EngineConfig, FormField, Notification, Predictor, TransactionForm};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

mod render;
mod scenarios;

/// FraudScope - rule-based fraud scoring demo
#[derive(Parser)]
#[command(name = "fraudscope-demo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the simulated analysis delay
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    /// Seed the confidence jitter for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample analytics dashboard
    Dashboard {
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Score the reference scenarios
    Scenarios,

    /// Score one transaction
    Predict {
        /// TRANSFER, CASH_OUT, PAYMENT, DEBIT or CASH_IN
        #[arg(long = "type", default_value = "")]
        tx_type: String,
        /// Amount
        #[arg(long, default_value = "")]
        amount: String,
        /// Origin balance before
        #[arg(long, default_value = "")]
        origin_old: String,
        /// Origin balance after
        #[arg(long, default_value = "")]
        origin_new: String,
        /// Destination balance before
        #[arg(long, default_value = "")]
        dest_old: String,
        /// Destination balance after
        #[arg(long, default_value = "")]
        dest_new: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        EngineConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(latency_ms) = cli.latency_ms {
        config.predictor.latency_ms = latency_ms;
    }
    if cli.seed.is_some() {
        config.jitter.seed = cli.seed;
    }

    init_tracing(&config)?;
    info!(
        latency_ms = config.predictor.latency_ms,
        seeded = config.jitter.seed.is_some(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Dashboard { json } => {
            let dashboard = Dashboard::sample();
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                render::dashboard(&dashboard);
            }
        }
        Commands::Scenarios => {
            // scenarios run back to back, so skip the simulated delay
            let predictor = Predictor::new(config.scorer(), Duration::ZERO);
            scenarios::run_all(&predictor).await?;
        }
        Commands::Predict {
            tx_type,
            amount,
            origin_old,
            origin_new,
            dest_old,
            dest_new,
            json,
        } => {
            let form = TransactionForm::new()
                .with(FormField::Type, tx_type)
                .with(FormField::Amount, amount)
                .with(FormField::OriginOldBalance, origin_old)
                .with(FormField::OriginNewBalance, origin_new)
                .with(FormField::DestOldBalance, dest_old)
                .with(FormField::DestNewBalance, dest_new);

            let predictor = Predictor::from_config(config.scorer(), &config.predictor);
            if !json && form.validate().is_ok() {
                render::analyzing(predictor.latency());
            }

            match predictor.predict(&form).await {
                Ok(prediction) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&prediction.assessment)?);
                    } else {
                        render::notification(&prediction.notification);
                        render::assessment(&prediction.assessment);
                    }
                }
                Err(e) => {
                    render::notification(&Notification::from_error(&e));
                    return Err(e).context("Prediction rejected");
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &EngineConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(format!(
            "risk_engine={level},fraudscope_demo={level}",
            level = config.logging.level
        ))
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

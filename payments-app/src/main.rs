//! # Ledger Replay
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging
//! - Create an in-memory payment service
//! - Replay the configured script and print the resulting report

mod config;
mod replay;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use payments_hex::InMemoryPaymentService;

use config::{Config, LogFormat};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,payments_app=debug,payments_hex=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::info!("Replaying script {}", config.script_path.display());

    let script = replay::load_script(&config.script_path)?;
    let service = InMemoryPaymentService::default();
    let report = replay::replay(&service, &script, config.fail_fast)?;

    tracing::info!(
        applied = report.applied,
        rejected = report.rejected,
        "replay finished"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

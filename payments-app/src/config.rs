//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub script_path: PathBuf,
    pub fail_fast: bool,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let script_path = lookup("LEDGER_SCRIPT")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("LEDGER_SCRIPT environment variable is required"))?;

        let fail_fast = match lookup("LEDGER_FAIL_FAST") {
            Some(value) => parse_flag(&value)?,
            None => false,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be `pretty` or `json`, got `{other}`"),
        };

        Ok(Self {
            script_path,
            fail_fast,
            log_format,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => anyhow::bail!("LEDGER_FAIL_FAST must be a boolean, got `{other}`"),
    }
}

//! Replays a JSON operation script through a payment gateway.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use payments_types::{Account, LedgerSummary, PaymentError, PaymentGateway, TransactionId};

/// A replay script: operations applied in order.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub operations: Vec<Operation>,
}

/// One scripted call into the gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Execute {
        #[serde(default)]
        label: Option<String>,
        payer: Account,
        payee: Account,
        amount: f64,
    },
    Refund {
        /// Label of an earlier operation
        target: String,
        amount: f64,
        #[serde(default)]
        label: Option<String>,
    },
}

/// Outcome of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: usize,
    pub summary: LedgerSummary,
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> anyhow::Result<Script> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid script {}", path.display()))
}

/// Applies every operation of `script` to `gateway`.
///
/// Unknown refund targets always abort. Rejected payment operations abort
/// only when `fail_fast` is set; otherwise they are logged and counted.
pub fn replay<G: PaymentGateway>(
    gateway: &G,
    script: &Script,
    fail_fast: bool,
) -> anyhow::Result<ReplayReport> {
    let mut labels: HashMap<&str, TransactionId> = HashMap::new();
    let mut applied = 0;
    let mut rejected = 0;

    for (index, operation) in script.operations.iter().enumerate() {
        let (outcome, label) = match operation {
            Operation::Execute {
                label,
                payer,
                payee,
                amount,
            } => (
                gateway.execute(payer.clone(), payee.clone(), *amount),
                label,
            ),
            Operation::Refund {
                target,
                amount,
                label,
            } => {
                let id = labels.get(target.as_str()).copied().with_context(|| {
                    format!("operation {index}: unknown refund target `{target}`")
                })?;
                (gateway.refund(id, *amount), label)
            }
        };

        match outcome {
            Ok(id) => {
                applied += 1;
                if let Some(label) = label {
                    labels.insert(label.as_str(), id);
                }
            }
            Err(err) if fail_fast => {
                return Err(err).with_context(|| format!("operation {index} rejected"));
            }
            Err(err) => {
                log_rejection(index, &err);
                rejected += 1;
            }
        }
    }

    Ok(ReplayReport {
        applied,
        rejected,
        summary: gateway.summary()?,
    })
}

fn log_rejection(index: usize, err: &PaymentError) {
    tracing::warn!(operation = index, error = %err, "operation rejected, continuing");
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use payments_hex::InMemoryPaymentService;

    use super::*;

    const SCRIPT: &str = r#"{
        "operations": [
            {"op": "execute", "label": "first",
             "payer": {"name": "benji", "contact": "benji@specto.io"},
             "payee": {"name": "daniel", "contact": "daniel@specto.io"},
             "amount": 4.5},
            {"op": "refund", "target": "first", "amount": -2.5},
            {"op": "refund", "target": "first", "amount": -6.5},
            {"op": "execute",
             "payer": {"name": "benji", "contact": "benji@specto.io"},
             "payee": {"name": "daniel", "contact": "daniel@specto.io"},
             "amount": 6.0}
        ]
    }"#;

    fn write_script(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_replay_skips_rejections() {
        let file = write_script(SCRIPT);
        let script = load_script(file.path()).unwrap();
        let service = InMemoryPaymentService::default();

        let report = replay(&service, &script, false).unwrap();

        assert_eq!(report.applied, 3);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.summary.cumulative_value, 8.0);
        assert_eq!(report.summary.cumulative_payer_names, vec!["benji", "benji"]);
    }

    #[test]
    fn test_replay_fail_fast_stops_at_rejection() {
        let script: Script = serde_json::from_str(SCRIPT).unwrap();
        let service = InMemoryPaymentService::default();

        let err = replay(&service, &script, true).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PaymentError>(),
            Some(PaymentError::RefundExceedsOriginal { .. })
        ));
        assert_eq!(service.summary().unwrap().transaction_count, 2);
    }

    #[test]
    fn test_unknown_target_is_fatal() {
        let script: Script = serde_json::from_str(
            r#"{"operations": [{"op": "refund", "target": "missing", "amount": 1.0}]}"#,
        )
        .unwrap();
        let service = InMemoryPaymentService::default();

        let err = replay(&service, &script, false).unwrap_err();

        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_refund_can_be_labelled_and_targeted() {
        let script: Script = serde_json::from_str(
            r#"{"operations": [
                {"op": "execute", "label": "t",
                 "payer": {"name": "a", "contact": ""},
                 "payee": {"name": "b", "contact": ""}, "amount": 5.0},
                {"op": "refund", "target": "t", "amount": 5.0, "label": "r"},
                {"op": "refund", "target": "r", "amount": 1.0}
            ]}"#,
        )
        .unwrap();
        let service = InMemoryPaymentService::default();

        let report = replay(&service, &script, false).unwrap();

        // The second refund targets a negative transaction and is rejected.
        assert_eq!(report.applied, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.summary.cumulative_value, 0.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_script(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_script_is_an_error() {
        let file = write_script(r#"{"operations": [{"op": "transfer"}]}"#);
        assert!(load_script(file.path()).is_err());
    }
}

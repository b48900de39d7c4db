// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading transaction batches from CSV or JSON files.
//!
//! CSV files need a header row with `currency` and optionally `id`,
//! `amount`, `status`. An empty `amount` cell means the amount is missing; an
//! empty or absent `id` gets a fresh UUID.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use txflow_core::{Transaction, TransactionStatus, TxflowError};
use uuid::Uuid;

/// One transaction as it appears in an input file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    pub currency: String,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = TxflowError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Transaction::new(id, record.amount, record.currency, record.status)
    }
}

/// Read a batch from `path`. Files ending in `.json` are parsed as a JSON
/// array of records; anything else is parsed as CSV.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, TxflowError> {
    let file = File::open(path).map_err(|e| input_error(path, e))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records: Vec<TransactionRecord> = if is_json {
        serde_json::from_reader(BufReader::new(file)).map_err(|e| input_error(path, e))?
    } else {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file)
            .into_deserialize::<TransactionRecord>()
            .collect::<Result<_, _>>()
            .map_err(|e| input_error(path, e))?
    };

    debug!(path = %path.display(), count = records.len(), "decoded transaction records");

    let batch = records
        .into_iter()
        .map(Transaction::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    info!(path = %path.display(), count = batch.len(), "loaded transactions");
    Ok(batch)
}

fn input_error<E>(path: &Path, source: E) -> TxflowError
where
    E: std::error::Error + Send + Sync + 'static,
{
    TxflowError::Input {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

/// The built-in demonstration batch.
///
/// Covers the interesting cases: amounts above and below the default
/// threshold, a negative amount, an unsupported currency, and a missing
/// amount.
pub fn sample_batch() -> Result<Vec<Transaction>, TxflowError> {
    [
        (Some(120.0), "USD"),
        (Some(10.0), "EUR"),
        (Some(75.5), "EUR"),
        (Some(-5.0), "USD"),
        (Some(200.0), "JPY"),
        (None, "USD"),
    ]
    .into_iter()
    .map(|(amount, currency)| {
        Transaction::try_from(TransactionRecord {
            id: None,
            amount,
            currency: currency.to_string(),
            status: Some(TransactionStatus::New),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn sample_batch_has_six_new_transactions() {
        let batch = sample_batch().unwrap();
        assert_eq!(batch.len(), 6);
        assert!(batch.iter().all(|t| t.status() == TransactionStatus::New));
        assert_eq!(batch[5].amount(), None);
        assert_eq!(batch[4].currency(), "JPY");
        // ids are fresh UUIDs
        assert!(batch.iter().all(|t| Uuid::parse_str(&t.id().0).is_ok()));
    }

    #[test]
    fn loads_csv_with_empty_amount_and_generated_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "batch.csv",
            "id,amount,currency,status\n\
             tx-1, 120.0 ,USD,NEW\n\
             tx-2,,EUR,\n\
             ,75.5,eur,PROCESSED\n",
        );

        let batch = load_transactions(&path).unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].id().0, "tx-1");
        assert_eq!(batch[0].amount(), Some(120.0));
        assert_eq!(batch[1].amount(), None);
        assert_eq!(batch[1].status(), TransactionStatus::New);
        assert!(Uuid::parse_str(&batch[2].id().0).is_ok());
        assert_eq!(batch[2].currency(), "eur");
        assert_eq!(batch[2].status(), TransactionStatus::Processed);
    }

    #[test]
    fn loads_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "batch.JSON",
            r#"[
                {"id": "a", "amount": 99.5, "currency": "USD"},
                {"currency": "JPY", "amount": null}
            ]"#,
        );

        let batch = load_transactions(&path).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id().0, "a");
        assert_eq!(batch[1].amount(), None);
    }

    #[test]
    fn blank_currency_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.csv", "id,amount,currency\ntx-1,10,\n");
        assert!(matches!(
            load_transactions(&path),
            Err(TxflowError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn malformed_input_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.json", "{ not json");
        let err = load_transactions(&path).unwrap_err();
        assert!(matches!(err, TxflowError::Input { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = load_transactions(Path::new("/nonexistent/txflow/batch.csv")).unwrap_err();
        assert!(matches!(err, TxflowError::Input { .. }));
    }
}

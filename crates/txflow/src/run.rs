// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `txflow run` - load a batch and drive it through the pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;
use txflow_config::TxflowConfig;
use txflow_core::TxflowError;
use txflow_pipeline::{Pipeline, SimulatedValidator, load_transactions, sample_batch};

/// Options for a single run.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub json: bool,
    pub seed: Option<u64>,
}

/// Run the pipeline and render its report.
pub async fn run_pipeline(
    config: TxflowConfig,
    options: &RunOptions,
    shutdown: CancellationToken,
) -> Result<String, TxflowError> {
    let batch = match &options.input {
        Some(path) => {
            info!(path = %path.display(), "loading transactions");
            load_transactions(path)?
        }
        None => {
            info!("no input given, using the sample batch");
            sample_batch()?
        }
    };

    let validator = match options.seed {
        Some(seed) => SimulatedValidator::with_seed(&config.validation, seed),
        None => SimulatedValidator::new(&config.validation),
    }
    .with_cancellation(shutdown.child_token());

    let pipeline = Pipeline::new(config, Arc::new(validator)).with_shutdown(shutdown);
    let report = pipeline.run(&batch).await;

    info!(
        valid = report.valid_count(),
        failed = report.failed_count(),
        "pipeline finished"
    );

    if options.json {
        let mut out = serde_json::to_string_pretty(&report)
            .map_err(|e| TxflowError::Internal(format!("failed to serialize report: {e}")))?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(report.render_text())
    }
}

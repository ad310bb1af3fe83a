//! Classification report export
//!
//! Writes the result of one classification run (metrics, confusion matrix,
//! importances, run metadata) as pretty-printed JSON.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::model::{Evaluation, FeatureImportance, TrainTestSplit};

/// Metadata about the classification run
#[derive(Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Mammoscope version
    pub app_version: String,
    /// RNG seed used for the split and the tree
    pub seed: u64,
    /// Number of training samples
    pub n_train: usize,
    /// Number of held-out test samples
    pub n_test: usize,
}

/// The four scalar metrics
#[derive(Serialize)]
pub struct MetricsSection {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Complete classification report
#[derive(Serialize)]
pub struct ClassificationReport {
    pub metadata: ReportMetadata,
    pub metrics: MetricsSection,
    /// 2x2 counts, rows = true labels, columns = predicted
    pub confusion_matrix: [[usize; 2]; 2],
    /// Top features in ascending importance order
    pub feature_importances: Vec<FeatureImportance>,
}

/// Serialize one classification run to a JSON file.
pub fn export_classification_report(
    output_path: &Path,
    evaluation: &Evaluation,
    importances: &[FeatureImportance],
    split: &TrainTestSplit,
) -> Result<()> {
    let report = ClassificationReport {
        metadata: ReportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            seed: split.seed,
            n_train: split.n_train(),
            n_test: split.n_test(),
        },
        metrics: MetricsSection {
            accuracy: evaluation.accuracy,
            precision: evaluation.precision,
            recall: evaluation.recall,
            f1: evaluation.f1,
        },
        confusion_matrix: evaluation.confusion.as_rows(),
        feature_importances: importances.to_vec(),
    };

    let json = serde_json::to_string_pretty(&report)
        .context("Failed to serialize classification report to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write classification report to {}",
            output_path.display()
        )
    })?;

    Ok(())
}

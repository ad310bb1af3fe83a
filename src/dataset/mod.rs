//! Bundled breast cancer dataset
//!
//! The Wisconsin Diagnostic Breast Cancer table ships with the binary as an
//! embedded CSV asset: 569 samples, 30 numeric features, and a binary
//! `target` column (0 = malignant, 1 = benign). The table is loaded once at
//! startup and never mutated afterwards; every flow receives it by reference.

use std::io::Cursor;

use anyhow::{Context, Result};
use polars::prelude::*;

/// Name of the target column appended after the feature columns.
pub const TARGET_COLUMN: &str = "target";

/// Class names, indexed by target label (0 = malignant, 1 = benign).
pub const CLASS_NAMES: [&str; 2] = ["malignant", "benign"];

/// Tolerance for floating point comparison when checking binary 0/1 labels
const TOLERANCE: f64 = 1e-9;

static WDBC_CSV: &str = include_str!("../../data/wdbc.csv");

/// The immutable sample table: feature columns plus the binary target.
#[derive(Debug, Clone)]
pub struct SampleTable {
    df: DataFrame,
}

impl SampleTable {
    /// Parse the bundled CSV into a sample table.
    ///
    /// The asset is validated on load: the target column must be present,
    /// binary 0/1, and every column must be numeric with no missing values.
    /// A failure here means the embedded asset is broken, not that user
    /// input was bad.
    pub fn load() -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .into_reader_with_file_handle(Cursor::new(WDBC_CSV.as_bytes()))
            .finish()
            .context("Failed to parse the bundled breast cancer CSV")?;

        validate(&df)?;
        Ok(Self { df })
    }

    /// Build a table from an already-validated DataFrame. Used by tests
    /// that need small synthetic tables with the same shape contract.
    pub fn from_frame(df: DataFrame) -> Result<Self> {
        validate(&df)?;
        Ok(Self { df })
    }

    /// The underlying DataFrame (features plus target column).
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Number of rows.
    pub fn n_samples(&self) -> usize {
        self.df.height()
    }

    /// Number of columns, features plus the target.
    pub fn n_columns(&self) -> usize {
        self.df.width()
    }

    /// Number of feature columns (excludes the target).
    pub fn n_features(&self) -> usize {
        self.df.width() - 1
    }

    /// Feature names in dataset order (the target is not a feature).
    pub fn feature_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .filter(|name| name.as_str() != TARGET_COLUMN)
            .map(|name| name.to_string())
            .collect()
    }

    /// Class names indexed by label value.
    pub fn class_names(&self) -> &'static [&'static str; 2] {
        &CLASS_NAMES
    }

    /// The first `n` rows, verbatim.
    pub fn head(&self, n: usize) -> DataFrame {
        self.df.head(Some(n))
    }

    /// One feature column as f64 values.
    pub fn feature_column(&self, name: &str) -> Result<Vec<f64>> {
        let col = self
            .df
            .column(name)
            .with_context(|| format!("Column '{}' not found in dataset", name))?;
        column_to_f64(col)
    }

    /// All feature columns as a row-major matrix, `matrix[sample][feature]`,
    /// in dataset column order. This is the layout the classifier consumes.
    pub fn feature_matrix(&self) -> Result<Vec<Vec<f64>>> {
        let names = self.feature_names();
        let mut columns = Vec::with_capacity(names.len());
        for name in &names {
            columns.push(self.feature_column(name)?);
        }

        let n_rows = self.n_samples();
        let mut rows = vec![Vec::with_capacity(columns.len()); n_rows];
        for col in &columns {
            for (row, &value) in rows.iter_mut().zip(col.iter()) {
                row.push(value);
            }
        }
        Ok(rows)
    }

    /// Target labels as 0/1 class indices.
    pub fn labels(&self) -> Result<Vec<usize>> {
        let col = self
            .df
            .column(TARGET_COLUMN)
            .context("Target column missing from dataset")?;
        let values = column_to_f64(col)?;
        Ok(values
            .iter()
            .map(|&v| if (v - 1.0).abs() < TOLERANCE { 1 } else { 0 })
            .collect())
    }
}

/// Check the shape contract: non-empty, all-numeric, no nulls, binary target.
fn validate(df: &DataFrame) -> Result<()> {
    if df.height() == 0 {
        anyhow::bail!("Dataset has no rows");
    }

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    if !names.iter().any(|n| n == TARGET_COLUMN) {
        anyhow::bail!(
            "Dataset is missing the '{}' column. Available columns: {:?}",
            TARGET_COLUMN,
            names
        );
    }
    if names.len() < 2 {
        anyhow::bail!("Dataset has no feature columns");
    }

    for col in df.get_columns() {
        if !col.dtype().is_primitive_numeric() {
            anyhow::bail!(
                "Column '{}' is not numeric (dtype: {})",
                col.name(),
                col.dtype()
            );
        }
        if col.null_count() > 0 {
            anyhow::bail!("Column '{}' contains missing values", col.name());
        }
    }

    // Target must be binary 0/1.
    let target = df.column(TARGET_COLUMN)?;
    let values = column_to_f64(target)?;
    let all_binary = values
        .iter()
        .all(|&v| (v - 0.0).abs() < TOLERANCE || (v - 1.0).abs() < TOLERANCE);
    if !all_binary {
        anyhow::bail!("Target column '{}' is not binary 0/1", TARGET_COLUMN);
    }

    Ok(())
}

fn column_to_f64(col: &Column) -> Result<Vec<f64>> {
    let cast = col
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' cannot be cast to f64", col.name()))?;
    let ca = cast.f64()?;
    ca.into_iter()
        .map(|v| v.with_context(|| format!("Null value in column '{}'", col.name())))
        .collect()
}

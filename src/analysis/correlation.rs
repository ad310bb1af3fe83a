//! Correlation analysis - Pearson matrix and threshold filtering
//!
//! The heatmap flow computes the full feature-by-feature correlation matrix
//! (target included), keeps the features whose absolute correlation with the
//! target strictly exceeds the user's threshold, and recomputes the matrix
//! restricted to that subset. Any threshold in [0, 1] is valid; an empty
//! selection degrades to the 1x1 target-only matrix.

use anyhow::{Context, Result};
use faer::Mat;
use polars::prelude::*;
use rayon::prelude::*;

use crate::dataset::TARGET_COLUMN;

/// A square, symmetric Pearson correlation matrix over named columns.
///
/// Values are in [-1, 1] and the diagonal is always 1. Constant columns
/// correlate 0 with everything else by convention.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Column names, in dataset order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns (the matrix is `len x len`).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Correlation between columns `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Position of a column by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Correlation between two columns by name.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.values[i][j])
    }
}

/// The heatmap flow result: the threshold that produced it, the features
/// that passed the filter (dataset order, target excluded), and the
/// correlation sub-matrix over those features plus the target.
#[derive(Debug, Clone)]
pub struct CorrelationHeatmap {
    pub threshold: f64,
    pub selected: Vec<String>,
    pub matrix: CorrelationMatrix,
}

/// Compute the Pearson correlation matrix over every numeric column of the
/// frame, target included.
///
/// Each column is standardized to zero mean and unit norm, then the full
/// matrix is a single `Z^T * Z` product. Constant columns standardize to a
/// zero vector, so their off-diagonal correlations come out as 0; the
/// diagonal is forced to 1 afterwards.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix> {
    let mut names = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();
    for col in df.get_columns() {
        if !col.dtype().is_primitive_numeric() {
            continue;
        }
        let cast = col
            .cast(&DataType::Float64)
            .with_context(|| format!("Column '{}' cannot be cast to f64", col.name()))?;
        let values: Vec<f64> = cast.f64()?.into_iter().flatten().collect();
        names.push(col.name().to_string());
        columns.push(values);
    }

    if names.is_empty() {
        anyhow::bail!("No numeric columns to correlate");
    }

    let n_rows = columns[0].len();
    if n_rows == 0 {
        anyhow::bail!("Cannot correlate an empty table");
    }

    let standardized: Vec<Vec<f64>> = columns
        .par_iter()
        .map(|values| standardize(values))
        .collect();

    let n_cols = names.len();
    let mut z = Mat::<f64>::zeros(n_rows, n_cols);
    for (col_idx, col) in standardized.iter().enumerate() {
        for (row_idx, &value) in col.iter().enumerate() {
            z[(row_idx, col_idx)] = value;
        }
    }

    let product = z.transpose() * &z;

    let mut values = vec![vec![0.0; n_cols]; n_cols];
    for (i, row) in values.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = if i == j {
                1.0
            } else {
                product[(i, j)].clamp(-1.0, 1.0)
            };
        }
    }

    Ok(CorrelationMatrix { names, values })
}

/// Standardize to zero mean and unit norm so that `Z^T * Z` yields Pearson
/// correlations. Constant columns map to the zero vector.
fn standardize(values: &[f64]) -> Vec<f64> {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    if std == 0.0 {
        return vec![0.0; values.len()];
    }

    let scale = 1.0 / (std * n.sqrt());
    values.iter().map(|&v| (v - mean) * scale).collect()
}

/// Single-pass Pearson correlation between two columns, using Welford's
/// update for numerical stability. Returns `None` when either column is
/// constant or the slices are empty or of different lengths.
pub fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    let n = a.len();
    if n == 0 || n != b.len() {
        return None;
    }

    let mut count = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (&x, &y) in a.iter().zip(b.iter()) {
        count += 1.0;
        let dx = x - mean_x;
        let dy = y - mean_y;
        mean_x += dx / count;
        mean_y += dy / count;
        var_x += dx * (x - mean_x);
        var_y += dy * (y - mean_y);
        cov_xy += dx * (y - mean_y);
    }

    let std_x = (var_x / count).sqrt();
    let std_y = (var_y / count).sqrt();
    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some((cov_xy / count) / (std_x * std_y))
}

/// Features whose absolute correlation with the target strictly exceeds
/// `threshold`, in matrix (dataset) order. The target itself is excluded.
pub fn select_correlated_features(matrix: &CorrelationMatrix, threshold: f64) -> Vec<String> {
    let Some(target_idx) = matrix.index_of(TARGET_COLUMN) else {
        return Vec::new();
    };

    matrix
        .names()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target_idx && matrix.get(*i, target_idx).abs() > threshold)
        .map(|(_, name)| name.clone())
        .collect()
}

/// Run the full heatmap flow: full matrix, threshold filter against the
/// target, then a recomputed sub-matrix over the selected features plus the
/// target. With no feature above the threshold the sub-matrix is the 1x1
/// target-only matrix.
pub fn heatmap_for_threshold(df: &DataFrame, threshold: f64) -> Result<CorrelationHeatmap> {
    let full = correlation_matrix(df)?;
    let selected = select_correlated_features(&full, threshold);

    let mut keep: Vec<&str> = selected.iter().map(|s| s.as_str()).collect();
    keep.push(TARGET_COLUMN);
    let projected = df
        .select(keep)
        .context("Failed to project frame onto selected features")?;
    let matrix = correlation_matrix(&projected)?;

    Ok(CorrelationHeatmap {
        threshold,
        selected,
        matrix,
    })
}

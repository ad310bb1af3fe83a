//! Pair plot projection - scatter pairs and marginal distributions
//!
//! Projects the table onto a user-chosen subset of feature columns (at most
//! four) plus the target, producing one scatter panel per unordered feature
//! pair and one marginal histogram per feature, both split by class.

use anyhow::{Context, Result};

use crate::analysis::correlation::pearson;
use crate::dataset::SampleTable;

/// Maximum number of features a pair plot will accept. Longer selections
/// are truncated to the first four in caller order, with a warning flag set.
pub const MAX_PAIR_FEATURES: usize = 4;

/// Number of bins in each marginal histogram.
pub const MARGINAL_BINS: usize = 10;

/// Outcome of a pair plot request.
#[derive(Debug, Clone)]
pub enum PairSelection {
    /// Nothing was selected; the caller should prompt for features instead
    /// of rendering a plot.
    Empty,
    /// A renderable pair plot.
    Plot(PairPlotData),
}

/// Scatter panels and marginal histograms for the chosen features.
#[derive(Debug, Clone)]
pub struct PairPlotData {
    /// The features actually plotted, in caller order.
    pub features: Vec<String>,
    /// True when the request exceeded [`MAX_PAIR_FEATURES`] and was cut.
    pub truncated: bool,
    /// One panel per unordered pair of plotted features.
    pub panels: Vec<ScatterPanel>,
    /// One histogram per plotted feature, class-split.
    pub marginals: Vec<MarginalHistogram>,
}

/// All samples projected onto one feature pair.
#[derive(Debug, Clone)]
pub struct ScatterPanel {
    pub x: String,
    pub y: String,
    /// Pearson correlation of the pair, when defined.
    pub correlation: Option<f64>,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Class label (0 or 1) of the sample.
    pub label: usize,
}

/// Per-feature value distribution, split by class.
#[derive(Debug, Clone)]
pub struct MarginalHistogram {
    pub feature: String,
    pub bins: Vec<HistogramBin>,
}

#[derive(Debug, Clone, Copy)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    /// Sample counts per class label.
    pub counts: [usize; 2],
}

/// Build the pair plot projection for the requested features.
///
/// Zero requested features yields [`PairSelection::Empty`]. More than
/// [`MAX_PAIR_FEATURES`] yields the first four of the caller's order with
/// the `truncated` flag set. Unknown feature names are an error.
pub fn pair_plot(table: &SampleTable, requested: &[String]) -> Result<PairSelection> {
    if requested.is_empty() {
        return Ok(PairSelection::Empty);
    }

    let available = table.feature_names();
    for name in requested {
        if !available.contains(name) {
            anyhow::bail!(
                "Unknown feature '{}'. Available features: {}",
                name,
                available.join(", ")
            );
        }
    }

    let truncated = requested.len() > MAX_PAIR_FEATURES;
    let features: Vec<String> = requested.iter().take(MAX_PAIR_FEATURES).cloned().collect();

    let labels = table.labels()?;
    let mut columns = Vec::with_capacity(features.len());
    for name in &features {
        columns.push(
            table
                .feature_column(name)
                .with_context(|| format!("Failed to extract feature '{}'", name))?,
        );
    }

    let mut panels = Vec::new();
    for i in 0..features.len() {
        for j in (i + 1)..features.len() {
            let points = columns[i]
                .iter()
                .zip(columns[j].iter())
                .zip(labels.iter())
                .map(|((&x, &y), &label)| ScatterPoint { x, y, label })
                .collect();
            panels.push(ScatterPanel {
                x: features[i].clone(),
                y: features[j].clone(),
                correlation: pearson(&columns[i], &columns[j]),
                points,
            });
        }
    }

    let marginals = features
        .iter()
        .zip(columns.iter())
        .map(|(name, values)| MarginalHistogram {
            feature: name.clone(),
            bins: histogram(values, &labels, MARGINAL_BINS),
        })
        .collect();

    Ok(PairSelection::Plot(PairPlotData {
        features,
        truncated,
        panels,
        marginals,
    }))
}

/// Equal-width histogram over `values`, counting per class label. A
/// constant column collapses to a single bin holding every sample.
fn histogram(values: &[f64], labels: &[usize], n_bins: usize) -> Vec<HistogramBin> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span <= 0.0 {
        let mut counts = [0usize; 2];
        for &label in labels {
            counts[label.min(1)] += 1;
        }
        return vec![HistogramBin {
            lower: min,
            upper: max,
            counts,
        }];
    }

    let width = span / n_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..n_bins)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            counts: [0, 0],
        })
        .collect();

    for (&value, &label) in values.iter().zip(labels.iter()) {
        let idx = (((value - min) / width) as usize).min(n_bins - 1);
        bins[idx].counts[label.min(1)] += 1;
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn toy_table() -> SampleTable {
        let df = df! {
            "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0],
            "b" => [2.0f64, 4.0, 6.0, 8.0, 10.0, 12.0],
            "c" => [6.0f64, 5.0, 4.0, 3.0, 2.0, 1.0],
            "d" => [1.0f64, 1.0, 2.0, 2.0, 3.0, 3.0],
            "e" => [0.5f64, 0.7, 0.2, 0.9, 0.4, 0.6],
            "target" => [0i32, 0, 0, 1, 1, 1],
        }
        .unwrap();
        SampleTable::from_frame(df).unwrap()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_selection_produces_no_plot() {
        let result = pair_plot(&toy_table(), &[]).unwrap();
        assert!(matches!(result, PairSelection::Empty));
    }

    #[test]
    fn truncates_to_first_four_in_caller_order() {
        let result = pair_plot(&toy_table(), &names(&["e", "c", "a", "d", "b"])).unwrap();
        let PairSelection::Plot(data) = result else {
            panic!("expected a plot");
        };
        assert!(data.truncated);
        assert_eq!(data.features, names(&["e", "c", "a", "d"]));
        // 4 features -> C(4,2) = 6 panels, 4 marginals
        assert_eq!(data.panels.len(), 6);
        assert_eq!(data.marginals.len(), 4);
    }

    #[test]
    fn within_limit_is_not_flagged() {
        let result = pair_plot(&toy_table(), &names(&["a", "b"])).unwrap();
        let PairSelection::Plot(data) = result else {
            panic!("expected a plot");
        };
        assert!(!data.truncated);
        assert_eq!(data.panels.len(), 1);
        assert_eq!(data.panels[0].points.len(), 6);
    }

    #[test]
    fn unknown_feature_is_an_error() {
        let err = pair_plot(&toy_table(), &names(&["nope"])).unwrap_err();
        assert!(err.to_string().contains("Unknown feature"));
    }

    #[test]
    fn panel_points_carry_class_labels() {
        let result = pair_plot(&toy_table(), &names(&["a", "c"])).unwrap();
        let PairSelection::Plot(data) = result else {
            panic!("expected a plot");
        };
        let labels: Vec<usize> = data.panels[0].points.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec![0, 0, 0, 1, 1, 1]);
        // a and c are perfectly anti-correlated
        assert!((data.panels[0].correlation.unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_counts_sum_to_sample_count() {
        let result = pair_plot(&toy_table(), &names(&["a"])).unwrap();
        let PairSelection::Plot(data) = result else {
            panic!("expected a plot");
        };
        let total: usize = data.marginals[0]
            .bins
            .iter()
            .map(|b| b.counts[0] + b.counts[1])
            .sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn constant_column_collapses_to_one_bin() {
        let bins = histogram(&[3.0, 3.0, 3.0], &[0, 1, 1], MARGINAL_BINS);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].counts, [1, 2]);
    }
}

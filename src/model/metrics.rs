//! Evaluation metrics for the binary classifier
//!
//! The positive class is label 1 (benign). Precision and recall are defined
//! as 0.0 when their denominator is zero, so a test subset without positive
//! examples evaluates to zeros instead of crashing or returning NaN; the
//! caller is expected to surface that as a "no data" state.

use std::fmt;

use crate::model::tree::DecisionTree;
use crate::model::ModelError;

/// A 2x2 confusion matrix; rows are true labels, columns predicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    matrix: [[usize; 2]; 2],
}

impl ConfusionMatrix {
    /// Build the matrix from aligned true and predicted label slices.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`ModelError::EmptyDataset`] | zero labels |
    /// | [`ModelError::LabelCountMismatch`] | slices differ in length |
    /// | [`ModelError::LabelOutOfRange`] | a label is not 0/1 |
    pub fn from_labels(true_labels: &[usize], predicted: &[usize]) -> Result<Self, ModelError> {
        if true_labels.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        if true_labels.len() != predicted.len() {
            return Err(ModelError::LabelCountMismatch {
                n_samples: true_labels.len(),
                n_labels: predicted.len(),
            });
        }

        let mut matrix = [[0usize; 2]; 2];
        for (sample_index, (&t, &p)) in true_labels.iter().zip(predicted.iter()).enumerate() {
            if t > 1 {
                return Err(ModelError::LabelOutOfRange {
                    label: t,
                    sample_index,
                });
            }
            if p > 1 {
                return Err(ModelError::LabelOutOfRange {
                    label: p,
                    sample_index,
                });
            }
            matrix[t][p] += 1;
        }
        Ok(Self { matrix })
    }

    /// Count of (true label, predicted label) pairs.
    pub fn count(&self, true_label: usize, predicted: usize) -> usize {
        self.matrix[true_label][predicted]
    }

    /// The raw 2x2 counts, rows = true, columns = predicted.
    pub fn as_rows(&self) -> [[usize; 2]; 2] {
        self.matrix
    }

    /// Total number of evaluated samples.
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    pub fn true_positives(&self) -> usize {
        self.matrix[1][1]
    }

    pub fn true_negatives(&self) -> usize {
        self.matrix[0][0]
    }

    pub fn false_positives(&self) -> usize {
        self.matrix[0][1]
    }

    pub fn false_negatives(&self) -> usize {
        self.matrix[1][0]
    }

    /// Proportion of correct predictions.
    pub fn accuracy(&self) -> f64 {
        let correct = self.true_positives() + self.true_negatives();
        correct as f64 / self.total() as f64
    }

    /// TP / (TP + FP). Defined as 0.0 when nothing was predicted positive.
    pub fn precision(&self) -> f64 {
        let tp = self.true_positives();
        let denominator = tp + self.false_positives();
        if denominator == 0 {
            0.0
        } else {
            tp as f64 / denominator as f64
        }
    }

    /// TP / (TP + FN). Defined as 0.0 when the test subset has no positives.
    pub fn recall(&self) -> f64 {
        let tp = self.true_positives();
        let denominator = tp + self.false_negatives();
        if denominator == 0 {
            0.0
        } else {
            tp as f64 / denominator as f64
        }
    }

    /// Harmonic mean of precision and recall; 0.0 when both are zero.
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} pred_0  pred_1", "")?;
        for (i, row) in self.matrix.iter().enumerate() {
            writeln!(f, "true_{i:<3} {:>6}  {:>6}", row[0], row[1])?;
        }
        Ok(())
    }
}

/// Metrics from scoring a fitted tree against a held-out subset. Derived
/// and ephemeral; recomputed per run.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub confusion: ConfusionMatrix,
}

/// Predict every test row and score against the true labels. The test
/// subset must come from the same split that trained the tree.
pub fn evaluate(
    tree: &DecisionTree,
    test_features: &[Vec<f64>],
    test_labels: &[usize],
) -> Result<Evaluation, ModelError> {
    let predicted = tree.predict_batch(test_features)?;
    let confusion = ConfusionMatrix::from_labels(test_labels, &predicted)?;

    Ok(Evaluation {
        accuracy: confusion.accuracy(),
        precision: confusion.precision(),
        recall: confusion.recall(),
        f1: confusion.f1(),
        confusion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_predictions() {
        let cm = ConfusionMatrix::from_labels(&[0, 0, 1, 1], &[0, 0, 1, 1]).unwrap();
        assert!((cm.accuracy() - 1.0).abs() < f64::EPSILON);
        assert!((cm.precision() - 1.0).abs() < f64::EPSILON);
        assert!((cm.recall() - 1.0).abs() < f64::EPSILON);
        assert!((cm.f1() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn known_counts() {
        // true:  [1, 1, 1, 0, 0, 0]
        // pred:  [1, 1, 0, 0, 1, 0]
        let cm = ConfusionMatrix::from_labels(&[1, 1, 1, 0, 0, 0], &[1, 1, 0, 0, 1, 0]).unwrap();
        assert_eq!(cm.true_positives(), 2);
        assert_eq!(cm.false_negatives(), 1);
        assert_eq!(cm.false_positives(), 1);
        assert_eq!(cm.true_negatives(), 2);
        assert!((cm.accuracy() - 4.0 / 6.0).abs() < 1e-12);
        assert!((cm.precision() - 2.0 / 3.0).abs() < 1e-12);
        assert!((cm.recall() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn accuracy_is_derivable_from_counts() {
        let cm = ConfusionMatrix::from_labels(&[1, 0, 1, 0, 1], &[1, 1, 0, 0, 1]).unwrap();
        let [[tn, fp], [fn_, tp]] = cm.as_rows();
        let derived = (tp + tn) as f64 / (tp + tn + fp + fn_) as f64;
        assert!((cm.accuracy() - derived).abs() < 1e-12);
    }

    #[test]
    fn cell_sum_equals_sample_count() {
        let cm = ConfusionMatrix::from_labels(&[1, 0, 1, 0, 1, 1], &[1, 1, 0, 0, 1, 0]).unwrap();
        assert_eq!(cm.total(), 6);
    }

    #[test]
    fn no_positives_defines_metrics_as_zero() {
        let cm = ConfusionMatrix::from_labels(&[0, 0, 0], &[0, 0, 0]).unwrap();
        assert_eq!(cm.precision(), 0.0);
        assert_eq!(cm.recall(), 0.0);
        assert_eq!(cm.f1(), 0.0);
        assert!((cm.accuracy() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_labels_error() {
        assert!(matches!(
            ConfusionMatrix::from_labels(&[], &[]),
            Err(ModelError::EmptyDataset)
        ));
    }

    #[test]
    fn mismatched_lengths_error() {
        assert!(matches!(
            ConfusionMatrix::from_labels(&[0, 1], &[0]),
            Err(ModelError::LabelCountMismatch { .. })
        ));
    }

    #[test]
    fn out_of_range_label_error() {
        assert!(matches!(
            ConfusionMatrix::from_labels(&[0, 2], &[0, 1]),
            Err(ModelError::LabelOutOfRange { .. })
        ));
    }

    #[test]
    fn display_shows_axes() {
        let cm = ConfusionMatrix::from_labels(&[0, 1], &[0, 1]).unwrap();
        let rendered = format!("{cm}");
        assert!(rendered.contains("pred_0"));
        assert!(rendered.contains("true_1"));
    }
}

//! Gini impurity and exhaustive best-split search

use rand::seq::SliceRandom;
use rand::Rng;

/// Gini impurity of a node: `1 - sum(p_i^2)`. Zero samples count as pure.
pub(crate) fn gini(class_counts: &[usize], n_samples: usize) -> f64 {
    if n_samples == 0 {
        return 0.0;
    }
    let n = n_samples as f64;
    let sum_sq: f64 = class_counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

/// The best split found for a node.
#[derive(Debug, Clone)]
pub(crate) struct SplitCandidate {
    pub(crate) feature: usize,
    pub(crate) threshold: f64,
    /// Weighted impurity decrease (MDI formula).
    pub(crate) impurity_decrease: f64,
    pub(crate) left_indices: Vec<usize>,
    pub(crate) right_indices: Vec<usize>,
}

/// Scan every feature for the boundary with the largest weighted impurity
/// decrease.
///
/// All features are considered; the seeded RNG only shuffles the visit
/// order, which breaks ties between splits of equal gain deterministically
/// for a given seed. Candidate thresholds are midpoints between adjacent
/// distinct sorted values. Returns `None` when no boundary improves on the
/// parent (all values identical, or every boundary violates
/// `min_samples_leaf`).
///
/// `col_features` is column-major: `col_features[feature_idx][sample_idx]`.
pub(crate) fn find_best_split(
    col_features: &[Vec<f64>],
    labels: &[usize],
    sample_indices: &[usize],
    n_classes: usize,
    min_samples_leaf: usize,
    rng: &mut impl Rng,
) -> Option<SplitCandidate> {
    let n_features = col_features.len();
    let n_samples = sample_indices.len();
    if n_samples < 2 || n_features == 0 {
        return None;
    }

    let mut parent_counts = vec![0usize; n_classes];
    for &si in sample_indices {
        parent_counts[labels[si]] += 1;
    }
    let parent_impurity = gini(&parent_counts, n_samples);

    let mut visit_order: Vec<usize> = (0..n_features).collect();
    visit_order.shuffle(rng);

    // A zero-gain boundary is still a valid split (it can enable a useful
    // one deeper down, as in XOR-shaped data), so start below zero.
    let mut best_decrease = f64::NEG_INFINITY;
    let mut best: Option<(usize, f64)> = None;

    for &feat_idx in &visit_order {
        let feat_col = &col_features[feat_idx];

        let mut sorted: Vec<(f64, usize)> = sample_indices
            .iter()
            .map(|&si| (feat_col[si], si))
            .collect();
        sorted.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

        let mut left_counts = vec![0usize; n_classes];
        let mut right_counts = parent_counts.clone();

        for i in 0..(n_samples - 1) {
            let (val_i, si) = sorted[i];
            let class_i = labels[si];

            left_counts[class_i] += 1;
            right_counts[class_i] -= 1;

            let val_next = sorted[i + 1].0;
            if val_i == val_next {
                continue;
            }

            let n_left = i + 1;
            let n_right = n_samples - n_left;
            if n_left < min_samples_leaf || n_right < min_samples_leaf {
                continue;
            }

            let decrease = (n_samples as f64) * parent_impurity
                - (n_left as f64) * gini(&left_counts, n_left)
                - (n_right as f64) * gini(&right_counts, n_right);

            if decrease > best_decrease {
                best_decrease = decrease;
                best = Some((feat_idx, (val_i + val_next) / 2.0));
            }
        }
    }

    let (feature, threshold) = best?;

    let feat_col = &col_features[feature];
    let mut left_indices = Vec::with_capacity(n_samples / 2);
    let mut right_indices = Vec::with_capacity(n_samples / 2);
    for &si in sample_indices {
        if feat_col[si] <= threshold {
            left_indices.push(si);
        } else {
            right_indices.push(si);
        }
    }

    Some(SplitCandidate {
        feature,
        threshold,
        impurity_decrease: best_decrease,
        left_indices,
        right_indices,
    })
}

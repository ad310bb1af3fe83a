//! CART decision tree classifier

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::model::node::TreeNode;
use crate::model::split::{find_best_split, gini};
use crate::model::{ModelError, DEFAULT_SEED};

/// Training parameters for a single CART decision tree.
///
/// Construct via [`DecisionTreeParams::new`], then chain `with_*` methods.
/// Defaults match the classifier the app trains: unlimited depth,
/// `min_samples_split = 2`, `min_samples_leaf = 1`, seed 42.
#[derive(Debug, Clone)]
pub struct DecisionTreeParams {
    max_depth: Option<usize>,
    min_samples_split: usize,
    min_samples_leaf: usize,
    seed: u64,
}

impl DecisionTreeParams {
    pub fn new() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            seed: DEFAULT_SEED,
        }
    }

    /// Limit tree depth; `None` grows until leaves are pure.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.min_samples_split = min_samples_split;
        self
    }

    pub fn with_min_samples_leaf(mut self, min_samples_leaf: usize) -> Self {
        self.min_samples_leaf = min_samples_leaf;
        self
    }

    /// Seed for the per-node feature visit order. All features are always
    /// scanned; the seed only decides which of two equal-gain splits wins.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Train a decision tree on a row-major dataset.
    ///
    /// `features[sample_idx][feature_idx]`; `labels[sample_idx]` are binary
    /// class indices.
    ///
    /// # Errors
    ///
    /// | Variant | When |
    /// |---|---|
    /// | [`ModelError::EmptyDataset`] | `features` is empty |
    /// | [`ModelError::ZeroFeatures`] | rows have no columns |
    /// | [`ModelError::FeatureCountMismatch`] | ragged rows |
    /// | [`ModelError::LabelCountMismatch`] | labels differ in length |
    /// | [`ModelError::LabelOutOfRange`] | a label is not 0/1 |
    /// | [`ModelError::NonFiniteValue`] | NaN or infinite value |
    /// | [`ModelError::InvalidMaxDepth`] | `max_depth == Some(0)` |
    /// | [`ModelError::InvalidMinSamplesSplit`] | `min_samples_split < 2` |
    /// | [`ModelError::InvalidMinSamplesLeaf`] | `min_samples_leaf < 1` |
    pub fn fit(&self, features: &[Vec<f64>], labels: &[usize]) -> Result<DecisionTree, ModelError> {
        if features.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let n_samples = features.len();
        let n_features = features[0].len();
        if n_features == 0 {
            return Err(ModelError::ZeroFeatures);
        }
        if labels.len() != n_samples {
            return Err(ModelError::LabelCountMismatch {
                n_samples,
                n_labels: labels.len(),
            });
        }

        for (sample_index, row) in features.iter().enumerate() {
            if row.len() != n_features {
                return Err(ModelError::FeatureCountMismatch {
                    expected: n_features,
                    got: row.len(),
                    sample_index,
                });
            }
            for (feature_index, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ModelError::NonFiniteValue {
                        sample_index,
                        feature_index,
                    });
                }
            }
        }

        for (sample_index, &label) in labels.iter().enumerate() {
            if label > 1 {
                return Err(ModelError::LabelOutOfRange {
                    label,
                    sample_index,
                });
            }
        }

        if self.max_depth == Some(0) {
            return Err(ModelError::InvalidMaxDepth);
        }
        if self.min_samples_split < 2 {
            return Err(ModelError::InvalidMinSamplesSplit {
                min_samples_split: self.min_samples_split,
            });
        }
        if self.min_samples_leaf < 1 {
            return Err(ModelError::InvalidMinSamplesLeaf);
        }

        let n_classes = 2;

        // Column-major layout for the split scan.
        let col_features: Vec<Vec<f64>> = (0..n_features)
            .map(|feat_idx| features.iter().map(|row| row[feat_idx]).collect())
            .collect();

        let sample_indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut arena: Vec<TreeNode> = Vec::new();

        build_node(
            &col_features,
            labels,
            &sample_indices,
            n_classes,
            self,
            0,
            &mut rng,
            &mut arena,
        );

        Ok(DecisionTree {
            nodes: arena,
            n_features,
            n_classes,
        })
    }
}

impl Default for DecisionTreeParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively build the arena; returns the index of the created node.
#[allow(clippy::too_many_arguments)]
fn build_node(
    col_features: &[Vec<f64>],
    labels: &[usize],
    sample_indices: &[usize],
    n_classes: usize,
    params: &DecisionTreeParams,
    depth: usize,
    rng: &mut ChaCha8Rng,
    arena: &mut Vec<TreeNode>,
) -> usize {
    let n_samples = sample_indices.len();

    let mut class_counts = vec![0usize; n_classes];
    for &si in sample_indices {
        class_counts[labels[si]] += 1;
    }
    let impurity = gini(&class_counts, n_samples);

    let make_leaf = |arena: &mut Vec<TreeNode>| -> usize {
        let total = n_samples as f64;
        let distribution: Vec<f64> = class_counts.iter().map(|&c| c as f64 / total).collect();
        let prediction = class_counts
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1))
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        let idx = arena.len();
        arena.push(TreeNode::Leaf {
            prediction,
            distribution,
            impurity,
            n_samples,
        });
        idx
    };

    let depth_exceeded = params.max_depth.is_some_and(|max_d| depth >= max_d);
    if impurity == 0.0 || n_samples < params.min_samples_split || depth_exceeded {
        return make_leaf(arena);
    }

    let split = match find_best_split(
        col_features,
        labels,
        sample_indices,
        n_classes,
        params.min_samples_leaf,
        rng,
    ) {
        Some(s) => s,
        None => return make_leaf(arena),
    };

    // Reserve the slot, recurse, then overwrite with the split node.
    let node_idx = arena.len();
    arena.push(TreeNode::Leaf {
        prediction: 0,
        distribution: vec![0.0; n_classes],
        impurity,
        n_samples,
    });

    let left = build_node(
        col_features,
        labels,
        &split.left_indices,
        n_classes,
        params,
        depth + 1,
        rng,
        arena,
    );
    let right = build_node(
        col_features,
        labels,
        &split.right_indices,
        n_classes,
        params,
        depth + 1,
        rng,
        arena,
    );

    arena[node_idx] = TreeNode::Split {
        feature: split.feature,
        threshold: split.threshold,
        left,
        right,
        impurity,
        n_samples,
        impurity_decrease: split.impurity_decrease,
    };

    node_idx
}

/// A fitted CART decision tree over a fixed feature space.
///
/// Owned by a single training run; the app never persists it.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    n_features: usize,
    n_classes: usize,
}

impl DecisionTree {
    /// Predict the class for one sample.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::PredictionFeatureMismatch`] when the sample's
    /// dimensionality differs from the training data.
    pub fn predict(&self, sample: &[f64]) -> Result<usize, ModelError> {
        if sample.len() != self.n_features {
            return Err(ModelError::PredictionFeatureMismatch {
                expected: self.n_features,
                got: sample.len(),
            });
        }
        let leaf = self.traverse(sample);
        match &self.nodes[leaf] {
            TreeNode::Leaf { prediction, .. } => Ok(*prediction),
            TreeNode::Split { .. } => unreachable!("traverse always ends at a leaf"),
        }
    }

    /// Predict classes for a batch of samples.
    pub fn predict_batch(&self, samples: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        samples.iter().map(|row| self.predict(row)).collect()
    }

    /// Mean Decrease in Impurity feature importances.
    ///
    /// Per-split impurity decreases are accumulated by feature and
    /// normalized to sum to 1.0. A single-leaf tree yields all zeros.
    pub fn feature_importances(&self) -> Vec<f64> {
        let mut totals = vec![0.0f64; self.n_features];
        for node in &self.nodes {
            if let TreeNode::Split {
                feature,
                impurity_decrease,
                ..
            } = node
            {
                totals[*feature] += impurity_decrease;
            }
        }
        let sum: f64 = totals.iter().sum();
        if sum > 0.0 {
            totals.iter_mut().for_each(|v| *v /= sum);
        }
        totals
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// The node arena; the root is index 0.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Maximum depth; a single-leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0usize;
        let mut queue = std::collections::VecDeque::new();
        queue.push_back((0usize, 0usize));

        while let Some((node_idx, d)) = queue.pop_front() {
            match &self.nodes[node_idx] {
                TreeNode::Leaf { .. } => max_depth = max_depth.max(d),
                TreeNode::Split { left, right, .. } => {
                    queue.push_back((*left, d + 1));
                    queue.push_back((*right, d + 1));
                }
            }
        }

        max_depth
    }

    fn traverse(&self, sample: &[f64]) -> usize {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { .. } => return idx,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    idx = if sample[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_error() {
        let err = DecisionTreeParams::new().fit(&[], &[]).unwrap_err();
        assert!(matches!(err, ModelError::EmptyDataset));
    }

    #[test]
    fn pure_dataset_is_a_single_leaf() {
        let features = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let labels = vec![0, 0, 0];
        let tree = DecisionTreeParams::new().fit(&features, &labels).unwrap();
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.predict(&[2.0, 3.0]).unwrap(), 0);
    }

    #[test]
    fn linearly_separable_classifies_correctly() {
        let features = vec![
            vec![1.0, 0.0],
            vec![2.0, 0.0],
            vec![3.0, 0.0],
            vec![10.0, 0.0],
            vec![11.0, 0.0],
            vec![12.0, 0.0],
        ];
        let labels = vec![0, 0, 0, 1, 1, 1];
        let tree = DecisionTreeParams::new().fit(&features, &labels).unwrap();
        assert_eq!(tree.predict(&[2.5, 0.0]).unwrap(), 0);
        assert_eq!(tree.predict(&[11.5, 0.0]).unwrap(), 1);
    }

    #[test]
    fn xor_needs_depth_two() {
        let features = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let labels = vec![0, 1, 1, 0];
        let tree = DecisionTreeParams::new().fit(&features, &labels).unwrap();
        assert!(tree.depth() >= 2);
        for (row, &label) in features.iter().zip(labels.iter()) {
            assert_eq!(tree.predict(row).unwrap(), label);
        }
    }

    #[test]
    fn max_depth_caps_the_tree() {
        let features = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let labels = vec![0, 1, 1, 0];
        let tree = DecisionTreeParams::new()
            .with_max_depth(Some(1))
            .fit(&features, &labels)
            .unwrap();
        assert!(tree.depth() <= 1);
    }

    #[test]
    fn importances_sum_to_one_when_split() {
        let features = vec![
            vec![1.0, 100.0],
            vec![2.0, 200.0],
            vec![3.0, 300.0],
            vec![10.0, 100.0],
            vec![11.0, 200.0],
            vec![12.0, 300.0],
        ];
        let labels = vec![0, 0, 0, 1, 1, 1];
        let tree = DecisionTreeParams::new().fit(&features, &labels).unwrap();
        let sum: f64 = tree.feature_importances().iter().sum();
        assert!((sum - 1.0).abs() < 1e-10, "sum = {sum}");
    }

    #[test]
    fn single_leaf_importances_are_zero() {
        let features = vec![vec![1.0], vec![2.0]];
        let labels = vec![0, 0];
        let tree = DecisionTreeParams::new().fit(&features, &labels).unwrap();
        assert_eq!(tree.feature_importances(), vec![0.0]);
    }

    #[test]
    fn same_seed_same_structure() {
        let features = vec![
            vec![1.0, 5.0],
            vec![2.0, 6.0],
            vec![3.0, 7.0],
            vec![10.0, 15.0],
            vec![11.0, 16.0],
            vec![12.0, 17.0],
        ];
        let labels = vec![0, 0, 0, 1, 1, 1];
        let tree1 = DecisionTreeParams::new()
            .with_seed(42)
            .fit(&features, &labels)
            .unwrap();
        let tree2 = DecisionTreeParams::new()
            .with_seed(42)
            .fit(&features, &labels)
            .unwrap();
        assert_eq!(tree1.n_nodes(), tree2.n_nodes());
        for sample in &features {
            assert_eq!(
                tree1.predict(sample).unwrap(),
                tree2.predict(sample).unwrap()
            );
        }
    }

    #[test]
    fn ragged_rows_error() {
        let features = vec![vec![1.0, 2.0], vec![3.0]];
        let labels = vec![0, 1];
        let err = DecisionTreeParams::new().fit(&features, &labels).unwrap_err();
        assert!(matches!(err, ModelError::FeatureCountMismatch { .. }));
    }

    #[test]
    fn non_finite_value_error() {
        let features = vec![vec![1.0, f64::NAN], vec![3.0, 4.0]];
        let labels = vec![0, 1];
        let err = DecisionTreeParams::new().fit(&features, &labels).unwrap_err();
        assert!(matches!(err, ModelError::NonFiniteValue { .. }));
    }

    #[test]
    fn non_binary_label_error() {
        let features = vec![vec![1.0], vec![2.0]];
        let labels = vec![0, 2];
        let err = DecisionTreeParams::new().fit(&features, &labels).unwrap_err();
        assert!(matches!(err, ModelError::LabelOutOfRange { .. }));
    }

    #[test]
    fn prediction_dimensionality_error() {
        let features = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let labels = vec![0, 1];
        let tree = DecisionTreeParams::new().fit(&features, &labels).unwrap();
        let err = tree.predict(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::PredictionFeatureMismatch { expected: 2, got: 1 }
        ));
    }
}

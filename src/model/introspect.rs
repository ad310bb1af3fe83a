//! Model introspection - tree diagram entries and ranked importances

use serde::Serialize;

use crate::model::node::TreeNode;
use crate::model::tree::DecisionTree;

/// One line of the rendered tree diagram, in preorder (left child first).
#[derive(Debug, Clone)]
pub struct DiagramEntry {
    /// Depth below the root (root is 0).
    pub depth: usize,
    pub node: DiagramNode,
}

#[derive(Debug, Clone)]
pub enum DiagramNode {
    /// An ordered threshold test on one feature.
    Rule {
        feature: String,
        threshold: f64,
        n_samples: usize,
        impurity: f64,
    },
    /// A terminal prediction, with the purity of its class distribution.
    Leaf {
        class_name: String,
        /// Fraction of training samples in the leaf belonging to the
        /// predicted class.
        purity: f64,
        n_samples: usize,
    },
}

/// Flatten the fitted tree into diagram entries for rendering.
pub fn tree_diagram(
    tree: &DecisionTree,
    feature_names: &[String],
    class_names: &[&str],
) -> Vec<DiagramEntry> {
    let mut entries = Vec::with_capacity(tree.n_nodes());
    let mut stack = vec![(0usize, 0usize)];

    while let Some((idx, depth)) = stack.pop() {
        match &tree.nodes()[idx] {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
                impurity,
                n_samples,
                ..
            } => {
                entries.push(DiagramEntry {
                    depth,
                    node: DiagramNode::Rule {
                        feature: feature_names
                            .get(*feature)
                            .cloned()
                            .unwrap_or_else(|| format!("feature {}", feature)),
                        threshold: *threshold,
                        n_samples: *n_samples,
                        impurity: *impurity,
                    },
                });
                // Right pushed first so the left child renders first.
                stack.push((*right, depth + 1));
                stack.push((*left, depth + 1));
            }
            TreeNode::Leaf {
                prediction,
                distribution,
                n_samples,
                ..
            } => {
                entries.push(DiagramEntry {
                    depth,
                    node: DiagramNode::Leaf {
                        class_name: class_names
                            .get(*prediction)
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| format!("class {}", prediction)),
                        purity: distribution.get(*prediction).copied().unwrap_or(0.0),
                        n_samples: *n_samples,
                    },
                });
            }
        }
    }

    entries
}

/// A feature paired with its importance score.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureImportance {
    pub name: String,
    pub importance: f64,
}

/// The `k` features with the highest importance, in ascending order of
/// importance (the most important comes last, ready for a bottom-up bar
/// chart).
///
/// The list is produced by a stable ascending sort followed by keeping the
/// last `k` entries, so when fewer than `k` features have nonzero
/// importance the result is padded with zero-importance features. That
/// padding is a known display artifact and is kept intentionally.
pub fn top_importances(
    tree: &DecisionTree,
    feature_names: &[String],
    k: usize,
) -> Vec<FeatureImportance> {
    let importances = tree.feature_importances();
    let mut ranked: Vec<FeatureImportance> = feature_names
        .iter()
        .zip(importances.iter())
        .map(|(name, &importance)| FeatureImportance {
            name: name.clone(),
            importance,
        })
        .collect();

    ranked.sort_by(|a, b| a.importance.total_cmp(&b.importance));

    let start = ranked.len().saturating_sub(k);
    ranked.split_off(start)
}

//! Model module - train/test partition, decision tree, evaluation,
//! and introspection

pub mod error;
pub mod introspect;
pub mod metrics;
pub mod node;
pub mod partition;
mod split;
pub mod tree;

pub use error::ModelError;
pub use introspect::{tree_diagram, top_importances, DiagramEntry, DiagramNode, FeatureImportance};
pub use metrics::{evaluate, ConfusionMatrix, Evaluation};
pub use node::TreeNode;
pub use partition::{train_test_split, TrainTestSplit};
pub use tree::{DecisionTree, DecisionTreeParams};

/// Seed used for both the 80/20 partition shuffle and the tree's internal
/// tie-breaking, guaranteeing identical results across repeated runs.
pub const DEFAULT_SEED: u64 = 42;

/// Fraction of samples held out for evaluation.
pub const TEST_FRACTION: f64 = 0.2;

/// Errors from model training, partitioning, and evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Returned when the dataset has zero samples.
    #[error("dataset has zero samples")]
    EmptyDataset,

    /// Returned when rows have zero feature columns.
    #[error("dataset has zero feature columns")]
    ZeroFeatures,

    /// Returned when a sample has a different number of features than expected.
    #[error("sample {sample_index} has {got} features, expected {expected}")]
    FeatureCountMismatch {
        expected: usize,
        got: usize,
        sample_index: usize,
    },

    /// Returned when a training value is NaN or infinite.
    #[error("non-finite value at sample {sample_index}, feature {feature_index}")]
    NonFiniteValue {
        sample_index: usize,
        feature_index: usize,
    },

    /// Returned when feature rows and labels disagree in length.
    #[error("{n_samples} samples but {n_labels} labels")]
    LabelCountMismatch { n_samples: usize, n_labels: usize },

    /// Returned when a label is outside the binary 0/1 range.
    #[error("label {label} at sample {sample_index} is not binary")]
    LabelOutOfRange { label: usize, sample_index: usize },

    /// Returned when a prediction input has the wrong dimensionality.
    #[error("prediction input has {got} features, expected {expected}")]
    PredictionFeatureMismatch { expected: usize, got: usize },

    /// Returned when the test fraction is outside (0, 1).
    #[error("test fraction must be in (0, 1), got {fraction}")]
    InvalidTestFraction { fraction: f64 },

    /// Returned when max_depth is zero.
    #[error("max_depth must be at least 1, got 0")]
    InvalidMaxDepth,

    /// Returned when min_samples_split is less than 2.
    #[error("min_samples_split must be at least 2, got {min_samples_split}")]
    InvalidMinSamplesSplit { min_samples_split: usize },

    /// Returned when min_samples_leaf is zero.
    #[error("min_samples_leaf must be at least 1, got 0")]
    InvalidMinSamplesLeaf,
}

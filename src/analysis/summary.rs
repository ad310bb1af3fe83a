//! Dataset summary - shape, classes, and a preview of the first rows

use polars::prelude::*;

use crate::dataset::SampleTable;

/// Number of rows shown verbatim in the preview.
pub const PREVIEW_ROWS: usize = 7;

/// Descriptive statistics for the exploration view. Purely derived; holds
/// no reference back into the table.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    /// Number of samples in the table.
    pub n_samples: usize,
    /// Number of columns, features plus the target.
    pub n_columns: usize,
    /// Class names in label order.
    pub class_names: Vec<String>,
    /// The first [`PREVIEW_ROWS`] rows, verbatim.
    pub preview: DataFrame,
}

/// Summarize the loaded table. No error conditions; the table was validated
/// at load time.
pub fn summarize(table: &SampleTable) -> DatasetSummary {
    DatasetSummary {
        n_samples: table.n_samples(),
        n_columns: table.n_columns(),
        class_names: table
            .class_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
        preview: table.head(PREVIEW_ROWS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_matches_bundled_shape() {
        let table = SampleTable::load().unwrap();
        let summary = summarize(&table);
        assert_eq!(summary.n_samples, 569);
        assert_eq!(summary.n_columns, 31);
        assert_eq!(summary.class_names, vec!["malignant", "benign"]);
        assert_eq!(summary.preview.height(), PREVIEW_ROWS);
    }

    #[test]
    fn preview_is_verbatim_head() {
        let table = SampleTable::load().unwrap();
        let summary = summarize(&table);
        let head = table.head(PREVIEW_ROWS);
        assert!(summary.preview.equals(&head));
    }
}

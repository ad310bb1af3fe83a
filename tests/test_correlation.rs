//! Integration tests for correlation analysis and threshold filtering

use mammoscope::analysis::{
    correlation_matrix, heatmap_for_threshold, pearson, select_correlated_features,
};
use mammoscope::dataset::TARGET_COLUMN;

#[path = "common/mod.rs"]
mod common;

#[test]
fn full_matrix_covers_every_column() {
    let table = common::bundled_table();
    let matrix = correlation_matrix(table.frame()).unwrap();
    assert_eq!(matrix.len(), 31);
    assert!(matrix.index_of(TARGET_COLUMN).is_some());
}

#[test]
fn matrix_is_symmetric_with_unit_diagonal() {
    let table = common::bundled_table();
    let matrix = correlation_matrix(table.frame()).unwrap();
    for i in 0..matrix.len() {
        assert!((matrix.get(i, i) - 1.0).abs() < 1e-12);
        for j in (i + 1)..matrix.len() {
            let diff = (matrix.get(i, j) - matrix.get(j, i)).abs();
            assert!(diff < 1e-9, "asymmetry at ({i}, {j}): {diff}");
            assert!(matrix.get(i, j).abs() <= 1.0 + 1e-12);
        }
    }
}

#[test]
fn radius_and_perimeter_are_strongly_correlated() {
    let table = common::bundled_table();
    let matrix = correlation_matrix(table.frame()).unwrap();
    let corr = matrix.between("mean radius", "mean perimeter").unwrap();
    assert!(corr > 0.99, "radius/perimeter corr = {corr}");
}

#[test]
fn selection_is_exactly_the_strict_threshold_set() {
    let table = common::bundled_table();
    let matrix = correlation_matrix(table.frame()).unwrap();
    let target: Vec<f64> = table.labels().unwrap().iter().map(|&l| l as f64).collect();

    for threshold in [0.0, 0.25, 0.5, 0.75, 0.9, 1.0] {
        let selected = select_correlated_features(&matrix, threshold);
        for name in table.feature_names() {
            let column = table.feature_column(&name).unwrap();
            let corr = pearson(&column, &target).unwrap_or(0.0);
            let expected = corr.abs() > threshold;
            assert_eq!(
                selected.contains(&name),
                expected,
                "feature '{name}' at threshold {threshold}: |corr| = {}",
                corr.abs()
            );
        }
    }
}

#[test]
fn selection_size_is_monotonically_non_increasing() {
    let table = common::bundled_table();
    let matrix = correlation_matrix(table.frame()).unwrap();
    let mut previous = usize::MAX;
    for step in 0..=20 {
        let threshold = step as f64 / 20.0;
        let size = select_correlated_features(&matrix, threshold).len();
        assert!(
            size <= previous,
            "selection grew from {previous} to {size} at threshold {threshold}"
        );
        previous = size;
    }
}

#[test]
fn default_threshold_selects_a_nonempty_subset() {
    let table = common::bundled_table();
    let heatmap = heatmap_for_threshold(table.frame(), 0.75).unwrap();
    assert!(!heatmap.selected.is_empty());
    // sub-matrix spans the selected features plus the target
    assert_eq!(heatmap.matrix.len(), heatmap.selected.len() + 1);
}

#[test]
fn max_threshold_degrades_to_target_only_matrix() {
    let table = common::bundled_table();
    let heatmap = heatmap_for_threshold(table.frame(), 1.0).unwrap();
    assert!(heatmap.selected.is_empty());
    assert_eq!(heatmap.matrix.len(), 1);
    assert_eq!(heatmap.matrix.names(), &[TARGET_COLUMN.to_string()]);
    assert!((heatmap.matrix.get(0, 0) - 1.0).abs() < 1e-12);
}

#[test]
fn submatrix_values_match_full_matrix() {
    let table = common::bundled_table();
    let full = correlation_matrix(table.frame()).unwrap();
    let heatmap = heatmap_for_threshold(table.frame(), 0.5).unwrap();
    for a in heatmap.matrix.names() {
        for b in heatmap.matrix.names() {
            let sub = heatmap.matrix.between(a, b).unwrap();
            let reference = full.between(a, b).unwrap();
            assert!(
                (sub - reference).abs() < 1e-9,
                "({a}, {b}): sub={sub} full={reference}"
            );
        }
    }
}

#[test]
fn strong_features_pass_filter_on_synthetic_table() {
    let table = common::correlation_table();
    let matrix = correlation_matrix(table.frame()).unwrap();
    let selected = select_correlated_features(&matrix, 0.8);
    assert!(selected.contains(&"strong_pos".to_string()));
    assert!(selected.contains(&"strong_neg".to_string()));
    assert!(!selected.contains(&"noise".to_string()));
}

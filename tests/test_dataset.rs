//! Integration tests for the bundled dataset loader

use mammoscope::dataset::{SampleTable, CLASS_NAMES, TARGET_COLUMN};

#[path = "common/mod.rs"]
mod common;

#[test]
fn bundled_dataset_has_expected_shape() {
    let table = common::bundled_table();
    assert_eq!(table.n_samples(), 569);
    assert_eq!(table.n_features(), 30);
    assert_eq!(table.n_columns(), 31);
}

#[test]
fn class_names_are_fixed() {
    assert_eq!(CLASS_NAMES, ["malignant", "benign"]);
}

#[test]
fn feature_names_exclude_target() {
    let table = common::bundled_table();
    let names = table.feature_names();
    assert_eq!(names.len(), 30);
    assert!(!names.iter().any(|n| n == TARGET_COLUMN));
    assert_eq!(names[0], "mean radius");
}

#[test]
fn labels_are_binary_with_wdbc_balance() {
    let table = common::bundled_table();
    let labels = table.labels().unwrap();
    assert_eq!(labels.len(), 569);
    let malignant = labels.iter().filter(|&&l| l == 0).count();
    let benign = labels.iter().filter(|&&l| l == 1).count();
    assert_eq!(malignant, 212);
    assert_eq!(benign, 357);
}

#[test]
fn matrix_dimensions_match_table() {
    let table = common::bundled_table();
    let matrix = table.feature_matrix().unwrap();
    assert_eq!(matrix.len(), 569);
    assert!(matrix.iter().all(|row| row.len() == 30));
    assert!(matrix
        .iter()
        .all(|row| row.iter().all(|v| v.is_finite())));
}

#[test]
fn head_returns_verbatim_leading_rows() {
    let table = common::bundled_table();
    let head = table.head(7);
    assert_eq!(head.height(), 7);
    assert_eq!(head.width(), 31);
    // First preview row must equal the first table row.
    let full_first = table.frame().head(Some(1));
    assert!(head.head(Some(1)).equals(&full_first));
}

#[test]
fn loading_twice_yields_identical_tables() {
    let a = SampleTable::load().unwrap();
    let b = SampleTable::load().unwrap();
    assert!(a.frame().equals(b.frame()));
}

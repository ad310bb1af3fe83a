//! Shared test utilities and fixture tables

use mammoscope::dataset::SampleTable;
use polars::prelude::*;

/// The bundled breast cancer table.
pub fn bundled_table() -> SampleTable {
    SampleTable::load().expect("bundled dataset must load")
}

/// A small table with known correlation structure:
/// - `strong_pos` tracks the target almost exactly
/// - `strong_neg` mirrors it
/// - `noise` is unrelated to the target
#[allow(dead_code)]
pub fn correlation_table() -> SampleTable {
    let df = df! {
        "strong_pos" => [0.1f64, 0.2, 0.15, 0.9, 0.85, 0.95, 0.05, 0.88, 0.12, 0.92],
        "strong_neg" => [0.9f64, 0.8, 0.85, 0.1, 0.15, 0.05, 0.95, 0.12, 0.88, 0.08],
        "noise" => [0.3f64, 0.7, 0.2, 0.4, 0.9, 0.1, 0.6, 0.5, 0.8, 0.35],
        "target" => [0i32, 0, 0, 1, 1, 1, 0, 1, 0, 1],
    }
    .unwrap();
    SampleTable::from_frame(df).unwrap()
}

/// A linearly separable table large enough to split and fit.
#[allow(dead_code)]
pub fn separable_table() -> SampleTable {
    let n = 40;
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut target = Vec::with_capacity(n);
    for i in 0..n {
        let class = i % 2;
        let offset = (i / 2) as f64 * 0.1;
        x.push(if class == 0 { 1.0 + offset } else { 10.0 + offset });
        y.push(offset);
        target.push(class as i32);
    }
    let df = df! {
        "x" => &x,
        "y" => &y,
        "target" => &target,
    }
    .unwrap();
    SampleTable::from_frame(df).unwrap()
}

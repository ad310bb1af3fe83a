//! Exploration view rendering

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::analysis::DatasetSummary;

/// Print the dataset summary: shape, classes, and the first rows verbatim.
pub fn render_exploration(summary: &DatasetSummary) {
    println!(
        "    {} Dataset Statistics:",
        style("✧").cyan()
    );
    println!("      Samples:  {}", style(summary.n_samples).yellow().bold());
    println!("      Columns:  {}", style(summary.n_columns).yellow().bold());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Class").add_attribute(Attribute::Bold),
    ]);
    for (label, name) in summary.class_names.iter().enumerate() {
        table.add_row(vec![Cell::new(label), Cell::new(name)]);
    }
    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    println!();
    println!(
        "    {} {}",
        style("✧").cyan(),
        style(format!("Sample Data (first {} rows):", summary.preview.height())).white()
    );
    // polars' own formatter handles the 31-column width gracefully.
    for line in format!("{}", summary.preview).lines() {
        println!("    {}", line);
    }
}

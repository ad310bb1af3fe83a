//! Correlation heatmap rendering

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::analysis::CorrelationHeatmap;

/// Longest column label shown in the heatmap header before truncation.
const LABEL_WIDTH: usize = 14;

/// Print the threshold-filtered correlation heatmap as an annotated grid.
pub fn render_heatmap(heatmap: &CorrelationHeatmap) {
    println!(
        "    {} {}",
        style("✧").cyan(),
        style(format!(
            "Correlation Heatmap (threshold: {:.2})",
            heatmap.threshold
        ))
        .white()
        .bold()
    );

    if heatmap.selected.is_empty() {
        println!(
            "      {} No feature exceeds |corr| > {:.2} with the target; showing the target alone.",
            style("ℹ").cyan(),
            heatmap.threshold
        );
    } else {
        println!(
            "      {} feature(s) above the threshold: {}",
            style(heatmap.selected.len()).yellow().bold(),
            heatmap.selected.join(", ")
        );
    }
    println!();

    let matrix = &heatmap.matrix;
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("").add_attribute(Attribute::Bold)];
    for name in matrix.names() {
        header.push(Cell::new(truncate(name)).add_attribute(Attribute::Bold));
    }
    table.set_header(header);

    for (i, name) in matrix.names().iter().enumerate() {
        let mut row = vec![Cell::new(truncate(name)).add_attribute(Attribute::Bold)];
        for j in 0..matrix.len() {
            let value = matrix.get(i, j);
            row.push(Cell::new(format!("{:.2}", value)).fg(value_color(value)));
        }
        table.add_row(row);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Hotter colors for stronger correlations.
fn value_color(value: f64) -> Color {
    let magnitude = value.abs();
    if magnitude >= 0.95 {
        Color::Red
    } else if magnitude >= 0.7 {
        Color::Yellow
    } else if magnitude >= 0.4 {
        Color::Cyan
    } else {
        Color::White
    }
}

fn truncate(name: &str) -> String {
    if name.len() <= LABEL_WIDTH {
        name.to_string()
    } else {
        format!("{}…", &name[..LABEL_WIDTH - 1])
    }
}

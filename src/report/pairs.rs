//! Pair plot rendering - character-grid scatter panels and class-split
//! marginal histograms

use console::style;

use crate::analysis::{HistogramBin, MarginalHistogram, PairPlotData, PairSelection, ScatterPanel};
use crate::utils::{print_info, print_warning};

const GRID_WIDTH: usize = 48;
const GRID_HEIGHT: usize = 14;
const BAR_WIDTH: usize = 24;

/// Render the pair plot flow result, including the empty-selection prompt
/// and the truncation warning.
pub fn render_pair_plot(selection: &PairSelection, class_names: &[&str; 2]) {
    match selection {
        PairSelection::Empty => {
            print_info("Please select at least one feature to display the pair plot.");
        }
        PairSelection::Plot(data) => {
            if data.truncated {
                print_warning(&format!(
                    "More than {} features selected; showing the first {} of your selection.",
                    crate::analysis::MAX_PAIR_FEATURES,
                    crate::analysis::MAX_PAIR_FEATURES
                ));
            }
            render_panels(data, class_names);
        }
    }
}

fn render_panels(data: &PairPlotData, class_names: &[&str; 2]) {
    println!(
        "    {} {}",
        style("✧").cyan(),
        style(format!("Pair Plot for: {}", data.features.join(", ")))
            .white()
            .bold()
    );
    println!(
        "      {} = {}   {} = {}",
        style("•").magenta(),
        class_names[0],
        style("•").green(),
        class_names[1]
    );

    for panel in &data.panels {
        println!();
        render_scatter(panel);
    }

    println!();
    println!(
        "    {} {}",
        style("✧").cyan(),
        style("Marginal Distributions").white().bold()
    );
    for marginal in &data.marginals {
        println!();
        render_marginal(marginal);
    }
}

/// Plot one feature pair as a fixed-size character grid. Cells holding
/// samples of both classes render as a mixed marker.
fn render_scatter(panel: &ScatterPanel) {
    let correlation = panel
        .correlation
        .map(|r| format!(" (r = {:.2})", r))
        .unwrap_or_default();
    println!(
        "      {} vs {}{}",
        style(&panel.x).yellow(),
        style(&panel.y).yellow(),
        style(correlation).dim()
    );

    let (min_x, max_x) = bounds(panel.points.iter().map(|p| p.x));
    let (min_y, max_y) = bounds(panel.points.iter().map(|p| p.y));
    let span_x = (max_x - min_x).max(f64::MIN_POSITIVE);
    let span_y = (max_y - min_y).max(f64::MIN_POSITIVE);

    // 0 = empty, 1 = class 0, 2 = class 1, 3 = both
    let mut grid = vec![[0u8; GRID_WIDTH]; GRID_HEIGHT];
    for point in &panel.points {
        let col = (((point.x - min_x) / span_x) * (GRID_WIDTH - 1) as f64).round() as usize;
        let row = (((point.y - min_y) / span_y) * (GRID_HEIGHT - 1) as f64).round() as usize;
        let row = GRID_HEIGHT - 1 - row;
        let mark = if point.label == 0 { 1 } else { 2 };
        grid[row][col] |= mark;
    }

    for row in &grid {
        let mut line = String::new();
        for &cell in row.iter() {
            let glyph = match cell {
                0 => style(" ".to_string()),
                1 => style("•".to_string()).magenta(),
                2 => style("•".to_string()).green(),
                _ => style("◆".to_string()).yellow(),
            };
            line.push_str(&glyph.to_string());
        }
        println!("      {}{}{}", style("│").dim(), line, style("│").dim());
    }
    println!(
        "      {}{}{}",
        style("└").dim(),
        style("─".repeat(GRID_WIDTH)).dim(),
        style("┘").dim()
    );
    println!(
        "       {:<24}{:>24}",
        style(format!("{:.2}", min_x)).dim(),
        style(format!("{:.2}", max_x)).dim()
    );
}

/// Render one class-split histogram as paired bars per bin.
fn render_marginal(marginal: &MarginalHistogram) {
    println!("      {}", style(&marginal.feature).yellow());

    let max_count = marginal
        .bins
        .iter()
        .map(|b| b.counts[0].max(b.counts[1]))
        .max()
        .unwrap_or(1)
        .max(1);

    for bin in &marginal.bins {
        println!(
            "        {:>9.2}–{:<9.2} {} {}",
            bin.lower,
            bin.upper,
            style(bar(bin, 0, max_count)).magenta(),
            style(bar(bin, 1, max_count)).green(),
        );
    }
}

fn bar(bin: &HistogramBin, class: usize, max_count: usize) -> String {
    let count = bin.counts[class];
    let width = (count * BAR_WIDTH).div_ceil(max_count).min(BAR_WIDTH);
    let blocks: String = "▇".repeat(width);
    if count == 0 {
        "·".to_string()
    } else {
        format!("{} {}", blocks, count)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

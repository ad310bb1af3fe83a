//! Classification view rendering - metrics, confusion matrix, tree
//! diagram, and feature importances

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::model::{ConfusionMatrix, DiagramEntry, DiagramNode, Evaluation, FeatureImportance};

const IMPORTANCE_BAR_WIDTH: usize = 28;

/// Print the four evaluation metrics to four decimal places.
pub fn render_metrics(evaluation: &Evaluation) {
    println!(
        "    {} {}",
        style("✧").cyan(),
        style("Model Evaluation Metrics").white().bold()
    );
    for (name, value) in [
        ("Accuracy ", evaluation.accuracy),
        ("Precision", evaluation.precision),
        ("Recall   ", evaluation.recall),
        ("F1-score ", evaluation.f1),
    ] {
        println!(
            "      {}  {}",
            name,
            style(format!("{:.4}", value)).yellow().bold()
        );
    }
}

/// Print the 2x2 confusion matrix with labeled axes.
pub fn render_confusion(confusion: &ConfusionMatrix, class_names: &[&str; 2]) {
    println!(
        "    {} {}",
        style("✧").cyan(),
        style("Confusion Matrix").white().bold()
    );
    println!("      {}", style("rows = true, columns = predicted").dim());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("").add_attribute(Attribute::Bold),
        Cell::new(format!("pred {}", class_names[0])).add_attribute(Attribute::Bold),
        Cell::new(format!("pred {}", class_names[1])).add_attribute(Attribute::Bold),
    ]);

    let rows = confusion.as_rows();
    for (label, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("true {}", class_names[label])).add_attribute(Attribute::Bold),
            // diagonal cells are the correct predictions
            Cell::new(row[0]).fg(if label == 0 { Color::Green } else { Color::Red }),
            Cell::new(row[1]).fg(if label == 1 { Color::Green } else { Color::Red }),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Print the fitted tree, one node per line, leaves colored by class.
pub fn render_tree_diagram(entries: &[DiagramEntry]) {
    println!(
        "    {} {}",
        style("✧").cyan(),
        style("Decision Tree Diagram").white().bold()
    );

    for entry in entries {
        let indent = "│  ".repeat(entry.depth);
        match &entry.node {
            DiagramNode::Rule {
                feature,
                threshold,
                n_samples,
                impurity,
            } => {
                println!(
                    "      {}{} {} ≤ {:.3} {}",
                    style(&indent).dim(),
                    style("├─").dim(),
                    style(feature).yellow(),
                    threshold,
                    style(format!("[{} samples, gini {:.3}]", n_samples, impurity)).dim()
                );
            }
            DiagramNode::Leaf {
                class_name,
                purity,
                n_samples,
            } => {
                let label = if class_name == "benign" {
                    style(class_name.clone()).green().bold()
                } else {
                    style(class_name.clone()).magenta().bold()
                };
                println!(
                    "      {}{} {} {}",
                    style(&indent).dim(),
                    style("└▶").dim(),
                    label,
                    style(format!("({:.1}% pure, {} samples)", purity * 100.0, n_samples)).dim()
                );
            }
        }
    }
}

/// Print the top importances as a bottom-up bar chart: ascending order,
/// most important feature last.
pub fn render_importances(importances: &[FeatureImportance]) {
    println!(
        "    {} {}",
        style("✧").cyan(),
        style("Top Feature Importances").white().bold()
    );

    let max_importance = importances
        .iter()
        .map(|f| f.importance)
        .fold(0.0f64, f64::max)
        .max(f64::MIN_POSITIVE);

    for feature in importances {
        let width = ((feature.importance / max_importance) * IMPORTANCE_BAR_WIDTH as f64).round()
            as usize;
        let bar = if width == 0 {
            style("·".to_string()).dim()
        } else {
            style("█".repeat(width)).cyan()
        };
        println!(
            "      {:<28} {} {}",
            feature.name,
            bar,
            style(format!("{:.4}", feature.importance)).dim()
        );
    }
}

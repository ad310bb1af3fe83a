//! Command-line argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Mammoscope - explore the breast cancer dataset and train a decision-tree
/// classifier in your terminal
#[derive(Parser, Debug)]
#[command(name = "mammoscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// View to render non-interactively. Without this flag the tool starts
    /// an interactive menu.
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Correlation threshold for the heatmap filter: features whose absolute
    /// correlation with the target exceeds this value are kept.
    #[arg(long, default_value = "0.75", value_parser = validate_threshold)]
    pub threshold: f64,

    /// Features for the pair plot (comma-separated). Defaults to the first
    /// four features in dataset order; selections beyond four are truncated
    /// with a warning.
    #[arg(long, value_delimiter = ',')]
    pub features: Vec<String>,

    /// RNG seed for the train/test split and tree tie-breaking
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write the classification report as JSON to this path
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Skip interactive prompts and run all three views in sequence
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

/// The three renderable views, plus a shortcut for all of them.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewArg {
    /// Dataset shape, classes, and a row preview
    Explore,
    /// Correlation heatmap and pair plots
    Visualize,
    /// Train, evaluate, and introspect the decision tree
    Classify,
    /// All three views in sequence
    All,
}

/// Validator for the correlation threshold parameter
fn validate_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=1.0).contains(&value) {
        Err(format!(
            "threshold must be between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_accepts_bounds() {
        assert!(validate_threshold("0.0").is_ok());
        assert!(validate_threshold("1.0").is_ok());
        assert!(validate_threshold("0.75").is_ok());
    }

    #[test]
    fn threshold_rejects_out_of_range() {
        assert!(validate_threshold("1.01").is_err());
        assert!(validate_threshold("-0.1").is_err());
        assert!(validate_threshold("abc").is_err());
    }
}

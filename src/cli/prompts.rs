//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{Input, MultiSelect, Select};

/// A choice from the main view menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChoice {
    Explore,
    Visualize,
    Classify,
    Quit,
}

/// Show the main view menu and return the user's choice.
pub fn select_view() -> Result<ViewChoice> {
    let items = [
        "Data Exploration",
        "Data Visualization",
        "Classification Model",
        "Quit",
    ];
    let selection = Select::new()
        .with_prompt("Explore options")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => ViewChoice::Explore,
        1 => ViewChoice::Visualize,
        2 => ViewChoice::Classify,
        _ => ViewChoice::Quit,
    })
}

/// Prompt for the correlation threshold, validated to [0, 1].
pub fn prompt_threshold(default: f64) -> Result<f64> {
    let value: f64 = Input::new()
        .with_prompt("Correlation threshold (0.0 - 1.0)")
        .default(default)
        .validate_with(|input: &f64| {
            if (0.0..=1.0).contains(input) {
                Ok(())
            } else {
                Err("threshold must be between 0.0 and 1.0")
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Multi-select the pair plot features. `defaults` are pre-checked; an
/// empty result is legal and maps to the "please select" state.
pub fn select_pair_features(available: &[String], defaults: &[String]) -> Result<Vec<String>> {
    let checked: Vec<bool> = available
        .iter()
        .map(|name| defaults.contains(name))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Select features for the pair plot (space to toggle, enter to confirm)")
        .items(available)
        .defaults(&checked)
        .interact()?;

    Ok(picked.into_iter().map(|i| available[i].clone()).collect())
}

//! Terminal styling utilities

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static RIBBON: Emoji<'_, '_> = Emoji("🎗️  ", ">> ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}{}",
        RIBBON,
        style("Mammoscope - Breast Cancer Dataset Exploration & Classification")
            .cyan()
            .bold()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(64)).dim());
    println!(
        "    {}",
        style("Explore the bundled breast cancer table, visualize feature").dim()
    );
    println!(
        "    {}",
        style("relationships, and train a decision-tree classifier.").dim()
    );
    println!(
        "    {}",
        style("For educational use only; not for medical decision-making.").dim()
    );
    println!();
}

/// Print the configuration card for a run
pub fn print_config(view: &str, threshold: f64, seed: u64) {
    println!(
        "    {} View: {}   {} Threshold: {}   Seed: {}",
        CHART,
        style(view).yellow().bold(),
        TARGET,
        style(format!("{:.2}", threshold)).yellow(),
        style(seed).yellow()
    );
    println!();
}

/// Print a step header with styling
pub fn print_step_header(title: &str) {
    println!();
    println!(
        "    {} {}",
        style("▌").cyan().bold(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print a user-visible warning (never fatal)
pub fn print_warning(message: &str) {
    println!("    {}{}", WARNING, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {}{}",
        RIBBON,
        style("Mammoscope session complete!").green().bold()
    );
    println!();
}

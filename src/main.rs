//! Mammoscope: Breast Cancer Dataset Exploration & Classification
//!
//! An interactive terminal tool over the bundled breast cancer table:
//! dataset exploration, correlation/pair-plot visualization, and a
//! decision-tree classification flow.

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use mammoscope::analysis::{heatmap_for_threshold, pair_plot, summarize};
use mammoscope::cli::{
    prompt_threshold, select_pair_features, select_view, Cli, ViewArg, ViewChoice,
};
use mammoscope::dataset::SampleTable;
use mammoscope::model::{
    evaluate, top_importances, train_test_split, tree_diagram, DecisionTreeParams, TEST_FRACTION,
};
use mammoscope::report::{
    export_classification_report, render_confusion, render_exploration, render_heatmap,
    render_importances, render_metrics, render_pair_plot, render_tree_diagram,
};
use mammoscope::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_step_header, print_success,
};

/// How many of the ranked features the importance chart shows.
const TOP_FEATURES: usize = 10;

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));

    let table = SampleTable::load()?;
    let pair_features = default_pair_features(&table, &cli.features);

    // Non-interactive: a single view (or all of them), then exit.
    if let Some(view) = cli.view {
        run_view(view, &table, &cli, &pair_features)?;
        print_completion();
        return Ok(());
    }
    if cli.no_confirm {
        run_view(ViewArg::All, &table, &cli, &pair_features)?;
        print_completion();
        return Ok(());
    }

    // Interactive menu, looping until the user quits.
    print_info("Pick a view to explore the dataset, visualize feature relationships,");
    print_info("or train and inspect the decision-tree classifier.");

    loop {
        println!();
        match select_view()? {
            ViewChoice::Explore => run_exploration(&table),
            ViewChoice::Visualize => {
                let threshold = prompt_threshold(cli.threshold)?;
                let selected = select_pair_features(&table.feature_names(), &pair_features)?;
                run_visualization(&table, threshold, &selected)?;
            }
            ViewChoice::Classify => {
                run_classification(&table, cli.seed, cli.export.as_deref())?;
            }
            ViewChoice::Quit => break,
        }
    }

    print_completion();
    Ok(())
}

/// The pair plot defaults to the first four features in dataset order when
/// no explicit selection was given.
fn default_pair_features(table: &SampleTable, requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        table.feature_names().into_iter().take(4).collect()
    } else {
        requested.to_vec()
    }
}

fn run_view(view: ViewArg, table: &SampleTable, cli: &Cli, pair_features: &[String]) -> Result<()> {
    let label = match view {
        ViewArg::Explore => "exploration",
        ViewArg::Visualize => "visualization",
        ViewArg::Classify => "classification",
        ViewArg::All => "all",
    };
    print_config(label, cli.threshold, cli.seed);

    match view {
        ViewArg::Explore => run_exploration(table),
        ViewArg::Visualize => run_visualization(table, cli.threshold, pair_features)?,
        ViewArg::Classify => run_classification(table, cli.seed, cli.export.as_deref())?,
        ViewArg::All => {
            run_exploration(table);
            run_visualization(table, cli.threshold, pair_features)?;
            run_classification(table, cli.seed, cli.export.as_deref())?;
        }
    }
    Ok(())
}

/// Data Exploration view: shape, classes, first rows.
fn run_exploration(table: &SampleTable) {
    print_step_header("Data Exploration");
    let summary = summarize(table);
    render_exploration(&summary);
}

/// Data Visualization view: correlation heatmap plus pair plots.
fn run_visualization(table: &SampleTable, threshold: f64, features: &[String]) -> Result<()> {
    print_step_header("Correlation Heatmap");
    let heatmap = heatmap_for_threshold(table.frame(), threshold)?;
    render_heatmap(&heatmap);

    print_step_header("Pair Plot Analysis");
    let selection = pair_plot(table, features)?;
    render_pair_plot(&selection, table.class_names());
    Ok(())
}

/// Classification view: split, fit, evaluate, introspect, optionally export.
fn run_classification(table: &SampleTable, seed: u64, export: Option<&Path>) -> Result<()> {
    print_step_header("Classification Model");

    let features = table.feature_matrix()?;
    let labels = table.labels()?;

    let split = train_test_split(table.n_samples(), TEST_FRACTION, seed)?;
    let (train_x, train_y) = split.train_set(&features, &labels);
    let (test_x, test_y) = split.test_set(&features, &labels);
    println!(
        "      Split: {} training / {} test samples (seed {})",
        split.n_train(),
        split.n_test(),
        seed
    );

    let spinner = create_spinner("Training decision tree classifier...");
    let tree = DecisionTreeParams::new()
        .with_seed(seed)
        .fit(&train_x, &train_y)?;
    finish_with_success(
        &spinner,
        &format!(
            "Classifier trained ({} nodes, depth {})",
            tree.n_nodes(),
            tree.depth()
        ),
    );

    let evaluation = evaluate(&tree, &test_x, &test_y)?;

    println!();
    render_metrics(&evaluation);
    println!();
    render_confusion(&evaluation.confusion, table.class_names());

    println!();
    let feature_names = table.feature_names();
    let diagram = tree_diagram(&tree, &feature_names, table.class_names());
    render_tree_diagram(&diagram);

    println!();
    let importances = top_importances(&tree, &feature_names, TOP_FEATURES);
    render_importances(&importances);

    if let Some(path) = export {
        export_classification_report(path, &evaluation, &importances, &split)?;
        print_success(&format!("Report written to {}", path.display()));
    }

    Ok(())
}

//! Plot command implementation.
//!
//! Plotting never fails the command: unknown keys and renderer problems are
//! reported and skipped.

use console::style;

use lmpo_topology::{
    GraphvizRenderer, PlotOptions, PlotOutcome, PlotRequest, TopologyKey, plot_topology, registry,
};

/// Execute the plot command.
pub fn execute(
    key: &str,
    transpose: bool,
    alternating: bool,
    save: Option<String>,
    dot: bool,
    program: &str,
) {
    // The qubit count comes from the key; an unparsable key is skipped below.
    let n_qubits = key.parse::<TopologyKey>().map_or(0, |k| k.n_qubits());
    let options = PlotOptions {
        transpose,
        alternating,
        save_prefix: save,
    };

    if dot {
        match PlotRequest::new(registry(), key, n_qubits, &options) {
            Ok(request) => print!("{}", request.to_dot()),
            Err(e) => print_skipped(&e.to_string()),
        }
        return;
    }

    let renderer = GraphvizRenderer::with_program(program);
    match plot_topology(&renderer, key, n_qubits, &options) {
        Ok(PlotOutcome::Rendered(rendered)) => match rendered.output {
            Some(path) => println!(
                "{} Saved {} to {}",
                style("✓").green().bold(),
                key,
                style(path.display()).cyan()
            ),
            None => println!(
                "{} Rendered {} ({} bytes, not saved; use --save PREFIX)",
                style("✓").green().bold(),
                key,
                rendered.image.len()
            ),
        },
        Ok(PlotOutcome::Skipped(reason)) => print_skipped(&reason),
        Err(e) => print_skipped(&e.to_string()),
    }
}

fn print_skipped(reason: &str) {
    println!("{} Plot skipped: {}", style("!").yellow().bold(), reason);
}

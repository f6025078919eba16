//! Solve command implementation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use lmpo_solver::SolverOutput;
use lmpo_topology::topology;

use super::common::{OutputFormat, SolverKind, load_params, make_solver};

/// Execute the solve command.
pub async fn execute(
    params_path: &Path,
    topology_key: Option<&str>,
    kind: SolverKind,
    solver_path: Option<PathBuf>,
    launcher: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let seed = topology_key
        .map(|key| topology(key).with_context(|| format!("Cannot seed parameters from '{key}'")))
        .transpose()?;
    let params = load_params(params_path, seed)?;
    let solver = make_solver(kind, solver_path, launcher);

    info!(
        solver = solver.name(),
        n_qubits = params.n_qubits,
        t_final = params.t_final,
        "Starting solve"
    );
    if format == OutputFormat::Table {
        println!(
            "{} Solving {} qubits to t = {} with {}",
            style("→").cyan().bold(),
            params.n_qubits,
            params.t_final,
            style(solver.name()).bold()
        );
    }

    let start = Instant::now();
    let output = solver
        .solve(&params)
        .await
        .with_context(|| format!("Solver '{}' failed", solver.name()))?;
    let elapsed = start.elapsed();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Table => {
            print_final_values(&output);
            println!(
                "\n  Elapsed: {} ms",
                style(elapsed.as_millis()).yellow()
            );
        }
    }

    Ok(())
}

/// Print the last recorded value of every observable.
fn print_final_values(output: &SolverOutput) {
    println!(
        "\n{} Final values ({} observables):",
        style("✓").green().bold(),
        output.len()
    );
    for (key, series) in output.iter() {
        let qubits: Vec<String> = key.qubits.iter().map(ToString::to_string).collect();
        let Some(value) = series.last() else {
            continue;
        };
        println!(
            "  {}({}) {:>12.8}  {}",
            style(key.op).cyan(),
            qubits.join(","),
            value,
            style(format!("t = {}", series.times.last().copied().unwrap_or_default())).dim()
        );
    }
}

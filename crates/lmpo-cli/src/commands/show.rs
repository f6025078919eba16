//! Show command implementation.
//!
//! Print the three tables of one topology.

use anyhow::{Context, Result};
use console::style;

use lmpo_topology::topology;

use super::common::OutputFormat;

/// Execute the show command.
pub fn execute(key: &str, format: OutputFormat) -> Result<()> {
    let t = topology(key).with_context(|| format!("Cannot show '{key}'"))?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(t)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Table => {
            println!(
                "{} {} ({} qubits, {})",
                style("→").cyan().bold(),
                style(t.key()).bold(),
                t.n_qubits(),
                if t.source().is_literal() {
                    "literal"
                } else {
                    "generated"
                }
            );
            println!("\n  {:>5} {:>10} {:>6}", "qubit", "(row, col)", "field");
            for (q, ((row, col), field)) in t
                .coordinates()
                .iter()
                .zip(t.field_pattern())
                .enumerate()
            {
                let field = if *field == 0.0 {
                    style(format!("{field}")).dim()
                } else {
                    style(format!("{field}")).yellow()
                };
                println!("  {q:>5} {:>10} {field:>6}", format!("({row}, {col})"));
            }

            let bonds: Vec<String> = t
                .coupling_map()
                .iter()
                .map(|(a, b)| format!("{a}-{b}"))
                .collect();
            println!("\n  Coupling map ({} entries):", bonds.len());
            for chunk in bonds.chunks(10) {
                println!("    {}", chunk.join(" "));
            }
        }
    }

    Ok(())
}

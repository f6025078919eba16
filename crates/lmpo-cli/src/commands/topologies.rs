//! Topologies command implementation.

use anyhow::Result;
use console::style;

use lmpo_topology::registry;

use super::common::parse_family;

/// Execute the topologies command.
pub fn execute(family: Option<&str>) -> Result<()> {
    let family = family.map(parse_family).transpose()?;
    let registry = registry();

    let topologies: Vec<_> = match family {
        Some(family) => registry.by_family(family).collect(),
        None => registry.iter().collect(),
    };

    println!(
        "{} {} registered topologies:\n",
        style("lmpo").cyan().bold(),
        topologies.len()
    );
    println!(
        "  {:<16} {:>6} {:>6} {:>7}",
        style("key").bold(),
        style("qubits").bold(),
        style("bonds").bold(),
        style("driven").bold()
    );

    for t in topologies {
        println!(
            "  {:<16} {:>6} {:>6} {:>7}",
            style(t.key().to_string()).cyan(),
            t.n_qubits(),
            t.graph().edge_count(),
            t.driven_qubits().len()
        );
    }

    Ok(())
}

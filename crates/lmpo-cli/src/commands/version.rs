//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - lattice topologies and solver runs for lindbladmpo",
        style("lmpo").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  lmpo-topology  Coupling maps, layouts and field patterns");
    println!("  lmpo-solver    Solver parameters, results and process adapter");
    println!("  lmpo-cli       Command-line interface");
    println!();
    println!(
        "Solver binary: {}",
        style(lmpo_solver::ProcessSolverConfig::from_env().solver_path.display()).dim()
    );
    println!("License:       {}", style("Apache-2.0").dim());
}

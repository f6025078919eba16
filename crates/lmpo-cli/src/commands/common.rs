//! Shared helpers for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use lmpo_solver::{
    BlochSolver, Coefficient, ProcessSolver, ProcessSolverConfig, Solver, SolverParams,
};
use lmpo_topology::{Family, Topology};

/// How command output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Which solver `lmpo solve` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolverKind {
    /// Native lindbladmpo binary.
    Process,
    /// In-process Bloch equations (uncoupled qubits only).
    Bloch,
}

/// Parse a `--family` argument.
pub fn parse_family(name: &str) -> Result<Family> {
    name.to_lowercase().parse::<Family>().map_err(|e| {
        anyhow::anyhow!("{e}. Available: chain, ring, plaquette, falcon, eagle")
    })
}

/// Load a parameter file, optionally seeded from a topology.
pub fn load_params(path: &Path, topology: Option<&Topology>) -> Result<SolverParams> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let params = SolverParams::from_path(path)
        .with_context(|| format!("Failed to load parameters from {}", path.display()))?;

    match topology {
        Some(topology) => seed_from_topology(params, topology),
        None => Ok(params),
    }
}

/// Replace `N`, the bonds and `h_z` with the topology's, scaling a scalar
/// `h_z` by the field pattern.
pub fn seed_from_topology(params: SolverParams, topology: &Topology) -> Result<SolverParams> {
    let h_z = match params.h_z {
        Coefficient::Uniform(h_z) => h_z,
        Coefficient::PerQubit(_) => {
            anyhow::bail!("--topology needs a scalar h_z to scale by the field pattern")
        }
    };
    let seeded = SolverParams::for_topology(topology, params.tau, params.t_final, h_z);

    Ok(SolverParams {
        n_qubits: seeded.n_qubits,
        h_z: seeded.h_z,
        coupling_map: seeded.coupling_map,
        ..params
    })
}

/// Construct the selected solver.
pub fn make_solver(
    kind: SolverKind,
    solver_path: Option<PathBuf>,
    launcher: Option<PathBuf>,
) -> Box<dyn Solver> {
    match kind {
        SolverKind::Bloch => Box::new(BlochSolver::new()),
        SolverKind::Process => {
            let mut config = solver_path.map_or_else(ProcessSolverConfig::from_env, |path| {
                ProcessSolverConfig::new(path)
            });
            config.launcher = launcher;
            Box::new(ProcessSolver::new(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_family() {
        assert_eq!(parse_family("Ring").unwrap(), Family::Ring);
        assert_eq!(parse_family("eagle").unwrap(), Family::Eagle);
        let err = parse_family("kagome").unwrap_err().to_string();
        assert!(err.contains("Available"), "{err}");
    }

    #[test]
    fn test_seed_from_topology() {
        let ring = lmpo_topology::topology("6.ring.B").unwrap();
        let params = SolverParams::new(0.1, 2.0, 1).with_h_z(4.0).with_g_1(1.0);

        let seeded = seed_from_topology(params, ring).unwrap();
        assert_eq!(seeded.n_qubits, 6);
        assert_eq!(seeded.coupling_map.len(), 6);
        assert_eq!(
            seeded.h_z,
            Coefficient::PerQubit(vec![0.0, 4.0, 0.0, 4.0, 0.0, 4.0])
        );
        assert_eq!(seeded.g_1, Coefficient::Uniform(1.0));
        assert_eq!(seeded.t_final, 2.0);
    }

    #[test]
    fn test_seed_rejects_per_qubit_field() {
        let ring = lmpo_topology::topology("4.ring.B").unwrap();
        let params = SolverParams::new(0.1, 1.0, 2).with_h_z(vec![1.0, 2.0]);
        assert!(seed_from_topology(params, ring).is_err());
    }

    #[test]
    fn test_load_params_missing_file() {
        let err = load_params(Path::new("/nonexistent/run.yaml"), None).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_make_solver() {
        assert_eq!(make_solver(SolverKind::Bloch, None, None).name(), "bloch");
        let process = make_solver(SolverKind::Process, Some("/opt/lindbladmpo".into()), None);
        assert_eq!(process.name(), "lindbladmpo");
    }
}

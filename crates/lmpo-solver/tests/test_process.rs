//! Process adapter tests against stand-in solver scripts.
//!
//! The scripts are run through `sh` so they need no executable bit.

#![cfg(unix)]

use std::path::{Path, PathBuf};

use lmpo_solver::{
    Pauli, ProcessSolver, ProcessSolverConfig, Solver, SolverError, SolverParams,
};

/// Writes a fixed observables file next to the input file.
const ECHO_SOLVER: &str = r#"
[ "$1" = "input_file" ] || { echo "usage: solver input_file FILE" >&2; exit 64; }
prefix="${2%.input.txt}"
grep -q '^N = 2$' "$2" || { echo "unexpected input" >&2; exit 3; }
printf 't op q value\n0 x 0 0\n0 z 0 1\n0 z 1 1\n1 Z 0 -0.5\n1 Z 1 0.25\n' > "$prefix.obs-1q.dat"
"#;

const FAILING_SOLVER: &str = "echo 'matrix product operator exploded' >&2\nexit 2\n";

const SILENT_SOLVER: &str = "exit 0\n";

fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn solver_for(script: PathBuf) -> ProcessSolver {
    ProcessSolver::new(ProcessSolverConfig::new(script).with_launcher("sh"))
}

fn params_in(dir: &Path) -> SolverParams {
    SolverParams::new(1.0, 1.0, 2).with_output_prefix(dir.join("run").display().to_string())
}

#[tokio::test]
async fn parses_solver_output() {
    let dir = tempfile::tempdir().unwrap();
    let solver = solver_for(script(dir.path(), "solver.sh", ECHO_SOLVER));

    let output = solver.solve(&params_in(dir.path())).await.unwrap();

    assert_eq!(output.obs_1q(Pauli::Z, 0).unwrap().values, vec![1.0, -0.5]);
    assert_eq!(output.final_1q(Pauli::Z, 1), Some(0.25));
    assert_eq!(output.final_1q(Pauli::X, 0), Some(0.0));

    let input = std::fs::read_to_string(dir.path().join("run.input.txt")).unwrap();
    assert!(input.contains("tau = 1\n"));
    assert!(input.contains("1q_components = X,Y,Z\n"));
}

#[tokio::test]
async fn directory_prefix_gets_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let solver = solver_for(script(dir.path(), "solver.sh", ECHO_SOLVER));
    let out_dir = dir.path().join("nested").join("out");
    let params =
        SolverParams::new(1.0, 1.0, 2).with_output_prefix(format!("{}/", out_dir.display()));

    solver.solve(&params).await.unwrap();

    assert!(out_dir.join("lmpo.input.txt").exists());
    assert!(out_dir.join("lmpo.obs-1q.dat").exists());
}

#[tokio::test]
async fn nonzero_exit_is_process_failure() {
    let dir = tempfile::tempdir().unwrap();
    let solver = solver_for(script(dir.path(), "solver.sh", FAILING_SOLVER));

    match solver.solve(&params_in(dir.path())).await {
        Err(SolverError::ProcessFailed { stderr, .. }) => {
            assert_eq!(stderr, "matrix product operator exploded");
        }
        other => panic!("expected ProcessFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let solver = solver_for(script(dir.path(), "solver.sh", SILENT_SOLVER));
    // Output from an earlier run must not be picked up.
    std::fs::write(dir.path().join("run.obs-1q.dat"), "t op q value\n0 z 0 1\n").unwrap();

    match solver.solve(&params_in(dir.path())).await {
        Err(SolverError::MissingOutput(path)) => assert!(path.ends_with("run.obs-1q.dat")),
        other => panic!("expected MissingOutput, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_binary_fails_to_launch() {
    let dir = tempfile::tempdir().unwrap();
    let solver = ProcessSolver::new(ProcessSolverConfig::new(
        dir.path().join("no-such-lindbladmpo"),
    ));

    let err = solver.solve(&params_in(dir.path())).await.unwrap_err();
    assert!(matches!(err, SolverError::Launch { .. }), "{err}");
}

#[tokio::test]
async fn invalid_params_never_launch() {
    let dir = tempfile::tempdir().unwrap();
    let solver = solver_for(script(dir.path(), "solver.sh", ECHO_SOLVER));
    let params = params_in(dir.path()).with_h_z(vec![1.0, 2.0, 3.0]);

    let err = solver.solve(&params).await.unwrap_err();
    assert!(matches!(err, SolverError::InvalidParams(_)), "{err}");
    assert!(!dir.path().join("run.input.txt").exists());
}

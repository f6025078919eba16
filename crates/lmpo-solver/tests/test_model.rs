//! Single-qubit model checks against known closed-form results.
//!
//! Two uncoupled qubits starting in |0⟩ (Z = +1). Zero-dissipation cases must
//! hold their values exactly; damped cases relax to the steady state
//! `Z = (g_0 − g_1) / (g_0 + g_1)`.
//!
//! Every scenario runs on the in-process [`BlochSolver`]. The same scenarios
//! run on the native binary when `LINDBLADMPO_PATH` points at one.

use lmpo_solver::{BlochSolver, Pauli, ProcessSolver, Solver, SolverOutput, SolverParams};

const TOLERANCE: f64 = 1e-7;

async fn run(solver: &dyn Solver, params: SolverParams) -> SolverOutput {
    solver
        .solve(&params)
        .await
        .unwrap_or_else(|e| panic!("{} failed: {e}", solver.name()))
}

fn assert_final_exact(output: &SolverOutput, expected_xy: f64, expected_z: f64) {
    for q in 0..2 {
        assert_eq!(output.final_1q(Pauli::X, q), Some(expected_xy), "X on qubit {q}");
        assert_eq!(output.final_1q(Pauli::Y, q), Some(expected_xy), "Y on qubit {q}");
        assert_eq!(output.final_1q(Pauli::Z, q), Some(expected_z), "Z on qubit {q}");
    }
}

fn assert_final_close(output: &SolverOutput, expected_xy: f64, expected_z: f64) {
    for q in 0..2 {
        for (op, expected) in [(Pauli::X, expected_xy), (Pauli::Y, expected_xy), (Pauli::Z, expected_z)] {
            let value = output.final_1q(op, q).unwrap();
            assert!(
                (value - expected).abs() < TOLERANCE,
                "{op} on qubit {q}: {value} != {expected}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

fn all_zero_params() -> SolverParams {
    SolverParams::new(1.0, 1.0, 2)
        .with_g_1(0.0)
        .with_components([Pauli::X, Pauli::Y, Pauli::Z])
}

fn hz_not_zero_params() -> SolverParams {
    let mut params = SolverParams::new(1.0, 1.0, 2)
        .with_g_1(0.0)
        .with_h_z(5.0)
        .with_components([Pauli::X, Pauli::Y, Pauli::Z]);
    params.l_x = Some(0);
    params
}

fn steady_state_params() -> SolverParams {
    let mut params = SolverParams::new(1.0, 10.0, 2)
        .with_g_1(5.0)
        .with_h_z(5.0)
        .with_components([Pauli::X, Pauli::Y, Pauli::Z]);
    params.l_x = Some(0);
    params
}

fn steady_state_2_params() -> SolverParams {
    steady_state_params().with_g_0(1.0)
}

// ---------------------------------------------------------------------------
// In-process Bloch solver
// ---------------------------------------------------------------------------

#[tokio::test]
async fn all_zero() {
    let output = run(&BlochSolver::new(), all_zero_params()).await;
    assert_final_exact(&output, 0.0, 1.0);
}

#[tokio::test]
async fn hz_not_zero() {
    let output = run(&BlochSolver::new(), hz_not_zero_params()).await;
    assert_final_exact(&output, 0.0, 1.0);
}

#[tokio::test]
async fn steady_state() {
    let output = run(&BlochSolver::new(), steady_state_params()).await;
    assert_final_close(&output, 0.0, -1.0);
}

#[tokio::test]
async fn steady_state_2() {
    let output = run(&BlochSolver::new(), steady_state_2_params()).await;
    assert_final_close(&output, 0.0, -4.0 / 6.0);
}

#[tokio::test]
async fn series_starts_at_initial_state() {
    let params = SolverParams::new(1.0, 10.0, 2).with_g_1(5.0).with_h_z(5.0);
    let output = run(&BlochSolver::new(), params).await;

    let z = output.obs_1q(Pauli::Z, 1).unwrap();
    assert_eq!(z.len(), 11);
    assert_eq!(z.times.first(), Some(&0.0));
    assert_eq!(z.times.last(), Some(&10.0));
    assert_eq!(z.values[0], 1.0);
    // Monotone relaxation toward the ground state.
    assert!(z.values.windows(2).all(|w| w[1] <= w[0]));
}

#[tokio::test]
async fn loads_scenario_from_yaml() {
    let params = SolverParams::from_yaml_str(
        "tau: 1\nt_final: 10\nN: 2\ng_1: 5\ng_0: 1\nl_x: 0\nh_z: 5\n1q_components: [X, Y, Z]\n",
    )
    .unwrap();
    let output = run(&BlochSolver::new(), params).await;
    assert_final_close(&output, 0.0, -4.0 / 6.0);
}

// ---------------------------------------------------------------------------
// Native solver (only with LINDBLADMPO_PATH set)
// ---------------------------------------------------------------------------

/// The native solver named by `LINDBLADMPO_PATH`, if any.
fn native_solver(scenario: &str) -> Option<ProcessSolver> {
    if std::env::var_os("LINDBLADMPO_PATH").is_none() {
        eprintln!("skipping native {scenario}: LINDBLADMPO_PATH is not set");
        return None;
    }
    Some(ProcessSolver::from_env())
}

/// Run `params` on the native solver with outputs in a fresh directory.
async fn run_native(solver: &ProcessSolver, scenario: &str, params: SolverParams) -> SolverOutput {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join(scenario).display().to_string();
    run(solver, params.with_output_prefix(prefix)).await
}

#[tokio::test]
async fn native_all_zero() {
    let Some(solver) = native_solver("all_zero") else { return };
    let output = run_native(&solver, "all_zero", all_zero_params()).await;
    assert_final_exact(&output, 0.0, 1.0);
}

#[tokio::test]
async fn native_hz_not_zero() {
    let Some(solver) = native_solver("hz_not_zero") else { return };
    let output = run_native(&solver, "hz_not_zero", hz_not_zero_params()).await;
    assert_final_exact(&output, 0.0, 1.0);
}

#[tokio::test]
async fn native_steady_state() {
    let Some(solver) = native_solver("steady_state") else { return };
    let output = run_native(&solver, "steady_state", steady_state_params()).await;
    assert_final_close(&output, 0.0, -1.0);
}

#[tokio::test]
async fn native_steady_state_2() {
    let Some(solver) = native_solver("steady_state_2") else { return };
    let output = run_native(&solver, "steady_state_2", steady_state_2_params()).await;
    assert_final_close(&output, 0.0, -4.0 / 6.0);
}

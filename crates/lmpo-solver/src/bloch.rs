//! In-process Lindblad evolution of uncoupled qubits.
//!
//! Without two-qubit terms the density matrix stays a product state and each
//! qubit is fully described by its Bloch vector `(X, Y, Z)`. With
//! `H = ½(h_x X + h_y Y + h_z Z)` and dissipators `g_0 D[σ+]`, `g_1 D[σ−]`,
//! `g_2 D[σz]` the master equation reduces to
//!
//! ```text
//!   dX/dt = h_y Z − h_z Y − γ⊥ X
//!   dY/dt = h_z X − h_x Z − γ⊥ Y
//!   dZ/dt = h_x Y − h_y X − (g_0 + g_1) Z + (g_0 − g_1)
//!
//!   γ⊥ = (g_0 + g_1) / 2 + 2 g_2
//! ```
//!
//! which is integrated with classical RK4. Each solver step `tau` is split
//! into sub-steps small enough that `dt · Λ ≤ 0.05`, where `Λ` bounds the
//! generator norm of the fastest qubit.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::output::SolverOutput;
use crate::params::{Pauli, SolverParams};
use crate::solver::Solver;

/// Largest `dt · Λ` per RK4 sub-step.
const MAX_STEP_NORM: f64 = 0.05;

/// Largest number of RK4 sub-steps per solver step.
const MAX_SUBSTEPS: f64 = 1e6;

type Bloch = [f64; 3];

/// Per-qubit generator coefficients.
#[derive(Debug, Clone, Copy)]
struct Generator {
    h: [f64; 3],
    g_sum: f64,
    g_diff: f64,
    gamma_perp: f64,
}

impl Generator {
    fn for_qubit(params: &SolverParams, q: usize) -> Self {
        let (g_0, g_1, g_2) = (params.g_0.at(q), params.g_1.at(q), params.g_2.at(q));
        Self {
            h: [params.h_x.at(q), params.h_y.at(q), params.h_z.at(q)],
            g_sum: g_0 + g_1,
            g_diff: g_0 - g_1,
            gamma_perp: 0.5 * (g_0 + g_1) + 2.0 * g_2,
        }
    }

    /// Upper bound on the generator norm.
    fn norm(&self) -> f64 {
        let [hx, hy, hz] = self.h;
        hx.hypot(hy).hypot(hz) + self.g_sum + self.gamma_perp
    }

    fn derivative(&self, [x, y, z]: Bloch) -> Bloch {
        let [hx, hy, hz] = self.h;
        [
            hy * z - hz * y - self.gamma_perp * x,
            hz * x - hx * z - self.gamma_perp * y,
            hx * y - hy * x - self.g_sum * z + self.g_diff,
        ]
    }

    fn rk4_step(&self, s: Bloch, dt: f64) -> Bloch {
        let k1 = self.derivative(s);
        let k2 = self.derivative(axpy(s, 0.5 * dt, k1));
        let k3 = self.derivative(axpy(s, 0.5 * dt, k2));
        let k4 = self.derivative(axpy(s, dt, k3));
        std::array::from_fn(|i| s[i] + dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]))
    }
}

#[inline]
fn axpy(s: Bloch, a: f64, k: Bloch) -> Bloch {
    [s[0] + a * k[0], s[1] + a * k[1], s[2] + a * k[2]]
}

fn component(s: &Bloch, op: Pauli) -> f64 {
    match op {
        Pauli::X => s[0],
        Pauli::Y => s[1],
        Pauli::Z => s[2],
    }
}

/// [`Solver`] for qubits without two-qubit coupling.
///
/// Records the requested single-qubit observables at `t = 0` and after every
/// `output_step` steps of length `tau`. Parameter sets with nonzero `J` or
/// `J_z` are rejected with [`SolverError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlochSolver;

impl BlochSolver {
    /// Create a Bloch-equation solver.
    pub fn new() -> Self {
        Self
    }

    /// Evolve `params` synchronously.
    pub fn evolve(&self, params: &SolverParams) -> SolverResult<SolverOutput> {
        params.validate()?;
        if !params.is_uncoupled() {
            return Err(SolverError::Unsupported {
                solver: self.name().to_string(),
                reason: format!(
                    "two-qubit coupling (J = {}, J_z = {})",
                    params.j, params.j_z
                ),
            });
        }
        if !params.extra.is_empty() {
            debug!(
                options = ?params.extra.keys().collect::<Vec<_>>(),
                "Ignoring solver options without in-process meaning"
            );
        }

        let n_steps = params.n_steps();
        let generators: Vec<Generator> = (0..params.n_qubits)
            .map(|q| Generator::for_qubit(params, q))
            .collect();
        let fastest = generators.iter().map(Generator::norm).fold(0.0, f64::max);
        let substeps = (params.tau * fastest / MAX_STEP_NORM).ceil();
        if !substeps.is_finite() || substeps > MAX_SUBSTEPS {
            return Err(SolverError::InvalidParams(format!(
                "rates too large for tau = {}: {substeps:e} sub-steps per step",
                params.tau
            )));
        }
        let substeps = (substeps as usize).max(1);
        let dt = params.tau / substeps as f64;

        debug!(
            n_qubits = params.n_qubits,
            n_steps,
            substeps,
            "Integrating Bloch equations"
        );

        let mut states = vec![params.init_product_state.bloch_vector(); params.n_qubits];
        let mut output = SolverOutput::new();
        let mut record = |t: f64, states: &[Bloch]| {
            for (q, s) in states.iter().enumerate() {
                for &op in &params.one_q_components {
                    output.push_1q(op, q, t, component(s, op));
                }
            }
        };

        record(0.0, &states);
        for step in 1..=n_steps {
            for (state, generator) in states.iter_mut().zip(&generators) {
                for _ in 0..substeps {
                    *state = generator.rk4_step(*state, dt);
                }
            }
            if step % params.output_step == 0 {
                record(step as f64 * params.tau, &states);
            }
        }

        Ok(output)
    }
}

#[async_trait]
impl Solver for BlochSolver {
    fn name(&self) -> &str {
        "bloch"
    }

    async fn solve(&self, params: &SolverParams) -> SolverResult<SolverOutput> {
        self.evolve(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InitState;

    #[test]
    fn test_records_every_output_step() {
        let mut params = SolverParams::new(0.5, 3.0, 1);
        params.output_step = 2;
        let out = BlochSolver::new().evolve(&params).unwrap();
        assert_eq!(out.obs_1q(Pauli::Z, 0).unwrap().times, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_only_requested_components() {
        let params = SolverParams::new(1.0, 1.0, 2).with_components([Pauli::Z]);
        let out = BlochSolver::new().evolve(&params).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.obs_1q(Pauli::X, 0).is_none());
    }

    #[test]
    fn test_larmor_precession() {
        // Half a period of h_z precession takes +x to -x.
        let omega = 2.0;
        let t = std::f64::consts::PI / omega;
        let params = SolverParams::new(t, t, 1)
            .with_h_z(omega)
            .with_init_state(InitState::PlusX);
        let out = BlochSolver::new().evolve(&params).unwrap();
        assert!((out.final_1q(Pauli::X, 0).unwrap() + 1.0).abs() < 1e-6);
        assert!(out.final_1q(Pauli::Y, 0).unwrap().abs() < 1e-6);
        assert_eq!(out.final_1q(Pauli::Z, 0), Some(0.0));
    }

    #[test]
    fn test_dephasing_decays_coherence() {
        let params = SolverParams::new(0.1, 1.0, 1)
            .with_g_2(0.25)
            .with_init_state(InitState::PlusY);
        let out = BlochSolver::new().evolve(&params).unwrap();
        // γ⊥ = 2 g_2, so Y(1) = e^{-0.5}.
        let y = out.final_1q(Pauli::Y, 0).unwrap();
        assert!((y - (-0.5f64).exp()).abs() < 1e-6, "{y}");
    }

    #[test]
    fn test_per_qubit_rates() {
        let params = SolverParams::new(1.0, 20.0, 2).with_g_1(vec![0.0, 2.0]);
        let out = BlochSolver::new().evolve(&params).unwrap();
        assert_eq!(out.final_1q(Pauli::Z, 0), Some(1.0));
        assert!((out.final_1q(Pauli::Z, 1).unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_unresolvable_rates() {
        for params in [
            SolverParams::new(1.0, 1.0, 1).with_h_z(1e200),
            SolverParams::new(1.0, 1.0, 1).with_h_x(f64::MAX).with_h_y(f64::MAX),
            SolverParams::new(1.0, 1.0, 1).with_g_1(f64::MAX),
        ] {
            let err = BlochSolver::new().evolve(&params).unwrap_err();
            assert!(matches!(err, SolverError::InvalidParams(_)), "{err}");
        }
    }

    #[test]
    fn test_norm_does_not_overflow() {
        let params = SolverParams::new(1.0, 1.0, 1).with_h_z(1e200);
        let norm = Generator::for_qubit(&params, 0).norm();
        assert_eq!(norm, 1e200);
    }

    #[test]
    fn test_rejects_coupling() {
        let params = SolverParams::new(1.0, 1.0, 2).with_j(1.0);
        let err = BlochSolver::new().evolve(&params).unwrap_err();
        assert!(matches!(err, SolverError::Unsupported { .. }), "{err}");
    }
}

//! The solver seam.
//!
//! ```text
//!   SolverParams ──→ validate() ──→ solve() ──→ SolverOutput
//! ```
//!
//! | Implementation | Runs | Coupled qubits |
//! |----------------|------|----------------|
//! | [`ProcessSolver`](crate::ProcessSolver) | native `lindbladmpo` binary | yes |
//! | [`BlochSolver`](crate::BlochSolver) | in-process RK4 | no |

use async_trait::async_trait;

use crate::error::SolverResult;
use crate::output::SolverOutput;
use crate::params::SolverParams;

/// A Lindblad solver.
///
/// Implementations validate `params` themselves before doing any work, and
/// return [`SolverError::Unsupported`](crate::SolverError::Unsupported) for
/// parameter sets they cannot handle.
#[async_trait]
pub trait Solver: Send + Sync {
    /// Human-readable solver name.
    fn name(&self) -> &str;

    /// Run the simulation and collect the recorded observables.
    async fn solve(&self, params: &SolverParams) -> SolverResult<SolverOutput>;
}

//! Solver harness for the lindbladmpo MPO Lindblad solver.
//!
//! The MPO Lindblad solver itself is a pre-built native program. This crate
//! holds what sits on either side of it:
//!
//! - [`SolverParams`]: the typed parameter set (time step, final time, qubit
//!   count, field/coupling/dissipation coefficients, requested observables),
//!   loadable from YAML or JSON;
//! - [`SolverOutput`]: the parsed result, a map from
//!   `(observable, qubit indices)` to a time series;
//! - the [`Solver`] seam, with two implementations:
//!   - [`ProcessSolver`] runs the native binary as a child process,
//!   - [`BlochSolver`] integrates uncoupled qubits in-process, for tests and
//!     quick checks without the native binary.
//!
//! # Quick start
//!
//! ```rust
//! use lmpo_solver::{BlochSolver, Pauli, Solver, SolverParams};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let params = SolverParams::new(1.0, 10.0, 2).with_h_z(5.0).with_g_1(5.0);
//! let output = rt.block_on(BlochSolver::new().solve(&params)).unwrap();
//!
//! // Amplitude damping drives every qubit to Z = -1.
//! let z = output.final_1q(Pauli::Z, 0).unwrap();
//! assert!((z + 1.0).abs() < 1e-7);
//! ```

pub mod bloch;
pub mod error;
pub mod output;
pub mod params;
pub mod process;
pub mod solver;

pub use bloch::BlochSolver;
pub use error::{SolverError, SolverResult};
pub use output::{ObservableKey, Series, SolverOutput};
pub use params::{Coefficient, InitState, Pauli, SolverParams};
pub use process::{ProcessSolver, ProcessSolverConfig};
pub use solver::Solver;

//! Solver parameter sets.
//!
//! Parameter names follow the solver's own option names (`tau`, `t_final`,
//! `N`, `h_z`, `g_1`, `1q_components`, ...), so a YAML or JSON file written
//! for the native solver deserializes directly:
//!
//! ```yaml
//! tau: 0.1
//! t_final: 10
//! N: 2
//! h_z: 5
//! g_1: [5, 2.5]
//! 1q_components: [X, Y, Z]
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use lmpo_topology::Topology;
use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Largest accepted number of time steps, `t_final / tau`.
pub const MAX_STEPS: usize = 10_000_000;

/// Single-qubit Pauli observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pauli {
    /// Pauli-X.
    #[serde(alias = "x")]
    X,
    /// Pauli-Y.
    #[serde(alias = "y")]
    Y,
    /// Pauli-Z.
    #[serde(alias = "z")]
    Z,
}

impl Pauli {
    /// All three components, in `X, Y, Z` order.
    pub const ALL: [Pauli; 3] = [Pauli::X, Pauli::Y, Pauli::Z];

    /// Upper-case symbol as used in parameter files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pauli::X => "X",
            Pauli::Y => "Y",
            Pauli::Z => "Z",
        }
    }

    /// Parse `x`/`X`, `y`/`Y`, `z`/`Z`.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "x" | "X" => Some(Pauli::X),
            "y" | "Y" => Some(Pauli::Y),
            "z" | "Z" => Some(Pauli::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial product state, identical on every qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InitState {
    /// +1 eigenstate of X.
    #[serde(rename = "+x")]
    PlusX,
    /// -1 eigenstate of X.
    #[serde(rename = "-x")]
    MinusX,
    /// +1 eigenstate of Y.
    #[serde(rename = "+y")]
    PlusY,
    /// -1 eigenstate of Y.
    #[serde(rename = "-y")]
    MinusY,
    /// +1 eigenstate of Z.
    #[default]
    #[serde(rename = "+z")]
    PlusZ,
    /// -1 eigenstate of Z.
    #[serde(rename = "-z")]
    MinusZ,
}

impl InitState {
    /// Solver option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            InitState::PlusX => "+x",
            InitState::MinusX => "-x",
            InitState::PlusY => "+y",
            InitState::MinusY => "-y",
            InitState::PlusZ => "+z",
            InitState::MinusZ => "-z",
        }
    }

    /// Bloch vector `(x, y, z)` of the state.
    pub fn bloch_vector(&self) -> [f64; 3] {
        match self {
            InitState::PlusX => [1.0, 0.0, 0.0],
            InitState::MinusX => [-1.0, 0.0, 0.0],
            InitState::PlusY => [0.0, 1.0, 0.0],
            InitState::MinusY => [0.0, -1.0, 0.0],
            InitState::PlusZ => [0.0, 0.0, 1.0],
            InitState::MinusZ => [0.0, 0.0, -1.0],
        }
    }
}

/// A field or dissipation coefficient: one value for every qubit, or one per qubit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coefficient {
    /// Same value on every qubit.
    Uniform(f64),
    /// Value per qubit index.
    PerQubit(Vec<f64>),
}

impl Coefficient {
    /// Value on `qubit`. Missing per-qubit entries read as zero.
    pub fn at(&self, qubit: usize) -> f64 {
        match self {
            Coefficient::Uniform(v) => *v,
            Coefficient::PerQubit(values) => values.get(qubit).copied().unwrap_or(0.0),
        }
    }

    /// True if the coefficient vanishes on every qubit.
    pub fn is_zero(&self) -> bool {
        match self {
            Coefficient::Uniform(v) => *v == 0.0,
            Coefficient::PerQubit(values) => values.iter().all(|v| *v == 0.0),
        }
    }

    fn check(&self, name: &str, n_qubits: usize) -> SolverResult<()> {
        let values: &[f64] = match self {
            Coefficient::Uniform(v) => std::slice::from_ref(v),
            Coefficient::PerQubit(values) => {
                if values.len() != n_qubits {
                    return Err(SolverError::InvalidParams(format!(
                        "{name} has {} entries for {n_qubits} qubits",
                        values.len()
                    )));
                }
                values
            }
        };
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SolverError::InvalidParams(format!("{name} is not finite")));
        }
        Ok(())
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Coefficient::Uniform(0.0)
    }
}

impl From<f64> for Coefficient {
    fn from(v: f64) -> Self {
        Coefficient::Uniform(v)
    }
}

impl From<Vec<f64>> for Coefficient {
    fn from(values: Vec<f64>) -> Self {
        Coefficient::PerQubit(values)
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Uniform(v) => write!(f, "{v}"),
            Coefficient::PerQubit(values) => {
                let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

fn default_output_step() -> usize {
    1
}

fn default_components() -> Vec<Pauli> {
    Pauli::ALL.to_vec()
}

/// Options passed to a [`Solver`](crate::Solver).
///
/// The Hamiltonian is `H = ½ Σ_i (h_x X_i + h_y Y_i + h_z Z_i)` plus
/// `J (XX + YY) + J_z ZZ` on every bond; dissipation is `g_0 D[σ+]`,
/// `g_1 D[σ−]` and `g_2 D[σz]` on every qubit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    /// Time step.
    pub tau: f64,
    /// Final simulation time.
    pub t_final: f64,
    /// Number of qubits.
    #[serde(rename = "N")]
    pub n_qubits: usize,
    /// X field.
    #[serde(default)]
    pub h_x: Coefficient,
    /// Y field.
    #[serde(default)]
    pub h_y: Coefficient,
    /// Z field.
    #[serde(default)]
    pub h_z: Coefficient,
    /// Flip-flop coupling on every bond.
    #[serde(default, rename = "J")]
    pub j: f64,
    /// ZZ coupling on every bond.
    #[serde(default, rename = "J_z")]
    pub j_z: f64,
    /// Excitation (σ+) rate.
    #[serde(default)]
    pub g_0: Coefficient,
    /// Decay (σ−) rate.
    #[serde(default)]
    pub g_1: Coefficient,
    /// Dephasing (σz) rate.
    #[serde(default)]
    pub g_2: Coefficient,
    /// Lattice length along x; 0 or absent means a chain of `N`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l_x: Option<usize>,
    /// Lattice length along y.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l_y: Option<usize>,
    /// Initial state of every qubit.
    #[serde(default)]
    pub init_product_state: InitState,
    /// Record observables every `output_step` time steps.
    #[serde(default = "default_output_step")]
    pub output_step: usize,
    /// Path prefix for solver input and output files.
    #[serde(default)]
    pub output_files_prefix: String,
    /// Single-qubit observables to record.
    #[serde(default = "default_components", rename = "1q_components")]
    pub one_q_components: Vec<Pauli>,
    /// Explicit bonds; empty means the solver's default lattice.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coupling_map: Vec<(usize, usize)>,
    /// Other solver options, passed through verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SolverParams {
    /// Parameters for `n_qubits` qubits with every coefficient zero.
    pub fn new(tau: f64, t_final: f64, n_qubits: usize) -> Self {
        Self {
            tau,
            t_final,
            n_qubits,
            h_x: Coefficient::default(),
            h_y: Coefficient::default(),
            h_z: Coefficient::default(),
            j: 0.0,
            j_z: 0.0,
            g_0: Coefficient::default(),
            g_1: Coefficient::default(),
            g_2: Coefficient::default(),
            l_x: None,
            l_y: None,
            init_product_state: InitState::default(),
            output_step: default_output_step(),
            output_files_prefix: String::new(),
            one_q_components: default_components(),
            coupling_map: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Parameters for a registered topology: its qubit count and bonds, with
    /// `h_z` scaled per qubit by the topology's field pattern.
    ///
    /// Bonds listed in both directions are passed once.
    pub fn for_topology(topology: &Topology, tau: f64, t_final: f64, h_z: f64) -> Self {
        let mut bonds: Vec<(usize, usize)> = Vec::with_capacity(topology.coupling_map().len());
        for &(a, b) in topology.coupling_map() {
            if !bonds.contains(&(a, b)) && !bonds.contains(&(b, a)) {
                bonds.push((a, b));
            }
        }
        let field = topology.field_pattern().iter().map(|p| p * h_z).collect();

        Self::new(tau, t_final, topology.n_qubits())
            .with_h_z(Coefficient::PerQubit(field))
            .with_coupling_map(bonds)
    }

    /// Set the X field.
    pub fn with_h_x(mut self, h_x: impl Into<Coefficient>) -> Self {
        self.h_x = h_x.into();
        self
    }

    /// Set the Y field.
    pub fn with_h_y(mut self, h_y: impl Into<Coefficient>) -> Self {
        self.h_y = h_y.into();
        self
    }

    /// Set the Z field.
    pub fn with_h_z(mut self, h_z: impl Into<Coefficient>) -> Self {
        self.h_z = h_z.into();
        self
    }

    /// Set the flip-flop coupling.
    pub fn with_j(mut self, j: f64) -> Self {
        self.j = j;
        self
    }

    /// Set the ZZ coupling.
    pub fn with_j_z(mut self, j_z: f64) -> Self {
        self.j_z = j_z;
        self
    }

    /// Set the excitation rate.
    pub fn with_g_0(mut self, g_0: impl Into<Coefficient>) -> Self {
        self.g_0 = g_0.into();
        self
    }

    /// Set the decay rate.
    pub fn with_g_1(mut self, g_1: impl Into<Coefficient>) -> Self {
        self.g_1 = g_1.into();
        self
    }

    /// Set the dephasing rate.
    pub fn with_g_2(mut self, g_2: impl Into<Coefficient>) -> Self {
        self.g_2 = g_2.into();
        self
    }

    /// Set the initial product state.
    pub fn with_init_state(mut self, state: InitState) -> Self {
        self.init_product_state = state;
        self
    }

    /// Set the input/output file prefix.
    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_files_prefix = prefix.into();
        self
    }

    /// Set the recorded single-qubit observables.
    pub fn with_components(mut self, components: impl IntoIterator<Item = Pauli>) -> Self {
        self.one_q_components = components.into_iter().collect();
        self
    }

    /// Set explicit bonds.
    pub fn with_coupling_map(mut self, bonds: Vec<(usize, usize)>) -> Self {
        self.coupling_map = bonds;
        self
    }

    /// Set a pass-through solver option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Number of time steps, `t_final / tau` rounded to the nearest integer.
    pub fn n_steps(&self) -> usize {
        (self.t_final / self.tau).round() as usize
    }

    /// True if no term couples two qubits.
    pub fn is_uncoupled(&self) -> bool {
        self.j == 0.0 && self.j_z == 0.0
    }

    /// Check the parameter set for internal consistency.
    pub fn validate(&self) -> SolverResult<()> {
        let invalid = |msg: String| Err(SolverError::InvalidParams(msg));

        if !(self.tau.is_finite() && self.tau > 0.0) {
            return invalid(format!("tau must be positive, got {}", self.tau));
        }
        if !(self.t_final.is_finite() && self.t_final >= 0.0) {
            return invalid(format!("t_final must be non-negative, got {}", self.t_final));
        }
        if self.n_qubits == 0 {
            return invalid("N must be at least 1".into());
        }
        if self.output_step == 0 {
            return invalid("output_step must be at least 1".into());
        }
        let steps = (self.t_final / self.tau).round();
        if steps > MAX_STEPS as f64 {
            return invalid(format!(
                "t_final / tau = {steps:e} exceeds {MAX_STEPS} steps"
            ));
        }
        if !(self.j.is_finite() && self.j_z.is_finite()) {
            return invalid("J and J_z must be finite".into());
        }

        for (name, coeff) in [
            ("h_x", &self.h_x),
            ("h_y", &self.h_y),
            ("h_z", &self.h_z),
            ("g_0", &self.g_0),
            ("g_1", &self.g_1),
            ("g_2", &self.g_2),
        ] {
            coeff.check(name, self.n_qubits)?;
        }

        for (name, rate) in [("g_0", &self.g_0), ("g_1", &self.g_1), ("g_2", &self.g_2)] {
            if (0..self.n_qubits).any(|q| rate.at(q) < 0.0) {
                return invalid(format!("{name} must be non-negative"));
            }
        }

        if let Some(l_x) = self.l_x.filter(|l| *l > 0) {
            let cells = l_x * self.l_y.unwrap_or(1).max(1);
            if cells != self.n_qubits {
                return invalid(format!(
                    "l_x * l_y = {cells} does not match N = {}",
                    self.n_qubits
                ));
            }
        }

        if let Some(&(a, b)) = self
            .coupling_map
            .iter()
            .find(|(a, b)| *a >= self.n_qubits || *b >= self.n_qubits || a == b)
        {
            return invalid(format!(
                "bond ({a}, {b}) is not a pair of distinct qubits in 0..{}",
                self.n_qubits
            ));
        }

        Ok(())
    }

    /// Parse a YAML parameter document.
    pub fn from_yaml_str(source: &str) -> SolverResult<Self> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse a JSON parameter document.
    pub fn from_json_str(source: &str) -> SolverResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load parameters from a `.json` file, or YAML for any other extension.
    pub fn from_path(path: impl AsRef<Path>) -> SolverResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }
}

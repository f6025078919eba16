//! Parsed solver results.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::params::Pauli;

/// Identifies one recorded observable: a Pauli operator on a set of qubits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObservableKey {
    /// Operator.
    pub op: Pauli,
    /// Qubit indices the operator acts on.
    pub qubits: Vec<usize>,
}

impl ObservableKey {
    /// Single-qubit observable.
    pub fn one_q(op: Pauli, qubit: usize) -> Self {
        Self {
            op,
            qubits: vec![qubit],
        }
    }
}

/// Observable values over time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    /// Sample times.
    pub times: Vec<f64>,
    /// Values, index-aligned with `times`.
    pub values: Vec<f64>,
}

impl Series {
    /// Append a sample.
    pub fn push(&mut self, t: f64, value: f64) {
        self.times.push(t);
        self.values.push(value);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Last recorded value.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Map from observable to its time series.
#[derive(Debug, Clone, Default)]
pub struct SolverOutput {
    series: FxHashMap<ObservableKey, Series>,
}

impl SolverOutput {
    /// Empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single-qubit sample.
    pub fn push_1q(&mut self, op: Pauli, qubit: usize, t: f64, value: f64) {
        self.series
            .entry(ObservableKey::one_q(op, qubit))
            .or_default()
            .push(t, value);
    }

    /// Series for `op` on `qubit`.
    pub fn obs_1q(&self, op: Pauli, qubit: usize) -> Option<&Series> {
        self.series.get(&ObservableKey::one_q(op, qubit))
    }

    /// Series for an arbitrary key.
    pub fn get(&self, key: &ObservableKey) -> Option<&Series> {
        self.series.get(key)
    }

    /// Final value of `op` on `qubit`.
    pub fn final_1q(&self, op: Pauli, qubit: usize) -> Option<f64> {
        self.obs_1q(op, qubit).and_then(Series::last)
    }

    /// All observables, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&ObservableKey, &Series)> {
        let mut entries: Vec<_> = self.series.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Number of observables.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Serialize for SolverOutput {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            op: Pauli,
            qubits: &'a [usize],
            times: &'a [f64],
            values: &'a [f64],
        }

        serializer.collect_seq(self.iter().map(|(key, s)| Entry {
            op: key.op,
            qubits: &key.qubits,
            times: &s.times,
            values: &s.values,
        }))
    }
}

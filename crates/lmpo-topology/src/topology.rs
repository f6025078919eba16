//! The [`Topology`] type and how it is constructed.

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use crate::error::{TopologyError, TopologyResult};
use crate::generate::{self, Tables};
use crate::key::{Family, TopologyKey};
use crate::literal::LiteralTable;

/// A bond between two qubits, as listed in a coupling map.
pub type Edge = (usize, usize);

/// A qubit position in the plotting plane, as `(row, column)`.
pub type Coordinate = (i32, i32);

/// Generation rule for a lattice family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Path graph, middle qubit undriven (`N.chain.M`).
    ChainMiddle,
    /// Path graph, left edge qubit undriven (`N.chain.E`).
    ChainEdge,
    /// Ladder-ordered cycle (`N.ring.A`).
    RingLadder,
    /// Sequential cycle with one closing bond (`N.ring.B`).
    RingCycle,
    /// Ladder ring on `N - 2` qubits plus one tail at each end (`N.plaquette.A`).
    PlaquetteLadder,
}

impl Rule {
    /// Produce the three tables for `n_qubits` qubits.
    pub fn generate(self, n_qubits: usize) -> Tables {
        match self {
            Rule::ChainMiddle => generate::chain_middle(n_qubits),
            Rule::ChainEdge => generate::chain_edge(n_qubits),
            Rule::RingLadder => generate::ring_ladder(n_qubits, 0),
            Rule::RingCycle => generate::ring_cycle(n_qubits),
            Rule::PlaquetteLadder => generate::plaquette_ladder(n_qubits),
        }
    }
}

/// How a topology's tables came to be.
#[derive(Debug, Clone, Copy)]
pub enum TopologySource {
    /// Computed from a family rule and the key's qubit count.
    Generated(Rule),
    /// Copied from a hand-written table.
    Literal(&'static LiteralTable),
}

impl TopologySource {
    fn materialize(&self, n_qubits: usize) -> Tables {
        match self {
            TopologySource::Generated(rule) => rule.generate(n_qubits),
            TopologySource::Literal(table) => table.to_tables(),
        }
    }

    /// True for hand-written tables.
    pub fn is_literal(&self) -> bool {
        matches!(self, TopologySource::Literal(_))
    }
}

/// A registered lattice: coupling map, coordinates and field pattern.
///
/// The three tables are index-aligned: entry `i` of the coordinates and the
/// field pattern describe qubit `i` of the coupling map. Construction does not
/// check this; call [`validate`](Self::validate).
#[derive(Debug, Clone, Serialize)]
pub struct Topology {
    key: TopologyKey,
    #[serde(skip)]
    source: TopologySource,
    coupling_map: Vec<Edge>,
    coordinates: Vec<Coordinate>,
    field_pattern: Vec<f64>,
}

impl Topology {
    /// Build a topology from its key and source.
    pub fn new(key: TopologyKey, source: TopologySource) -> Self {
        let Tables {
            coupling_map,
            coordinates,
            field_pattern,
        } = source.materialize(key.n_qubits());
        Self {
            key,
            source,
            coupling_map,
            coordinates,
            field_pattern,
        }
    }

    /// The lookup key.
    #[inline]
    pub fn key(&self) -> TopologyKey {
        self.key
    }

    /// Number of qubits.
    #[inline]
    pub fn n_qubits(&self) -> usize {
        self.key.n_qubits()
    }

    /// Lattice family.
    #[inline]
    pub fn family(&self) -> Family {
        self.key.family()
    }

    /// Construction method.
    pub fn source(&self) -> &TopologySource {
        &self.source
    }

    /// Bonds in generation order. Hardware maps may list both directions.
    pub fn coupling_map(&self) -> &[Edge] {
        &self.coupling_map
    }

    /// Plotting coordinates, one per qubit.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Relative on-site field strength, one per qubit.
    pub fn field_pattern(&self) -> &[f64] {
        &self.field_pattern
    }

    /// Indices of qubits with a nonzero field value.
    pub fn driven_qubits(&self) -> Vec<usize> {
        self.field_pattern
            .iter()
            .enumerate()
            .filter(|(_, h)| **h != 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check the index range of every bond and the length of every per-qubit table.
    pub fn validate(&self) -> TopologyResult<()> {
        let n = self.n_qubits();

        if let Some(&(a, b)) = self.coupling_map.iter().find(|(a, b)| *a >= n || *b >= n) {
            return Err(TopologyError::EdgeOutOfRange {
                key: self.key.to_string(),
                a,
                b,
                n_qubits: n,
            });
        }

        for (table, found) in [
            ("coordinates", self.coordinates.len()),
            ("field pattern", self.field_pattern.len()),
        ] {
            if found != n {
                return Err(TopologyError::LengthMismatch {
                    key: self.key.to_string(),
                    table,
                    expected: n,
                    found,
                });
            }
        }

        Ok(())
    }

    /// Undirected interaction graph. Bonds listed in both directions collapse
    /// into a single edge; node `i` is qubit `i`.
    ///
    /// Call [`validate`](Self::validate) first: out-of-range bonds grow the graph.
    pub fn graph(&self) -> UnGraph<usize, ()> {
        let mut graph = UnGraph::with_capacity(self.n_qubits(), self.coupling_map.len());
        for q in 0..self.n_qubits() {
            graph.add_node(q);
        }
        for &(a, b) in &self.coupling_map {
            while graph.node_count() <= a.max(b) {
                let q = graph.node_count();
                graph.add_node(q);
            }
            graph.update_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        graph
    }

    /// Number of distinct neighbours of a qubit.
    pub fn degree(&self, qubit: usize) -> usize {
        let graph = self.graph();
        if qubit >= graph.node_count() {
            return 0;
        }
        graph.neighbors(NodeIndex::new(qubit)).count()
    }

    /// True if the interaction graph is a single connected component.
    pub fn is_connected(&self) -> bool {
        self.n_qubits() > 0 && connected_components(&self.graph()) == 1
    }

    /// True if the coupling map is exactly `0–1–2–…–(N−1)` in order.
    pub fn is_path(&self) -> bool {
        let n = self.n_qubits();
        self.coupling_map.len() + 1 == n
            && self
                .coupling_map
                .iter()
                .enumerate()
                .all(|(i, &(a, b))| a == i && b == i + 1)
    }

    /// True if the interaction graph is one cycle through every qubit.
    pub fn is_simple_cycle(&self) -> bool {
        let graph = self.graph();
        let n = self.n_qubits();
        n >= 3
            && graph.edge_count() == n
            && graph
                .node_indices()
                .all(|q| graph.neighbors(q).count() == 2)
            && connected_components(&graph) == 1
    }
}

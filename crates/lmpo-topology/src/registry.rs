//! The process-wide table of registered topologies.
//!
//! [`TopologyRegistry::build`] enumerates every family over its qubit range.
//! Most callers use [`registry`], a lazily built read-only instance shared by
//! the whole process; nothing mutates it after construction, so concurrent
//! readers need no synchronization.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::error::{TopologyError, TopologyResult};
use crate::key::{Family, TopologyKey, Variant};
use crate::literal;
use crate::topology::{Coordinate, Edge, Rule, Topology, TopologySource};

static REGISTRY: LazyLock<TopologyRegistry> = LazyLock::new(TopologyRegistry::build);

/// The shared registry, built on first use.
pub fn registry() -> &'static TopologyRegistry {
    &REGISTRY
}

/// Coupling map of a registered topology.
pub fn coupling_map(key: &str) -> TopologyResult<&'static [Edge]> {
    registry().coupling_map(key)
}

/// Qubit coordinates of a registered topology.
pub fn qubit_coordinates(key: &str) -> TopologyResult<&'static [Coordinate]> {
    registry().qubit_coordinates(key)
}

/// Field pattern of a registered topology.
pub fn field_pattern(key: &str) -> TopologyResult<&'static [f64]> {
    registry().field_pattern(key)
}

/// A registered topology.
pub fn topology(key: &str) -> TopologyResult<&'static Topology> {
    registry().get(key)
}

/// Immutable map from [`TopologyKey`] to [`Topology`].
#[derive(Debug, Clone)]
pub struct TopologyRegistry {
    topologies: BTreeMap<TopologyKey, Topology>,
}

impl TopologyRegistry {
    /// Build every family over its registered qubit range.
    pub fn build() -> Self {
        let mut registry = Self {
            topologies: BTreeMap::new(),
        };

        for n in (3..=61).step_by(2) {
            registry.add_generated(n, Family::Chain, Variant::M, Rule::ChainMiddle);
        }
        for n in 2..=62 {
            registry.add_generated(n, Family::Chain, Variant::E, Rule::ChainEdge);
        }
        for n in (4..=62).step_by(2) {
            registry.add_generated(n, Family::Ring, Variant::A, Rule::RingLadder);
            registry.add_generated(n, Family::Ring, Variant::B, Rule::RingCycle);
        }
        for n in (6..=62).step_by(2) {
            registry.add_generated(n, Family::Plaquette, Variant::A, Rule::PlaquetteLadder);
        }

        registry.add_literal(
            TopologyKey::lattice(10, Family::Plaquette, Variant::B),
            &literal::PLAQUETTE_B_10,
        );
        registry.add_literal(
            TopologyKey::lattice(12, Family::Plaquette, Variant::B),
            &literal::PLAQUETTE_B_12,
        );
        registry.add_literal(TopologyKey::device(7, Family::Falcon), &literal::FALCON_7);
        registry.add_literal(TopologyKey::device(27, Family::Falcon), &literal::FALCON_27);
        registry.add_literal(TopologyKey::device(127, Family::Eagle), &literal::EAGLE_127);

        debug!(count = registry.len(), "built topology registry");
        registry
    }

    fn add_generated(&mut self, n: usize, family: Family, variant: Variant, rule: Rule) {
        let key = TopologyKey::lattice(n, family, variant);
        self.insert(Topology::new(key, TopologySource::Generated(rule)));
    }

    fn add_literal(&mut self, key: TopologyKey, table: &'static literal::LiteralTable) {
        self.insert(Topology::new(key, TopologySource::Literal(table)));
    }

    fn insert(&mut self, topology: Topology) {
        self.topologies.insert(topology.key(), topology);
    }

    /// Look up a topology by typed key.
    pub fn get_key(&self, key: &TopologyKey) -> TopologyResult<&Topology> {
        self.topologies
            .get(key)
            .ok_or_else(|| TopologyError::NotFound(key.to_string()))
    }

    /// Look up a topology by key string.
    ///
    /// Well-formed keys that are not registered (e.g. `5.ring.A`) give
    /// [`TopologyError::NotFound`]; malformed strings give
    /// [`TopologyError::InvalidKey`].
    pub fn get(&self, key: &str) -> TopologyResult<&Topology> {
        self.get_key(&key.parse()?)
    }

    /// Coupling map of a registered topology.
    pub fn coupling_map(&self, key: &str) -> TopologyResult<&[Edge]> {
        self.get(key).map(Topology::coupling_map)
    }

    /// Qubit coordinates of a registered topology.
    pub fn qubit_coordinates(&self, key: &str) -> TopologyResult<&[Coordinate]> {
        self.get(key).map(Topology::coordinates)
    }

    /// Field pattern of a registered topology.
    pub fn field_pattern(&self, key: &str) -> TopologyResult<&[f64]> {
        self.get(key).map(Topology::field_pattern)
    }

    /// True if `key` names a registered topology.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Registered keys, ordered by qubit count, family, variant.
    pub fn keys(&self) -> impl Iterator<Item = TopologyKey> + '_ {
        self.topologies.keys().copied()
    }

    /// Registered topologies in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Topology> + '_ {
        self.topologies.values()
    }

    /// Registered topologies of one family, in key order.
    pub fn by_family(&self, family: Family) -> impl Iterator<Item = &Topology> + '_ {
        self.iter().filter(move |t| t.family() == family)
    }

    /// Number of registered topologies.
    pub fn len(&self) -> usize {
        self.topologies.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.topologies.is_empty()
    }
}

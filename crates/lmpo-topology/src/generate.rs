//! Generation rules for the chain, ring and plaquette families.
//!
//! The bond order, coordinates and field values produced here are consumed
//! verbatim by downstream experiment scripts; changing any of them changes
//! the MPO ordering the solver sees.

use crate::topology::{Coordinate, Edge};

/// The three index-aligned tables of a topology.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tables {
    /// Bonds in generation order.
    pub coupling_map: Vec<Edge>,
    /// One `(row, column)` per qubit.
    pub coordinates: Vec<Coordinate>,
    /// One field value per qubit.
    pub field_pattern: Vec<f64>,
}

fn path_bonds(n_qubits: usize) -> Vec<Edge> {
    (0..n_qubits.saturating_sub(1)).map(|i| (i, i + 1)).collect()
}

fn column(n_qubits: usize) -> Vec<Coordinate> {
    (0..n_qubits).map(|i| (0, i as i32)).collect()
}

fn alternating(n_qubits: usize, undriven_parity: usize) -> Vec<f64> {
    (0..n_qubits)
        .map(|i| if i % 2 == undriven_parity { 0.0 } else { 1.0 })
        .collect()
}

/// `N.chain.M`: path graph whose middle qubit `(N-1)/2` has zero field.
///
/// For odd `N` the middle index is even exactly when `(N-1) % 4 == 0`, so the
/// undriven parity follows that condition.
pub fn chain_middle(n_qubits: usize) -> Tables {
    let undriven_parity = usize::from(n_qubits.saturating_sub(1) % 4 != 0);
    Tables {
        coupling_map: path_bonds(n_qubits),
        coordinates: column(n_qubits),
        field_pattern: alternating(n_qubits, undriven_parity),
    }
}

/// `N.chain.E`: path graph whose qubit 0 has zero field.
pub fn chain_edge(n_qubits: usize) -> Tables {
    Tables {
        coupling_map: path_bonds(n_qubits),
        coordinates: column(n_qubits),
        field_pattern: alternating(n_qubits, 0),
    }
}

/// Ladder-ordered ring of `n_qubits` qubits, indices shifted by `offset`.
///
/// Qubit `offset` sits at the left end of the ladder, the last qubit at the
/// right end, and the interior qubits alternate between the bottom and top
/// rails. In MPO order every bond spans at most two sites.
///
/// The field pattern is 0 at the left end, then pairs of equal values
/// starting at 1 that flip every pair, and the right end continues the
/// alternation.
pub fn ring_ladder(n_qubits: usize, offset: usize) -> Tables {
    let o = offset;
    let mut coupling_map = vec![(o, o + 1), (o, o + 2)];
    for i in (o + 1)..(o + n_qubits).saturating_sub(2) {
        coupling_map.push((i, i + 2));
    }
    coupling_map.push((o + n_qubits - 2, o + n_qubits - 1));

    let mut coordinates = vec![(1, 1)];
    let mut field_pattern = vec![0.0];
    let mut h = 1.0;
    for i in (1..n_qubits.saturating_sub(2)).step_by(2) {
        let x = 2 + (i / 2) as i32;
        coordinates.extend([(x, 0), (x, 2)]);
        field_pattern.extend([h, h]);
        h = if h == 1.0 { 0.0 } else { 1.0 };
    }
    coordinates.push((1 + (n_qubits / 2) as i32, 1));
    field_pattern.push(h);

    Tables {
        coupling_map,
        coordinates,
        field_pattern,
    }
}

/// `N.ring.B`: sequential cycle closed by a single bond `(N-1, 0)`.
///
/// Laid out as a rounded rectangle: one end point, the bottom row left to
/// right, the other end point, then the top row right to left.
pub fn ring_cycle(n_qubits: usize) -> Tables {
    let mut coupling_map = path_bonds(n_qubits);
    coupling_map.push((n_qubits - 1, 0));

    let half = (n_qubits / 2) as i32;
    let mut coordinates = Vec::with_capacity(n_qubits);
    coordinates.push((1, 1));
    coordinates.extend((2..=half).map(|i| (i, 0)));
    coordinates.push((half + 1, 1));
    coordinates.extend((2..=half).rev().map(|i| (i, 2)));

    Tables {
        coupling_map,
        coordinates,
        field_pattern: alternating(n_qubits, 0),
    }
}

/// `N.plaquette.A`: a ladder ring on qubits `1..N-1` with qubit 0 attached to
/// qubit 1 and qubit `N-1` attached to qubit `N-2`.
///
/// The ring's field pattern is inverted so that the two tail qubits, both
/// undriven, neighbour driven ring qubits.
pub fn plaquette_ladder(n_qubits: usize) -> Tables {
    let ring = ring_ladder(n_qubits - 2, 1);

    let mut coupling_map = Vec::with_capacity(ring.coupling_map.len() + 2);
    coupling_map.push((0, 1));
    coupling_map.extend(ring.coupling_map);
    coupling_map.push((n_qubits - 2, n_qubits - 1));

    let (end_x, end_y) = ring.coordinates.last().copied().unwrap_or((1, 1));
    let mut coordinates = Vec::with_capacity(n_qubits);
    coordinates.push((0, 1));
    coordinates.extend(ring.coordinates);
    coordinates.push((end_x + 1, end_y));

    let mut field_pattern = Vec::with_capacity(n_qubits);
    field_pattern.push(0.0);
    field_pattern.extend(
        ring.field_pattern
            .iter()
            .map(|&h| if h == 0.0 { 1.0 } else { 0.0 }),
    );
    field_pattern.push(0.0);

    Tables {
        coupling_map,
        coordinates,
        field_pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_edge_four() {
        let t = chain_edge(4);
        assert_eq!(t.coupling_map, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(t.field_pattern, vec![0.0, 1.0, 0.0, 1.0]);
        assert_eq!(t.coordinates, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_chain_middle_parity_origin() {
        // (5 - 1) % 4 == 0: middle index 2 is even.
        assert_eq!(chain_middle(5).field_pattern, vec![0.0, 1.0, 0.0, 1.0, 0.0]);
        // (7 - 1) % 4 == 2: middle index 3 is odd.
        assert_eq!(
            chain_middle(7).field_pattern,
            vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_ring_ladder_six() {
        let t = ring_ladder(6, 0);
        assert_eq!(
            t.coupling_map,
            vec![(0, 1), (0, 2), (1, 3), (2, 4), (3, 5), (4, 5)]
        );
        assert_eq!(
            t.coordinates,
            vec![(1, 1), (2, 0), (2, 2), (3, 0), (3, 2), (4, 1)]
        );
        assert_eq!(t.field_pattern, vec![0.0, 1.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_ring_ladder_offset() {
        let t = ring_ladder(4, 1);
        assert_eq!(t.coupling_map, vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
        assert_eq!(t.field_pattern, vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_ring_cycle_layout() {
        let t = ring_cycle(6);
        assert_eq!(t.coupling_map.last(), Some(&(5, 0)));
        assert_eq!(
            t.coordinates,
            vec![(1, 1), (2, 0), (3, 0), (4, 1), (3, 2), (2, 2)]
        );
    }

    #[test]
    fn test_plaquette_ladder_six() {
        let t = plaquette_ladder(6);
        assert_eq!(
            t.coupling_map,
            vec![(0, 1), (1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]
        );
        assert_eq!(
            t.coordinates,
            vec![(0, 1), (1, 1), (2, 0), (2, 2), (3, 1), (4, 1)]
        );
        assert_eq!(t.field_pattern, vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }
}

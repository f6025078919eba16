//! Lattice descriptions for lindbladmpo experiments.
//!
//! Every registered lattice is a triple of index-aligned tables:
//!
//! - **coupling map**: the qubit pairs that interact directly,
//! - **qubit coordinates**: a 2D layout used only for plotting,
//! - **field pattern**: the relative on-site `h_z` strength per qubit.
//!
//! Tables are looked up by a [`TopologyKey`] of the form `"{N}.{family}.{variant}"`
//! (e.g. `"10.ring.A"`), or `"{N}.{device}"` for the fixed hardware graphs
//! (`"7.falcon"`, `"27.falcon"`, `"127.eagle"`).
//!
//! # Quick start
//!
//! ```rust
//! use lmpo_topology::{coupling_map, field_pattern, registry};
//!
//! assert_eq!(coupling_map("4.chain.E").unwrap(), &[(0, 1), (1, 2), (2, 3)]);
//! assert_eq!(field_pattern("4.chain.E").unwrap(), &[0.0, 1.0, 0.0, 1.0]);
//!
//! // Unregistered keys are an error, never an empty default.
//! assert!(coupling_map("5.ring.A").is_err());
//!
//! let ring = registry().get("8.ring.B").unwrap();
//! assert!(ring.is_simple_cycle());
//! ```
//!
//! # Families
//!
//! | Key | Qubits | Construction |
//! |-----|--------|--------------|
//! | `N.chain.M` | odd 3..=61 | path, middle qubit undriven |
//! | `N.chain.E` | 2..=62 | path, left edge undriven |
//! | `N.ring.A` | even 4..=62 | ladder-ordered cycle |
//! | `N.ring.B` | even 4..=62 | cycle with one long closing bond |
//! | `N.plaquette.A` | even 6..=62 | ladder ring with two tails |
//! | `10.plaquette.B`, `12.plaquette.B` | 10, 12 | literal |
//! | `7.falcon`, `27.falcon`, `127.eagle` | 7, 27, 127 | literal hardware graphs |

pub mod error;
pub mod generate;
pub mod key;
pub mod literal;
pub mod plot;
pub mod registry;
pub mod topology;

pub use error::{PlotError, TopologyError, TopologyResult};
pub use key::{Family, TopologyKey, Variant};
pub use plot::{
    GraphvizRenderer, PlotOptions, PlotOutcome, PlotRequest, Rendered, Renderer, plot_topology,
};
pub use registry::{
    TopologyRegistry, coupling_map, field_pattern, qubit_coordinates, registry, topology,
};
pub use topology::{Coordinate, Edge, Rule, Topology, TopologySource};

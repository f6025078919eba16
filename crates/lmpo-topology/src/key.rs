//! Topology keys: `"{N}.{family}.{variant}"` or `"{N}.{device}"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// A lattice family, or a named hardware device graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Open 1D chain.
    Chain,
    /// Closed 1D ring.
    Ring,
    /// Ring with tails on both sides.
    Plaquette,
    /// Heavy-hex Falcon device (7 or 27 qubits).
    Falcon,
    /// Heavy-hex Eagle device (127 qubits).
    Eagle,
}

impl Family {
    /// The key segment for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Chain => "chain",
            Family::Ring => "ring",
            Family::Plaquette => "plaquette",
            Family::Falcon => "falcon",
            Family::Eagle => "eagle",
        }
    }

    /// Hardware families are keyed without a variant segment.
    pub fn is_hardware(&self) -> bool {
        matches!(self, Family::Falcon | Family::Eagle)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chain" => Ok(Family::Chain),
            "ring" => Ok(Family::Ring),
            "plaquette" => Ok(Family::Plaquette),
            "falcon" => Ok(Family::Falcon),
            "eagle" => Ok(Family::Eagle),
            other => Err(format!("unknown family '{other}'")),
        }
    }
}

/// Ordering/driving variant of a lattice family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    /// Chain whose middle qubit has zero field.
    M,
    /// Chain whose left edge qubit has zero field.
    E,
    /// Ladder-like qubit ordering.
    A,
    /// Sequential ordering with one long closing bond.
    B,
}

impl Variant {
    /// The key segment for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::M => "M",
            Variant::E => "E",
            Variant::A => "A",
            Variant::B => "B",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Variant::M),
            "E" => Ok(Variant::E),
            "A" => Ok(Variant::A),
            "B" => Ok(Variant::B),
            other => Err(format!("unknown variant '{other}'")),
        }
    }
}

/// Lookup handle for a registered topology.
///
/// Keys order by qubit count first, then family and variant, which is the
/// order [`TopologyRegistry::keys`](crate::TopologyRegistry::keys) lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TopologyKey {
    n_qubits: usize,
    family: Family,
    variant: Option<Variant>,
}

impl TopologyKey {
    /// Key of a generated or literal lattice, e.g. `10.ring.A`.
    pub fn lattice(n_qubits: usize, family: Family, variant: Variant) -> Self {
        Self {
            n_qubits,
            family,
            variant: Some(variant),
        }
    }

    /// Key of a hardware device graph, e.g. `27.falcon`.
    pub fn device(n_qubits: usize, family: Family) -> Self {
        Self {
            n_qubits,
            family,
            variant: None,
        }
    }

    /// Number of qubits encoded in the key.
    #[inline]
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Family segment.
    #[inline]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Variant segment (`None` for hardware graphs).
    #[inline]
    pub fn variant(&self) -> Option<Variant> {
        self.variant
    }
}

impl fmt::Display for TopologyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Some(variant) => write!(f, "{}.{}.{}", self.n_qubits, self.family, variant),
            None => write!(f, "{}.{}", self.n_qubits, self.family),
        }
    }
}

impl FromStr for TopologyKey {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| TopologyError::InvalidKey {
            key: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid(
                "expected '{N}.{family}.{variant}' or '{N}.{device}'".into(),
            ));
        }

        let n_qubits: usize = parts[0]
            .parse()
            .map_err(|_| invalid(format!("qubit count '{}' is not a number", parts[0])))?;
        // Keys name registry entries verbatim: "04" and "+4" are not "4".
        if parts[0] != n_qubits.to_string() {
            return Err(invalid(format!(
                "qubit count '{}' is not in canonical form",
                parts[0]
            )));
        }
        let family: Family = parts[1].parse().map_err(invalid)?;

        match (family.is_hardware(), parts.get(2)) {
            (true, None) => Ok(Self::device(n_qubits, family)),
            (false, Some(v)) => Ok(Self::lattice(n_qubits, family, v.parse().map_err(invalid)?)),
            (true, Some(_)) => Err(invalid(format!("device '{family}' takes no variant"))),
            (false, None) => Err(invalid(format!("family '{family}' requires a variant"))),
        }
    }
}

impl TryFrom<String> for TopologyKey {
    type Error = TopologyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TopologyKey> for String {
    fn from(key: TopologyKey) -> Self {
        key.to_string()
    }
}

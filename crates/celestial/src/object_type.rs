//! Celestial object type classification

use serde::{Deserialize, Serialize};

/// The kinds of celestial object this tool can generate.
///
/// Each variant carries a script label (the block keyword SpaceEngine
/// expects) and a one-letter prefix used when assigning sequential names
/// such as `Jupiter.D1` or `Jupiter.A12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    /// A large (spherical) moon
    Moon,

    /// A minor (irregular) moon
    DwarfMoon,

    /// An asteroidal object. Also the default classification for smaller
    /// bodies such as comets and minor moons (SpaceEngine convention).
    Asteroid,

    /// A single comet
    Comet,

    /// A massless reference point for a grouped comet pair
    Barycenter,
}

impl ObjectType {
    /// Script block keyword for this type
    pub fn label(&self) -> &'static str {
        match self {
            Self::Moon => "Moon",
            Self::DwarfMoon => "DwarfMoon",
            Self::Asteroid => "Asteroid",
            Self::Comet => "Comet",
            Self::Barycenter => "Barycenter",
        }
    }

    /// One-letter prefix for sequential naming
    ///
    /// Comets and their barycenters share the `C` prefix: a barycenter is
    /// only ever a stand-in for the comet pair it anchors.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Moon => "M",
            Self::DwarfMoon => "D",
            Self::Asteroid => "A",
            Self::Comet | Self::Barycenter => "C",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

//! Distance unit selection for the semi-major axis

use serde::{Deserialize, Serialize};

/// Unit in which semi-major axes are expressed in the output script.
///
/// Matched case-insensitively when parsed from user input; anything that
/// is not recognizably `km` falls back to AU, which matches the
/// serializer's AU-style `SemiMajorAxis` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Astronomical units
    #[default]
    Au,

    /// Kilometers
    Km,
}

impl DistanceUnit {
    /// Parse a unit string. Never fails; unknown values mean AU.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("km") {
            Self::Km
        } else {
            Self::Au
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Au => write!(f, "AU"),
            Self::Km => write!(f, "km"),
        }
    }
}

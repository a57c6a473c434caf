//! SpaceEngine `.sc` script serialization
//!
//! `formatter` turns one `CelestialObject` into its script text block;
//! `writer` concatenates blocks into the output file. Field precision is a
//! compatibility contract with SpaceEngine: 8 decimal places for angles,
//! radii, and periods, 16 for eccentricity, scientific notation for mass.

pub mod formatter;
pub mod writer;


pub use formatter::format_object;
pub use writer::{write_script, WriteError};

//! Celestial object domain model
//!
//! This crate provides the types that describe a generated celestial body:
//! its identity (`CelestialObject`, `ObjectType`), its physical properties,
//! and its orbital elements. Objects are produced by the generation engine
//! and consumed by the script serializer; nothing here performs I/O.

pub mod distance_unit;
pub mod object;
pub mod object_type;
pub mod orbital;
pub mod physical;


pub use distance_unit::DistanceUnit;
pub use object::CelestialObject;
pub use object_type::ObjectType;
pub use orbital::{OrbitalElements, J2000_EPOCH};
pub use physical::PhysicalProperties;

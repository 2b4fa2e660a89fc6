//! Domain types for the metro route planner.
//!
//! Stations carry their line memberships; lines themselves are never stored
//! and are derived by sorting the stations tagged with a line by sequence.

mod city;
mod station;

pub use city::{City, normalize_slug};
pub use station::{LineStop, Station};

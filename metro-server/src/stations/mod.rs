//! Station directory: cities and their stations.
//!
//! Loaded once at startup from a JSON file. Stations can be listed directly
//! or derived from ordered line rosters.

mod directory;
mod error;
mod seed;

pub use directory::{CitySummary, StationDirectory};
pub use error::DirectoryError;
pub use seed::{LineRoster, apply_rosters, stations_from_rosters};

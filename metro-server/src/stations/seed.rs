//! Building stations from ordered line rosters.
//!
//! A roster lists a line's stations in travel order. Each station gets the
//! 1-based position as its sequence on that line, and a station named on
//! several rosters becomes an interchange.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{LineStop, Station};

/// A line and its stations in travel order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineRoster {
    /// City the line belongs to, as a slug. Only used when loading a
    /// directory file.
    #[serde(default)]
    pub city: String,

    pub name: String,

    pub stations: Vec<String>,
}

impl LineRoster {
    /// Create a roster for `name` with stations in travel order.
    pub fn new<S: Into<String>>(name: impl Into<String>, stations: impl IntoIterator<Item = S>) -> Self {
        Self {
            city: String::new(),
            name: name.into(),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Merge rosters into `stations`.
///
/// Stations already present (matched by name) gain the line membership and
/// keep their coordinates; unknown names are appended with default
/// coordinates.
pub fn apply_rosters<'a>(stations: &mut Vec<Station>, rosters: impl IntoIterator<Item = &'a LineRoster>) {
    let mut index: HashMap<String, usize> = stations
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.clone(), i))
        .collect();

    for roster in rosters {
        for (position, name) in roster.stations.iter().enumerate() {
            let idx = *index.entry(name.clone()).or_insert_with(|| {
                stations.push(Station::new(name.clone()));
                stations.len() - 1
            });
            stations[idx]
                .lines
                .push(LineStop::new(roster.name.clone(), position as i64 + 1));
        }
    }
}

/// Build a station list purely from rosters.
pub fn stations_from_rosters(rosters: &[LineRoster]) -> Vec<Station> {
    let mut stations = Vec::new();
    apply_rosters(&mut stations, rosters);
    stations
}

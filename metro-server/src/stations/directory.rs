//! In-memory station directory.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::error::DirectoryError;
use super::seed::{LineRoster, apply_rosters};
use crate::domain::{City, Station, normalize_slug};

/// A station as stored in a directory file: the station plus its city.
#[derive(Debug, Deserialize)]
struct StationRecord {
    city: String,
    #[serde(flatten)]
    station: Station,
}

/// On-disk layout of a directory file.
///
/// Stations may be listed explicitly, derived from line rosters, or both:
/// roster lines are merged into explicit stations with the same name.
#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    cities: Vec<City>,
    #[serde(default)]
    stations: Vec<StationRecord>,
    #[serde(default)]
    lines: Vec<LineRoster>,
}

/// Line and station totals for a city.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CitySummary {
    pub total_lines: usize,
    pub total_stations: usize,
}

/// Read-only snapshot of every city and its stations.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    cities: Vec<City>,
    /// Stations per city slug, sorted by name.
    stations: HashMap<String, Vec<Station>>,
}

impl StationDirectory {
    /// Build a directory from cities and `(city slug, station)` pairs.
    pub fn new(
        cities: Vec<City>,
        stations: impl IntoIterator<Item = (String, Station)>,
    ) -> Result<Self, DirectoryError> {
        Self::assemble(cities, stations, &[])
    }

    /// Build a directory with a single city whose stations come from line
    /// rosters.
    pub fn seed_city(city: City, rosters: &[LineRoster]) -> Result<Self, DirectoryError> {
        let slug = city.slug.clone();
        let rosters: Vec<LineRoster> = rosters
            .iter()
            .cloned()
            .map(|r| LineRoster { city: slug.clone(), ..r })
            .collect();
        Self::assemble(vec![city], std::iter::empty(), &rosters)
    }

    /// Parse a directory from JSON.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let file: DirectoryFile = serde_json::from_str(json).map_err(|e| DirectoryError::Json {
            message: e.to_string(),
        })?;

        let stations = file
            .stations
            .into_iter()
            .map(|record| (record.city, record.station));
        Self::assemble(file.cities, stations, &file.lines)
    }

    /// Load a directory from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            cities = directory.cities.len(),
            stations = directory.station_count(),
            "loaded station directory"
        );
        Ok(directory)
    }

    fn assemble(
        cities: Vec<City>,
        stations: impl IntoIterator<Item = (String, Station)>,
        rosters: &[LineRoster],
    ) -> Result<Self, DirectoryError> {
        let mut by_city: HashMap<String, Vec<Station>> = HashMap::new();
        for city in &cities {
            if by_city.insert(city.slug.clone(), Vec::new()).is_some() {
                return Err(DirectoryError::DuplicateCity(city.slug.clone()));
            }
        }

        for (slug, station) in stations {
            let slug = normalize_slug(&slug);
            let Some(list) = by_city.get_mut(&slug) else {
                return Err(DirectoryError::UnknownCity {
                    entity: format!("station {}", station.name),
                    city: slug,
                });
            };
            if list.iter().any(|s| s.name == station.name) {
                return Err(DirectoryError::DuplicateStation {
                    city: slug,
                    name: station.name,
                });
            }
            list.push(station);
        }

        for roster in rosters {
            let slug = normalize_slug(&roster.city);
            let Some(list) = by_city.get_mut(&slug) else {
                return Err(DirectoryError::UnknownCity {
                    entity: format!("line {}", roster.name),
                    city: slug,
                });
            };
            apply_rosters(list, [roster]);
        }

        for list in by_city.values_mut() {
            list.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(Self {
            cities,
            stations: by_city,
        })
    }

    /// Active cities, sorted by name.
    pub fn cities(&self) -> Vec<&City> {
        let mut active: Vec<&City> = self.cities.iter().filter(|c| c.is_active).collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        active
    }

    /// An active city by slug.
    pub fn city(&self, slug: &str) -> Option<&City> {
        let slug = normalize_slug(slug);
        self.cities.iter().find(|c| c.is_active && c.slug == slug)
    }

    /// Stations of an active city, sorted by name.
    pub fn stations_in(&self, slug: &str) -> Option<&[Station]> {
        let city = self.city(slug)?;
        self.stations.get(&city.slug).map(Vec::as_slice)
    }

    /// Line and station totals for an active city.
    pub fn summary(&self, slug: &str) -> Option<CitySummary> {
        let stations = self.stations_in(slug)?;
        let lines: BTreeSet<&str> = stations.iter().flat_map(Station::line_names).collect();
        Some(CitySummary {
            total_lines: lines.len(),
            total_stations: stations.len(),
        })
    }

    /// Every station with its city slug, cities in slug order.
    pub fn all_stations(&self) -> Vec<(&str, &Station)> {
        let mut slugs: Vec<&String> = self.stations.keys().collect();
        slugs.sort();
        slugs
            .into_iter()
            .flat_map(|slug| self.stations[slug].iter().map(move |s| (slug.as_str(), s)))
            .collect()
    }

    /// Total number of stations across all cities.
    pub fn station_count(&self) -> usize {
        self.stations.values().map(Vec::len).sum()
    }

    /// Slugs of every city, active or not.
    pub fn slugs(&self) -> HashSet<&str> {
        self.cities.iter().map(|c| c.slug.as_str()).collect()
    }
}

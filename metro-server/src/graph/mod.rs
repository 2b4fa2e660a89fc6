//! Station graph construction.
//!
//! A graph is built fresh from a city's station list: stations are grouped by
//! line, each group is sorted by sequence, and consecutive stations are joined
//! by an edge in both directions. Every edge on one graph carries the same
//! weight, chosen by the cost model the graph is built for.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::domain::Station;

/// Errors raised for malformed station data.
///
/// The builder never repairs its input; any inconsistency is reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Two stations claim the same position on one line
    #[error("stations {first} and {second} share sequence {sequence} on line {line}")]
    DuplicateSequence {
        line: String,
        sequence: i64,
        first: String,
        second: String,
    },

    /// A station lists the same line twice
    #[error("station {station} lists line {line} more than once")]
    RepeatedLine { station: String, line: String },

    /// A station name occurs more than once in the input
    #[error("station {0} appears more than once")]
    DuplicateStation(String),

    /// Edge weights must be finite and non-negative
    #[error("invalid edge weight {0}: must be finite and non-negative")]
    InvalidWeight(f64),
}

/// A directed edge to a neighbouring station along one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Neighbouring station.
    pub to: String,
    /// Line the hop runs on.
    pub line: String,
    /// Cost of the hop under the graph's cost model.
    pub weight: f64,
}

/// Adjacency list keyed by station name.
///
/// Holds exactly one node per station, including stations on no line (which
/// have no edges). Parallel edges between the same pair of stations on
/// different lines are kept as separate entries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Build a graph where every hop costs `weight`.
    ///
    /// Lines are processed in name order and stations within a line in
    /// sequence order, so edge lists do not depend on the input order.
    pub fn build(stations: &[Station], weight: f64) -> Result<Self, GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        let mut graph = Graph {
            adjacency: HashMap::with_capacity(stations.len()),
        };

        for station in stations {
            if graph
                .adjacency
                .insert(station.name.clone(), Vec::new())
                .is_some()
            {
                return Err(GraphError::DuplicateStation(station.name.clone()));
            }
        }

        let mut lines: BTreeMap<&str, Vec<(i64, &str)>> = BTreeMap::new();
        for station in stations {
            let mut seen = HashSet::new();
            for stop in &station.lines {
                if !seen.insert(stop.line.as_str()) {
                    return Err(GraphError::RepeatedLine {
                        station: station.name.clone(),
                        line: stop.line.clone(),
                    });
                }
                lines
                    .entry(stop.line.as_str())
                    .or_default()
                    .push((stop.sequence, station.name.as_str()));
            }
        }

        for (line, mut members) in lines {
            members.sort_unstable();

            for pair in members.windows(2) {
                let (seq_a, a) = pair[0];
                let (seq_b, b) = pair[1];

                if seq_a == seq_b {
                    return Err(GraphError::DuplicateSequence {
                        line: line.to_string(),
                        sequence: seq_a,
                        first: a.to_string(),
                        second: b.to_string(),
                    });
                }

                graph.link(a, b, line, weight);
                graph.link(b, a, line, weight);
            }
        }

        Ok(graph)
    }

    /// Build a graph for counting stations: every hop costs 1.
    pub fn unweighted(stations: &[Station]) -> Result<Self, GraphError> {
        Self::build(stations, 1.0)
    }

    /// Build a graph where every hop costs `minutes_per_hop`.
    pub fn timed(stations: &[Station], minutes_per_hop: f64) -> Result<Self, GraphError> {
        Self::build(stations, minutes_per_hop)
    }

    /// Build a graph where every hop covers `distance_per_hop`.
    pub fn by_distance(stations: &[Station], distance_per_hop: f64) -> Result<Self, GraphError> {
        Self::build(stations, distance_per_hop)
    }

    fn link(&mut self, from: &str, to: &str, line: &str, weight: f64) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(Edge {
                to: to.to_string(),
                line: line.to_string(),
                weight,
            });
    }

    /// Whether `station` is a node of this graph.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Outgoing edges of `station`; empty for unknown or isolated stations.
    pub fn edges(&self, station: &str) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of stations.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edge entries (two per line adjacency).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Station names in sorted order.
    pub fn station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Distinct line names in sorted order.
    pub fn lines(&self) -> Vec<&str> {
        self.adjacency
            .values()
            .flatten()
            .map(|e| e.line.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

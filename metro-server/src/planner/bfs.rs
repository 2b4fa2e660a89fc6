//! Fewest-stations search.
//!
//! Plain breadth-first search over the station graph. Stations are marked
//! visited when first enqueued, so each is expanded at most once, and the
//! search stops as soon as the destination is dequeued.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::trace;

use crate::graph::Graph;

/// Result of a breadth-first search.
#[derive(Debug, Clone, PartialEq)]
pub struct BfsPath {
    /// Stations from origin to destination inclusive.
    pub path: Vec<String>,
    /// Stations dequeued before the search stopped.
    pub settled: usize,
}

impl BfsPath {
    /// Number of hops along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find a path from `origin` to `destination` with the fewest hops.
///
/// Returns `None` if either station is not in the graph or the destination
/// cannot be reached. When `origin == destination` the path is `[origin]`.
pub fn fewest_stations<'g>(
    graph: &'g Graph,
    origin: &'g str,
    destination: &'g str,
) -> Option<BfsPath> {
    if !graph.contains(origin) || !graph.contains(destination) {
        return None;
    }

    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut settled = 0;
    let mut found = false;

    visited.insert(origin);
    queue.push_back(origin);

    while let Some(station) = queue.pop_front() {
        settled += 1;

        if station == destination {
            found = true;
            break;
        }

        for edge in graph.edges(station) {
            let next = edge.to.as_str();
            if visited.insert(next) {
                predecessors.insert(next, station);
                queue.push_back(next);
            }
        }
    }

    if !found {
        trace!(origin, destination, settled, "BFS exhausted without reaching destination");
        return None;
    }

    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while let Some(&previous) = predecessors.get(current) {
        path.push(previous.to_string());
        current = previous;
    }
    path.reverse();

    Some(BfsPath { path, settled })
}

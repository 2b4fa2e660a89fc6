//! Weighted route search with a line-change penalty.
//!
//! Dijkstra over `(station, arrival line)` states rather than stations alone:
//! the cost of leaving a station depends on which line we arrived on, so the
//! cheapest arrival at an intermediate station is not necessarily the one
//! that leads to the cheapest trip. The origin is seeded with no arrival
//! line, so the first hop never pays the penalty.

use std::collections::HashMap;

use tracing::trace;

use super::frontier::Frontier;
use crate::graph::Graph;

/// Error from weighted search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Transfer penalties must be finite and non-negative
    #[error("invalid transfer penalty {0}: must be finite and non-negative")]
    InvalidPenalty(f64),
}

/// Search state: a station together with the line we arrived on.
///
/// `None` only for the origin, before any hop has been taken.
type State<'g> = (&'g str, Option<&'g str>);

/// Result of a weighted search.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    /// Stations from origin to destination inclusive.
    pub path: Vec<String>,

    /// Sum of hop weights plus any transfer penalties paid.
    pub cost: f64,

    /// Number of line changes along the path.
    pub transfers: usize,

    /// States settled before the destination was popped.
    pub settled: usize,
}

/// Find the cheapest route from `origin` to `destination`.
///
/// Hopping along an edge costs its weight, plus `transfer_penalty` when the
/// edge's line differs from the line we arrived on. A penalty of zero makes
/// this a plain shortest-path search over the edge weights.
///
/// Returns `Ok(None)` when either station is missing from the graph or the
/// destination is unreachable.
pub fn cheapest_path<'g>(
    graph: &'g Graph,
    origin: &'g str,
    destination: &'g str,
    transfer_penalty: f64,
) -> Result<Option<WeightedPath>, SearchError> {
    if !transfer_penalty.is_finite() || transfer_penalty < 0.0 {
        return Err(SearchError::InvalidPenalty(transfer_penalty));
    }
    if !graph.contains(origin) || !graph.contains(destination) {
        return Ok(None);
    }

    let start: State<'g> = (origin, None);

    let mut best: HashMap<State<'g>, f64> = HashMap::new();
    let mut predecessors: HashMap<State<'g>, State<'g>> = HashMap::new();
    let mut frontier = Frontier::new();
    let mut settled = 0;

    best.insert(start, 0.0);
    frontier.push(start, 0.0);

    while let Some((state, cost)) = frontier.pop() {
        // Stale entry: a cheaper way to this state was pushed later.
        if best.get(&state).is_some_and(|&known| cost > known) {
            continue;
        }
        settled += 1;

        let (station, arrival_line) = state;
        if station == destination {
            let (path, transfers) = reconstruct(&predecessors, state);
            return Ok(Some(WeightedPath {
                path,
                cost,
                transfers,
                settled,
            }));
        }

        for edge in graph.edges(station) {
            let step = match arrival_line {
                Some(line) if line != edge.line => edge.weight + transfer_penalty,
                _ => edge.weight,
            };

            let next: State<'g> = (edge.to.as_str(), Some(edge.line.as_str()));
            let next_cost = cost + step;

            if best.get(&next).is_none_or(|&known| next_cost < known) {
                best.insert(next, next_cost);
                predecessors.insert(next, state);
                frontier.push(next, next_cost);
            }
        }
    }

    trace!(origin, destination, settled, "frontier exhausted without reaching destination");
    Ok(None)
}

/// Walk predecessor links back from `end`, returning the station sequence in
/// travel order and the number of line changes along it.
fn reconstruct<'g>(
    predecessors: &HashMap<State<'g>, State<'g>>,
    end: State<'g>,
) -> (Vec<String>, usize) {
    let mut states = vec![end];
    let mut current = end;
    while let Some(&previous) = predecessors.get(&current) {
        states.push(previous);
        current = previous;
    }
    states.reverse();

    let transfers = states
        .windows(2)
        .filter(|w| matches!((w[0].1, w[1].1), (Some(a), Some(b)) if a != b))
        .count();

    let path = states.iter().map(|(station, _)| station.to_string()).collect();
    (path, transfers)
}

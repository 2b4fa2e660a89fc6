//! Route computation over a city's stations.
//!
//! Validates station names, builds the graph for the requested cost model,
//! runs the matching search and shapes the result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bfs::fewest_stations;
use super::config::RouteConfig;
use super::search::{SearchError, cheapest_path};
use crate::domain::Station;
use crate::graph::{Graph, GraphError};

/// Error from route computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Origin or destination is not a station of the network
    #[error("station not found: {0}")]
    StationNotFound(String),

    /// Both stations exist but nothing connects them
    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },

    /// Station data could not be turned into a graph
    #[error("malformed station data: {0}")]
    Graph(#[from] GraphError),

    /// Search parameters were rejected
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Error returned when parsing an unknown cost model name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cost model: {0}")]
pub struct UnknownCostModel(String);

/// What a route is optimised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostModel {
    /// Fewest stations, via breadth-first search.
    FewestStations,
    /// Least travel time, charging a penalty per change of line.
    MinTime,
    /// Cheapest fare, derived from travelled distance.
    MinFare,
}

impl CostModel {
    /// Every cost model.
    pub const ALL: [CostModel; 3] = [
        CostModel::FewestStations,
        CostModel::MinTime,
        CostModel::MinFare,
    ];

    /// Short label for the route's metric.
    pub fn label(&self) -> &'static str {
        match self {
            CostModel::FewestStations => "Count",
            CostModel::MinTime => "Time",
            CostModel::MinFare => "Distance",
        }
    }

    /// Human-readable description of how the route was chosen.
    pub fn message(&self) -> &'static str {
        match self {
            CostModel::FewestStations => "Shortest path based on minimum stations (BFS)",
            CostModel::MinTime => "Fastest path including line change penalties (Dijkstra)",
            CostModel::MinFare => "Cheapest path based on distance travelled (Dijkstra)",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            CostModel::FewestStations => "fewest-stations",
            CostModel::MinTime => "min-time",
            CostModel::MinFare => "min-fare",
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostModel {
    type Err = UnknownCostModel;

    /// Accepts the kebab-case names as well as the short selector values
    /// `stations`, `time`, `cost` and `fare`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stations" | "fewest-stations" | "min-stations" => Ok(CostModel::FewestStations),
            "time" | "min-time" => Ok(CostModel::MinTime),
            "cost" | "fare" | "min-fare" | "distance" | "min-distance" => Ok(CostModel::MinFare),
            _ => Err(UnknownCostModel(s.to_string())),
        }
    }
}

/// Route with the fewest stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationsRoute {
    pub path: Vec<String>,
    /// Stations on the path, origin and destination included.
    pub station_count: usize,
}

/// Fastest route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRoute {
    pub path: Vec<String>,
    /// Travel time plus transfer penalties.
    pub total_minutes: f64,
    /// Changes of line along the path.
    pub transfers: usize,
}

/// Cheapest route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareRoute {
    pub path: Vec<String>,
    pub total_distance: f64,
    pub fare: u32,
}

/// A computed route under any cost model.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    FewestStations(StationsRoute),
    MinTime(TimeRoute),
    MinFare(FareRoute),
}

impl Route {
    /// Stations from origin to destination inclusive.
    pub fn path(&self) -> &[String] {
        match self {
            Route::FewestStations(r) => &r.path,
            Route::MinTime(r) => &r.path,
            Route::MinFare(r) => &r.path,
        }
    }

    /// Accumulated search cost: hops, minutes or distance.
    pub fn metric(&self) -> f64 {
        match self {
            Route::FewestStations(r) => r.station_count.saturating_sub(1) as f64,
            Route::MinTime(r) => r.total_minutes,
            Route::MinFare(r) => r.total_distance,
        }
    }

    /// The cost model this route was computed under.
    pub fn cost_model(&self) -> CostModel {
        match self {
            Route::FewestStations(_) => CostModel::FewestStations,
            Route::MinTime(_) => CostModel::MinTime,
            Route::MinFare(_) => CostModel::MinFare,
        }
    }

    /// Short label for the metric.
    pub fn label(&self) -> &'static str {
        self.cost_model().label()
    }
}

/// Stateless route planner.
///
/// Every call builds its own graph and search state, so one planner can be
/// shared freely between concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    config: RouteConfig,
}

impl RoutePlanner {
    /// Create a new planner.
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    /// The planner's configuration.
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Build the graph that `mode` searches over.
    pub fn graph_for(&self, stations: &[Station], mode: CostModel) -> Result<Graph, GraphError> {
        match mode {
            CostModel::FewestStations => Graph::unweighted(stations),
            CostModel::MinTime => Graph::timed(stations, self.config.minutes_per_station),
            CostModel::MinFare => Graph::by_distance(stations, self.config.distance_per_station),
        }
    }

    /// Compute a route from `from` to `to` under `mode`.
    pub fn compute_route(
        &self,
        stations: &[Station],
        from: &str,
        to: &str,
        mode: CostModel,
    ) -> Result<Route, RouteError> {
        ensure_listed(stations, from)?;
        ensure_listed(stations, to)?;
        let graph = self.graph_for(stations, mode)?;
        self.route_on(&graph, from, to, mode)
    }

    /// Compute a route over a graph the caller already built with
    /// [`RoutePlanner::graph_for`] for the same `mode`.
    pub fn route_on(
        &self,
        graph: &Graph,
        from: &str,
        to: &str,
        mode: CostModel,
    ) -> Result<Route, RouteError> {
        match mode {
            CostModel::FewestStations => self.stations_on(graph, from, to).map(Route::FewestStations),
            CostModel::MinTime => self.time_on(graph, from, to).map(Route::MinTime),
            CostModel::MinFare => self.fare_on(graph, from, to).map(Route::MinFare),
        }
    }

    /// Route with the fewest stations.
    pub fn min_stations(
        &self,
        stations: &[Station],
        from: &str,
        to: &str,
    ) -> Result<StationsRoute, RouteError> {
        ensure_listed(stations, from)?;
        ensure_listed(stations, to)?;
        let graph = self.graph_for(stations, CostModel::FewestStations)?;
        self.stations_on(&graph, from, to)
    }

    /// Fastest route, charging the configured transfer penalty.
    pub fn min_time(
        &self,
        stations: &[Station],
        from: &str,
        to: &str,
    ) -> Result<TimeRoute, RouteError> {
        ensure_listed(stations, from)?;
        ensure_listed(stations, to)?;
        let graph = self.graph_for(stations, CostModel::MinTime)?;
        self.time_on(&graph, from, to)
    }

    /// Cheapest route by distance, with its fare.
    pub fn min_fare(
        &self,
        stations: &[Station],
        from: &str,
        to: &str,
    ) -> Result<FareRoute, RouteError> {
        ensure_listed(stations, from)?;
        ensure_listed(stations, to)?;
        let graph = self.graph_for(stations, CostModel::MinFare)?;
        self.fare_on(&graph, from, to)
    }

    /// Fewest-stations search over an unweighted graph.
    pub fn stations_on(&self, graph: &Graph, from: &str, to: &str) -> Result<StationsRoute, RouteError> {
        ensure_node(graph, from)?;
        ensure_node(graph, to)?;

        let found = fewest_stations(graph, from, to).ok_or_else(|| no_route(from, to))?;
        debug!(from, to, settled = found.settled, hops = found.hops(), "fewest-stations route");

        Ok(StationsRoute {
            station_count: found.path.len(),
            path: found.path,
        })
    }

    /// Fastest-route search over a timed graph.
    pub fn time_on(&self, graph: &Graph, from: &str, to: &str) -> Result<TimeRoute, RouteError> {
        ensure_node(graph, from)?;
        ensure_node(graph, to)?;

        let found = cheapest_path(graph, from, to, self.config.transfer_penalty_minutes)?
            .ok_or_else(|| no_route(from, to))?;
        debug!(
            from,
            to,
            settled = found.settled,
            minutes = found.cost,
            transfers = found.transfers,
            "min-time route"
        );

        Ok(TimeRoute {
            path: found.path,
            total_minutes: found.cost,
            transfers: found.transfers,
        })
    }

    /// Cheapest-fare search over a distance graph. No transfer penalty.
    pub fn fare_on(&self, graph: &Graph, from: &str, to: &str) -> Result<FareRoute, RouteError> {
        ensure_node(graph, from)?;
        ensure_node(graph, to)?;

        let found = cheapest_path(graph, from, to, 0.0)?.ok_or_else(|| no_route(from, to))?;
        let fare = self.config.fares.fare_for(found.cost);
        debug!(from, to, settled = found.settled, distance = found.cost, fare, "min-fare route");

        Ok(FareRoute {
            path: found.path,
            total_distance: found.cost,
            fare,
        })
    }
}

/// Route with the fewest stations, using default configuration.
pub fn min_stations(stations: &[Station], from: &str, to: &str) -> Result<StationsRoute, RouteError> {
    RoutePlanner::default().min_stations(stations, from, to)
}

/// Fastest route with explicit per-hop time and transfer penalty.
pub fn min_time(
    stations: &[Station],
    from: &str,
    to: &str,
    per_station_minutes: f64,
    transfer_penalty_minutes: f64,
) -> Result<TimeRoute, RouteError> {
    let config = RouteConfig::default()
        .with_minutes_per_station(per_station_minutes)
        .with_transfer_penalty(transfer_penalty_minutes);
    RoutePlanner::new(config).min_time(stations, from, to)
}

/// Cheapest route with explicit per-hop distance and the default fare table.
pub fn min_fare(
    stations: &[Station],
    from: &str,
    to: &str,
    per_station_distance: f64,
) -> Result<FareRoute, RouteError> {
    let config = RouteConfig::default().with_distance_per_station(per_station_distance);
    RoutePlanner::new(config).min_fare(stations, from, to)
}

fn ensure_listed(stations: &[Station], name: &str) -> Result<(), RouteError> {
    if stations.iter().any(|s| s.name == name) {
        Ok(())
    } else {
        Err(RouteError::StationNotFound(name.to_string()))
    }
}

fn ensure_node(graph: &Graph, name: &str) -> Result<(), RouteError> {
    if graph.contains(name) {
        Ok(())
    } else {
        Err(RouteError::StationNotFound(name.to_string()))
    }
}

fn no_route(from: &str, to: &str) -> RouteError {
    RouteError::NoRoute {
        from: from.to_string(),
        to: to.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_model_parses_selector_values() {
        assert_eq!("stations".parse(), Ok(CostModel::FewestStations));
        assert_eq!("time".parse(), Ok(CostModel::MinTime));
        assert_eq!("cost".parse(), Ok(CostModel::MinFare));
        assert_eq!("Min-Fare".parse(), Ok(CostModel::MinFare));
        assert_eq!(
            "speed".parse::<CostModel>(),
            Err(UnknownCostModel("speed".into()))
        );
    }

    #[test]
    fn cost_model_display_round_trips() {
        for mode in CostModel::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn cost_model_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&CostModel::FewestStations).unwrap(),
            r#""fewest-stations""#
        );
        assert_eq!(
            serde_json::from_str::<CostModel>(r#""min-time""#).unwrap(),
            CostModel::MinTime
        );
    }

    #[test]
    fn labels() {
        assert_eq!(CostModel::FewestStations.label(), "Count");
        assert_eq!(CostModel::MinTime.label(), "Time");
        assert_eq!(CostModel::MinFare.label(), "Distance");
    }

    #[test]
    fn route_metric_counts_hops() {
        let route = Route::FewestStations(StationsRoute {
            path: vec!["A".into(), "B".into(), "C".into()],
            station_count: 3,
        });
        assert_eq!(route.metric(), 2.0);
        assert_eq!(route.label(), "Count");
        assert_eq!(route.path().len(), 3);
    }

    #[test]
    fn error_display() {
        let err = RouteError::StationNotFound("Atlantis".into());
        assert_eq!(err.to_string(), "station not found: Atlantis");

        let err = no_route("A", "Z");
        assert_eq!(err.to_string(), "no route from A to Z");

        let err = RouteError::from(GraphError::DuplicateStation("A".into()));
        assert_eq!(
            err.to_string(),
            "malformed station data: station A appears more than once"
        );
    }
}

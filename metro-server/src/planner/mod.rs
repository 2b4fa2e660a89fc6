//! Route planning over a metro network.
//!
//! Three cost models share one pipeline: check the station names, build a
//! graph weighted for the model, search it and shape the result. Fewest
//! stations uses breadth-first search; time and fare use Dijkstra over
//! `(station, arrival line)` states so that line changes can be charged.

mod bfs;
mod config;
mod fare;
mod frontier;
mod search;
mod service;


pub use bfs::{BfsPath, fewest_stations};
pub use config::{ConfigError, RouteConfig};
pub use fare::{FareError, FareTable, FareTier};
pub use frontier::Frontier;
pub use search::{SearchError, WeightedPath, cheapest_path};
pub use service::{
    CostModel, FareRoute, Route, RouteError, RoutePlanner, StationsRoute, TimeRoute,
    UnknownCostModel, min_fare, min_stations, min_time,
};

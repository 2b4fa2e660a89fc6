//! Application state for the web layer.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheConfig, GraphCache};
use crate::graph::{Graph, GraphError};
use crate::planner::{CostModel, RoutePlanner};
use crate::stations::StationDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cities and their stations
    pub directory: Arc<StationDirectory>,

    /// Route planner with its configuration
    pub planner: Arc<RoutePlanner>,

    /// Built graphs per city and cost model
    pub graphs: Arc<GraphCache>,

    /// City used when a request names none
    pub default_city: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directory: StationDirectory,
        planner: RoutePlanner,
        cache_config: &CacheConfig,
        default_city: &str,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            planner: Arc::new(planner),
            graphs: Arc::new(GraphCache::new(cache_config)),
            default_city: Arc::from(default_city),
        }
    }

    /// The graph for `city` under `mode`, built from the directory on first
    /// use. `None` if the city is unknown or inactive.
    pub async fn graph(&self, city: &str, mode: CostModel) -> Result<Option<Arc<Graph>>, GraphError> {
        let Some(stations) = self.directory.stations_in(city) else {
            return Ok(None);
        };

        let planner = &self.planner;
        let graph = self
            .graphs
            .get_or_build(city, mode, || {
                debug!(city, %mode, stations = stations.len(), "building graph");
                planner.graph_for(stations, mode)
            })
            .await?;
        Ok(Some(graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::City;
    use crate::stations::LineRoster;

    fn state() -> AppState {
        let directory = StationDirectory::seed_city(
            City::new("Kolkata", "kolkata", "West Bengal"),
            &[
                LineRoster::new("Blue Line", ["Park Street", "Esplanade"]),
                LineRoster::new("Green Line", ["Esplanade", "Sealdah"]),
            ],
        )
        .unwrap();
        AppState::new(
            directory,
            RoutePlanner::default(),
            &CacheConfig::default(),
            "kolkata",
        )
    }

    #[tokio::test]
    async fn graph_is_built_and_cached() {
        let state = state();

        let graph = state.graph("kolkata", CostModel::MinTime).await.unwrap().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert!(state.graphs.get("kolkata", CostModel::MinTime).await.is_some());

        let again = state.graph("Kolkata", CostModel::MinTime).await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&graph, &again));
    }

    #[tokio::test]
    async fn unknown_city_has_no_graph() {
        let state = state();
        assert!(state.graph("atlantis", CostModel::MinFare).await.unwrap().is_none());
    }
}

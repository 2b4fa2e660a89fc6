//! Caching layer for per-city graphs.
//!
//! Building a graph means grouping and sorting a city's whole station list,
//! so the web layer keeps built graphs keyed by (city slug, cost model).
//! Graphs are rebuilt on write: whoever changes a city's stations must call
//! [`GraphCache::invalidate_city`].

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::normalize_slug;
use crate::graph::{Graph, GraphError};
use crate::planner::CostModel;

/// Cache key for graphs: (city slug, cost model).
type GraphKey = (String, CostModel);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached graphs.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 64,
        }
    }
}

/// Cache of built graphs.
pub struct GraphCache {
    graphs: MokaCache<GraphKey, Arc<Graph>>,
}

impl GraphCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let graphs = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { graphs }
    }

    /// Get the graph for `city` under `mode`, building it with `build` on a
    /// miss. Concurrent misses for the same key run `build` once.
    pub async fn get_or_build<F>(
        &self,
        city: &str,
        mode: CostModel,
        build: F,
    ) -> Result<Arc<Graph>, GraphError>
    where
        F: FnOnce() -> Result<Graph, GraphError> + Send,
    {
        let key = (normalize_slug(city), mode);
        self.graphs
            .try_get_with(key, async move { build().map(Arc::new) })
            .await
            .map_err(|e| (*e).clone())
    }

    /// Get a cached graph without building.
    pub async fn get(&self, city: &str, mode: CostModel) -> Option<Arc<Graph>> {
        self.graphs.get(&(normalize_slug(city), mode)).await
    }

    /// Drop every cached graph for `city`.
    pub async fn invalidate_city(&self, city: &str) {
        let slug = normalize_slug(city);
        for mode in CostModel::ALL {
            self.graphs.invalidate(&(slug.clone(), mode)).await;
        }
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.graphs.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.graphs.invalidate_all();
    }
}

//! Time-windowed memoization of upstream computations.
//!
//! Values are recomputed once the revalidation window has passed. Failed
//! computations are never stored, and concurrent misses on one key share a
//! single computation.

use std::{future::Future, sync::Arc, time::Duration};

use moka::future::Cache;

use crate::careers::error::CareersError;

const SIZE: u64 = 16;

/// Cache key for the raw open-requisition collection.
pub const REQUISITIONS_CACHE_TAG: &str = "job-requisitions";

pub struct RevalidatingCache<V> {
    cache: Cache<String, V>,
}

impl<V> RevalidatingCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(revalidate_after: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(SIZE)
            .time_to_live(revalidate_after)
            .build();

        Self { cache }
    }

    /// Returns the fresh value under `key`, running `compute` on a miss.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, compute: F) -> Result<V, CareersError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, CareersError>>,
    {
        self.cache
            .try_get_with(key.to_string(), compute())
            .await
            .map_err(Arc::unwrap_or_clone)
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }
}

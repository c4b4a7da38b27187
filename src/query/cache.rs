// pgmeta-client: Rust client for the platform pg-meta API
// Copyright 2026 Platform Dev Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-memory query cache with prefix invalidation

use crate::query::key::QueryKey;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Anything that can mark a family of cached queries as stale
///
/// Implementations own their synchronization; callers may invoke
/// `invalidate_queries` concurrently and must not rely on the order in which
/// concurrent invalidations are applied.
#[async_trait]
pub trait QueryInvalidator: Send + Sync + Debug {
    /// Marks every query whose key starts with `prefix` as stale.
    async fn invalidate_queries(&self, prefix: &QueryKey);
}

/// Snapshot of one cached query
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    pub data: serde_json::Value,
    pub data_updated_at: DateTime<Utc>,
    pub is_invalidated: bool,
}

/// Shared, concurrent query cache
///
/// Cloning is cheap; clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: Arc<DashMap<QueryKey, QueryState>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores fresh data for `key`, clearing any invalidation
    pub fn set_query_data(&self, key: QueryKey, data: serde_json::Value) {
        self.entries.insert(
            key,
            QueryState {
                data,
                data_updated_at: Utc::now(),
                is_invalidated: false,
            },
        );
    }

    pub fn get_query_data(&self, key: &QueryKey) -> Option<serde_json::Value> {
        self.entries.get(key).map(|state| state.data.clone())
    }

    pub fn get_query_state(&self, key: &QueryKey) -> Option<QueryState> {
        self.entries.get(key).map(|state| state.clone())
    }

    /// Returns true if `key` must be refetched on next access: it is either
    /// missing or has been invalidated.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .map(|state| state.is_invalidated)
            .unwrap_or(true)
    }

    /// Marks every entry under `prefix` as stale and returns how many were hit.
    ///
    /// Data is kept so callers can keep showing it until the refetch lands.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for mut entry in self.entries.iter_mut() {
            if entry.key().starts_with(prefix) {
                entry.value_mut().is_invalidated = true;
                count += 1;
            }
        }
        log::debug!("invalidated {count} queries under {prefix}");
        count
    }

    /// Drops every entry under `prefix` and returns how many were removed.
    pub fn remove_queries(&self, prefix: &QueryKey) -> usize {
        let mut removed = 0;
        self.entries.retain(|key, _| {
            let matched = key.starts_with(prefix);
            if matched {
                removed += 1;
            }
            !matched
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl QueryInvalidator for QueryCache {
    async fn invalidate_queries(&self, prefix: &QueryKey) {
        self.invalidate(prefix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::keys::{table_keys, view_keys};
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let cache = QueryCache::new();
        let key = table_keys::list("abc", "public");
        assert!(cache.is_stale(&key));

        cache.set_query_data(key.clone(), json!([{"id": 1}]));
        assert_eq!(cache.get_query_data(&key), Some(json!([{"id": 1}])));
        assert!(!cache.is_stale(&key));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_by_prefix_keeps_data() {
        let cache = QueryCache::new();
        let public = table_keys::list_with_columns("abc", "public", true);
        let auth = table_keys::list_with_columns("abc", "auth", true);
        cache.set_query_data(public.clone(), json!([]));
        cache.set_query_data(auth.clone(), json!([]));

        assert_eq!(cache.invalidate(&table_keys::list("abc", "public")), 1);
        assert!(cache.is_stale(&public));
        assert!(!cache.is_stale(&auth));
        assert_eq!(cache.get_query_data(&public), Some(json!([])));

        // fresh data clears the flag
        cache.set_query_data(public.clone(), json!([{"id": 2}]));
        assert!(!cache.is_stale(&public));
    }

    #[test]
    fn test_remove_queries() {
        let cache = QueryCache::new();
        cache.set_query_data(view_keys::list_by_schema("abc", "public"), json!([]));
        cache.set_query_data(view_keys::list_by_schema("abc", "auth"), json!([]));
        cache.set_query_data(table_keys::list("abc", "public"), json!([]));

        assert_eq!(cache.remove_queries(&view_keys::list("abc")), 2);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_remove_queries_counts_only_matches_under_concurrent_writes() {
        let cache = QueryCache::new();
        for schema in ["public", "auth", "storage"] {
            cache.set_query_data(view_keys::list_by_schema("abc", schema), json!([]));
        }

        let writer = {
            let cache = cache.clone();
            std::thread::spawn(move || {
                for i in 0..500 {
                    cache.set_query_data(table_keys::table("abc", i + 1), json!({}));
                }
            })
        };
        let removed = cache.remove_queries(&view_keys::list("abc"));
        writer.join().unwrap();

        assert_eq!(removed, 3);
        assert_eq!(cache.len(), 500);
    }

    #[tokio::test]
    async fn test_invalidator_impl() {
        let cache = QueryCache::new();
        let key = view_keys::list_by_schema("abc", "public");
        cache.set_query_data(key.clone(), json!([]));

        let invalidator: Arc<dyn QueryInvalidator> = Arc::new(cache.clone());
        invalidator.invalidate_queries(&view_keys::list("abc")).await;
        assert!(cache.is_stale(&key));
    }
}

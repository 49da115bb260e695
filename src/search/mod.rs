//! Incremental group search
//!
//! Debounced, logically-cancelable lookup against the group search endpoint.
//! Each call to [`GroupSearcher::search`] supersedes any earlier in-flight
//! query: a superseded call returns `None` instead of its (now stale)
//! results. The underlying HTTP request is not aborted; only its payload is
//! discarded.

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::Group;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Minimum query length before a network call is made
pub const MIN_QUERY_LEN: usize = 2;

/// Default quiescence window before a query is dispatched
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounced group search with stale-response suppression
pub struct GroupSearcher {
    generation: AtomicU64,
    debounce: Duration,
}

impl Default for GroupSearcher {
    fn default() -> Self {
        Self::new(DEBOUNCE)
    }
}

impl GroupSearcher {
    /// Create a searcher with an explicit debounce window
    pub fn new(debounce: Duration) -> Self {
        Self {
            generation: AtomicU64::new(0),
            debounce,
        }
    }

    fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    /// Run a debounced search for `query`
    ///
    /// Returns:
    /// - `Ok(None)` when a newer query superseded this one (either during the
    ///   debounce wait or while the request was in flight),
    /// - `Ok(Some(vec![]))` immediately for queries shorter than
    ///   [`MIN_QUERY_LEN`] (results cleared, no call, no wait),
    /// - `Ok(Some(groups))` otherwise.
    pub async fn search(&self, api: &ApiClient, query: &str) -> CliResult<Option<Vec<Group>>> {
        let token = self.bump();

        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Some(Vec::new()));
        }

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(token) {
            return Ok(None);
        }

        let response = api.search_groups(query).await?;
        if !self.is_current(token) {
            // A newer query was dispatched while this one was in flight;
            // its payload must never overwrite newer results.
            return Ok(None);
        }

        if response.success {
            Ok(Some(response.groups.unwrap_or_default()))
        } else {
            Ok(Some(Vec::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::MemorySessionStore;
    use std::sync::Arc;

    fn api() -> ApiClient {
        // Points at an unroutable port; short-query paths never reach it
        let config = Config {
            api_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
            ..Config::default()
        };
        ApiClient::new(config, Arc::new(MemorySessionStore::new())).unwrap()
    }

    #[tokio::test]
    async fn test_short_query_clears_without_waiting() {
        let searcher = GroupSearcher::new(Duration::from_secs(60));
        let api = api();

        let start = std::time::Instant::now();
        let result = searcher.search(&api, "a").await.unwrap();
        assert_eq!(result, Some(Vec::new()));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_superseded_during_debounce_returns_none() {
        let searcher = Arc::new(GroupSearcher::new(Duration::from_millis(50)));
        let api = api();

        let older = {
            let searcher = Arc::clone(&searcher);
            let api_config = api.config().clone();
            tokio::spawn(async move {
                let api = ApiClient::new(api_config, Arc::new(MemorySessionStore::new())).unwrap();
                searcher.search(&api, "al").await
            })
        };

        // Supersede with a short query before the debounce elapses; it
        // resolves synchronously without touching the network
        tokio::time::sleep(Duration::from_millis(10)).await;
        let newer = searcher.search(&api, "a").await.unwrap();
        assert_eq!(newer, Some(Vec::new()));

        let older = older.await.unwrap().unwrap();
        assert_eq!(older, None, "stale query must be suppressed");
    }
}

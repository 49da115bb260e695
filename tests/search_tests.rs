//! Integration tests for debounced group search
//!
//! Verifies the debounce window (superseded queries make no call) and
//! stale-response suppression (a late payload never overwrites newer
//! results).

mod common;

use common::{group_fixture, TestContext};
use diradm::search::GroupSearcher;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_group_search(server: &MockServer, query: &str, cns: &[&str], delay: Duration) {
    let groups: Vec<serde_json::Value> = cns.iter().map(|cn| group_fixture(cn)).collect();
    Mock::given(method("GET"))
        .and(path("/api/v1/groups"))
        .and(query_param_contains("filter", &format!("cn=*{query}*")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "success": true,
                    "groups": groups,
                    "count": groups.len()
                }))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_debounce_issues_one_call_for_rapid_keystrokes() {
    let ctx = TestContext::new().await;
    let api = Arc::new(ctx.client_with_token("sess-1"));
    mock_group_search(&ctx.server, "ali", &["Alice Admins"], Duration::ZERO).await;

    let searcher = Arc::new(GroupSearcher::new(Duration::from_millis(80)));

    // "al" typed, then "ali" before the window elapses
    let first = {
        let searcher = Arc::clone(&searcher);
        let api = Arc::clone(&api);
        tokio::spawn(async move { searcher.search(&api, "al").await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = searcher.search(&api, "ali").await.unwrap();

    let groups = second.expect("latest query must produce results");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].cn, "Alice Admins");

    assert_eq!(first.await.unwrap().unwrap(), None, "superseded query is suppressed");

    // Exactly one search call reached the server, for "ali"
    let requests = ctx.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().unwrap().contains("ali"));
}

#[tokio::test]
async fn test_stale_response_never_overwrites_newer_results() {
    let ctx = TestContext::new().await;
    let api = Arc::new(ctx.client_with_token("sess-1"));

    // "bob" answers slowly, "ann" answers immediately
    mock_group_search(&ctx.server, "bob", &["Bob Ops"], Duration::from_millis(300)).await;
    mock_group_search(&ctx.server, "ann", &["Ann Ops"], Duration::ZERO).await;

    let searcher = Arc::new(GroupSearcher::new(Duration::from_millis(10)));

    let bob = {
        let searcher = Arc::clone(&searcher);
        let api = Arc::clone(&api);
        tokio::spawn(async move { searcher.search(&api, "bob").await })
    };
    // Let "bob" clear its debounce window and go in flight
    tokio::time::sleep(Duration::from_millis(50)).await;

    let ann = searcher.search(&api, "ann").await.unwrap();
    let ann_groups = ann.expect("newest query must win");
    assert_eq!(ann_groups[0].cn, "Ann Ops");

    // "bob" resolves after "ann" and must be discarded
    let bob = bob.await.unwrap().unwrap();
    assert_eq!(bob, None);
}

#[tokio::test]
async fn test_short_query_makes_no_network_call() {
    let ctx = TestContext::new().await;
    let api = ctx.client_with_token("sess-1");

    let searcher = GroupSearcher::new(Duration::from_millis(10));
    let result = searcher.search(&api, "a").await.unwrap();

    assert_eq!(result, Some(Vec::new()));
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}

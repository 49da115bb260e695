//! Integration tests for the directory API client boundary

mod common;

use common::{group_fixture, user_fixture, TestContext};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_user_parses_identity() {
    let ctx = TestContext::new().await;
    let api = ctx.client_with_token("sess-1");

    Mock::given(method("GET"))
        .and(path("/api/v1/users/jdoe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": user_fixture("jdoe", &["Staff", "Ops"])
        })))
        .mount(&ctx.server)
        .await;

    let response = api.get_user("jdoe").await.unwrap();
    assert!(response.success);
    let user = response.user.unwrap();
    assert_eq!(user.sam_account_name, "jdoe");
    assert_eq!(user.member_of.len(), 2);
}

#[tokio::test]
async fn test_get_user_not_found_envelope_passes_through() {
    let ctx = TestContext::new().await;
    let api = ctx.client_with_token("sess-1");

    Mock::given(method("GET"))
        .and(path("/api/v1/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": "User not found"
        })))
        .mount(&ctx.server)
        .await;

    let response = api.get_user("ghost").await.unwrap();
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("User not found"));
}

#[tokio::test]
async fn test_search_users_sends_directory_filter() {
    let ctx = TestContext::new().await;
    let api = ctx.client_with_token("sess-1");

    Mock::given(method("POST"))
        .and(path("/api/v1/search"))
        .and(body_partial_json(json!({
            "filter": "(&(objectClass=user)(|(sAMAccountName=*ann*)(displayName=*ann*)(mail=*ann*)))",
            "sizeLimit": 50
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entries": [{
                "dn": "CN=Ann,OU=Users,DC=example,DC=com",
                "attributes": {"sAMAccountName": ["ann"], "mail": ["ann@example.com"]}
            }],
            "count": 1
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let response = api.search_users("ann").await.unwrap();
    assert!(response.success);
    let entries = response.entries.unwrap();
    assert_eq!(entries[0].account_name(), "ann");
}

#[tokio::test]
async fn test_all_groups_scopes_by_base_dn() {
    let ctx = TestContext::new().await;
    let api = ctx.client_with_token("sess-1");

    Mock::given(method("GET"))
        .and(path("/api/v1/groups"))
        .and(query_param("baseDN", "OU=Groups,DC=example,DC=com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "groups": [group_fixture("Staff")],
            "count": 1
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let response = api
        .all_groups(Some("OU=Groups,DC=example,DC=com"))
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(response.groups.unwrap()[0].cn, "Staff");
}

#[tokio::test]
async fn test_health_check_true_only_for_healthy_status() {
    let ctx = TestContext::new().await;
    let api = ctx.client();

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&ctx.server)
        .await;

    assert!(api.health_check().await);
}

#[tokio::test]
async fn test_health_check_false_for_degraded_or_unreachable() {
    let ctx = TestContext::new().await;
    let api = ctx.client();

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "degraded"})))
        .mount(&ctx.server)
        .await;
    assert!(!api.health_check().await);

    let gone = TestContext::new().await;
    let api = gone.client();
    drop(gone.server);
    assert!(!api.health_check().await);
}

#[tokio::test]
async fn test_requests_omit_session_header_when_logged_out() {
    let ctx = TestContext::new().await;
    let api = ctx.client();

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "No session"
        })))
        .mount(&ctx.server)
        .await;

    let _ = api.current_user().await;
    let requests = ctx.server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("X-Session-ID").is_none());
}

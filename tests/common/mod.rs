//! Shared test fixtures: a wiremock server plus an isolated session store

use diradm::api::ApiClient;
use diradm::config::Config;
use diradm::session::{MemorySessionStore, SessionStore};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test context wrapping a mock directory service
pub struct TestContext {
    pub server: MockServer,
    pub session: Arc<MemorySessionStore>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
            session: Arc::new(MemorySessionStore::new()),
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// API client wired to the mock server and this context's session store
    pub fn client(&self) -> ApiClient {
        let config = Config {
            api_url: self.base_url(),
            base_dn: None,
            timeout_secs: 5,
        };
        ApiClient::new(config, self.session.clone() as Arc<dyn SessionStore>).unwrap()
    }

    /// Same as `client`, with a session token already stored
    pub fn client_with_token(&self, token: &str) -> ApiClient {
        self.session.set(Some(token)).unwrap();
        self.client()
    }

    /// Mount a success response for `GET /api/v1/users/me`
    pub async fn mock_current_user(&self, user: Value) {
        Mock::given(method("GET"))
            .and(path("/api/v1/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "user": user
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a rejection for `GET /api/v1/users/me`
    pub async fn mock_current_user_rejected(&self) {
        Mock::given(method("GET"))
            .and(path("/api/v1/users/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "error": "Invalid session"
            })))
            .mount(&self.server)
            .await;
    }
}

/// A user fixture with the given account name and membership DNs
pub fn user_fixture(account_name: &str, member_of: &[&str]) -> Value {
    json!({
        "dn": format!("CN={account_name},OU=Users,DC=example,DC=com"),
        "sAMAccountName": account_name,
        "displayName": account_name,
        "memberOf": member_of
            .iter()
            .map(|cn| format!("CN={cn},OU=Groups,DC=example,DC=com"))
            .collect::<Vec<_>>(),
        "enabled": true
    })
}

/// A group fixture with the given common name
pub fn group_fixture(cn: &str) -> Value {
    json!({
        "dn": format!("CN={cn},OU=Groups,DC=example,DC=com"),
        "cn": cn,
        "sAMAccountName": cn,
        "description": format!("{cn} group")
    })
}

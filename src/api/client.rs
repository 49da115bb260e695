//! HTTP client wrapper for the directory-service API

use crate::config::{Config, ConfigPaths};
use crate::error::{CliError, CliResult};
use crate::logging;
use crate::session::{get_session_store, SessionStore};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the session token on authenticated requests
pub const SESSION_HEADER: &str = "X-Session-ID";

/// API client for making requests against the directory service
///
/// Holds the injected session store; the token is read from it for every
/// request so a token persisted by a previous process is picked up without
/// any explicit resume step.
pub struct ApiClient {
    client: Client,
    config: Config,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create an API client from default config paths and the file-backed store
    pub fn from_defaults() -> CliResult<Self> {
        let paths = ConfigPaths::new()?;
        let config = Config::load(&paths)?;
        let session = get_session_store(&paths);
        Self::new(config, session)
    }

    /// Create a new API client with an explicit session store
    pub fn new(config: Config, session: Arc<dyn SessionStore>) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CliError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    /// Get a reference to the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the session store
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Current session token, if any
    pub(crate) fn session_id(&self) -> Option<String> {
        self.session.get().ok().flatten()
    }

    /// Build a full URL from an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    /// Make a GET request, attaching the session header when present
    pub(crate) async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> CliResult<reqwest::Response> {
        let session_id = self.session_id();
        logging::debug_http_request("GET", url, session_id.as_deref());

        let mut request = self.client.get(url).query(query);
        if let Some(session_id) = &session_id {
            request = request.header(SESSION_HEADER, session_id);
        }

        let response = request.send().await?;
        logging::debug_http_response(url, response.status().as_u16());
        Ok(response)
    }

    /// Make a POST request with a JSON body, attaching the session header
    pub(crate) async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> CliResult<reqwest::Response> {
        let session_id = self.session_id();
        logging::debug_http_request("POST", url, session_id.as_deref());

        let mut request = self.client.post(url).json(body);
        if let Some(session_id) = &session_id {
            request = request.header(SESSION_HEADER, session_id);
        }

        let response = request.send().await?;
        logging::debug_http_response(url, response.status().as_u16());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_api_client_creation() {
        let config = Config::default();
        let client = ApiClient::new(config, Arc::new(MemorySessionStore::new())).unwrap();
        assert_eq!(client.config().api_url, "https://localhost:8080");
        assert_eq!(client.session_id(), None);
    }

    #[test]
    fn test_session_id_reads_injected_store() {
        let config = Config::default();
        let store = Arc::new(MemorySessionStore::with_token("sess-1"));
        let client = ApiClient::new(config, store).unwrap();
        assert_eq!(client.session_id(), Some("sess-1".to_string()));
    }

    #[test]
    fn test_url_building() {
        let config = Config {
            api_url: "https://api.example.com".to_string(),
            ..Config::default()
        };
        let client = ApiClient::new(config, Arc::new(MemorySessionStore::new())).unwrap();
        assert_eq!(
            client.url("/api/v1/users/me"),
            "https://api.example.com/api/v1/users/me"
        );
    }
}

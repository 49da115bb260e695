//! User API client methods

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::{SearchResponse, UserResponse};
use serde::Serialize;

/// Attributes requested for identity search results
const SEARCH_ATTRIBUTES: &[&str] = &[
    "sAMAccountName",
    "displayName",
    "mail",
    "givenName",
    "sn",
    "dn",
];

/// Maximum entries returned by an identity search
const SEARCH_SIZE_LIMIT: u32 = 50;

#[derive(Serialize)]
struct SearchRequest {
    filter: String,
    attributes: Vec<String>,
    #[serde(rename = "sizeLimit")]
    size_limit: u32,
}

impl ApiClient {
    /// Fetch the identity bound to the current session
    pub async fn current_user(&self) -> CliResult<UserResponse> {
        let response = self.get(&self.url("/api/v1/users/me"), &[]).await?;
        let status = response.status();
        response.json().await.map_err(|_| CliError::Api {
            status: status.as_u16(),
            message: "Malformed user response".to_string(),
        })
    }

    /// Fetch an identity by account name
    pub async fn get_user(&self, account_name: &str) -> CliResult<UserResponse> {
        let url = self.url(&format!("/api/v1/users/{account_name}"));
        let response = self.get(&url, &[]).await?;
        let status = response.status();
        response.json().await.map_err(|_| CliError::Api {
            status: status.as_u16(),
            message: "Malformed user response".to_string(),
        })
    }

    /// Search identities by account name, display name, or mail
    pub async fn search_users(&self, query: &str) -> CliResult<SearchResponse> {
        let body = SearchRequest {
            filter: format!(
                "(&(objectClass=user)(|(sAMAccountName=*{query}*)(displayName=*{query}*)(mail=*{query}*)))"
            ),
            attributes: SEARCH_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            size_limit: SEARCH_SIZE_LIMIT,
        };

        let response = self.post_json(&self.url("/api/v1/search"), &body).await?;
        let status = response.status();
        response.json().await.map_err(|_| CliError::Api {
            status: status.as_u16(),
            message: "Malformed search response".to_string(),
        })
    }
}

//! Group API client methods

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::{ApiResponse, GroupsResponse};
use serde::Serialize;

#[derive(Serialize)]
struct MembershipRequest {
    username: String,
    #[serde(rename = "groupName")]
    group_name: String,
}

impl ApiClient {
    /// Fetch the group catalog, optionally scoped to a base DN
    pub async fn all_groups(&self, base_dn: Option<&str>) -> CliResult<GroupsResponse> {
        let url = self.url("/api/v1/groups");
        let query: Vec<(&str, &str)> = match base_dn {
            Some(base_dn) => vec![("baseDN", base_dn)],
            None => Vec::new(),
        };

        let response = self.get(&url, &query).await?;
        let status = response.status();
        response.json().await.map_err(|_| CliError::Api {
            status: status.as_u16(),
            message: "Malformed groups response".to_string(),
        })
    }

    /// Search groups by common name or account name
    pub async fn search_groups(&self, query: &str) -> CliResult<GroupsResponse> {
        let filter = format!("(&(objectClass=group)(|(cn=*{query}*)(sAMAccountName=*{query}*)))");
        let url = self.url("/api/v1/groups");

        let response = self.get(&url, &[("filter", &filter)]).await?;
        let status = response.status();
        response.json().await.map_err(|_| CliError::Api {
            status: status.as_u16(),
            message: "Malformed groups response".to_string(),
        })
    }

    /// Add an identity to a group
    ///
    /// Never returns an error: transport failures and unparsable bodies are
    /// normalized into a failure envelope so batch apply can treat them
    /// exactly like application-level rejections.
    pub async fn add_member(&self, username: &str, group_name: &str) -> ApiResponse {
        self.membership_call("/api/v1/groups/add-member", username, group_name)
            .await
    }

    /// Remove an identity from a group; same no-throw contract as `add_member`
    pub async fn remove_member(&self, username: &str, group_name: &str) -> ApiResponse {
        self.membership_call("/api/v1/groups/remove-member", username, group_name)
            .await
    }

    async fn membership_call(&self, path: &str, username: &str, group_name: &str) -> ApiResponse {
        let body = MembershipRequest {
            username: username.to_string(),
            group_name: group_name.to_string(),
        };

        let response = match self.post_json(&self.url(path), &body).await {
            Ok(response) => response,
            Err(e) => return ApiResponse::transport_failure(e.to_string()),
        };

        // Servers answer failures with an envelope body on non-2xx statuses;
        // use it when it parses, otherwise fall back to the status code.
        let status = response.status();
        match response.json::<ApiResponse>().await {
            Ok(envelope) => envelope,
            Err(_) => ApiResponse::transport_failure(format!("HTTP {status}")),
        }
    }
}

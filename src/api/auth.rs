//! Login/logout API client methods

use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::logging;
use crate::models::{ApiResponse, LoginRequest, LoginResponse};
use serde::Serialize;

#[derive(Serialize)]
struct LogoutRequest {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

impl ApiClient {
    /// Authenticate with username and password
    ///
    /// On success the returned session id is persisted to the session store,
    /// making it the credential for all subsequent requests.
    pub async fn login(&self, username: &str, password: &str) -> CliResult<LoginResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.post_json(&self.url("/api/v1/login"), &body).await?;
        let status = response.status();
        let login: LoginResponse = response.json().await.map_err(|_| CliError::Api {
            status: status.as_u16(),
            message: "Malformed login response".to_string(),
        })?;

        if login.success {
            if let Some(session_id) = &login.session_id {
                self.session().set(Some(session_id))?;
                logging::verbose("Session established");
            }
        }

        Ok(login)
    }

    /// End the remote session
    ///
    /// The local token is cleared after the call regardless of the server's
    /// answer; callers that must never fail locally swallow the `Err` case
    /// and clear the store themselves.
    pub async fn logout(&self) -> CliResult<ApiResponse> {
        let body = LogoutRequest {
            session_id: self.session_id(),
        };

        let result = self.post_json(&self.url("/api/v1/logout"), &body).await;
        self.session().set(None)?;

        let response = result?;
        let status = response.status();
        response.json().await.map_err(|_| CliError::Api {
            status: status.as_u16(),
            message: "Malformed logout response".to_string(),
        })
    }
}

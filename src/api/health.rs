//! Health check API client method

use crate::api::ApiClient;
use crate::models::response::HealthResponse;

impl ApiClient {
    /// Check whether the directory service reports itself healthy
    ///
    /// Transport failures and malformed bodies count as unhealthy.
    pub async fn health_check(&self) -> bool {
        let response = match self.get(&self.config().health_url(), &[]).await {
            Ok(response) => response,
            Err(_) => return false,
        };

        match response.json::<HealthResponse>().await {
            Ok(health) => health.status == "healthy",
            Err(_) => false,
        }
    }
}

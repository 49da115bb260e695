//! Authenticated-identity lifecycle
//!
//! State machine: `Resolving` → `Authenticated` | `Unauthenticated`.
//! Resolution happens once per process: a persisted token is validated by
//! fetching the current identity; any failure demotes to unauthenticated and
//! clears the stored token so the next start skips the round trip.

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::logging;
use crate::models::User;

/// Authentication state
#[derive(Debug, Clone)]
pub enum AuthState {
    /// Initial state before the stored session has been validated
    Resolving,
    /// Valid session bound to the given identity
    Authenticated(Box<User>),
    /// No session, or the server rejected the stored one
    Unauthenticated,
}

/// Outcome of a login attempt
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

/// Owns the session lifecycle on top of the API client and session store
pub struct AuthSession {
    api: ApiClient,
    state: AuthState,
}

impl AuthSession {
    /// Create a session manager in the `Resolving` state
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: AuthState::Resolving,
        }
    }

    /// Current state
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Authenticated identity, if any
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    /// Borrow the underlying API client
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Resolve the persisted session, if any
    ///
    /// No stored token means unauthenticated with no network call. A stored
    /// token is validated against `/api/v1/users/me`; on any failure the
    /// token is cleared and the state lands unauthenticated.
    pub async fn resolve(&mut self) -> CliResult<()> {
        let has_token = self.api.session().get()?.is_some();
        if !has_token {
            self.state = AuthState::Unauthenticated;
            return Ok(());
        }

        logging::verbose("Validating stored session");
        match self.api.current_user().await {
            Ok(response) if response.success => {
                if let Some(user) = response.user {
                    self.state = AuthState::Authenticated(Box::new(user));
                    return Ok(());
                }
                self.api.session().set(None)?;
                self.state = AuthState::Unauthenticated;
            }
            _ => {
                self.api.session().set(None)?;
                self.state = AuthState::Unauthenticated;
            }
        }
        Ok(())
    }

    /// Attempt a credential login
    ///
    /// Transport errors are converted into a failure outcome; the state is
    /// left untouched on failure so there is never a partially authenticated
    /// session.
    pub async fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        match self.api.login(username, password).await {
            Ok(response) => match (response.success, response.user) {
                (true, Some(user)) => {
                    self.state = AuthState::Authenticated(Box::new(user));
                    LoginOutcome {
                        success: true,
                        message: response.message,
                    }
                }
                _ => LoginOutcome {
                    success: false,
                    message: response
                        .message
                        .or_else(|| Some("Login failed".to_string())),
                },
            },
            Err(e) => LoginOutcome {
                success: false,
                message: Some(e.to_string()),
            },
        }
    }

    /// Log out
    ///
    /// The remote end-session call is best-effort; its failure is swallowed
    /// so a transient server error can never leave the operator stuck logged
    /// in locally. Local state is cleared unconditionally.
    pub async fn logout(&mut self) -> CliResult<()> {
        if let Err(e) = self.api.logout().await {
            logging::verbose(&format!("Remote logout failed (ignored): {e}"));
        }
        self.api.session().set(None)?;
        self.state = AuthState::Unauthenticated;
        Ok(())
    }

    /// Re-fetch the authenticated identity from the server
    pub async fn refresh_user(&mut self) -> CliResult<()> {
        self.resolve().await
    }
}

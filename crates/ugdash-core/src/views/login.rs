//! Sign-in.

use std::fmt;

use ugdash_types::LoginRequest;

use crate::api::{ApiError, ApiErrorKind, CrmApi};
use crate::auth::AuthContext;

pub const MISSING_CREDENTIALS: &str = "Please enter your email and password.";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";
pub const SERVER_UNREACHABLE: &str = "Unable to reach the server. Please try again later.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

#[derive(Debug)]
pub enum LoginError {
    MissingCredentials,
    Rejected(ApiError),
    /// Credentials were accepted but the session could not be stored.
    Storage(anyhow::Error),
}

impl LoginError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LoginError::MissingCredentials => MISSING_CREDENTIALS,
            LoginError::Rejected(err) => match err.kind {
                ApiErrorKind::Unauthorized => INVALID_CREDENTIALS,
                ApiErrorKind::Network => SERVER_UNREACHABLE,
                ApiErrorKind::NotFound | ApiErrorKind::Api => LOGIN_FAILED,
            },
            LoginError::Storage(_) => LOGIN_FAILED,
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for LoginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoginError::MissingCredentials => None,
            LoginError::Rejected(err) => Some(err),
            LoginError::Storage(err) => Some(&**err),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub email: String,
    pub password: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl LoginView {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Exchanges the credentials for a token and stores it in `auth`.
    ///
    /// On any failure `auth` is left as it was.
    ///
    /// # Errors
    /// See [`LoginError`]; its `user_message` is what should be shown.
    pub async fn submit<A: CrmApi>(
        &mut self,
        api: &A,
        auth: &mut AuthContext,
    ) -> Result<(), LoginError> {
        let result = self.try_submit(api, auth).await;
        self.is_loading = false;
        self.error = result.as_ref().err().map(|e| e.user_message().to_string());
        result
    }

    async fn try_submit<A: CrmApi>(
        &mut self,
        api: &A,
        auth: &mut AuthContext,
    ) -> Result<(), LoginError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        self.is_loading = true;
        let request = LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        };
        let response = api.login(&request).await.map_err(|err| {
            tracing::warn!(kind = %err.kind, "login rejected");
            LoginError::Rejected(err)
        })?;

        let admin_id = response.resolved_admin_id();
        auth.login(response.token, admin_id)
            .map_err(LoginError::Storage)?;
        self.password.clear();
        Ok(())
    }
}

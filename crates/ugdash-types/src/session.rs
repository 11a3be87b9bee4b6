//! Login payloads and the signed-in admin.

use serde::{Deserialize, Serialize};

use crate::de;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default, alias = "adminId", deserialize_with = "de::opt_text")]
    pub admin_id: Option<String>,
    #[serde(default)]
    pub admin: Option<Admin>,
}

impl LoginResponse {
    /// Admin id from the top-level field or the embedded admin record.
    pub fn resolved_admin_id(&self) -> Option<String> {
        self.admin_id
            .clone()
            .or_else(|| self.admin.as_ref().map(|admin| admin.id.clone()))
    }
}

/// Staff account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(default, deserialize_with = "de::text")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Admin {
    pub fn display_name(&self) -> &str {
        [&self.name, &self.full_name, &self.email]
            .into_iter()
            .find_map(|v| v.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or("User")
    }
}

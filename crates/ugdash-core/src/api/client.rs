//! HTTP implementation of [`CrmApi`].

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use ugdash_types::{
    Admin, Application, Document, LoginRequest, LoginResponse, NewNote, NewReminder, Note,
    Payload, Reminder, Student,
};
use url::Url;

use super::{ApiError, ApiErrorKind, ApiResult, CrmApi};
use crate::auth::AuthContext;
use crate::config::Config;

/// Standard User-Agent header for ugdash API requests.
pub const USER_AGENT: &str = concat!("ugdash/", env!("CARGO_PKG_VERSION"));

const STUDENT_ID_PARAM: &str = "student_id";

/// CRM API client. Stateless apart from the bearer token it was built with.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    root: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client rooted at `api_root` (e.g. `http://localhost:3000/api`).
    ///
    /// # Errors
    /// Returns an error if the root URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(api_root: &str, timeout: Option<std::time::Duration>) -> Result<Self> {
        let root = Url::parse(api_root).with_context(|| format!("Invalid API root: {api_root}"))?;
        if root.cannot_be_a_base() {
            anyhow::bail!("API root cannot be used as a base URL: {api_root}");
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("build HTTP client")?;

        Ok(Self {
            http,
            root,
            token: None,
        })
    }

    /// Builds a client from config, carrying the token held by `auth`.
    ///
    /// # Errors
    /// Returns an error if the configured base URL is invalid.
    pub fn from_config(config: &Config, auth: &AuthContext) -> Result<Self> {
        let api_root = config.api_root()?;
        let client = Self::new(&api_root, config.request_timeout())?;
        Ok(client.with_token(auth.token().map(str::to_string)))
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> ApiResult<Url> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::new(ApiErrorKind::Api, "API root cannot be a base URL"))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let body = self.execute(Method::GET, url, None::<&()>).await?;
        decode(&body)
    }

    async fn post<B: Serialize + ?Sized>(&self, url: Url, payload: &B) -> ApiResult<String> {
        self.execute(Method::POST, url, Some(payload)).await
    }

    /// Sends one request and returns the raw success body.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        payload: Option<&B>,
    ) -> ApiResult<String> {
        let path = url.path().to_string();
        tracing::debug!(%method, %path, "api request");

        let mut builder: RequestBuilder = self
            .http
            .request(method.clone(), url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }

        let response = builder.send().await.map_err(|e| {
            let err = classify_reqwest_error(&e);
            tracing::warn!(%method, %path, kind = %err.kind, "api request failed");
            err
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        if !status.is_success() {
            let err = ApiError::http_status(status.as_u16(), &body);
            tracing::warn!(%method, %path, status = status.as_u16(), kind = %err.kind, "api error");
            return Err(err);
        }

        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str::<Payload<T>>(body)
        .map(Payload::into_inner)
        .map_err(|e| ApiError::decode(format!("Invalid response body: {e}")))
}

fn classify_reqwest_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::network(format!("Request timed out: {e}"))
    } else if e.is_connect() {
        ApiError::network(format!("Connection failed: {e}"))
    } else if e.is_builder() {
        ApiError::new(ApiErrorKind::Api, format!("Request error: {e}"))
    } else {
        ApiError::network(format!("Network error: {e}"))
    }
}

impl CrmApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let url = self.endpoint(&["auth", "login"], &[])?;
        let body = self.post(url, request).await?;
        decode(&body)
    }

    async fn students(&self) -> ApiResult<Vec<Student>> {
        let url = self.endpoint(&["students"], &[])?;
        self.get(url).await
    }

    async fn student(&self, id: &str) -> ApiResult<Student> {
        let url = self.endpoint(&["students", id], &[])?;
        self.get(url).await
    }

    async fn notes(&self, student_id: &str) -> ApiResult<Vec<Note>> {
        let url = self.endpoint(&["internal_notes"], &[(STUDENT_ID_PARAM, student_id)])?;
        self.get(url).await
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<()> {
        let url = self.endpoint(&["internal_notes"], &[])?;
        self.post(url, note).await.map(drop)
    }

    async fn applications(&self, student_id: &str) -> ApiResult<Vec<Application>> {
        let url = self.endpoint(&["applications"], &[(STUDENT_ID_PARAM, student_id)])?;
        self.get(url).await
    }

    async fn reminders(&self, student_id: &str) -> ApiResult<Vec<Reminder>> {
        let url = self.endpoint(&["reminders"], &[(STUDENT_ID_PARAM, student_id)])?;
        self.get(url).await
    }

    async fn create_reminder(&self, reminder: &NewReminder) -> ApiResult<()> {
        let url = self.endpoint(&["reminders"], &[])?;
        self.post(url, reminder).await.map(drop)
    }

    async fn documents(&self, student_id: &str) -> ApiResult<Vec<Document>> {
        let url = self.endpoint(&["documents"], &[(STUDENT_ID_PARAM, student_id)])?;
        self.get(url).await
    }

    async fn admin(&self, admin_id: &str) -> ApiResult<Admin> {
        let url = self.endpoint(&["admins"], &[("admin_id", admin_id)])?;
        self.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments_and_encodes() {
        let client = ApiClient::new("http://localhost:3000/api", None).unwrap();
        let url = client.endpoint(&["students", "a b/c"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/students/a%20b%2Fc");

        let url = client
            .endpoint(&["internal_notes"], &[(STUDENT_ID_PARAM, "s&1")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/internal_notes?student_id=s%261"
        );
    }

    #[test]
    fn test_endpoint_without_prefix() {
        let client = ApiClient::new("http://localhost:3000", None).unwrap();
        let url = client.endpoint(&["students"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/students");
    }

    #[test]
    fn test_rejects_non_base_root() {
        assert!(ApiClient::new("mailto:ops@example.com", None).is_err());
        assert!(ApiClient::new("not a url", None).is_err());
    }

    #[test]
    fn test_decode_accepts_envelope() {
        let notes: Vec<Note> = decode(r#"{"data": [{"content": "hi"}]}"#).unwrap();
        assert_eq!(notes[0].content, "hi");

        let err = decode::<Vec<Note>>("<html>").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Api);
    }
}

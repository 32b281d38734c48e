//! HTTP wrapper around the dashboard REST API.
//!
//! One `reqwest::Client` per `ApiClient`, a single attempt per call: no
//! retry, no timeout, no cancellation. A hung request hangs only the
//! caller that issued it.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::token::TokenStore;

/// Error body shape the backend uses for all failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    /// Build a client against the given base URL. The token store is owned
    /// by the client; construct it explicitly and pass it in.
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Persist a token; subsequent requests carry it as a bearer header.
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.tokens.set(token)
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    /// Logout teardown: drop the token from memory and storage.
    pub fn clear_token(&self) -> Result<()> {
        self.tokens.clear()
    }

    fn build(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.tokens.get() {
            req = req.bearer_auth(token);
        }

        req
    }

    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let detail = resp
                .json::<ErrorBody>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| "Request failed".to_string());
            tracing::debug!(status = status.as_u16(), %detail, "request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(resp.json().await?)
    }

    /// The no-body variant for endpoints that answer 204.
    async fn execute_empty(&self, req: reqwest::RequestBuilder) -> Result<()> {
        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let detail = resp
                .json::<ErrorBody>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| "Request failed".to_string());
            return Err(Error::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.build(Method::GET, path)).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.build(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.build(Method::PUT, path).json(body)).await
    }

    /// PUT without a request body (the star toggle endpoint).
    pub(crate) async fn put_bare<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.build(Method::PUT, path)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute_empty(self.build(Method::DELETE, path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    fn client_with_store(dir: &tempfile::TempDir) -> ApiClient {
        ApiClient::new(
            "http://localhost:8001",
            TokenStore::open(dir.path().join("credentials.toml")),
        )
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let client = ApiClient::new(
            "http://localhost:8001/",
            TokenStore::open(dir.path().join("credentials.toml")),
        );
        assert_eq!(client.base_url(), "http://localhost:8001");
    }

    #[test]
    fn test_request_carries_bearer_header_when_token_set() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_store(&dir);
        client.set_token("tok-xyz").unwrap();

        let req = client.build(Method::GET, "/api/cohorts").build().unwrap();
        let auth = req.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer tok-xyz");
        assert_eq!(
            req.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_request_omits_bearer_header_without_token() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_store(&dir);

        let req = client.build(Method::GET, "/api/cohorts").build().unwrap();
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_cleared_token_no_longer_attached() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_store(&dir);
        client.set_token("tok-xyz").unwrap();
        client.clear_token().unwrap();

        let req = client.build(Method::GET, "/api/auth/me").build().unwrap();
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_url_is_base_plus_path() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_store(&dir);

        let req = client
            .build(Method::GET, "/api/stats/cohort")
            .build()
            .unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:8001/api/stats/cohort");
    }
}

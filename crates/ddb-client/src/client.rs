//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::{CollectionsApi, CursorApi, DocumentsApi};
use crate::error::{Error, Result};

/// Default base URL of the API gateway.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Darango API client.
///
/// Cheap to clone; every clone shares one connection pool.
///
/// # Example
///
/// ```no_run
/// use ddb_client::DdbClient;
///
/// # async fn example() -> ddb_client::Result<()> {
/// let client = DdbClient::builder()
///     .base_url("http://localhost:8080")
///     .build()?;
///
/// let doc = client.documents().get("_system", "users", "alice").await?;
/// println!("{doc}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DdbClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Base URL with any trailing slash removed.
    base_url: String,
    /// Request timeout.
    timeout: Duration,
}

impl DdbClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the collections API.
    pub fn collections(&self) -> CollectionsApi {
        CollectionsApi::new(self.clone())
    }

    /// Access the cursor (query) API.
    pub fn cursor(&self) -> CursorApi {
        CursorApi::new(self.clone())
    }

    /// Access the documents API.
    pub fn documents(&self) -> DocumentsApi {
        DocumentsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        if path.starts_with('/') {
            Ok(Url::parse(&format!("{}{}", self.inner.base_url, path))?)
        } else {
            Ok(Url::parse(&format!("{}/{}", self.inner.base_url, path))?)
        }
    }

    /// Make a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    /// Make a POST request.
    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.execute(request).await
    }

    /// Make a POST request with query parameters.
    pub(crate) async fn post_with_query<B, Q>(
        &self,
        path: &str,
        body: &B,
        query: &Q,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path)?.query(query).json(body);
        self.execute(request).await
    }

    /// Make a PATCH request with query parameters.
    pub(crate) async fn patch_with_query<B, Q>(
        &self,
        path: &str,
        body: &B,
        query: &Q,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::PATCH, path)?.query(query).json(body);
        self.execute(request).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Value> {
        let request = self.request(Method::DELETE, path)?;
        self.execute(request).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!(%method, %url, "sending request");
        Ok(self
            .inner
            .http
            .request(method, url)
            .timeout(self.inner.timeout))
    }

    /// Send a request once. Transport failures are not retried.
    async fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(self.extract_error(response).await);
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Extract an error from a failed response.
    async fn extract_error(&self, response: Response) -> Error {
        let status = response.status().as_u16();
        let fallback = match response.error_for_status_ref() {
            Err(err) => err.to_string(),
            Ok(_) => format!("HTTP {}", status),
        };

        let message = match response.bytes().await {
            Ok(body) => error_message_from_body(&body).unwrap_or(fallback),
            Err(_) => fallback,
        };
        debug!(status, %message, "request returned error status");

        Error::Api { status, message }
    }
}

/// Pick the error message out of a JSON error body.
///
/// `errorMessage` wins over `error`: the remote API sends `"error": true`
/// next to the real message.
pub(crate) fn error_message_from_body(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let field = value.get("errorMessage").or_else(|| value.get("error"))?;
    Some(match field {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Builder for creating a DdbClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL for the server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DdbClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported URL scheme '{}' in {}",
                parsed.scheme(),
                base_url
            )));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = format!("ddb-client/{}", env!("CARGO_PKG_VERSION"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(DdbClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_with_base_url() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080//")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_rejects_garbage_url() {
        let result = ClientBuilder::new().base_url("not a url").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_rejects_non_http_scheme() {
        let result = ClientBuilder::new().base_url("ftp://example.com").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_custom_timeout() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")
            .build()
            .unwrap();

        let url = client.url("/_db/_system/_api/cursor").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/_db/_system/_api/cursor");

        let url = client.url("_db/_system/_api/cursor").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/_db/_system/_api/cursor");
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let client = ClientBuilder::new()
            .base_url("http://gateway:9000/arango/")
            .build()
            .unwrap();

        let url = client.url("/_db/app/_api/collection").unwrap();
        assert_eq!(url.as_str(), "http://gateway:9000/arango/_db/app/_api/collection");
    }

    #[test]
    fn test_error_message_prefers_error_message_field() {
        let body =
            br#"{"error": true, "errorMessage": "collection or view not found", "code": 404}"#;
        assert_eq!(
            error_message_from_body(body).as_deref(),
            Some("collection or view not found")
        );
    }

    #[test]
    fn test_error_message_falls_back_to_error_field() {
        let body = br#"{"error": "Document not found"}"#;
        assert_eq!(
            error_message_from_body(body).as_deref(),
            Some("Document not found")
        );
    }

    #[test]
    fn test_error_message_renders_non_string_error() {
        let body = br#"{"error": true, "code": 500}"#;
        assert_eq!(error_message_from_body(body).as_deref(), Some("true"));
    }

    #[test]
    fn test_error_message_absent() {
        assert_eq!(error_message_from_body(br#"{"code": 500}"#), None);
        assert_eq!(error_message_from_body(b"<html>Bad Gateway</html>"), None);
        assert_eq!(error_message_from_body(b""), None);
        assert_eq!(error_message_from_body(br#"["error"]"#), None);
    }
}

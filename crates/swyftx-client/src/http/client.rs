/*
[INPUT]:  HTTP configuration (base URL, timeouts, user agent), API key, bearer token
[OUTPUT]: Configured reqwest client ready for API calls, uniform JSON decode
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, USER_AGENT};
use reqwest::{Client, Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::http::{ApiError, RequestScope, Result, SwyftxError};
use crate::types::VersionResponse;

/// Production endpoint for the Swyftx API
pub const DEFAULT_BASE_URL: &str = "https://api.swyftx.com.au/";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    #[serde(with = "duration_secs")]
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

fn default_user_agent() -> String {
    format!(
        "swyftx-client/{} ({}; Service)",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// Fully buffered response, readable as many times as needed
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decode the buffered body into the caller's type
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        decode_json(&self.body)
    }
}

pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(SwyftxError::DecodeResponse)
}

/// Main HTTP client for the Swyftx API
///
/// Cloning is cheap and shares the connection pool. The access token is fixed per
/// client value: [`SwyftxClient::refresh_token`] and [`SwyftxClient::with_token`]
/// hand back a new client instead of mutating this one.
#[derive(Clone)]
pub struct SwyftxClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    token: Option<String>,
    user_agent: String,
    scope: RequestScope,
}

impl fmt::Debug for SwyftxClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwyftxClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("scope", &self.scope)
            .finish()
    }
}

impl SwyftxClient {
    /// Create a client against the production endpoint.
    ///
    /// Without a token the API key is exchanged for one via `auth/refresh/`.
    pub async fn new(api_key: impl Into<String>, token: Option<String>) -> Result<Self> {
        Self::connect(ClientConfig::default(), api_key, token, RequestScope::default()).await
    }

    /// Create a client with explicit configuration and request scope.
    pub async fn connect(
        config: ClientConfig,
        api_key: impl Into<String>,
        token: Option<String>,
        scope: RequestScope,
    ) -> Result<Self> {
        let client = Self::with_config(config, api_key)?.with_scope(scope);
        match token.filter(|token| !token.is_empty()) {
            Some(token) => Ok(client.with_token(token)),
            None => client
                .refresh_token()
                .await
                .map_err(|e| SwyftxError::TokenRefresh(Box::new(e))),
        }
    }

    /// Build a client without a token. No network call is made.
    pub fn with_config(config: ClientConfig, api_key: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| SwyftxError::Config(format!("could not build HTTP client: {e}")))?;

        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Url::parse(&base_url)?;

        Ok(Self {
            http_client,
            base_url,
            api_key: api_key.into(),
            token: None,
            user_agent: config.user_agent,
            scope: RequestScope::default(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn scope(&self) -> &RequestScope {
        &self.scope
    }

    /// Copy of this client carrying a different access token
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        let mut client = self.clone();
        client.token = Some(token.into());
        client
    }

    /// Copy of this client with the request scope replaced
    pub fn with_scope(&self, scope: RequestScope) -> Self {
        let mut client = self.clone();
        client.scope = scope;
        client
    }

    /// Copy of this client whose requests abort at `deadline`
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        self.with_scope(self.scope.child().deadline_at(deadline))
    }

    /// Copy of this client whose requests abort after `timeout` from now
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_scope(self.scope.child().timeout(timeout))
    }

    /// Exchange the API key for a fresh access token and return a client carrying it.
    pub async fn refresh_token(&self) -> Result<Self> {
        let token = self.auth().refresh(&self.api_key).await?;
        Ok(self.with_token(token))
    }

    /// Version of the Swyftx API
    ///
    /// GET info/
    pub async fn version(&self) -> Result<String> {
        let version: VersionResponse = self.get("info/").await?;
        Ok(version.version)
    }

    /// Build a request for an absolute URL with the standard Swyftx headers
    pub fn build_request<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, &self.user_agent);

        if let Some(token) = self.token.as_deref().filter(|token| !token.is_empty()) {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(SwyftxError::Encode)?;
            builder = builder.body(payload);
        }

        builder.build().map_err(SwyftxError::CreateRequest)
    }

    /// Send a request within the client's scope and buffer the response.
    ///
    /// Statuses >= 400 are decoded into the Swyftx error envelope.
    pub async fn execute(&self, request: Request) -> Result<RawResponse> {
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self
            .scope
            .run(async {
                let response = self
                    .http_client
                    .execute(request)
                    .await
                    .map_err(SwyftxError::Transport)?;
                let status = response.status();
                let headers = response.headers().clone();
                let body = response.bytes().await.map_err(SwyftxError::ReadBody)?;
                Ok(RawResponse {
                    status,
                    headers,
                    body: body.to_vec(),
                })
            })
            .await?;

        debug!(%method, %path, status = response.status.as_u16(), "swyftx response");
        trace!(bytes = response.body.len(), "buffered response body");

        if response.status.as_u16() >= 400 {
            let error = ApiError::from_body(&response.body).map_err(|source| {
                SwyftxError::DecodeError {
                    status: response.status,
                    source,
                }
            })?;
            debug!(
                status = response.status.as_u16(),
                summary = %error.summary,
                "swyftx returned error envelope"
            );
            return Err(SwyftxError::Api {
                status: response.status,
                error,
            });
        }

        Ok(response)
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, self.url(path)?, body)?;
        self.execute(request).await
    }

    /// Send a request to a path relative to the base URL and decode the response
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(method, path, body).await?.json()
    }

    /// Like [`SwyftxClient::request`] but the response body is not decoded
    pub async fn request_discarding<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, path, body).await.map(|_| ())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub async fn get_discarding(&self, path: &str) -> Result<()> {
        self.request_discarding::<()>(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, body).await
    }

    pub async fn post_discarding<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.request_discarding(Method::POST, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request_discarding::<()>(Method::DELETE, path, None).await
    }
}

// pgmeta-client: Rust client for the platform pg-meta API
// Copyright 2026 Platform Dev Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Platform API client
//!
//! [`PlatformClient`] owns the HTTP connection pool, the endpoint
//! configuration and the authentication provider. Each API method returns a
//! typed builder; see [`crate::platform::builders`].

mod delete_table;

use crate::platform::auth::{BearerAuth, BoxedPlatformAuth, NoAuth, PlatformAuth};
use crate::platform::error::{Error, NetworkError, ResponseError, ValidationErr};
use crate::platform::header_constants::*;
use crate::platform::multimap_ext::{Multimap, MultimapExt};
use http::Method;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use std::time::Duration;

/// Default base path of the platform API
pub const DEFAULT_BASE_PATH: &str = "/platform";

/// Environment variable holding the platform API endpoint
pub const ENV_API_URL: &str = "PLATFORM_API_URL";
/// Environment variable holding an optional access token
pub const ENV_ACCESS_TOKEN: &str = "PLATFORM_ACCESS_TOKEN";

/// Client for platform API operations
///
/// The client is cheap to clone; clones share the connection pool and the
/// authentication provider.
///
/// # Example
///
/// ```no_run
/// use pgmeta::platform::PlatformClient;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PlatformClient::builder()
///     .endpoint("https://api.example.com")
///     .access_token("my-token")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PlatformClient {
    http_client: ReqwestClient,
    base_url: String,
    base_path: String,
    auth: BoxedPlatformAuth,
}

impl PlatformClient {
    /// Create a new builder for PlatformClient
    pub fn builder() -> PlatformClientBuilder {
        PlatformClientBuilder::new()
    }

    /// Create a client configured from the environment
    ///
    /// Reads the endpoint from `PLATFORM_API_URL` and, when set, a bearer
    /// token from `PLATFORM_ACCESS_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PLATFORM_API_URL` is missing or invalid.
    pub fn from_env() -> Result<Self, Error> {
        let endpoint = std::env::var(ENV_API_URL).map_err(|_| {
            ValidationErr::InvalidEndpoint(format!("environment variable {ENV_API_URL} is not set"))
        })?;
        log::debug!("{ENV_API_URL}={endpoint}");

        let mut builder = Self::builder().endpoint(endpoint);
        if let Ok(token) = std::env::var(ENV_ACCESS_TOKEN)
            && !token.is_empty()
        {
            builder = builder.access_token(token);
        }
        builder.build()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the base path for API operations
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Get the authentication provider name
    pub fn auth_name(&self) -> &'static str {
        self.auth.name()
    }

    /// Execute a platform API request
    ///
    /// This is the low-level method used by all API operations.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Full path including base_path (e.g., `/platform/pg-meta/abc/tables`)
    /// * `headers` - Request headers (will be extended with auth headers)
    /// * `query_params` - Query parameters
    /// * `body` - Optional request body (JSON)
    pub(crate) async fn execute_platform(
        &self,
        method: Method,
        path: String,
        headers: &mut Multimap,
        query_params: &Multimap,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response, Error> {
        let mut url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        if !query_params.is_empty() {
            url = format!("{}?{}", url, query_params.to_query_string());
        }

        headers.add(ACCEPT, "application/json");
        if body.is_some() {
            headers.add(CONTENT_TYPE, "application/json");
        }
        self.auth.authenticate(headers)?;

        let mut req = self.http_client.request(method.clone(), &url);
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        if let Some(body_data) = body {
            req = req.body(body_data);
        }

        log::debug!("{method} {url}");
        let response = req.send().await.map_err(|e| {
            log::warn!("{method} {url} failed: {e}");
            NetworkError::ReqwestError(e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let request_id = response
                .headers()
                .get(X_REQUEST_ID)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            // only the delta-seconds form of Retry-After is understood
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let body_text = response.text().await.map_err(NetworkError::ReqwestError)?;
            let mut err = ResponseError::from_body(status, &body_text, request_id);
            if err.retry_after.is_none() {
                err.retry_after = retry_after;
            }
            log::warn!("{method} {url} returned {status}: {}", err.message);
            return Err(Error::Service(err));
        }

        Ok(response)
    }
}

/// Builder for [`PlatformClient`]
#[derive(Debug, Default)]
pub struct PlatformClientBuilder {
    endpoint: Option<String>,
    base_path: Option<String>,
    auth: Option<BoxedPlatformAuth>,
    timeout: Option<Duration>,
    http_client: Option<ReqwestClient>,
}

impl PlatformClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL of the platform API (e.g., `https://api.example.com`)
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the base path for API operations
    ///
    /// Defaults to `/platform`.
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Authenticate with a bearer token (convenience method)
    ///
    /// Shorthand for `.auth(BearerAuth::new(token))`.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(Arc::new(BearerAuth::new(token)));
        self
    }

    /// Set the authentication provider
    pub fn auth(mut self, auth: impl PlatformAuth + 'static) -> Self {
        self.auth = Some(Arc::new(auth));
        self
    }

    /// Set a total request timeout
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client
    ///
    /// Use this to configure TLS settings, proxies or connection pooling.
    pub fn http_client(mut self, client: ReqwestClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the PlatformClient
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not set or is not an http(s) URL, or
    /// if the HTTP client cannot be created.
    pub fn build(self) -> Result<PlatformClient, Error> {
        let base_url = self.endpoint.ok_or_else(|| {
            ValidationErr::InvalidEndpoint("endpoint is required for PlatformClient".to_string())
        })?;

        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ValidationErr::InvalidEndpoint(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationErr::InvalidEndpoint(format!(
                "{base_url}: unsupported scheme {}",
                parsed.scheme()
            ))
            .into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = ReqwestClient::builder()
                    .tcp_nodelay(true)
                    .tcp_keepalive(Duration::from_secs(60))
                    .pool_idle_timeout(Duration::from_secs(90));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(NetworkError::ReqwestError)?
            }
        };

        Ok(PlatformClient {
            http_client,
            base_url,
            base_path: self
                .base_path
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
            auth: self.auth.unwrap_or_else(|| Arc::new(NoAuth::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_access_token() {
        let client = PlatformClient::builder()
            .endpoint("https://api.example.com")
            .access_token("token")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.base_path(), DEFAULT_BASE_PATH);
        assert_eq!(client.auth_name(), "BearerAuth");
    }

    #[test]
    fn test_builder_defaults_to_no_auth() {
        let client = PlatformClient::builder()
            .endpoint("http://localhost:8080")
            .base_path("/api/platform")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.base_path(), "/api/platform");
        assert_eq!(client.auth_name(), "NoAuth");
    }

    #[test]
    fn test_builder_missing_endpoint() {
        let result = PlatformClient::builder().access_token("token").build();
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationErr::InvalidEndpoint(_)))
        ));
    }

    #[test]
    fn test_builder_rejects_non_http_endpoint() {
        let result = PlatformClient::builder()
            .endpoint("ftp://files.example.com")
            .build();
        assert!(result.is_err());

        let result = PlatformClient::builder().endpoint("not a url").build();
        assert!(result.is_err());
    }
}

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

//! Request plumbing shared by every platform API operation
//!
//! A builder validates its arguments in [`ToPlatformRequest`] and produces a
//! [`PlatformRequest`]: method, path below the client's base path, query and
//! headers. [`PlatformApi::send`] runs it through the client and hands the
//! response to [`FromPlatformResponse`], so an operation only declares its
//! request shape and its response type.

use crate::platform::client::PlatformClient;
use crate::platform::error::{Error, ValidationErr};
use crate::platform::multimap_ext::Multimap;
use typed_builder::TypedBuilder;

/// Request structure for platform API operations
#[derive(Clone, Debug, TypedBuilder)]
pub struct PlatformRequest {
    /// Client reference
    #[builder(!default)]
    pub client: PlatformClient,
    /// HTTP method
    #[builder(!default)]
    pub method: http::Method,
    /// Request path (relative to the client base path)
    #[builder(!default, setter(into))]
    pub path: String,
    /// Query parameters
    #[builder(default)]
    pub query_params: Multimap,
    /// Request headers
    #[builder(default)]
    pub headers: Multimap,
    /// Request body
    #[builder(default)]
    pub body: Option<Vec<u8>>,
}

impl PlatformRequest {
    /// Execute the platform API request
    ///
    /// # Errors
    ///
    /// Returns `Error` if the HTTP request fails or the server returns an error.
    pub(crate) async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        let full_path = format!("{}{}", self.client.base_path(), self.path);

        self.client
            .execute_platform(
                self.method.clone(),
                full_path,
                &mut self.headers,
                &self.query_params,
                self.body.take(),
            )
            .await
    }
}

/// Convert builder to PlatformRequest
pub trait ToPlatformRequest {
    /// Convert this builder into a PlatformRequest
    ///
    /// # Errors
    ///
    /// Returns `ValidationErr` if the request parameters are invalid.
    fn to_platform_request(self) -> Result<PlatformRequest, ValidationErr>;
}

/// Execute platform API operation
pub trait PlatformApi: ToPlatformRequest {
    /// Response type for this operation
    type PlatformResponse: FromPlatformResponse;

    /// Send the request and await the response
    ///
    /// # Errors
    ///
    /// Returns `Error` if the request fails or the response cannot be read.
    fn send(
        self,
    ) -> impl std::future::Future<Output = Result<Self::PlatformResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let mut request: PlatformRequest = self.to_platform_request()?;
            let response: Result<reqwest::Response, Error> = request.execute().await;
            Self::PlatformResponse::from_platform_response(request, response).await
        }
    }
}

/// Parse response from platform API
#[async_trait::async_trait]
pub trait FromPlatformResponse: Sized {
    /// Parse the response from a PlatformRequest
    ///
    /// # Errors
    ///
    /// Returns `Error` if the response cannot be read or contains an error.
    async fn from_platform_response(
        request: PlatformRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

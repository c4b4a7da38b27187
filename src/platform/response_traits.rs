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

//! Trait composition for platform API responses

use crate::platform::error::ValidationErr;
use crate::platform::types::PlatformRequest;
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromPlatformResponse` trait for types with cached body parsing.
///
/// Stores the request, headers and body in the response struct and
/// initializes the parsed-body cache.
macro_rules! impl_from_platform_response_cached {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::platform::types::FromPlatformResponse for $ty {
                async fn from_platform_response(
                    request: $crate::platform::types::PlatformRequest,
                    response: Result<reqwest::Response, $crate::platform::error::Error>,
                ) -> Result<Self, $crate::platform::error::Error> {
                    let mut resp = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp
                            .bytes()
                            .await
                            .map_err($crate::platform::error::NetworkError::ReqwestError)?,
                        cached_body: once_cell::sync::OnceCell::new(),
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasCachedBody` trait for the specified types.
macro_rules! impl_has_cached_body {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::platform::response_traits::HasCachedBody for $ty {
                fn cached_body(&self) -> Result<&serde_json::Value, $crate::platform::error::ValidationErr> {
                    self.cached_body
                        .get_or_try_init(|| serde_json::from_slice(&self.body))
                        .map_err($crate::platform::error::ValidationErr::JsonError)
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasPlatformFields` trait for the specified types.
macro_rules! impl_has_platform_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::platform::response_traits::HasPlatformFields for $ty {
                /// The request that was sent to the platform API.
                #[inline]
                fn request(&self) -> &$crate::platform::types::PlatformRequest {
                    &self.request
                }

                /// HTTP headers returned by the server.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The response body returned by the server, as raw bytes.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Base trait providing access to common response fields
///
/// All platform response types implement this trait.
pub trait HasPlatformFields {
    /// The request that was sent to the platform API.
    fn request(&self) -> &PlatformRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server, as raw bytes.
    fn body(&self) -> &Bytes;
}

/// Lazily parsed JSON body, parsed at most once per response
pub trait HasCachedBody {
    /// The response body parsed as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErr::JsonError` if the body is not valid JSON.
    fn cached_body(&self) -> Result<&serde_json::Value, ValidationErr>;
}

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

//! Platform API support
//!
//! Every operation follows the same shape: a method on [`PlatformClient`]
//! returns a typed builder, the builder converts into a [`PlatformRequest`]
//! via [`ToPlatformRequest`], and [`PlatformApi::send`] executes it and
//! parses the typed response.
//!
//! # Example
//!
//! ```no_run
//! use pgmeta::platform::{PlatformApi, PlatformClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PlatformClient::builder()
//!     .endpoint("https://api.example.com")
//!     .access_token("token")
//!     .build()?;
//!
//! let resp = client
//!     .delete_table("abcdefghijklmnop", 16384)
//!     .connection_string(Some("encrypted".to_string()))
//!     .build()
//!     .send()
//!     .await?;
//! println!("deleted: {:?}", resp.table()?);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod builders;
pub mod client;
pub mod error;
pub mod header_constants;
pub mod multimap_ext;
pub mod response;
pub mod response_traits;
pub mod types;

pub use client::{PlatformClient, PlatformClientBuilder};
pub use error::{Error, NetworkError, ResponseError, ValidationErr};
pub use response_traits::{HasCachedBody, HasPlatformFields};
pub use types::{FromPlatformResponse, PlatformApi, PlatformRequest, ToPlatformRequest};

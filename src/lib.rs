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

//! # pgmeta-client
//!
//! A strongly-typed, async client for the platform `pg-meta` API, together
//! with the client-side query cache bookkeeping that follows a write.
//!
//! Each supported operation has a request builder (e.g.
//! [`platform::builders::DeleteTable`]) created from a [`platform::PlatformClient`]
//! method. All builders implement [`platform::PlatformApi`], whose async
//! [`send`](platform::PlatformApi::send) executes the request and returns a
//! typed response.
//!
//! Mutations in [`mutation`] wrap a request with its side effects: on
//! success they invalidate the affected query families in a
//! [`query::QueryInvalidator`], on failure they report the error.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use pgmeta::mutation::{TableDeleteMutation, TableDeleteVariables};
//! use pgmeta::platform::PlatformClient;
//! use pgmeta::query::QueryCache;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = PlatformClient::from_env().unwrap();
//!     let cache = QueryCache::new();
//!     let mutation = TableDeleteMutation::new(client, Arc::new(cache.clone()));
//!
//!     let vars = TableDeleteVariables::builder()
//!         .project_ref("abcdefghijklmnop")
//!         .id(16384)
//!         .schema("public")
//!         .cascade(true)
//!         .build();
//!
//!     mutation.mutate(vars).await.expect("request failed");
//! }
//! ```

pub mod mutation;
pub mod platform;
pub mod query;

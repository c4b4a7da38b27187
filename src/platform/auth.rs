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

//! Authentication providers for the platform API
//!
//! - **Bearer Token**: personal access tokens and session JWTs
//! - **NoAuth**: local development and tests

use crate::platform::error::Error;
use crate::platform::header_constants::AUTHORIZATION;
use crate::platform::multimap_ext::{Multimap, MultimapExt};
use std::fmt::Debug;
use std::sync::Arc;

/// Trait for authenticating platform API requests
///
/// Implementations must be `Send + Sync` so a single provider can be shared
/// by concurrent requests.
pub trait PlatformAuth: Send + Sync + Debug {
    /// Authenticate a request by adding the appropriate headers
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails (e.g. missing or expired token).
    fn authenticate(&self, headers: &mut Multimap) -> Result<(), Error>;

    /// Returns a human-readable name for this auth provider
    fn name(&self) -> &'static str;
}

/// Type alias for boxed authentication provider
pub type BoxedPlatformAuth = Arc<dyn PlatformAuth>;

/// Bearer token authentication
///
/// Adds an `Authorization: Bearer <token>` header to every request.
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl PlatformAuth for BearerAuth {
    fn authenticate(&self, headers: &mut Multimap) -> Result<(), Error> {
        headers.add(AUTHORIZATION, format!("Bearer {}", self.token));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "BearerAuth"
    }
}

/// No authentication
///
/// Sends requests unauthenticated. Only useful against local or mocked
/// servers.
#[derive(Clone, Debug, Default)]
pub struct NoAuth;

impl NoAuth {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformAuth for NoAuth {
    fn authenticate(&self, _headers: &mut Multimap) -> Result<(), Error> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoAuth"
    }
}

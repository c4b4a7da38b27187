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

//! Response type for DeleteTable operation
//!
//! The pg-meta service answers a successful delete with the metadata of the
//! table as it was before the drop. Its shape belongs to pg-meta; only the
//! identifying fields are given a typed view here.

use crate::impl_from_platform_response_cached;
use crate::impl_has_cached_body;
use crate::impl_has_platform_fields;
use crate::platform::error::ValidationErr;
use crate::platform::response_traits::HasCachedBody;
use crate::platform::types::PlatformRequest;
use bytes::Bytes;
use http::HeaderMap;
use once_cell::sync::OnceCell;
use serde::Deserialize;

/// Identifying fields of a deleted table
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DeletedTable {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response from DeleteTable operation
#[derive(Debug)]
pub struct DeleteTableResponse {
    request: PlatformRequest,
    headers: HeaderMap,
    body: Bytes,
    cached_body: OnceCell<serde_json::Value>,
}

impl_has_platform_fields!(DeleteTableResponse);
impl_from_platform_response_cached!(DeleteTableResponse);
impl_has_cached_body!(DeleteTableResponse);

impl DeleteTableResponse {
    /// The server payload as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the server answered with a body that is not JSON.
    pub fn data(&self) -> Result<&serde_json::Value, ValidationErr> {
        self.cached_body()
    }

    /// Typed view of the deleted table; fields absent from the payload are `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a JSON object.
    pub fn table(&self) -> Result<DeletedTable, ValidationErr> {
        DeletedTable::deserialize(self.cached_body()?).map_err(ValidationErr::JsonError)
    }
}

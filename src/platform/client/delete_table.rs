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

//! Client method for DeleteTable operation

use crate::platform::builders::{DeleteTable, DeleteTableBldr};
use crate::platform::client::PlatformClient;

impl PlatformClient {
    /// Deletes a database table through pg-meta
    ///
    /// The returned builder defaults to `cascade = false` and no encrypted
    /// connection string.
    ///
    /// # Arguments
    ///
    /// * `project_ref` - Reference of the project owning the database
    /// * `id` - Identifier of the table to delete
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pgmeta::platform::{PlatformApi, PlatformClient};
    ///
    /// # async fn example(client: PlatformClient) -> Result<(), pgmeta::platform::Error> {
    /// client
    ///     .delete_table("abcdefghijklmnop", 16384)
    ///     .cascade(true)
    ///     .build()
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn delete_table<S: Into<String>>(&self, project_ref: S, id: i64) -> DeleteTableBldr {
        DeleteTable::builder()
            .client(self.clone())
            .project_ref(project_ref)
            .id(id)
    }
}

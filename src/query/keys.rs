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

//! Key factories for the query families touched by table mutations
//!
//! Every key is rooted at `["projects", project_ref]`, so invalidating a
//! project prefix reaches all of its cached queries.

use crate::query::key::{KeySegment, QueryKey};

fn project(project_ref: &str) -> QueryKey {
    QueryKey::new().with("projects").with(project_ref)
}

/// Keys of ad-hoc SQL queries
pub mod sql_keys {
    use super::*;

    /// `["projects", ref, "query", ...key]`
    pub fn query(project_ref: &str, key: impl IntoIterator<Item = KeySegment>) -> QueryKey {
        project(project_ref).with("query").extend(key)
    }

    /// Key of the table editor's row query for one table
    pub fn table_editor(project_ref: &str, table_id: i64) -> QueryKey {
        query(
            project_ref,
            [KeySegment::from("table-editor"), KeySegment::from(table_id)],
        )
    }
}

/// Keys of table metadata queries
pub mod table_keys {
    use super::*;

    /// `["projects", ref, "tables", schema]`: every table list of a schema
    pub fn list(project_ref: &str, schema: &str) -> QueryKey {
        project(project_ref).with("tables").with(schema)
    }

    /// `["projects", ref, "tables", schema, include_columns]`
    pub fn list_with_columns(project_ref: &str, schema: &str, include_columns: bool) -> QueryKey {
        list(project_ref, schema).with(include_columns)
    }

    /// `["projects", ref, "tables", id]`
    pub fn table(project_ref: &str, id: i64) -> QueryKey {
        project(project_ref).with("tables").with(id)
    }
}

/// Keys of entity type queries
pub mod entity_type_keys {
    use super::*;

    /// `["projects", ref, "entity-types"]`
    pub fn list(project_ref: &str) -> QueryKey {
        project(project_ref).with("entity-types")
    }
}

/// Keys of view queries
pub mod view_keys {
    use super::*;

    /// `["projects", ref, "views"]`
    pub fn list(project_ref: &str) -> QueryKey {
        project(project_ref).with("views")
    }

    /// `["projects", ref, "views", schema]`: every view of a schema
    pub fn list_by_schema(project_ref: &str, schema: &str) -> QueryKey {
        list(project_ref).with(schema)
    }
}

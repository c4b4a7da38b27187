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

//! Client-side query cache support
//!
//! Cached API results are addressed by [`QueryKey`]s. Mutations do not edit
//! cached data; they invalidate key families through a [`QueryInvalidator`]
//! so the next read refetches.

pub mod cache;
pub mod key;
pub mod keys;

pub use cache::{QueryCache, QueryInvalidator, QueryState};
pub use key::{KeySegment, QueryKey};
pub use keys::{entity_type_keys, sql_keys, table_keys, view_keys};

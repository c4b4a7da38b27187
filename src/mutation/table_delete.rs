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

//! Table delete mutation

use crate::mutation::notifier::{LogNotifier, Notifier};
use crate::mutation::{MutationState, OnError, OnSuccess};
use crate::platform::builders::DeleteTable;
use crate::platform::client::PlatformClient;
use crate::platform::error::Error;
use crate::platform::response::DeleteTableResponse;
use crate::platform::types::PlatformApi;
use crate::query::cache::QueryInvalidator;
use crate::query::keys::{entity_type_keys, sql_keys, table_keys, view_keys};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use typed_builder::TypedBuilder;

/// Parameters of one table delete
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct TableDeleteVariables {
    #[builder(setter(into))]
    pub project_ref: String,
    #[builder(default, setter(into))]
    pub connection_string: Option<String>,
    pub id: i64,
    /// Schema of the table; scopes cache invalidation and is never sent to the server
    #[builder(setter(into))]
    pub schema: String,
    #[builder(default = false)]
    pub cascade: bool,
}

impl TableDeleteVariables {
    /// The request these variables describe
    pub fn to_request(&self, client: &PlatformClient) -> DeleteTable {
        client
            .delete_table(&self.project_ref, self.id)
            .connection_string(self.connection_string.clone())
            .cascade(self.cascade)
            .build()
    }
}

type SuccessFn = Arc<dyn OnSuccess<DeleteTableResponse, TableDeleteVariables>>;
type ErrorFn = Arc<dyn OnError<TableDeleteVariables>>;

/// Deletes a database table and invalidates the queries that depend on it
///
/// On success the table editor query of the table, the schema's table list,
/// the project's entity types and every view list of the schema are
/// invalidated concurrently; the success continuation runs once all four
/// invalidations have completed. On failure the error continuation runs, or
/// the notifier shows `Failed to delete database table: {message}` when none
/// was supplied. Nothing is retried and no cache entry is touched on failure.
///
/// Invocations are independent: concurrent calls are neither coordinated
/// nor de-duplicated, and [`status`](Self::status) reports the most recent
/// transition of any of them.
///
/// # Example
///
/// ```no_run
/// use pgmeta::mutation::{TableDeleteMutation, TableDeleteVariables};
/// use pgmeta::platform::PlatformClient;
/// use pgmeta::query::QueryCache;
/// use std::sync::Arc;
///
/// # async fn example(client: PlatformClient) -> Result<(), pgmeta::platform::Error> {
/// let cache = QueryCache::new();
/// let mutation = TableDeleteMutation::builder()
///     .client(client)
///     .invalidator(Arc::new(cache.clone()))
///     .build();
///
/// let vars = TableDeleteVariables::builder()
///     .project_ref("abcdefghijklmnop")
///     .id(16384)
///     .schema("public")
///     .build();
/// mutation.mutate(vars).await?;
/// # Ok(())
/// # }
/// ```
#[derive(TypedBuilder)]
pub struct TableDeleteMutation {
    client: PlatformClient,
    invalidator: Arc<dyn QueryInvalidator>,
    #[builder(default = Arc::new(LogNotifier))]
    notifier: Arc<dyn Notifier>,
    #[builder(default, setter(strip_option))]
    on_success: Option<SuccessFn>,
    #[builder(default, setter(strip_option))]
    on_error: Option<ErrorFn>,
    #[builder(default = watch::channel(MutationState::Idle).0, setter(skip))]
    state: watch::Sender<MutationState>,
}

impl fmt::Debug for TableDeleteMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableDeleteMutation")
            .field("client", &self.client)
            .field("invalidator", &self.invalidator)
            .field("notifier", &self.notifier)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl TableDeleteMutation {
    pub fn new(client: PlatformClient, invalidator: Arc<dyn QueryInvalidator>) -> Self {
        Self::builder()
            .client(client)
            .invalidator(invalidator)
            .build()
    }

    /// State of the most recent invocation
    pub fn status(&self) -> MutationState {
        *self.state.borrow()
    }

    /// Watch state transitions
    pub fn subscribe(&self) -> watch::Receiver<MutationState> {
        self.state.subscribe()
    }

    /// Returns the observable state to `Idle`
    pub fn reset(&self) {
        self.transition(MutationState::Idle);
    }

    /// Deletes the table and runs the success or error side effects
    ///
    /// Returns once every side effect has completed.
    ///
    /// # Errors
    ///
    /// Returns the validation, network or service error of the request after
    /// it has been reported.
    pub async fn mutate(
        &self,
        variables: TableDeleteVariables,
    ) -> Result<DeleteTableResponse, Error> {
        self.transition(MutationState::Requesting);
        match variables.to_request(&self.client).send().await {
            Ok(data) => {
                self.transition(MutationState::Succeeded);
                self.handle_success(&data, &variables).await;
                self.transition(MutationState::Done);
                Ok(data)
            }
            Err(err) => {
                self.transition(MutationState::Failed);
                self.handle_error(&err, &variables).await;
                self.transition(MutationState::Reported);
                Err(err)
            }
        }
    }

    async fn handle_success(&self, data: &DeleteTableResponse, variables: &TableDeleteVariables) {
        let TableDeleteVariables {
            project_ref,
            id,
            schema,
            ..
        } = variables;

        self.transition(MutationState::InvalidatingCaches);
        let table_editor = sql_keys::table_editor(project_ref, *id);
        let tables = table_keys::list(project_ref, schema);
        let entity_types = entity_type_keys::list(project_ref);
        // dependent views are not tracked per table, so the whole schema goes
        let views = view_keys::list_by_schema(project_ref, schema);

        futures_util::join!(
            self.invalidator.invalidate_queries(&table_editor),
            self.invalidator.invalidate_queries(&tables),
            self.invalidator.invalidate_queries(&entity_types),
            self.invalidator.invalidate_queries(&views),
        );

        if let Some(on_success) = &self.on_success {
            on_success.on_success(data, variables).await;
        }
    }

    async fn handle_error(&self, err: &Error, variables: &TableDeleteVariables) {
        log::warn!(
            "failed to delete table {} of project {}: {err}",
            variables.id,
            variables.project_ref
        );
        match &self.on_error {
            Some(on_error) => on_error.on_error(err, variables).await,
            None => self.notifier.error(&format!(
                "Failed to delete database table: {}",
                err.message()
            )),
        }
    }

    fn transition(&self, next: MutationState) {
        let prev = self.state.send_replace(next);
        log::debug!("table delete mutation: {prev:?} -> {next:?}");
    }
}

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

//! Mutations: server writes followed by cache invalidation
//!
//! A mutation sends one request, then either invalidates the query families
//! affected by the write and runs the caller's success continuation, or hands
//! the error to the caller's error continuation (falling back to a default
//! notification).

pub mod notifier;
pub mod table_delete;

pub use notifier::{LogNotifier, Notifier};
pub use table_delete::{TableDeleteMutation, TableDeleteVariables};

use crate::platform::error::Error;
use async_trait::async_trait;

/// Lifecycle of a mutation invocation
///
/// `Idle -> Requesting -> Succeeded -> InvalidatingCaches -> Done` on success,
/// `Idle -> Requesting -> Failed -> Reported` on failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MutationState {
    #[default]
    Idle,
    Requesting,
    Succeeded,
    InvalidatingCaches,
    Done,
    Failed,
    Reported,
}

impl MutationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, MutationState::Idle)
    }

    /// True until the success side effects have completed
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            MutationState::Requesting | MutationState::Succeeded | MutationState::InvalidatingCaches
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MutationState::Done)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MutationState::Failed | MutationState::Reported)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MutationState::Done | MutationState::Reported)
    }
}

/// Continuation run after a successful mutation and its cache invalidation
#[async_trait]
pub trait OnSuccess<D, V>: Send + Sync
where
    D: Sync,
    V: Sync,
{
    async fn on_success(&self, data: &D, variables: &V);
}

#[async_trait]
impl<D, V, F> OnSuccess<D, V> for F
where
    D: Sync,
    V: Sync,
    F: Fn(&D, &V) + Send + Sync,
{
    async fn on_success(&self, data: &D, variables: &V) {
        (self)(data, variables)
    }
}

/// Continuation run after a failed mutation
///
/// Supplying one takes over user communication: the default notification is
/// not shown.
#[async_trait]
pub trait OnError<V>: Send + Sync
where
    V: Sync,
{
    async fn on_error(&self, error: &Error, variables: &V);
}

#[async_trait]
impl<V, F> OnError<V> for F
where
    V: Sync,
    F: Fn(&Error, &V) + Send + Sync,
{
    async fn on_error(&self, error: &Error, variables: &V) {
        (self)(error, variables)
    }
}

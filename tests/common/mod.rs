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

#![allow(dead_code)]

use async_trait::async_trait;
use pgmeta::mutation::Notifier;
use pgmeta::platform::PlatformClient;
use pgmeta::query::{QueryInvalidator, QueryKey};
use std::sync::Mutex;
use std::time::Duration;
use wiremock::MockServer;

pub const PROJECT_REF: &str = "abcdefghijklmnop";
pub const TABLES_PATH: &str = "/platform/pg-meta/abcdefghijklmnop/tables";

pub struct TestContext {
    pub server: MockServer,
    pub client: PlatformClient,
}

impl TestContext {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = PlatformClient::builder()
            .endpoint(server.uri())
            .access_token("test-token")
            .build()
            .unwrap();
        Self { server, client }
    }
}

/// Notifier that keeps every message it was asked to show
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidationEvent {
    Started(QueryKey),
    Completed(QueryKey),
}

/// Invalidator that records when each invalidation starts and completes,
/// taking `delay` in between
#[derive(Debug, Default)]
pub struct RecordingInvalidator {
    delay: Duration,
    events: Mutex<Vec<InvalidationEvent>>,
}

impl RecordingInvalidator {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<InvalidationEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<QueryKey> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                InvalidationEvent::Completed(key) => Some(key),
                InvalidationEvent::Started(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl QueryInvalidator for RecordingInvalidator {
    async fn invalidate_queries(&self, prefix: &QueryKey) {
        self.events
            .lock()
            .unwrap()
            .push(InvalidationEvent::Started(prefix.clone()));
        tokio::time::sleep(self.delay).await;
        self.events
            .lock()
            .unwrap()
            .push(InvalidationEvent::Completed(prefix.clone()));
    }
}

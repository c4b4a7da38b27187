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

use clap::Parser;
use pgmeta::mutation::{TableDeleteMutation, TableDeleteVariables};
use pgmeta::platform::PlatformClient;
use pgmeta::query::{QueryCache, table_keys};
use std::sync::Arc;

/// Delete a database table through the platform pg-meta API.
///
/// The endpoint is read from PLATFORM_API_URL and the token from
/// PLATFORM_ACCESS_TOKEN.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Project reference
    #[arg(long)]
    project_ref: String,
    /// Identifier of the table to delete
    #[arg(long)]
    id: i64,
    /// Schema containing the table
    #[arg(long, default_value = "public")]
    schema: String,
    /// Also drop objects that depend on the table
    #[arg(long)]
    cascade: bool,
    /// Encrypted connection string, when the project requires one
    #[arg(long)]
    connection_string: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="DEBUG" to see requests and state changes
    let args = Args::parse();

    let client = PlatformClient::from_env()?;
    let cache = QueryCache::new();
    cache.set_query_data(
        table_keys::list(&args.project_ref, &args.schema),
        serde_json::json!([]),
    );

    let mutation = TableDeleteMutation::new(client, Arc::new(cache.clone()));
    let vars = TableDeleteVariables::builder()
        .project_ref(args.project_ref.clone())
        .connection_string(args.connection_string)
        .id(args.id)
        .schema(args.schema.clone())
        .cascade(args.cascade)
        .build();

    let resp = mutation.mutate(vars).await?;
    log::info!("deleted table: {}", resp.data()?);
    log::info!(
        "table list of schema '{}' stale: {}",
        args.schema,
        cache.is_stale(&table_keys::list(&args.project_ref, &args.schema))
    );
    Ok(())
}

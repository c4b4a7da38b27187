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

//! Builder for DeleteTable operation

use crate::platform::client::PlatformClient;
use crate::platform::error::ValidationErr;
use crate::platform::header_constants::X_CONNECTION_ENCRYPTED;
use crate::platform::multimap_ext::{Multimap, MultimapExt, url_encode};
use crate::platform::response::DeleteTableResponse;
use crate::platform::types::{PlatformApi, PlatformRequest, ToPlatformRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the DeleteTable operation
///
/// Sends `DELETE /platform/pg-meta/{ref}/tables?id={id}&cascade={cascade}`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteTable {
    #[builder(!default)]
    client: PlatformClient,
    #[builder(!default, setter(into))]
    project_ref: String,
    #[builder(!default)]
    id: i64,
    /// Encrypted connection descriptor; the server decides whether it is required
    #[builder(default, setter(into))]
    connection_string: Option<String>,
    /// Also drop objects that depend on the table
    #[builder(default = false)]
    cascade: bool,
}

impl PlatformApi for DeleteTable {
    type PlatformResponse = DeleteTableResponse;
}

/// Builder type for DeleteTable
pub type DeleteTableBldr = DeleteTableBuilder<((PlatformClient,), (String,), (i64,), (), ())>;

impl ToPlatformRequest for DeleteTable {
    fn to_platform_request(self) -> Result<PlatformRequest, ValidationErr> {
        if self.project_ref.trim().is_empty() {
            return Err(ValidationErr::InvalidProjectRef(
                "project ref cannot be empty".to_string(),
            ));
        }

        if self.id <= 0 {
            return Err(ValidationErr::InvalidTableId(format!(
                "table id must be positive, got {}",
                self.id
            )));
        }

        let mut query_params = Multimap::new();
        query_params.add("id", self.id.to_string());
        query_params.add("cascade", self.cascade.to_string());

        // an empty connection string counts as absent
        let connection_string = self.connection_string.filter(|s| !s.is_empty());
        if let Some(value) = &connection_string {
            if http::HeaderValue::from_str(value).is_err() {
                return Err(ValidationErr::InvalidHeaderValue {
                    name: X_CONNECTION_ENCRYPTED.to_string(),
                    cause: "connection string contains characters not allowed in a header"
                        .to_string(),
                });
            }
        }
        let mut headers = Multimap::new();
        headers.add_opt(X_CONNECTION_ENCRYPTED, connection_string);

        Ok(PlatformRequest {
            path: format!("/pg-meta/{}/tables", url_encode(&self.project_ref)),
            client: self.client,
            method: Method::DELETE,
            query_params,
            headers,
            body: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PlatformClient {
        PlatformClient::builder()
            .endpoint("http://localhost:8080")
            .build()
            .unwrap()
    }

    #[test]
    fn test_delete_table_request() {
        let request = client()
            .delete_table("abcdefgh", 16384)
            .build()
            .to_platform_request()
            .unwrap();

        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/pg-meta/abcdefgh/tables");
        assert_eq!(
            request.query_params.get("id").map(String::as_str),
            Some("16384")
        );
        assert_eq!(
            request.query_params.get("cascade").map(String::as_str),
            Some("false")
        );
        assert!(request.headers.get(X_CONNECTION_ENCRYPTED).is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_delete_table_with_connection_and_cascade() {
        let request = client()
            .delete_table("abcdefgh", 7)
            .connection_string(Some("abc".to_string()))
            .cascade(true)
            .build()
            .to_platform_request()
            .unwrap();

        assert_eq!(
            request.headers.get_vec(X_CONNECTION_ENCRYPTED),
            Some(&vec!["abc".to_string()])
        );
        assert_eq!(
            request.query_params.get("cascade").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn test_delete_table_empty_connection_string_is_absent() {
        let request = client()
            .delete_table("abcdefgh", 7)
            .connection_string(Some(String::new()))
            .build()
            .to_platform_request()
            .unwrap();
        assert!(!request.headers.contains_key(X_CONNECTION_ENCRYPTED));
    }

    #[test]
    fn test_delete_table_encodes_project_ref() {
        let request = client()
            .delete_table("my ref/..", 1)
            .build()
            .to_platform_request()
            .unwrap();
        assert_eq!(request.path, "/pg-meta/my%20ref%2F../tables");
    }

    #[test]
    fn test_delete_table_empty_project_ref() {
        let result = client()
            .delete_table("  ", 1)
            .build()
            .to_platform_request();
        assert!(matches!(result, Err(ValidationErr::InvalidProjectRef(_))));
    }

    #[test]
    fn test_delete_table_invalid_id() {
        for id in [0, -5] {
            let result = client()
                .delete_table("abcdefgh", id)
                .build()
                .to_platform_request();
            assert!(matches!(result, Err(ValidationErr::InvalidTableId(_))));
        }
    }

    #[test]
    fn test_delete_table_rejects_header_breaking_connection_string() {
        let result = client()
            .delete_table("abcdefgh", 1)
            .connection_string(Some("abc\r\nx-injected: 1".to_string()))
            .build()
            .to_platform_request();
        assert!(matches!(
            result,
            Err(ValidationErr::InvalidHeaderValue { .. })
        ));
    }
}

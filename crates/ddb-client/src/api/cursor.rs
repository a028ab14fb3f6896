//! Cursor API (AQL queries).

use serde_json::{Map, Value};

use crate::client::DdbClient;
use crate::error::Result;
use crate::types::QueryRequest;

/// Cursor API client.
pub struct CursorApi {
    client: DdbClient,
}

impl CursorApi {
    pub(crate) fn new(client: DdbClient) -> Self {
        Self { client }
    }

    /// Run a query and return the first cursor batch as sent by the server.
    pub async fn query(
        &self,
        db: &str,
        query: &str,
        bind_vars: Option<Map<String, Value>>,
    ) -> Result<Value> {
        let request = QueryRequest {
            query: query.to_string(),
            bind_vars,
        };
        self.execute(db, &request).await
    }

    /// Run a prepared query request.
    pub async fn execute(&self, db: &str, request: &QueryRequest) -> Result<Value> {
        self.client
            .post(&format!("/_db/{}/_api/cursor", db), request)
            .await
    }
}

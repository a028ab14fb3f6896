//! Collections API.

use serde_json::Value;

use crate::client::DdbClient;
use crate::error::Result;
use crate::types::{CollectionType, CreateCollectionRequest};

/// Collections API client.
pub struct CollectionsApi {
    client: DdbClient,
}

impl CollectionsApi {
    pub(crate) fn new(client: DdbClient) -> Self {
        Self { client }
    }

    /// Create a collection in `db`.
    pub async fn create(&self, db: &str, name: &str, kind: CollectionType) -> Result<Value> {
        let request = CreateCollectionRequest::new(name, kind);
        self.client
            .post(&format!("/_db/{}/_api/collection", db), &request)
            .await
    }
}

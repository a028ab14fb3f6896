//! Documents API.

use serde_json::Value;

use crate::client::DdbClient;
use crate::error::Result;
use crate::types::{DocumentRef, WriteOptions};

/// Documents API client.
pub struct DocumentsApi {
    client: DdbClient,
}

impl DocumentsApi {
    pub(crate) fn new(client: DdbClient) -> Self {
        Self { client }
    }

    /// Get a document by key.
    pub async fn get(&self, db: &str, collection: &str, key: &str) -> Result<Value> {
        self.get_ref(&DocumentRef::new(db, collection, key)).await
    }

    pub async fn get_ref(&self, doc: &DocumentRef) -> Result<Value> {
        self.client.get(&doc.path()).await
    }

    /// Insert a document. The body is sent as given.
    pub async fn insert(
        &self,
        db: &str,
        collection: &str,
        document: &Value,
        options: WriteOptions,
    ) -> Result<Value> {
        let path = format!("/_db/{}/_api/document/{}", db, collection);
        self.client.post_with_query(&path, document, &options).await
    }

    /// Patch a document. Only the fields in `patch` change on the server.
    pub async fn update(
        &self,
        doc: &DocumentRef,
        patch: &Value,
        options: WriteOptions,
    ) -> Result<Value> {
        self.client
            .patch_with_query(&doc.path(), patch, &options)
            .await
    }

    /// Delete a document.
    pub async fn delete(&self, doc: &DocumentRef) -> Result<Value> {
        self.client.delete(&doc.path()).await
    }
}

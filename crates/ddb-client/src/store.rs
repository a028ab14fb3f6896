//! Operation-level seam over the client.
//!
//! Callers that only need "do one remote operation" code against
//! [`DocumentStore`] so the transport can be swapped out in tests.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::client::DdbClient;
use crate::error::Result;
use crate::types::{CollectionType, DocumentRef, WriteOptions};

/// The six remote operations, each returning the server's JSON unmodified.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create_collection(
        &self,
        db: &str,
        name: &str,
        kind: CollectionType,
    ) -> Result<Value>;

    async fn query(
        &self,
        db: &str,
        query: &str,
        bind_vars: Option<Map<String, Value>>,
    ) -> Result<Value>;

    async fn get_document(&self, doc: &DocumentRef) -> Result<Value>;

    async fn insert_document(
        &self,
        db: &str,
        collection: &str,
        document: Value,
        options: WriteOptions,
    ) -> Result<Value>;

    async fn update_document(
        &self,
        doc: &DocumentRef,
        patch: Value,
        options: WriteOptions,
    ) -> Result<Value>;

    async fn delete_document(&self, doc: &DocumentRef) -> Result<Value>;
}

#[async_trait]
impl DocumentStore for DdbClient {
    async fn create_collection(
        &self,
        db: &str,
        name: &str,
        kind: CollectionType,
    ) -> Result<Value> {
        self.collections().create(db, name, kind).await
    }

    async fn query(
        &self,
        db: &str,
        query: &str,
        bind_vars: Option<Map<String, Value>>,
    ) -> Result<Value> {
        self.cursor().query(db, query, bind_vars).await
    }

    async fn get_document(&self, doc: &DocumentRef) -> Result<Value> {
        self.documents().get_ref(doc).await
    }

    async fn insert_document(
        &self,
        db: &str,
        collection: &str,
        document: Value,
        options: WriteOptions,
    ) -> Result<Value> {
        self.documents()
            .insert(db, collection, &document, options)
            .await
    }

    async fn update_document(
        &self,
        doc: &DocumentRef,
        patch: Value,
        options: WriteOptions,
    ) -> Result<Value> {
        self.documents().update(doc, &patch, options).await
    }

    async fn delete_document(&self, doc: &DocumentRef) -> Result<Value> {
        self.documents().delete(doc).await
    }
}

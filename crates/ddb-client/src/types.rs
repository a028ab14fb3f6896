//! Request types for the Darango API.
//!
//! Responses are passed through as untyped `serde_json::Value`; only the
//! shapes this client sends are modelled here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─────────────────────────────────────────────────────────────────────────────
// Collections
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of collection to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionType {
    /// Plain document collection.
    #[default]
    Document,
    /// Edge collection (documents with `_from` / `_to`).
    Edge,
}

impl CollectionType {
    /// Numeric type code used by the remote API.
    pub fn code(self) -> u8 {
        match self {
            CollectionType::Document => 2,
            CollectionType::Edge => 3,
        }
    }

    /// Map a user-supplied type name. Only `"edge"` selects an edge
    /// collection; anything else is a document collection.
    pub fn from_name(name: &str) -> Self {
        if name == "edge" {
            CollectionType::Edge
        } else {
            CollectionType::Document
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            CollectionType::Document => "document",
            CollectionType::Edge => "edge",
        }
    }
}

impl FromStr for CollectionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for creating a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    /// Collection name.
    pub name: String,
    /// Numeric collection type (2 = document, 3 = edge).
    #[serde(rename = "type")]
    pub kind: u8,
}

impl CreateCollectionRequest {
    pub fn new(name: impl Into<String>, kind: CollectionType) -> Self {
        Self {
            name: name.into(),
            kind: kind.code(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for creating a query cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// AQL query text.
    pub query: String,
    /// Bind parameters. Left out of the body entirely when `None` or empty.
    #[serde(rename = "bindVars", default, skip_serializing_if = "no_bind_vars")]
    pub bind_vars: Option<Map<String, Value>>,
}

fn no_bind_vars(bind_vars: &Option<Map<String, Value>>) -> bool {
    bind_vars.as_ref().is_none_or(Map::is_empty)
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            bind_vars: None,
        }
    }

    pub fn with_bind_vars(mut self, bind_vars: Map<String, Value>) -> Self {
        self.bind_vars = Some(bind_vars);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Documents
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub database: String,
    pub collection: String,
    pub key: String,
}

impl DocumentRef {
    pub fn new(
        database: impl Into<String>,
        collection: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
            key: key.into(),
        }
    }

    /// API path of the document.
    pub fn path(&self) -> String {
        format!(
            "/_db/{}/_api/document/{}/{}",
            self.database, self.collection, self.key
        )
    }
}

/// Query options for document writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WriteOptions {
    /// Ask the server to include the stored document under `new`.
    #[serde(rename = "returnNew", skip_serializing_if = "is_false")]
    pub return_new: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_type_codes() {
        assert_eq!(CollectionType::Document.code(), 2);
        assert_eq!(CollectionType::Edge.code(), 3);
    }

    #[test]
    fn test_collection_type_display() {
        assert_eq!(CollectionType::Edge.to_string(), "edge");
        assert_eq!(CollectionType::default().to_string(), "document");
    }

    #[test]
    fn test_collection_type_from_name() {
        assert_eq!(CollectionType::from_name("edge"), CollectionType::Edge);
        assert_eq!(CollectionType::from_name("document"), CollectionType::Document);
        assert_eq!(CollectionType::from_name("Edge"), CollectionType::Document);
        assert_eq!(CollectionType::from_name(""), CollectionType::Document);
        assert_eq!("edge".parse::<CollectionType>(), Ok(CollectionType::Edge));
    }

    #[test]
    fn test_create_collection_body() {
        let request = CreateCollectionRequest::new("edges", CollectionType::Edge);
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body, json!({"name": "edges", "type": 3}));
    }

    #[test]
    fn test_query_body_omits_missing_bind_vars() {
        let body = serde_json::to_value(QueryRequest::new("RETURN 1")).unwrap();
        assert_eq!(body, json!({"query": "RETURN 1"}));
        assert!(body.get("bindVars").is_none());
    }

    #[test]
    fn test_query_body_omits_empty_bind_vars() {
        let request = QueryRequest::new("RETURN 1").with_bind_vars(Map::new());
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body, json!({"query": "RETURN 1"}));
    }

    #[test]
    fn test_query_body_keeps_bind_vars() {
        let mut bind_vars = Map::new();
        bind_vars.insert("x".to_string(), json!(1));
        let request = QueryRequest::new("RETURN @x").with_bind_vars(bind_vars);
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body, json!({"query": "RETURN @x", "bindVars": {"x": 1}}));
    }

    #[test]
    fn test_document_path() {
        let doc = DocumentRef::new("_system", "users", "alice");
        assert_eq!(doc.path(), "/_db/_system/_api/document/users/alice");
    }

    #[test]
    fn test_write_options_query() {
        let none = serde_json::to_value(WriteOptions::default()).unwrap();
        assert_eq!(none, json!({}));

        let new = serde_json::to_value(WriteOptions { return_new: true }).unwrap();
        assert_eq!(new, json!({"returnNew": true}));
    }
}

//! HTTP client SDK for the Darango document database API.
//!
//! This crate provides a typed client for the database's REST surface.
//! Responses are returned as untyped JSON; failures are classified into a
//! single [`Error`] type.
//!
//! # Example
//!
//! ```no_run
//! use ddb_client::{CollectionType, DdbClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = DdbClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! client
//!     .collections()
//!     .create("_system", "users", CollectionType::Document)
//!     .await?;
//!
//! let result = client
//!     .cursor()
//!     .query("_system", "FOR u IN users RETURN u", None)
//!     .await?;
//! println!("{}", result["result"]);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Collections**: create document and edge collections
//! - **Cursor**: run AQL queries with optional bind variables
//! - **Documents**: get, insert, update (patch), delete

pub mod api;
pub mod client;
pub mod error;
pub mod store;
pub mod types;

pub use client::{ClientBuilder, DdbClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use store::DocumentStore;
pub use types::*;

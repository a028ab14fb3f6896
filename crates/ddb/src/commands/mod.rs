//! CLI command handlers.
//!
//! Every handler resolves its arguments, calls exactly one
//! [`DocumentStore`](ddb_client::DocumentStore) operation and hands the JSON
//! result back to `main` for rendering.

pub mod create;
pub mod document;
pub mod query;

use std::time::Duration;

use clap::Args;
use ddb_client::DdbClient;
use serde_json::{Map, Value};
use thiserror::Error;

/// Database used when neither `--db` nor `ARANGO_DB` is set.
pub const DEFAULT_DATABASE: &str = "_system";

/// Environment variable holding the default database.
pub const DATABASE_ENV: &str = "ARANGO_DB";

/// Shared context for all commands, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Context {
    /// Base URL of the API.
    pub server_url: String,
    /// Timeout for the single request an invocation makes.
    pub timeout: Duration,
    /// Print JSON on one line instead of pretty-printed.
    pub compact: bool,
}

impl Context {
    /// Build the API client for this invocation.
    pub fn client(&self) -> ddb_client::Result<DdbClient> {
        DdbClient::builder()
            .base_url(&self.server_url)
            .timeout(self.timeout)
            .build()
    }
}

/// Target database, shared by every command.
#[derive(Args, Debug, Clone)]
pub struct DatabaseArg {
    /// Database name
    #[arg(
        long = "db",
        value_name = "DB",
        env = DATABASE_ENV,
        default_value = DEFAULT_DATABASE
    )]
    pub db: String,
}

impl DatabaseArg {
    /// Database to target. An empty `--db` counts as not given.
    pub fn resolve(&self) -> String {
        resolve_database(&self.db, std::env::var(DATABASE_ENV).ok())
    }
}

fn resolve_database(explicit: &str, env_default: Option<String>) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    env_default
        .filter(|db| !db.is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
}

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A JSON argument could not be parsed. Raised before any request is made.
    #[error("Invalid JSON for {what}: {reason}")]
    InvalidJson { what: &'static str, reason: String },

    /// The client reported a transport or API failure.
    #[error(transparent)]
    Client(#[from] ddb_client::Error),
}

impl CliError {
    /// Single-line message shown after the `Error:` prefix.
    pub fn message(&self) -> String {
        match self {
            CliError::Client(err) => err.message(),
            other => other.to_string(),
        }
    }
}

/// Outcome of one command.
pub type CommandResult = Result<Value, CliError>;

/// Parse a JSON argument strictly.
pub(crate) fn parse_json(raw: &str, what: &'static str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::InvalidJson {
        what,
        reason: e.to_string(),
    })
}

/// Parse a JSON argument that must be an object.
pub(crate) fn parse_json_object(
    raw: &str,
    what: &'static str,
) -> Result<Map<String, Value>, CliError> {
    match parse_json(raw, what)? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::InvalidJson {
            what,
            reason: "expected a JSON object".to_string(),
        }),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_database_prefers_explicit() {
        assert_eq!(resolve_database("app", Some("env_db".into())), "app");
    }

    #[test]
    fn test_resolve_database_empty_falls_back() {
        assert_eq!(resolve_database("", Some("env_db".into())), "env_db");
        assert_eq!(resolve_database("", Some(String::new())), DEFAULT_DATABASE);
        assert_eq!(resolve_database("", None), DEFAULT_DATABASE);
    }

    #[test]
    fn test_parse_json_accepts_any_value() {
        assert_eq!(parse_json("[1, 2]", "document").unwrap(), json!([1, 2]));
        assert_eq!(parse_json(r#"{"a": 1}"#, "document").unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_parse_json_reports_what_failed() {
        let err = parse_json("not json", "document").unwrap_err();
        let message = err.message();
        assert!(message.starts_with("Invalid JSON for document: "), "{message}");
    }

    #[test]
    fn test_parse_json_object_rejects_arrays() {
        let err = parse_json_object("[1]", "bind variables").unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid JSON for bind variables: expected a JSON object"
        );
    }

    #[test]
    fn test_client_error_message_is_unwrapped() {
        let err = CliError::from(ddb_client::Error::Api {
            status: 409,
            message: "Collection already exists".into(),
        });
        assert_eq!(err.message(), "Collection already exists");
    }

    #[test]
    fn test_context_builds_client() {
        let ctx = Context {
            server_url: "http://db.internal:8529/".into(),
            timeout: Duration::from_secs(3),
            compact: false,
        };
        let client = ctx.client().unwrap();
        assert_eq!(client.base_url(), "http://db.internal:8529");
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_context_rejects_bad_url() {
        let ctx = Context {
            server_url: "::nope".into(),
            timeout: Duration::from_secs(30),
            compact: false,
        };
        assert!(ctx.client().is_err());
    }
}

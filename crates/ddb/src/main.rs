//! ddb - command-line client for the Darango document database API.
//!
//! Main entry point for the ddb CLI.

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use ddb_client::{DEFAULT_BASE_URL, DocumentStore};

mod commands;
mod output;

use commands::create::CreateArgs;
use commands::document::{self, DocumentArgs, InsertArgs, UpdateArgs};
use commands::query::QueryArgs;
use commands::{CommandResult, Context, create, query};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// ddb - command-line client for the Darango document database API
#[derive(Parser)]
#[command(name = "ddb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON on a single line (for scripting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Darango API base URL
    #[arg(long, global = true, env = "DARANGO_API", default_value = DEFAULT_BASE_URL)]
    pub server: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "DDB_TIMEOUT", value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new collection
    Create(CreateArgs),

    /// Execute an AQL query
    Query(QueryArgs),

    /// Retrieve a document by key
    Get(DocumentArgs),

    /// Insert a new document
    Insert(InsertArgs),

    /// Update an existing document
    Update(UpdateArgs),

    /// Delete a document
    Delete(DocumentArgs),
}

/// Run one command against `store`.
pub async fn dispatch<S>(command: Commands, store: &S) -> CommandResult
where
    S: DocumentStore + ?Sized,
{
    match command {
        Commands::Create(args) => create::run(args, store).await,
        Commands::Query(args) => query::run(args, store).await,
        Commands::Get(args) => document::get(args, store).await,
        Commands::Insert(args) => document::insert(args, store).await,
        Commands::Update(args) => document::update(args, store).await,
        Commands::Delete(args) => document::delete(args, store).await,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only ever carries the JSON result.
    let filter = if cli.verbose {
        "ddb=debug,ddb_client=debug,warn"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    let ctx = Context {
        server_url: cli.server,
        timeout: Duration::from_secs(cli.timeout),
        compact: cli.compact,
    };
    tracing::debug!(server = %ctx.server_url, timeout = ?ctx.timeout, "resolved settings");

    let result = match ctx.client() {
        Ok(client) => dispatch(cli.command, &client).await,
        Err(err) => Err(err.into()),
    };

    let mut stdout = std::io::stdout().lock();
    let code = output::render(&mut stdout, &result, ctx.compact)
        .and_then(|code| stdout.flush().map(|_| code))
        .context("failed to write output")?;

    Ok(ExitCode::from(code))
}

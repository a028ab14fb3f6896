//! Query command - AQL execution.

use clap::Args;
use ddb_client::DocumentStore;
use tracing::debug;

use super::{CommandResult, DatabaseArg, parse_json_object};

/// Arguments for the query command.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// AQL query to execute
    #[arg(value_name = "AQL")]
    pub aql: String,

    #[command(flatten)]
    pub database: DatabaseArg,

    /// Bind variables as a JSON object
    #[arg(long, value_name = "JSON")]
    pub bind: Option<String>,
}

/// Run the query command.
pub async fn run<S>(args: QueryArgs, store: &S) -> CommandResult
where
    S: DocumentStore + ?Sized,
{
    // An empty `--bind ''` means no bind variables.
    let bind_vars = args
        .bind
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(|raw| parse_json_object(raw, "bind variables"))
        .transpose()?;

    let db = args.database.resolve();
    debug!(
        %db,
        bind_vars = bind_vars.as_ref().map_or(0, |vars| vars.len()),
        "running query"
    );

    Ok(store.query(&db, &args.aql, bind_vars).await?)
}

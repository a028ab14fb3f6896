//! Create command - collection creation.

use clap::Args;
use ddb_client::{CollectionType, DocumentStore};
use tracing::debug;

use super::{CommandResult, DatabaseArg};

/// Arguments for the create command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the collection to create
    pub name: String,

    #[command(flatten)]
    pub database: DatabaseArg,

    /// Collection type (document or edge)
    #[arg(long = "type", value_name = "TYPE", default_value = "document")]
    pub kind: String,
}

/// Run the create command.
pub async fn run<S>(args: CreateArgs, store: &S) -> CommandResult
where
    S: DocumentStore + ?Sized,
{
    let db = args.database.resolve();
    let kind = CollectionType::from_name(&args.kind);
    debug!(%db, name = %args.name, %kind, "creating collection");

    Ok(store.create_collection(&db, &args.name, kind).await?)
}

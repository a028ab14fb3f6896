//! Document commands - get, insert, update and delete a single document.

use clap::Args;
use ddb_client::{DocumentRef, DocumentStore, WriteOptions};
use tracing::debug;

use super::{CommandResult, DatabaseArg, parse_json};

/// Arguments naming one existing document.
#[derive(Args, Debug)]
pub struct DocumentArgs {
    #[command(flatten)]
    pub database: DatabaseArg,

    /// Collection name
    #[arg(long, value_name = "COL")]
    pub col: String,

    /// Document key
    #[arg(long, value_name = "KEY")]
    pub key: String,
}

impl DocumentArgs {
    fn to_ref(&self) -> DocumentRef {
        DocumentRef::new(self.database.resolve(), &self.col, &self.key)
    }
}

/// Arguments for the insert command.
#[derive(Args, Debug)]
pub struct InsertArgs {
    #[command(flatten)]
    pub database: DatabaseArg,

    /// Collection name
    #[arg(long, value_name = "COL")]
    pub col: String,

    /// Document as JSON string
    #[arg(long, value_name = "JSON")]
    pub doc: String,

    /// Include the stored document in the response
    #[arg(long)]
    pub return_new: bool,
}

/// Arguments for the update command.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub target: DocumentArgs,

    /// Fields to change, as JSON string
    #[arg(long, value_name = "JSON")]
    pub doc: String,

    /// Include the updated document in the response
    #[arg(long)]
    pub return_new: bool,
}

/// Run the get command.
pub async fn get<S>(args: DocumentArgs, store: &S) -> CommandResult
where
    S: DocumentStore + ?Sized,
{
    let doc = args.to_ref();
    debug!(path = %doc.path(), "fetching document");
    Ok(store.get_document(&doc).await?)
}

/// Run the insert command.
pub async fn insert<S>(args: InsertArgs, store: &S) -> CommandResult
where
    S: DocumentStore + ?Sized,
{
    let document = parse_json(&args.doc, "document")?;
    let options = WriteOptions {
        return_new: args.return_new,
    };

    let db = args.database.resolve();
    debug!(%db, col = %args.col, "inserting document");
    Ok(store
        .insert_document(&db, &args.col, document, options)
        .await?)
}

/// Run the update command.
pub async fn update<S>(args: UpdateArgs, store: &S) -> CommandResult
where
    S: DocumentStore + ?Sized,
{
    let patch = parse_json(&args.doc, "document")?;
    let options = WriteOptions {
        return_new: args.return_new,
    };

    let doc = args.target.to_ref();
    debug!(path = %doc.path(), "updating document");
    Ok(store.update_document(&doc, patch, options).await?)
}

/// Run the delete command.
pub async fn delete<S>(args: DocumentArgs, store: &S) -> CommandResult
where
    S: DocumentStore + ?Sized,
{
    let doc = args.to_ref();
    debug!(path = %doc.path(), "deleting document");
    Ok(store.delete_document(&doc).await?)
}

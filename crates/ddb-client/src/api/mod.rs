//! API endpoint implementations.

mod collections;
mod cursor;
mod documents;

pub use collections::CollectionsApi;
pub use cursor::CursorApi;
pub use documents::DocumentsApi;

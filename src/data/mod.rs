pub mod catalog;
pub mod context;
pub mod curated;
pub mod loader;
pub mod usage;
pub mod validate;

pub use context::{DataContext, Session};
pub use loader::{load_documents, LoadedDocuments};

// todolist - SQLite-backed task list with a small CLI shell

pub mod error;
pub mod import;
pub mod models;
pub mod store;

// Re-export main types for convenience
pub use error::StoreError;
pub use import::ImportRecord;
pub use models::{Task, TaskId};
pub use store::Store;

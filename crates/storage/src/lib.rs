#![forbid(unsafe_code)]

pub mod library;
pub mod repository;

pub use library::{LibraryError, QuestionLibrary};
pub use repository::{InMemoryWorkspace, StorageError, WorkspaceStore};

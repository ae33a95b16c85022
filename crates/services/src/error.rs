//! Shared error types for the services crate.

use thiserror::Error;

use storage::{LibraryError, StorageError};

/// Errors emitted by `InterviewController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InterviewError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `WorkspaceService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WorkspaceServiceError {
    #[error("no categories selected")]
    NothingSelected,
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

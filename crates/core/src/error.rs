use thiserror::Error;

use crate::model::{BlockError, CategoryError, PoolError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Block(#[from] BlockError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

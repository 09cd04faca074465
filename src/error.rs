use crate::{BindError, LoadError};
use thiserror::Error;

/// Top-level error type for the envbind library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("loading error: {0}")]
    Load(#[from] LoadError),

    #[error("binding error: {0}")]
    Bind(#[from] BindError),
}

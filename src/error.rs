//! Error types shared by the registry, the declaration loader and the state reader.

use crate::resource::Urn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot trace argument shape: {0}")]
    Reflection(#[from] serde_reflection::Error),

    /// A resource with the same type and name is already registered in the stack.
    #[error("resource {urn} is already registered")]
    DuplicateResource { urn: Urn },

    #[error("unknown resource type {0}")]
    UnknownResourceType(String),

    /// Only version 4 state documents carry root outputs at the top level.
    #[error("unsupported Terraform state version {0}")]
    UnsupportedStateVersion(u64),
}

pub type Result<T> = std::result::Result<T, Error>;

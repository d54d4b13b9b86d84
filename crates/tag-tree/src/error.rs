//! Error types for tag-tree operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Unknown tag type id: {0}")]
    UnknownTagType(u8),
}

pub type Result<T> = std::result::Result<T, TagError>;

//! Errors raised by the strict and loading operations of the tools menu.
use std::io;

/// An error of the tools menu.
///
/// The permissive tree operations never fail; only their strict
/// counterparts and the layout loaders produce an [`Error`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Adding the item would make a node its own ancestor.
    #[error("adding `{child}` under `{parent}` would create a cycle")]
    Cycle {
        /// Label of the node receiving the child.
        parent: String,
        /// Label of the rejected child.
        child: String,
    },

    /// The item is already attached to another parent.
    #[error("`{child}` already belongs to `{parent}`")]
    AlreadyParented {
        /// Label of the current parent.
        parent: String,
        /// Label of the rejected child.
        child: String,
    },

    /// A layout file could not be read.
    #[error("failed to read menu layout: {0}")]
    Io(#[from] io::Error),

    /// A layout could not be parsed.
    #[error("failed to parse menu layout: {0}")]
    Parse(String),

    /// A layout could not be written.
    #[error("failed to serialize menu layout: {0}")]
    Serialize(String),

    /// The layout file has an extension no loader understands.
    #[error("unsupported menu layout format: {0}")]
    UnsupportedFormat(String),
}

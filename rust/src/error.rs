//! Error handling and result types for BTree operations.
//!
//! Plain membership operations never fail: an absent key is a `false`, not an
//! error. Errors come from construction with an unusable minimum degree and
//! from the checked `try_*` operations that validate the tree around a
//! mutation.

use thiserror::Error;

/// Error type for B-tree operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BTreeError {
    /// Key not found in the tree.
    #[error("Key not found in tree")]
    KeyNotFound,
    /// Invalid minimum degree specified.
    #[error("Invalid minimum degree: {0}")]
    InvalidDegree(String),
    /// Tree corruption detected.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
    /// Arena operation failed.
    #[error("Arena error: {0}")]
    ArenaError(String),
}

impl BTreeError {
    /// Create an InvalidDegree error with context
    pub fn invalid_degree(degree: usize, min_required: usize) -> Self {
        Self::InvalidDegree(format!(
            "Minimum degree {} is invalid (minimum required: {})",
            degree, min_required
        ))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Check if this error is a degree error
    pub fn is_degree_error(&self) -> bool {
        matches!(self, Self::InvalidDegree(_))
    }

    /// Check if this error reports a damaged structure
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Self::CorruptedTree(_) | Self::ArenaError(_))
    }
}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, BTreeError>;

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;

/// Result extension trait for attaching context to tree errors
pub trait BTreeResultExt<T> {
    /// Prefix the error message with `context`
    fn with_context(self, context: &str) -> BTreeResult<T>;

    /// Prefix the error message with the name of the failing operation
    fn with_operation(self, operation: &str) -> BTreeResult<T>;
}

impl<T> BTreeResultExt<T> for Result<T, BTreeError> {
    fn with_context(self, context: &str) -> BTreeResult<T> {
        self.map_err(|e| match e {
            BTreeError::KeyNotFound => BTreeError::KeyNotFound,
            BTreeError::InvalidDegree(msg) => {
                BTreeError::InvalidDegree(format!("{}: {}", context, msg))
            }
            BTreeError::CorruptedTree(msg) => BTreeError::corrupted_tree(context, &msg),
            BTreeError::ArenaError(msg) => BTreeError::arena_error(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> BTreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

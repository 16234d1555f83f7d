//! Error types for import domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain import values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportDomainError {
    /// The issue provider value is unsupported.
    #[error("unsupported issue provider: {0}")]
    InvalidIssueProvider(String),

    /// The scope owner is empty or contains forbidden characters.
    #[error("invalid scope owner '{0}'")]
    InvalidScopeOwner(String),

    /// The scope repository name is empty or contains forbidden characters.
    #[error("invalid scope name '{0}'")]
    InvalidScopeName(String),

    /// The issue number is invalid.
    #[error("invalid issue number {0}, expected a positive integer")]
    InvalidIssueNumber(u64),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

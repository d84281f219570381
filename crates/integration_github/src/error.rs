//! GitHub lookup error types

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API
///
/// Empty result sets are not errors; they are modeled as absence variants on
/// [`crate::EmailLookup`] and [`crate::RepoLookup`].
#[derive(Debug, Error)]
pub enum GitHubError {
    /// No account exists for the requested login
    #[error("User '{login}' not found")]
    NotFound {
        /// The login that was looked up
        login: String,
    },

    /// API rate limit exceeded (the unauthenticated quota is small)
    #[error("API rate limit exceeded")]
    RateLimited,

    /// Any other non-success HTTP status
    #[error("API error: HTTP {status}")]
    UnexpectedStatus {
        /// The status code the API returned
        status: u16,
    },

    /// Network-level failure (DNS, refused connection, timeout)
    #[error("Network error: {0}")]
    ConnectionFailed(String),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
}

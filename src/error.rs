//! Error types for drawer API functions.
//!
//! The drawer itself never fails: every error is local to one search
//! invocation and surfaces through the `Result` of the toolkit operation
//! that triggered it. `DrawerError` is the default error type for API
//! functions built with the transform helpers; callers with richer error
//! taxonomies can substitute their own type.

use thiserror::Error;

/// Default error type for drawer API functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawerError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response: {0}")]
    Response(String),
}

//! Error types for Matcha.
//!
//! This module provides a single error enum built with `thiserror`:
//!
//! - Construction-time failures: [`MatchError::IncompleteHandlerMapping`],
//!   [`MatchError::UnknownVariant`], [`MatchError::DuplicateHandler`],
//!   [`MatchError::DuplicateKey`]
//! - Call-time failures: [`MatchError::UnmatchedValue`]

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for fallible matcher operations.
pub type MatchResult<T> = Result<T, MatchError>;

/// Errors raised while building or invoking a dispatcher.
#[derive(Error, Debug)]
pub enum MatchError {
    /// A handler mapping for a closed variant set did not cover every variant.
    #[error("incomplete handler mapping for `{variant_set}`: missing {}", .missing.join(", "))]
    IncompleteHandlerMapping {
        /// The variant set the mapping was built for.
        variant_set: &'static str,
        /// Every variant without a handler, in declaration order.
        missing: Vec<&'static str>,
    },

    /// A handler was registered under a name the variant set does not declare.
    #[error("`{variant_set}` has no variant named `{variant}`")]
    UnknownVariant {
        /// The variant set the mapping was built for.
        variant_set: &'static str,
        /// The offending name.
        variant: String,
    },

    /// Two handlers were registered for the same variant.
    #[error("handler for `{variant_set}::{variant}` registered twice")]
    DuplicateHandler {
        /// The variant set the mapping was built for.
        variant_set: &'static str,
        /// The variant registered twice.
        variant: &'static str,
    },

    /// Two arms were registered for the same key.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// An open-domain dispatcher without a catch-all received a value none of
    /// its arms accept.
    #[error("{matcher}: could not match type {observed}")]
    UnmatchedValue {
        /// The name of the dispatcher that failed.
        matcher: String,
        /// The observed type or shape of the value.
        observed: String,
    },

    /// A caller-defined failure raised from inside a handler.
    #[error(transparent)]
    Handler(BoxError),
}

impl MatchError {
    /// Returns true if this error was raised while building a mapping.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            MatchError::IncompleteHandlerMapping { .. }
                | MatchError::UnknownVariant { .. }
                | MatchError::DuplicateHandler { .. }
                | MatchError::DuplicateKey(_)
        )
    }
}

// Convenience conversions
impl From<BoxError> for MatchError {
    fn from(err: BoxError) -> Self {
        MatchError::Handler(err)
    }
}

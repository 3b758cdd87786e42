//! Observation wrappers for dispatchers.
//!
//! Both wrappers are transparent: they return the inner dispatcher's output
//! unchanged and never invoke a handler themselves.

pub mod logging;
pub mod tracing;

pub use self::logging::Logged;
pub use self::tracing::Traced;

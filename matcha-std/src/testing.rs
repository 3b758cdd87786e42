//! Testing utilities for Matcha.
//!
//! This module provides a recording handler to verify which handler of a
//! mapping fired, how often, and with which payload.
//!
//! # Example
//!
//! ```rust
//! use matcha_core::Dispatch;
//! use matcha_std::{testing::Spy, value::ValueMatcher};
//!
//! let other = Spy::<i64>::new();
//! let matcher = ValueMatcher::builder()
//!     .when_eq(1, || ())
//!     .otherwise(other.handler());
//!
//! matcher.dispatch(0);
//! assert!(other.was_called_with(&0));
//! ```

use std::sync::{Arc, Mutex};

/// A handler that records every payload it receives.
///
/// Clones share the same record, so a spy can be handed to a mapping while
/// the test keeps a copy for assertions.
pub struct Spy<A, R = ()> {
    calls: Arc<Mutex<Vec<A>>>,
    result: R,
}

impl<A> Spy<A, ()> {
    /// Create a spy whose handler returns `()`.
    pub fn new() -> Self {
        Self::returning(())
    }
}

impl<A> Default for Spy<A, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R: Clone> Clone for Spy<A, R> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            result: self.result.clone(),
        }
    }
}

impl<A, R> Spy<A, R> {
    /// Create a spy whose handler returns a clone of `result`.
    pub fn returning(result: R) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Check if the handler fired at least once.
    pub fn was_called(&self) -> bool {
        self.count() > 0
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<A: Clone, R> Spy<A, R> {
    /// Get a clone of the recorded payloads, in call order.
    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().unwrap().clone()
    }
}

impl<A: PartialEq, R> Spy<A, R> {
    /// Check if any call received `expected`.
    pub fn was_called_with(&self, expected: &A) -> bool {
        self.calls.lock().unwrap().iter().any(|a| a == expected)
    }
}

impl<A, R> Spy<A, R>
where
    A: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    /// A handler taking the payload as its argument.
    pub fn handler(&self) -> impl Fn(A) -> R + Send + Sync + 'static {
        let calls = self.calls.clone();
        let result = self.result.clone();
        move |payload| {
            calls.lock().unwrap().push(payload);
            result.clone()
        }
    }
}

impl<R> Spy<(), R>
where
    R: Clone + Send + Sync + 'static,
{
    /// A handler for variants without a payload.
    pub fn thunk(&self) -> impl Fn() -> R + Send + Sync + 'static {
        let calls = self.calls.clone();
        let result = self.result.clone();
        move || {
            calls.lock().unwrap().push(());
            result.clone()
        }
    }
}

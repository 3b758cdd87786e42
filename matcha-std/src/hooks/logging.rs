//! Logging wrapper - observability for dispatch.

use matcha_core::Dispatch;
use std::fmt::Debug;

/// A dispatcher wrapper that logs every value it classifies.
///
/// It uses the `tracing` crate when the `tracing` feature is enabled and is
/// a pass-through otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use matcha_std::hooks::Logged;
///
/// let spell = Logged::named("spell_number", spell);
/// spell.dispatch(4);
/// ```
pub struct Logged<D> {
    inner: D,
    name: &'static str,
}

impl<D> Logged<D> {
    /// Wrap a dispatcher with a default name.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            name: "dispatch",
        }
    }

    /// Wrap a dispatcher with a custom name.
    ///
    /// The name is used in log messages to identify the dispatcher.
    pub fn named(name: &'static str, inner: D) -> Self {
        Self { inner, name }
    }

    /// Get a reference to the wrapped dispatcher.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Unwrap the dispatcher.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<V, D> Dispatch<V> for Logged<D>
where
    V: Debug,
    D: Dispatch<V>,
{
    type Output = D::Output;

    fn dispatch(&self, value: V) -> Self::Output {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = %self.name, value = ?value, "Dispatching value");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, &value);
        }

        self.inner.dispatch(value)
    }
}

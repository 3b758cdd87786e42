//! Tracing wrapper - a span around every dispatch.

use matcha_core::Dispatch;

/// A dispatcher wrapper that instruments every call with a `tracing` span.
///
/// Events emitted by the inner dispatcher and by handlers are recorded
/// inside the span. Without the `tracing` feature this is a pass-through.
pub struct Traced<D> {
    inner: D,
    name: &'static str,
}

impl<D> Traced<D> {
    /// Create a new `Traced` wrapper around a dispatcher.
    pub const fn new(inner: D, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The span name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<D: Clone> Clone for Traced<D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<D: Copy> Copy for Traced<D> {}

impl<V, D> Dispatch<V> for Traced<D>
where
    D: Dispatch<V>,
{
    type Output = D::Output;

    #[cfg(feature = "tracing")]
    fn dispatch(&self, value: V) -> Self::Output {
        let span = ::tracing::debug_span!("dispatch", matcher = %self.name);
        let _entered = span.enter();
        self.inner.dispatch(value)
    }

    #[cfg(not(feature = "tracing"))]
    fn dispatch(&self, value: V) -> Self::Output {
        self.inner.dispatch(value)
    }
}

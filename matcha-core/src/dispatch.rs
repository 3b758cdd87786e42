//! # Dispatcher
//!
//! A dispatcher classifies a value against a fixed set of variants and
//! invokes the single handler registered for the variant it falls into.
//!
//! # Design Philosophy
//!
//! - **Exactly once**: one handler fires per call, synchronously, before the
//!   call returns
//! - **Transparent**: the dispatcher never catches or wraps what a handler
//!   returns; a handler returning `Result` hands its error straight back to
//!   the caller
//! - **Shareable**: dispatchers hold no mutable state, so a `Sync` dispatcher
//!   can be called from many threads at once

/// A function that classifies a value and invokes the matching handler.
///
/// Every closure `Fn(V) -> T` is a dispatcher, and so is every pattern
/// generated by `#[derive(Match)]` or built by the `matcha-std` builders.
///
/// # Example
///
/// ```rust
/// use matcha_core::Dispatch;
///
/// let describe = |n: i32| if n > 3 { "large" } else { "small" };
/// assert_eq!(describe.dispatch(4), "large");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch values of type `{V}`",
    label = "missing `Dispatch<{V}>` implementation",
    note = "Build a dispatcher with `#[derive(Match)]`, a matcher builder, or use a closure `Fn({V}) -> T`."
)]
pub trait Dispatch<V> {
    /// The result type shared by every handler of the mapping.
    type Output;

    /// Classify `value` and return the result of the handler that fired.
    fn dispatch(&self, value: V) -> Self::Output;
}

/// A boxed, thread-safe dispatcher for heterogeneous collections.
pub type BoxDispatch<'a, V, T> = Box<dyn Dispatch<V, Output = T> + Send + Sync + 'a>;

// Blanket impl for closures
impl<F, V, T> Dispatch<V> for F
where
    F: Fn(V) -> T,
{
    type Output = T;

    fn dispatch(&self, value: V) -> Self::Output {
        (self)(value)
    }
}

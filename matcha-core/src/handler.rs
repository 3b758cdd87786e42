//! # Handler
//!
//! One entry of a handler mapping: the function invoked when a value falls
//! into a particular variant.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|payload| ...`
//! 2. **Struct implementation**: `impl Handler<Payload> for MyHandler`
//! 3. **Boxed**: [`BoxHandler`] when handlers are assembled at runtime

/// A single handler of a handler mapping.
///
/// Handlers receive the payload of the variant that matched and return the
/// mapping's result type. Whatever a handler returns, including an `Err`, is
/// handed back to the caller of the dispatcher unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle a payload of type `{In}`",
    label = "missing `Handler<{In}>` implementation",
    note = "Handlers must implement the `call` method for the payload type `{In}`."
)]
pub trait Handler<In> {
    /// The result type of the handler.
    type Output;

    /// Invoke the handler with the variant payload.
    fn call(&self, input: In) -> Self::Output;
}

/// A boxed, thread-safe handler.
pub type BoxHandler<'a, In, Out> = Box<dyn Handler<In, Output = Out> + Send + Sync + 'a>;

// Blanket impl for closures
impl<F, In, Out> Handler<In> for F
where
    F: Fn(In) -> Out,
{
    type Output = Out;

    fn call(&self, input: In) -> Self::Output {
        (self)(input)
    }
}

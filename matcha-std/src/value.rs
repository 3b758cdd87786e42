//! # Value-keyed matching
//!
//! Dispatchers for open domains such as numbers, strings, or dynamically
//! typed values, where the set of possible raw values cannot be enumerated.
//!
//! Arms are tested in declaration order and the first arm that accepts the
//! value wins. Because the domain is open, finishing a builder requires a
//! decision about values no arm accepts:
//!
//! | Finish | Result | Unmatched value |
//! |--------|--------|-----------------|
//! | [`otherwise`](ValueMatcherBuilder::otherwise) | [`ValueMatcher`] | catch-all receives the original value |
//! | [`strict`](ValueMatcherBuilder::strict) | [`StrictValueMatcher`] | `Err(MatchError::UnmatchedValue)` |
//!
//! # Example
//!
//! ```rust
//! use matcha_core::Dispatch;
//! use matcha_std::value::ValueMatcher;
//!
//! let spell = ValueMatcher::builder()
//!     .when_eq(1, || "one".to_string())
//!     .when_eq(2, || "two".to_string())
//!     .when_eq(3, || "three".to_string())
//!     .otherwise(|n: i64| n.to_string());
//!
//! assert_eq!(spell.dispatch(2), "two");
//! assert_eq!(spell.dispatch(4), "4");
//! ```

use matcha_core::{Dispatch, MatchError, MatchResult};

/// One arm of a value matcher.
///
/// Takes ownership of the value and either handles it or hands it back so
/// the next arm can be tried.
type Arm<V, T> = Box<dyn Fn(V) -> Result<T, V> + Send + Sync + 'static>;

type CatchAll<V, T> = Box<dyn Fn(V) -> T + Send + Sync + 'static>;

type Describe<V> = Box<dyn Fn(&V) -> String + Send + Sync + 'static>;

const DEFAULT_NAME: &str = "ValueMatcher";

/// Builder collecting the arms of a value-keyed dispatcher in declaration order.
pub struct ValueMatcherBuilder<V, T> {
    name: &'static str,
    arms: Vec<Arm<V, T>>,
}

impl<V, T> Default for ValueMatcherBuilder<V, T> {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME,
            arms: Vec::new(),
        }
    }
}

impl<V: 'static, T: 'static> ValueMatcherBuilder<V, T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the dispatcher for diagnostics and tracing.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Add an arm matching values equal to `key`. The handler takes no payload.
    pub fn when_eq<K, H>(mut self, key: K, handler: H) -> Self
    where
        V: PartialEq<K>,
        K: Send + Sync + 'static,
        H: Fn() -> T + Send + Sync + 'static,
    {
        self.arms.push(Box::new(move |value: V| {
            if value == key {
                Ok(handler())
            } else {
                Err(value)
            }
        }));
        self
    }

    /// Add an arm guarded by `predicate`. The handler receives the value.
    pub fn when<P, H>(mut self, predicate: P, handler: H) -> Self
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
        H: Fn(V) -> T + Send + Sync + 'static,
    {
        self.arms.push(Box::new(move |value: V| {
            if predicate(&value) {
                Ok(handler(value))
            } else {
                Err(value)
            }
        }));
        self
    }

    /// Add an arm that classifies the value with `extract`.
    ///
    /// The arm matches when `extract` returns `Some(payload)`; the handler
    /// then receives the payload instead of the raw value.
    pub fn case<P, E, H>(mut self, extract: E, handler: H) -> Self
    where
        P: 'static,
        E: Fn(&V) -> Option<P> + Send + Sync + 'static,
        H: Fn(P) -> T + Send + Sync + 'static,
    {
        self.arms.push(Box::new(move |value: V| match extract(&value) {
            Some(payload) => Ok(handler(payload)),
            None => Err(value),
        }));
        self
    }

    /// Number of arms added so far.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Check if no arm has been added.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Finish with a catch-all handler that receives every unmatched value.
    pub fn otherwise<H>(self, handler: H) -> ValueMatcher<V, T>
    where
        H: Fn(V) -> T + Send + Sync + 'static,
    {
        ValueMatcher {
            name: self.name,
            arms: self.arms,
            otherwise: Box::new(handler),
        }
    }

    /// Finish without a catch-all. Unmatched values become
    /// [`MatchError::UnmatchedValue`].
    pub fn strict(self) -> StrictValueMatcher<V, T> {
        StrictValueMatcher {
            name: self.name,
            arms: self.arms,
            describe: Box::new(|_: &V| std::any::type_name::<V>().to_string()),
        }
    }
}

/// Runs `value` through `arms` in order, returning the index and output of
/// the first arm that accepts it, or the value back if none does.
fn run_arms<V, T>(arms: &[Arm<V, T>], mut value: V) -> Result<(usize, T), V> {
    for (index, arm) in arms.iter().enumerate() {
        match arm(value) {
            Ok(output) => return Ok((index, output)),
            Err(rejected) => value = rejected,
        }
    }
    Err(value)
}

/// A value-keyed dispatcher with a catch-all. Dispatch is infallible.
pub struct ValueMatcher<V, T> {
    name: &'static str,
    arms: Vec<Arm<V, T>>,
    otherwise: CatchAll<V, T>,
}

impl<V: 'static, T: 'static> ValueMatcher<V, T> {
    /// Start building a value matcher.
    pub fn builder() -> ValueMatcherBuilder<V, T> {
        ValueMatcherBuilder::new()
    }

    /// Convert into a plain function.
    pub fn into_fn(self) -> impl Fn(V) -> T + Send + Sync + 'static {
        move |value| self.dispatch(value)
    }
}

impl<V, T> ValueMatcher<V, T> {
    /// The dispatcher's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of named arms, not counting the catch-all.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Check if the matcher has only its catch-all.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<V, T> Dispatch<V> for ValueMatcher<V, T> {
    type Output = T;

    fn dispatch(&self, value: V) -> T {
        match run_arms(&self.arms, value) {
            Ok((_index, output)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(matcher = self.name, arm = _index, "arm matched");
                output
            }
            Err(value) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(matcher = self.name, "falling back to catch-all");
                (self.otherwise)(value)
            }
        }
    }
}

impl<V, T> std::fmt::Debug for ValueMatcher<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueMatcher")
            .field("name", &self.name)
            .field("arms", &self.arms.len())
            .finish_non_exhaustive()
    }
}

/// A value-keyed dispatcher without a catch-all.
///
/// Dispatch returns `Err(MatchError::UnmatchedValue)` naming the observed
/// type of a value no arm accepts, instead of inventing a default result.
pub struct StrictValueMatcher<V, T> {
    name: &'static str,
    arms: Vec<Arm<V, T>>,
    describe: Describe<V>,
}

impl<V, T> StrictValueMatcher<V, T> {
    /// Customize how unmatched values are described in the error.
    ///
    /// The default reports the Rust type name of `V`.
    pub fn describe_with<D>(mut self, describe: D) -> Self
    where
        D: Fn(&V) -> String + Send + Sync + 'static,
    {
        self.describe = Box::new(describe);
        self
    }

    /// The dispatcher's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of arms.
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Check if the matcher has no arms at all.
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<V, T> Dispatch<V> for StrictValueMatcher<V, T> {
    type Output = MatchResult<T>;

    fn dispatch(&self, value: V) -> MatchResult<T> {
        match run_arms(&self.arms, value) {
            Ok((_index, output)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(matcher = self.name, arm = _index, "arm matched");
                Ok(output)
            }
            Err(value) => {
                let observed = (self.describe)(&value);
                #[cfg(feature = "tracing")]
                tracing::debug!(matcher = self.name, %observed, "no arm matched");
                Err(MatchError::UnmatchedValue {
                    matcher: self.name.to_string(),
                    observed,
                })
            }
        }
    }
}

impl<V, T> std::fmt::Debug for StrictValueMatcher<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrictValueMatcher")
            .field("name", &self.name)
            .field("arms", &self.arms.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_first_matching_arm_wins() {
        let matcher = ValueMatcher::builder()
            .when(|n: &i32| *n > 0, |_| "positive")
            .when_eq(1, || "one")
            .otherwise(|_| "other");

        assert_eq!(matcher.dispatch(1), "positive");
        assert_eq!(matcher.dispatch(-1), "other");
    }

    #[test]
    fn test_catch_all_receives_original_value() {
        let matcher = ValueMatcher::builder()
            .when_eq(1, || 100)
            .otherwise(|n: i32| n * 10);

        assert_eq!(matcher.dispatch(1), 100);
        assert_eq!(matcher.dispatch(7), 70);
        assert_eq!(matcher.len(), 1);
    }

    #[test]
    fn test_only_one_handler_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (a, b, c) = (calls.clone(), calls.clone(), calls.clone());

        let matcher = ValueMatcher::builder()
            .when_eq(1, move || {
                a.fetch_add(1, Ordering::SeqCst);
            })
            .when_eq(2, move || {
                b.fetch_add(1, Ordering::SeqCst);
            })
            .otherwise(move |_: i32| {
                c.fetch_add(1, Ordering::SeqCst);
            });

        matcher.dispatch(2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_case_extracts_payload() {
        let matcher = ValueMatcher::builder()
            .case(|s: &String| s.strip_prefix("#").map(str::len), |len| len)
            .otherwise(|s| s.len() * 100);

        assert_eq!(matcher.dispatch("#abc".to_string()), 3);
        assert_eq!(matcher.dispatch("abc".to_string()), 300);
    }

    #[test]
    fn test_strict_unmatched_value() {
        let matcher = ValueMatcher::<u8, u8>::builder()
            .named("matchDigit")
            .when(|n| *n < 10, |n| n)
            .strict();

        assert_eq!(matcher.dispatch(7).unwrap(), 7);

        let err = matcher.dispatch(42).unwrap_err();
        assert!(matches!(
            err,
            MatchError::UnmatchedValue { ref matcher, ref observed }
                if matcher == "matchDigit" && observed == "u8"
        ));
    }

    #[test]
    fn test_strict_describe_with() {
        let matcher = ValueMatcher::<u8, u8>::builder()
            .when_eq(0, || 0)
            .strict()
            .describe_with(|n| format!("u8 ({n})"));

        let err = matcher.dispatch(5).unwrap_err();
        assert_eq!(err.to_string(), "ValueMatcher: could not match type u8 (5)");
    }

    #[test]
    fn test_handler_error_passes_through() {
        let matcher = ValueMatcher::builder()
            .when_eq(0, || Err::<i32, String>("division by zero".to_string()))
            .otherwise(|n: i32| Ok(100 / n));

        assert_eq!(matcher.dispatch(4), Ok(25));
        assert_eq!(matcher.dispatch(0), Err("division by zero".to_string()));
    }

    #[test]
    fn test_into_fn() {
        let double = ValueMatcher::builder().otherwise(|n: i32| n * 2).into_fn();
        assert_eq!(double(21), 42);
    }
}

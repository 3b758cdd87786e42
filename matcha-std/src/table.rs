//! # Runtime handler tables for closed variant sets
//!
//! `#[derive(Match)]` makes a missing handler a compile error. When a
//! mapping is assembled at runtime instead (handlers registered by name,
//! collected from plugins, chosen by configuration) the compiler cannot see
//! it, so [`HandlerTableBuilder::build`] checks completeness before the
//! table exists. No value is ever classified by an incomplete table.
//!
//! # Example
//!
//! ```rust
//! use matcha_core::{Dispatch, MatchError, VariantSet};
//! use matcha_std::table::HandlerTable;
//!
//! enum Pet { Dog, Bird }
//!
//! impl VariantSet for Pet {
//!     const NAME: &'static str = "Pet";
//!     const VARIANTS: &'static [&'static str] = &["Dog", "Bird"];
//!
//!     fn variant_index(&self) -> usize {
//!         match self {
//!             Pet::Dog => 0,
//!             Pet::Bird => 1,
//!         }
//!     }
//! }
//!
//! let incomplete = HandlerTable::<Pet, &str>::builder()
//!     .on("Dog", |_| "woof")?
//!     .build();
//! assert!(matches!(incomplete, Err(MatchError::IncompleteHandlerMapping { .. })));
//!
//! let table = HandlerTable::<Pet, &str>::builder()
//!     .on("Dog", |_| "woof")?
//!     .on("Bird", |_| "tweet")?
//!     .build()?;
//! assert_eq!(table.dispatch(&Pet::Bird), "tweet");
//! # Ok::<(), MatchError>(())
//! ```

use matcha_core::{Dispatch, MatchError, MatchResult, VariantSet, variant_index_of};

type TableHandler<S, T> = Box<dyn Fn(&S) -> T + Send + Sync + 'static>;

/// A complete handler mapping for the variant set `S`, checked at construction.
pub struct HandlerTable<S, T> {
    /// One handler per variant, indexed by [`VariantSet::variant_index`].
    handlers: Vec<TableHandler<S, T>>,
}

impl<S: VariantSet, T> HandlerTable<S, T> {
    /// Start building a table.
    pub fn builder() -> HandlerTableBuilder<S, T> {
        HandlerTableBuilder::new()
    }

    /// Number of variants covered, always `S::VARIANTS.len()`.
    pub fn variant_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<'s, S: VariantSet, T> Dispatch<&'s S> for HandlerTable<S, T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `S::variant_index` returns an index outside `S::VARIANTS`,
    /// which means the `VariantSet` implementation is inconsistent.
    fn dispatch(&self, value: &'s S) -> T {
        let index = value.variant_index();
        #[cfg(feature = "tracing")]
        tracing::trace!(variant_set = S::NAME, variant = S::VARIANTS[index], "dispatching");
        (self.handlers[index])(value)
    }
}

impl<S: VariantSet, T> std::fmt::Debug for HandlerTable<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerTable")
            .field("variant_set", &S::NAME)
            .field("variants", &S::VARIANTS)
            .finish_non_exhaustive()
    }
}

/// Builder for [`HandlerTable`].
pub struct HandlerTableBuilder<S, T> {
    slots: Vec<Option<TableHandler<S, T>>>,
    allow_overrides: bool,
}

impl<S: VariantSet, T> std::fmt::Debug for HandlerTableBuilder<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerTableBuilder")
            .field("variant_set", &S::NAME)
            .field("missing", &self.missing())
            .field("allow_overrides", &self.allow_overrides)
            .finish()
    }
}

impl<S: VariantSet, T> Default for HandlerTableBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: VariantSet, T> HandlerTableBuilder<S, T> {
    /// Create a builder with no handlers registered.
    pub fn new() -> Self {
        Self {
            slots: S::VARIANTS.iter().map(|_| None).collect(),
            allow_overrides: false,
        }
    }

    /// Allow registering a variant twice. The last handler wins.
    pub fn allow_overrides(mut self) -> Self {
        self.allow_overrides = true;
        self
    }

    /// Register the handler for `variant`.
    ///
    /// Fails with [`MatchError::UnknownVariant`] if `S` has no such variant,
    /// or [`MatchError::DuplicateHandler`] if it already has a handler and
    /// overrides are not allowed.
    pub fn insert<H>(&mut self, variant: &str, handler: H) -> MatchResult<()>
    where
        H: Fn(&S) -> T + Send + Sync + 'static,
    {
        let index = variant_index_of::<S>(variant).ok_or_else(|| MatchError::UnknownVariant {
            variant_set: S::NAME,
            variant: variant.to_string(),
        })?;

        let slot = &mut self.slots[index];
        if slot.is_some() && !self.allow_overrides {
            return Err(MatchError::DuplicateHandler {
                variant_set: S::NAME,
                variant: S::VARIANTS[index],
            });
        }
        *slot = Some(Box::new(handler));
        Ok(())
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn on<H>(mut self, variant: &str, handler: H) -> MatchResult<Self>
    where
        H: Fn(&S) -> T + Send + Sync + 'static,
    {
        self.insert(variant, handler)?;
        Ok(self)
    }

    /// Check if `variant` already has a handler.
    pub fn covers(&self, variant: &str) -> bool {
        variant_index_of::<S>(variant).is_some_and(|index| self.slots[index].is_some())
    }

    /// Variants still lacking a handler, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        S::VARIANTS
            .iter()
            .zip(&self.slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Finish the table.
    ///
    /// Fails with [`MatchError::IncompleteHandlerMapping`] listing every
    /// variant without a handler.
    pub fn build(self) -> MatchResult<HandlerTable<S, T>> {
        let missing = self.missing();
        if !missing.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(variant_set = S::NAME, ?missing, "handler mapping incomplete");
            return Err(MatchError::IncompleteHandlerMapping {
                variant_set: S::NAME,
                missing,
            });
        }

        Ok(HandlerTable {
            handlers: self.slots.into_iter().flatten().collect(),
        })
    }
}

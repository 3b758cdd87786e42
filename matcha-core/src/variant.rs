//! Closed variant sets.

/// A closed, enumerable set of mutually exclusive shapes.
///
/// Each value knows its own variant, so classification never depends on the
/// order handlers were declared in. `#[derive(Match)]` implements this trait
/// for enums; hand-written implementations must keep `VARIANTS` and
/// [`variant_index`](VariantSet::variant_index) consistent.
///
/// # Example
///
/// ```rust
/// use matcha_core::VariantSet;
///
/// enum Coin { Heads, Tails }
///
/// impl VariantSet for Coin {
///     const NAME: &'static str = "Coin";
///     const VARIANTS: &'static [&'static str] = &["Heads", "Tails"];
///
///     fn variant_index(&self) -> usize {
///         match self {
///             Coin::Heads => 0,
///             Coin::Tails => 1,
///         }
///     }
/// }
///
/// assert_eq!(Coin::Tails.variant_name(), "Tails");
/// ```
pub trait VariantSet {
    /// The name of the set, used in diagnostics.
    const NAME: &'static str;

    /// Every variant name, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Position of this value's variant within [`VARIANTS`](VariantSet::VARIANTS).
    fn variant_index(&self) -> usize;

    /// Name of this value's variant.
    fn variant_name(&self) -> &'static str {
        Self::VARIANTS[self.variant_index()]
    }
}

/// Look up the declaration index of a variant by name.
pub fn variant_index_of<S: VariantSet + ?Sized>(name: &str) -> Option<usize> {
    S::VARIANTS.iter().position(|v| *v == name)
}

//! Procedural macros for Matcha.
//!
//! - `#[derive(Match)]` - Compile-time exhaustive dispatcher for an enum

use proc_macro::TokenStream;

mod naming;
mod pattern;

/// Derive a handler mapping and dispatcher for an enum.
///
/// For `enum Pet { Dog(Dog), Bird(Bird) }` this generates:
///
/// - `PetPattern<Dog, Bird>`: one public field per variant (`dog`, `bird`).
///   A struct literal must name every field, so leaving out a handler is a
///   compile error.
/// - `Pet::match_with(self, pattern)` and `Pet::match_ref(&self, pattern)`
/// - `Dispatch<Pet>` and `Dispatch<&Pet>` for the pattern, so one pattern can
///   classify many values
/// - `VariantSet` for `Pet`
///
/// Rename the pattern struct with `#[match_pattern(name = "PetHandlers")]`.
#[proc_macro_derive(Match, attributes(match_pattern))]
pub fn derive_match(input: TokenStream) -> TokenStream {
    pattern::derive_match_impl(input)
}

//! # matcha - Exhaustive Pattern Dispatch
//!
//! `matcha` turns a *handler mapping* (one handler per variant, plus an
//! optional catch-all) into a reusable dispatcher that classifies a value
//! and invokes exactly one handler, exactly once.
//!
//! There are two kinds of variant sets:
//!
//! - **Closed** sets of shapes, usually an enum. `#[derive(Match)]` generates
//!   a pattern struct with one field per variant, so the compiler rejects a
//!   mapping that forgets a variant. When the mapping is assembled at
//!   runtime instead, [`HandlerTable`](table::HandlerTable) checks it when it
//!   is built.
//! - **Open** domains such as numbers or strings. [`ValueMatcher`] tests
//!   arms in declaration order and must end in a catch-all;
//!   [`StrictValueMatcher`] reports unmatched values as
//!   [`MatchError::UnmatchedValue`] instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use matcha::prelude::*;
//!
//! #[derive(Match)]
//! enum Payment {
//!     CreditCard { amount: f64, fee: f64 },
//!     Cash { amount: f64, discount: f64 },
//! }
//!
//! let amount_due = PaymentPattern {
//!     credit_card: |amount: f64, fee: f64| amount * (1.0 + fee),
//!     cash: |amount: f64, discount: f64| amount - discount,
//! };
//!
//! assert_eq!(amount_due.dispatch(Payment::CreditCard { amount: 100.0, fee: 0.02 }), 102.0);
//! assert_eq!(amount_due.dispatch(Payment::Cash { amount: 100.0, discount: 42.0 }), 58.0);
//! ```
//!
//! A mapping that misses a variant does not compile:
//!
//! ```rust,compile_fail
//! use matcha::Match;
//!
//! #[derive(Match)]
//! enum Pet {
//!     Dog,
//!     Bird,
//! }
//!
//! // error[E0063]: missing field `bird` in initializer of `PetPattern<_, _>`
//! let sound = Pet::Dog.match_with(PetPattern { dog: || "woof" });
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `macros` | yes | `#[derive(Match)]` |
//! | `tracing` | no | `tracing` events and spans from dispatchers and wrappers |
//! | `phf` | no | [`PhfMatcher`](keyed::PhfMatcher) over compile-time maps |

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Generated code names `::matcha`, which must resolve inside this crate too.
extern crate self as matcha;

pub use matcha_core::{
    // Errors
    BoxError,
    // Dispatch
    BoxDispatch,
    // Handler
    BoxHandler,
    Dispatch,
    Handler,
    MatchError,
    MatchResult,
    // Variant sets
    VariantSet,
    variant_index_of,
};

// Open domains
pub use matcha_std::value::{StrictValueMatcher, ValueMatcher, ValueMatcherBuilder};

/// Value-keyed matching for open domains.
pub mod value {
    pub use matcha_std::value::{StrictValueMatcher, ValueMatcher, ValueMatcherBuilder};
}

/// Exact-key lookup matchers.
pub mod keyed {
    #[cfg(feature = "phf")]
    pub use matcha_std::keyed::PhfMatcher;
    pub use matcha_std::keyed::{KeyedMatcher, KeyedMatcherBuilder};
}

/// Runtime-assembled handler tables for closed variant sets.
pub mod table {
    pub use matcha_std::table::{HandlerTable, HandlerTableBuilder};
}

/// Observation wrappers for dispatchers.
pub mod hooks {
    pub use matcha_std::hooks::{Logged, Traced};
}

/// Testing utilities.
pub mod testing {
    pub use matcha_std::testing::Spy;
}

/// Prelude module - common imports for Matcha.
///
/// # Usage
///
/// ```rust
/// use matcha::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "macros")]
    pub use crate::Match;
    pub use crate::{
        Dispatch, Handler, MatchError, MatchResult, StrictValueMatcher, ValueMatcher, VariantSet,
        keyed::KeyedMatcher, table::HandlerTable,
    };
}

#[cfg(feature = "macros")]
pub use matcha_macros::Match;

#[cfg(feature = "phf")]
pub use phf;

//! # matcha-core
//!
//! Core traits for the Matcha pattern dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that wants to implement or accept dispatchers without pulling in the
//! standard implementations from `matcha-std`.
//!
//! # Building Blocks
//!
//! ## Dispatcher ([`Dispatch`])
//!
//! A function from a value to a result that classifies the value against a
//! fixed set of variants and invokes exactly one handler.
//!
//! - **Stateless**: dispatch takes `&self`; a dispatcher is built once and
//!   invoked many times
//! - **Universal**: every `Fn(V) -> T` closure is already a dispatcher
//! - **Generic result**: the output type is chosen by the caller per mapping
//!
//! ## Handler ([`Handler`])
//!
//! One entry of a handler mapping: a function from the payload of a single
//! variant to the result type.
//!
//! ## Variant Set ([`VariantSet`])
//!
//! A closed, enumerable collection of named shapes. Implemented by
//! `#[derive(Match)]` and used by runtime-assembled mappings to check that
//! every variant is covered before any value is classified.
//!
//! # Error Types
//!
//! - [`MatchError`] - Construction and call-time failures
//! - [`BoxError`] - Boxed error for caller-defined handler failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod error;
mod handler;
mod variant;

// Re-exports
pub use dispatch::{BoxDispatch, Dispatch};
pub use error::{BoxError, MatchError, MatchResult};
pub use handler::{BoxHandler, Handler};
pub use variant::{VariantSet, variant_index_of};

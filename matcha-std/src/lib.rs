//! # matcha-std
//!
//! Standard dispatchers for the Matcha pattern dispatch library.
//!
//! This crate provides:
//! - **Value-keyed matching**: [`ValueMatcher`], [`StrictValueMatcher`]
//! - **Key-indexed matching**: [`KeyedMatcher`], `PhfMatcher` (feature `phf`)
//! - **Runtime-checked closed sets**: [`HandlerTable`]
//! - **Observation wrappers**: [`Logged`], [`Traced`]
//! - **Testing utilities**: [`Spy`]
//!
//! [`ValueMatcher`]: value::ValueMatcher
//! [`StrictValueMatcher`]: value::StrictValueMatcher
//! [`KeyedMatcher`]: keyed::KeyedMatcher
//! [`HandlerTable`]: table::HandlerTable
//! [`Logged`]: hooks::Logged
//! [`Traced`]: hooks::Traced
//! [`Spy`]: testing::Spy

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use matcha_core;

// Modules
pub mod hooks;
pub mod keyed;
pub mod table;
pub mod testing;
pub mod value;

//! Implementation of the `#[derive(Record)]` macro.
//!
//! Generates the field dispatch of `sifter::Record` and field name constants
//! from `#[field(...)]` annotations.

mod attrs;
mod derive;

pub use derive::record_derive_impl;

// src/lib.rs
//! Random password generation with guaranteed character class coverage.
//!
//! [`generators::PasswordGenerator`] turns a [`models::GenerationRequest`]
//! into a password that contains at least one character from every selected
//! [`charset::CharacterClass`]. The `cli` module is the thin adapter used by
//! the `rust_passgen` binary.

pub mod charset;
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;

pub use charset::CharacterClass;
pub use generators::{GeneratorError, PasswordGenerator};
pub use models::GenerationRequest;

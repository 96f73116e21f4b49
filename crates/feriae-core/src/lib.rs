//! # feriae-core
//!
//! Error types and shared aliases for the feriae workspace.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error hierarchy, the `ensure!` /
//! `fail!` convenience macros, and primitive type aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year. Signed so that out-of-domain values (zero, negatives) can be
/// passed in and rejected with a proper error instead of wrapping.
pub type Year = i32;

pub use errors::{Error, Result};

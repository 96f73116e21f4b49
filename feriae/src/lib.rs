//! # feriae
//!
//! Public-holiday computation: date rules, per-country catalogs, and
//! providers.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `feriae-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! feriae = "0.1"
//! ```
//!
//! ```rust
//! use feriae::catalog::Registry;
//! use feriae::time::Date;
//!
//! let registry = Registry::with_builtin().unwrap();
//! let holidays = registry.holidays("DE", 2024).unwrap();
//! let unity_day = Date::from_ymd(2024, 10, 3).unwrap();
//! assert_eq!(holidays[&unity_day].name_in("en"), Some("German Unity Day"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared aliases.
pub use feriae_core as core;

/// Date type, Easter algorithms, and observed-date policies.
pub use feriae_time as time;

/// Holiday records, catalog rules, providers, and the country registry.
pub use feriae_catalog as catalog;

//! # Snippet Library
//!
//! A registry of short, localizable text fragments used to give game content
//! some variety. Snippets are grouped into categories and may carry a stable
//! id so that saves can refer back to them.
//!
//! ## Core Components
//!
//! - **snippet**: Snippet ids, records and their content-data schema
//! - **library**: The registry with loading, lookup, random selection,
//!   `<tag>` expansion and legacy hash migration
//! - **config**: Diagnostic switches, loadable from TOML
//! - **error**: Load-time errors
//!
//! ## Lifecycle
//!
//! A library is filled during content loading and only queried afterwards.
//! Loading after the legacy hash index was built is allowed but reported,
//! since it usually means content was loaded out of order.

pub mod config;
pub mod error;
pub mod library;
pub mod snippet;

pub use config::*;
pub use error::*;
pub use library::*;
pub use snippet::*;

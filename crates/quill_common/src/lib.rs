//! Shared foundational types used across the Quill compiler front end.
//!
//! Currently this is the string interner that backs buffer identifiers and
//! other names that are compared far more often than they are created.

#![warn(missing_docs)]

pub mod ident;

pub use ident::{Ident, Interner};

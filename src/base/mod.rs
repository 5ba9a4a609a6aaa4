//! Foundation types for the identdex toolchain.
//!
//! This module provides the value types every other layer keys on:
//! - [`SourceSpan`] - A file plus start/end line and column
//! - [`LocationRef`] - A precise span, or an opaque description
//! - [`LineCol`] - A display position
//!
//! This module has NO dependencies on other identdex modules.

mod span;

pub use span::{LineCol, LocationRef, SourceSpan};

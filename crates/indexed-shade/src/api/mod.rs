//! Public API support types.
//!
//! This module provides [`ShadeError`], the unified error type for the
//! crate's fallible entry points.

mod error;

pub use error::ShadeError;

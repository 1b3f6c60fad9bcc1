//! Palette types and utilities
//!
//! This module provides the fixed 256-entry palette used by the quantizer,
//! including error types for parsing and validation and the compiled-in
//! default color table.

mod builtin;
mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, BLACK_INDEX, PALETTE_SIZE};

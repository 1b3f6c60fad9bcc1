//! Output types for the quantization pipeline.
//!
//! [`IndexedImage`] is the canonical output of every pipeline stage: a
//! buffer of 8-bit palette indices with dimension metadata. RGB output for
//! presentation is computed on demand against a palette.

mod indexed_image;

pub use indexed_image::IndexedImage;

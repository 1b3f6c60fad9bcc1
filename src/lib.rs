//! Shadeview - indexed-palette image preview
//!
//! Window harness around the `indexed-shade` core: drop a 24-bit image
//! onto the window to quantize it, then drive the darkness level and
//! underwater tint from the keyboard.
//! This library exposes modules for integration testing.

pub mod error;
pub mod loader;
pub mod palette_config;
pub mod viewer;

//! Quantization: 24-bit RGB frames to palette-index buffers.
//!
//! [`RgbFrame`] is a validated, borrowed view of decoded pixel bytes;
//! [`quantize`] maps every pixel to its nearest palette entry. Input
//! validation happens at frame construction, so the quantizer itself
//! cannot fail.

mod frame;
mod quantizer;

pub use frame::{FrameError, RgbFrame};
pub use quantizer::quantize;

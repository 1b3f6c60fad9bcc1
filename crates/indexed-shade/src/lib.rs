//! indexed-shade: palette quantization and lighting transforms for 8-bit
//! indexed pixel buffers.
//!
//! This library implements the pixel pipeline behind an indexed-color
//! preview tool: it maps 24-bit RGB images onto a fixed 256-entry palette
//! and then simulates lighting conditions by remapping the resulting
//! indices. Everything operates on plain index buffers; presentation is
//! left to the caller.
//!
//! # Quick Start
//!
//! The [`ShadeSession`] is the primary entry point. It owns the palette,
//! the quantized base buffer, and the current lighting state:
//!
//! ```
//! use indexed_shade::{Palette, RgbFrame, ShadeSession};
//!
//! let mut session = ShadeSession::new(Palette::built_in());
//!
//! // A 2x1 frame, bytes stored B,G,R per pixel.
//! let bytes = [0u8, 0, 0, 255, 255, 255];
//! let frame = RgbFrame::from_bgr24(&bytes, 2, 1).unwrap();
//! session.load_frame(&frame);
//!
//! session.darker();
//! session.toggle_underwater();
//!
//! let image = session.current().unwrap();
//! assert_eq!(image.width(), 2);
//! ```
//!
//! # Pipeline
//!
//! Data flows strictly one way. Lighting transforms always recompute from
//! the quantized base buffer, never from their own previous output:
//!
//! ```text
//! RgbFrame (B,G,R bytes)
//!     |
//!     v
//! quantize()      nearest palette entry, luminance-weighted distance
//!     |
//!     v
//! base indices
//!     |
//!     v
//! apply_darkness()    v + 32*level, saturating at the black sentinel (255)
//!     |
//!     v
//! apply_underwater()  v | 0x10 when submerged
//!     |
//!     v
//! final indices -> presentation
//! ```
//!
//! # Palette layout
//!
//! The built-in palette is organised so the lighting transforms are pure
//! index arithmetic:
//!
//! - Eight darkness banks of 32 entries each. Bank `n` holds the same
//!   colors as bank 0, scaled to `(8 - n) / 8` brightness, so adding
//!   `32 * level` to an index darkens a pixel without a color search.
//! - Each bank is split into 16 dry colors and 16 underwater variants;
//!   setting bit 4 (`0x10`) of an index selects the underwater variant of
//!   the same color.
//! - Entry 255 is the reserved black sentinel that darkening saturates to.
//!
//! Custom palettes can be supplied through [`Palette::new`] or
//! [`Palette::from_hex`]; they must respect the 256-entry size and the
//! black sentinel, but are otherwise free to arrange colors differently.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod session;
pub mod shade;


pub use api::ShadeError;
pub use color::Rgb;
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError, ParseColorError, BLACK_INDEX, PALETTE_SIZE};
pub use quantize::{quantize, FrameError, RgbFrame};
pub use session::ShadeSession;
pub use shade::{
    apply_darkness, apply_underwater, DarknessLevel, InvalidLevelError, LEVEL_STRIDE,
    UNDERWATER_BIT,
};

//! ShadeSession: owns the palette, the pixel buffers, and the lighting
//! state, and keeps them consistent across input events.

use crate::output::IndexedImage;
use crate::palette::Palette;
use crate::quantize::{quantize, RgbFrame};
use crate::shade::{apply_darkness, apply_underwater, DarknessLevel};

/// The stateful pipeline behind the interactive preview.
///
/// A session owns exactly one palette and two buffers: the *base* buffer
/// (the most recently quantized image) and the *lit* buffer (the base
/// buffer with the current darkness level and underwater tint applied).
/// All mutation goes through the event-shaped methods below; each one
/// recomputes the lit buffer from the base buffer, darkness first, tint
/// second, so stale tint bits can never accumulate.
///
/// Darkness level and underwater flag deliberately survive image loads:
/// dropping a new image into a darkened, submerged preview shows the new
/// image darkened and submerged.
///
/// Initial state: darkness 0, underwater off, no image loaded. The
/// lighting methods are no-ops until the first load.
///
/// # Example
///
/// ```
/// use indexed_shade::{Palette, RgbFrame, ShadeSession};
///
/// let mut session = ShadeSession::new(Palette::built_in());
/// assert!(session.current().is_none());
///
/// let bytes = [0u8, 0, 0]; // one black pixel, B,G,R
/// let frame = RgbFrame::from_bgr24(&bytes, 1, 1).unwrap();
/// session.load_frame(&frame);
///
/// session.darker();
/// session.darker();
/// assert_eq!(session.darkness().get(), 2);
/// assert_eq!(session.current().unwrap().indices(), &[64]); // 0 + 2*32
/// ```
#[derive(Debug)]
pub struct ShadeSession {
    palette: Palette,
    base: Option<IndexedImage>,
    lit: Option<IndexedImage>,
    darkness: DarknessLevel,
    underwater: bool,
}

impl ShadeSession {
    /// Create a session with no image loaded, darkness 0, underwater off.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            base: None,
            lit: None,
            darkness: DarknessLevel::MIN,
            underwater: false,
        }
    }

    /// Quantize a new frame and make it the active image.
    ///
    /// Replaces the base buffer and recomputes the lit buffer at the
    /// current darkness level and underwater flag. The frame was already
    /// validated at construction, so this cannot fail; callers that fail
    /// to produce a frame simply never reach this point, leaving the
    /// previous image on screen.
    pub fn load_frame(&mut self, frame: &RgbFrame<'_>) {
        self.base = Some(quantize(frame, &self.palette));
        self.relight();
    }

    /// Step one level darker (clamped at 8) and recompute.
    pub fn darker(&mut self) {
        self.darkness = self.darkness.darker();
        self.relight();
    }

    /// Step one level brighter (clamped at 0) and recompute.
    pub fn brighter(&mut self) {
        self.darkness = self.darkness.brighter();
        self.relight();
    }

    /// Set an explicit darkness level and recompute.
    pub fn set_darkness(&mut self, level: DarknessLevel) {
        self.darkness = level;
        self.relight();
    }

    /// Flip the underwater flag and recompute. Returns the new flag.
    ///
    /// The tint transform itself never clears the underwater bit;
    /// toggling off works because the lit buffer is rebuilt from the
    /// untinted base buffer here.
    pub fn toggle_underwater(&mut self) -> bool {
        self.underwater = !self.underwater;
        self.relight();
        self.underwater
    }

    /// The final buffer to present, or `None` before the first load.
    #[inline]
    pub fn current(&self) -> Option<&IndexedImage> {
        self.lit.as_ref()
    }

    /// The quantized base buffer, before any lighting.
    #[inline]
    pub fn base(&self) -> Option<&IndexedImage> {
        self.base.as_ref()
    }

    /// The current darkness level.
    #[inline]
    pub fn darkness(&self) -> DarknessLevel {
        self.darkness
    }

    /// The current underwater flag.
    #[inline]
    pub fn underwater(&self) -> bool {
        self.underwater
    }

    /// The palette every buffer indexes into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Rebuild the lit buffer from the base buffer: darkness, then tint.
    fn relight(&mut self) {
        let Some(base) = &self.base else {
            return;
        };
        let lit = apply_darkness(base.indices(), self.darkness);
        let tinted = apply_underwater(&lit, self.underwater);
        self.lit = Some(IndexedImage::new(tinted, base.width(), base.height()));
    }
}

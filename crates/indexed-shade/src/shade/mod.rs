//! Lighting transforms over index buffers.
//!
//! Two independent transforms, always applied in this order: darkness
//! first ([`apply_darkness`]), then the underwater tint
//! ([`apply_underwater`]). Both are pure value transforms that never
//! change buffer dimensions.

mod darkness;
mod underwater;

pub use darkness::{apply_darkness, DarknessLevel, InvalidLevelError, LEVEL_STRIDE};
pub use underwater::{apply_underwater, UNDERWATER_BIT};

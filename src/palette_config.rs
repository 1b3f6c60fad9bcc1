//! Palette configuration loaded from a YAML file.
//!
//! The file is a list of 256 hex colors. Any failure (missing file, bad
//! YAML, wrong entry count, unparseable color) logs a warning and falls
//! back to the built-in table, so a broken config never prevents startup.

use std::path::Path;

use indexed_shade::{Palette, Rgb, ShadeError};
use serde::Deserialize;

/// On-disk palette format.
///
/// ```yaml
/// colors:
///   - "#000000"
///   - "#0000AA"
///   # ... 256 entries total
/// ```
#[derive(Debug, Deserialize)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
}

impl PaletteConfig {
    /// Parse every entry and build the palette, validating length and the
    /// black sentinel at entry 255.
    pub fn into_palette(self) -> Result<Palette, ShadeError> {
        let mut colors = Vec::with_capacity(self.colors.len());
        for entry in &self.colors {
            colors.push(entry.parse::<Rgb>().map_err(ShadeError::from)?);
        }
        Ok(Palette::new(&colors)?)
    }
}

/// Load a palette from a YAML file, or the built-in table when no file is
/// given or the file is unusable.
pub fn load_palette(path: Option<&Path>) -> Palette {
    let Some(path) = path else {
        return Palette::built_in();
    };

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_yaml::from_str::<PaletteConfig>(&content) {
            Ok(config) => match config.into_palette() {
                Ok(palette) => {
                    tracing::info!(path = %path.display(), "Loaded palette");
                    palette
                }
                Err(e) => {
                    tracing::warn!(%e, "Invalid palette, using built-in");
                    Palette::built_in()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to parse palette file, using built-in");
                Palette::built_in()
            }
        },
        Err(e) => {
            tracing::warn!(%e, "Failed to read palette file, using built-in");
            Palette::built_in()
        }
    }
}

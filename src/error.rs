use indexed_shade::{FrameError, ShadeError};
use thiserror::Error;

/// Errors surfaced by the preview window.
///
/// Every failure is local to the event that triggered it: a bad drop or
/// decode leaves the previously displayed image untouched.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Shading error: {0}")]
    Shade(#[from] ShadeError),

    #[error("Surface error: {0}")]
    Surface(String),
}

impl From<FrameError> for ViewerError {
    fn from(e: FrameError) -> Self {
        ViewerError::Shade(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_error_surface() {
        let error = ViewerError::Surface("texture lost".to_string());
        assert_eq!(error.to_string(), "Surface error: texture lost");
    }

    #[test]
    fn test_viewer_error_from_frame_error() {
        let frame_error = FrameError::FormatMismatch { bits_per_pixel: 32 };
        let error: ViewerError = frame_error.into();
        match error {
            ViewerError::Shade(_) => {}
            _ => panic!("Expected Shade variant"),
        }
    }
}

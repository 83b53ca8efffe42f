use thiserror::Error;

/// Errors raised when a stick is built with values it cannot work with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StickError {
    #[error("stick radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),

    #[error("stick anchor must be finite, got ({x}, {y})")]
    InvalidAnchor { x: f32, y: f32 },
}

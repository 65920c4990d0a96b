/// Convenience alias used by every fallible tapewarp API.
pub type TapewarpResult<T> = Result<T, TapewarpError>;

/// Error type for all tapewarp operations.
///
/// Out-of-range effect parameters and out-of-bounds patch rectangles are
/// not errors; they are recovered by clamping and clipping. Only input
/// that cannot be recovered locally surfaces here.
#[derive(thiserror::Error, Debug)]
pub enum TapewarpError {
    /// The compositor was handed an animation with zero frame patches.
    #[error("empty animation: no frame patches supplied")]
    EmptyAnimation,

    /// A canvas was requested with a zero width or height.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested canvas width in pixels.
        width: u32,
        /// Requested canvas height in pixels.
        height: u32,
    },

    /// Malformed caller input that cannot be recovered by clamping.
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other failure, typically from the host environment.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TapewarpError {
    /// Build a [`TapewarpError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

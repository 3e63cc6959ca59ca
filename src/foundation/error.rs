use crate::foundation::core::Axis;

/// Convenience result type used across ninepatch.
pub type NinePatchResult<T> = Result<T, NinePatchError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum NinePatchError {
    /// A caller-supplied argument is out of range or otherwise unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested size on `axis` cannot hold the fixed segments of the image.
    #[error("target too small: {axis} axis needs at least {required}px, got {target}px")]
    TargetTooSmall {
        /// Axis that does not fit.
        axis: Axis,
        /// Sum of fixed segment lengths on that axis.
        required: u32,
        /// Requested destination length.
        target: u32,
    },

    /// Errors while decoding an encoded raster into pixels.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while loading or parsing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NinePatchError {
    /// Build a [`NinePatchError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`NinePatchError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`NinePatchError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is an [`NinePatchError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

//! Decoded nine-patch annotations.

/// Ticks and the patch model value.
pub mod model;

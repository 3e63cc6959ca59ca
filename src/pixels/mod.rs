//! Pixel-buffer primitives over [`image::RgbaImage`].

/// Decode/encode helpers at the IO boundary.
pub mod decode;
/// Bounds-checked pixel access and border padding.
pub mod utils;

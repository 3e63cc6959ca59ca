use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{NinePatchError, NinePatchResult};

/// Decode encoded image bytes into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> NinePatchResult<RgbaImage> {
    let dyn_img =
        image::load_from_memory(bytes).map_err(|e| NinePatchError::decode(e.to_string()))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode an image file.
pub fn open_image(path: &Path) -> NinePatchResult<RgbaImage> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    decode_image(&bytes)
}

/// Encode `img` as PNG and write it to `path`.
pub fn save_png(img: &RgbaImage, path: &Path) -> NinePatchResult<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/decode.rs"]
mod tests;

use image::{Rgba, RgbaImage};

use crate::foundation::{
    core::{MARKER_RGBA, TRANSPARENT_RGBA},
    error::{NinePatchError, NinePatchResult},
};

/// Pad a plain image with a 1px annotation border.
///
/// The source lands at offset `(1, 1)`. One stretch tick is drawn on the top and left edges,
/// covering the interior except a 1px fixed cap at each end; axes shorter than 3px get a tick over
/// the whole axis. No content ticks are drawn, so the content area is the full interior.
pub fn convert_to_nine_patch(src: &RgbaImage) -> NinePatchResult<RgbaImage> {
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 {
        return Err(NinePatchError::invalid_argument(format!(
            "cannot convert an empty {w}x{h} image"
        )));
    }
    let (Some(out_w), Some(out_h)) = (w.checked_add(2), h.checked_add(2)) else {
        return Err(NinePatchError::invalid_argument(format!(
            "padded size of {w}x{h} overflows"
        )));
    };

    let mut out = RgbaImage::from_pixel(out_w, out_h, Rgba(TRANSPARENT_RGBA));
    image::imageops::replace(&mut out, src, 1, 1);

    let (x0, x1) = full_span_tick(w);
    for x in x0..=x1 {
        out.put_pixel(x + 1, 0, Rgba(MARKER_RGBA));
    }
    let (y0, y1) = full_span_tick(h);
    for y in y0..=y1 {
        out.put_pixel(0, y + 1, Rgba(MARKER_RGBA));
    }
    Ok(out)
}

// Interior-coordinate bounds of the tick drawn by `convert_to_nine_patch`.
fn full_span_tick(len: u32) -> (u32, u32) {
    if len >= 3 { (1, len - 2) } else { (0, len - 1) }
}

/// Copy `height` pixels of column `x`, starting at row `y`, into `out`.
///
/// Nothing is written unless every argument is in range.
pub fn get_vertical_pixels(
    buf: &RgbaImage,
    x: i64,
    y: i64,
    height: i64,
    out: &mut [Rgba<u8>],
) -> NinePatchResult<()> {
    let (x, y, len) = check_span(buf, x, y, height, out.len(), SpanDir::Down)?;
    for (i, px) in out.iter_mut().take(len).enumerate() {
        *px = *buf.get_pixel(x, y + i as u32);
    }
    Ok(())
}

/// Copy `width` pixels of row `y`, starting at column `x`, into `out`.
///
/// Nothing is written unless every argument is in range.
pub fn get_horizontal_pixels(
    buf: &RgbaImage,
    x: i64,
    y: i64,
    width: i64,
    out: &mut [Rgba<u8>],
) -> NinePatchResult<()> {
    let (x, y, len) = check_span(buf, x, y, width, out.len(), SpanDir::Across)?;
    for (i, px) in out.iter_mut().take(len).enumerate() {
        *px = *buf.get_pixel(x + i as u32, y);
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum SpanDir {
    Across,
    Down,
}

fn check_span(
    buf: &RgbaImage,
    x: i64,
    y: i64,
    len: i64,
    capacity: usize,
    dir: SpanDir,
) -> NinePatchResult<(u32, u32, usize)> {
    if len <= 0 {
        return Err(NinePatchError::invalid_argument(format!(
            "pixel count must be positive, got {len}"
        )));
    }
    if x < 0 || y < 0 {
        return Err(NinePatchError::invalid_argument(format!(
            "start ({x}, {y}) is negative"
        )));
    }
    let (w, h) = (i64::from(buf.width()), i64::from(buf.height()));
    let (end_x, end_y) = match dir {
        SpanDir::Across => (x.saturating_add(len), y.saturating_add(1)),
        SpanDir::Down => (x.saturating_add(1), y.saturating_add(len)),
    };
    if end_x > w || end_y > h {
        return Err(NinePatchError::invalid_argument(format!(
            "span of {len} from ({x}, {y}) leaves the {w}x{h} image"
        )));
    }
    // `len` fits in the image, so it fits in u32 and usize.
    let len = len as usize;
    if capacity < len {
        return Err(NinePatchError::invalid_argument(format!(
            "output holds {capacity} pixels, {len} requested"
        )));
    }
    Ok((x as u32, y as u32, len))
}

/// Reset every pixel to transparent black.
pub fn clear_image_data(buf: &mut RgbaImage) {
    for px in buf.pixels_mut() {
        *px = Rgba(TRANSPARENT_RGBA);
    }
}

/// Deep copy of `buf`, pixels and dimensions included.
pub fn copy(buf: &RgbaImage) -> RgbaImage {
    buf.clone()
}

/// The annotated image without its 1px marker border.
pub fn interior(buf: &RgbaImage) -> NinePatchResult<RgbaImage> {
    let (w, h) = buf.dimensions();
    if w < 3 || h < 3 {
        return Err(NinePatchError::invalid_argument(format!(
            "a {w}x{h} image has no interior"
        )));
    }
    Ok(image::imageops::crop_imm(buf, 1, 1, w - 2, h - 2).to_image())
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/utils.rs"]
mod tests;

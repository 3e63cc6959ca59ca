use image::{Rgba, RgbaImage};

use crate::{
    foundation::{
        core::IRect,
        error::{NinePatchError, NinePatchResult},
    },
    grid::chunks::{CellIndex, ChunkGrid, StretchAxis},
    pixels::utils::{get_horizontal_pixels, get_vertical_pixels},
};

/// Stretching chunks whose pixels would smear when scaled.
///
/// A horizontally stretching chunk is bad when one of its rows is not a single color, a
/// vertically stretching one when one of its columns is not; a chunk stretching both ways must
/// be uniform. `buf` is the bordered image `grid` was built from. A grid without interior has
/// nothing to smear and yields no cells.
pub fn bad_patches(buf: &RgbaImage, grid: &ChunkGrid) -> NinePatchResult<Vec<CellIndex>> {
    let area = IRect::new(0, 0, grid.interior_width(), grid.interior_height());
    if area.is_empty() {
        return Ok(Vec::new());
    }
    let expected = (
        grid.interior_width().saturating_add(2),
        grid.interior_height().saturating_add(2),
    );
    if buf.dimensions() != expected {
        return Err(NinePatchError::invalid_argument(format!(
            "image is {}x{} but the grid expects {}x{}",
            buf.width(),
            buf.height(),
            expected.0,
            expected.1
        )));
    }

    let mut bad = Vec::new();
    let mut line = Vec::new();
    for (idx, chunk) in grid.iter() {
        if chunk.stretch_axis == StretchAxis::None {
            continue;
        }
        let Some(rect) = chunk.rect.intersect(area) else {
            continue;
        };
        if !is_uniform(buf, rect, chunk.stretch_axis, &mut line)? {
            bad.push(idx);
        }
    }
    Ok(bad)
}

fn is_uniform(
    buf: &RgbaImage,
    rect: IRect,
    stretch: StretchAxis,
    line: &mut Vec<Rgba<u8>>,
) -> NinePatchResult<bool> {
    // Interior coordinates to bordered image coordinates.
    let r = rect.offset(1, 1);
    match stretch {
        StretchAxis::None => Ok(true),
        StretchAxis::Horizontal => {
            line.resize(r.width as usize, Rgba([0; 4]));
            for y in r.y..r.bottom() {
                get_horizontal_pixels(buf, r.x.into(), y.into(), r.width.into(), line)?;
                if !all_same(line) {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        StretchAxis::Vertical => {
            line.resize(r.height as usize, Rgba([0; 4]));
            for x in r.x..r.right() {
                get_vertical_pixels(buf, x.into(), r.y.into(), r.height.into(), line)?;
                if !all_same(line) {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        StretchAxis::Both => {
            let first = *buf.get_pixel(r.x, r.y);
            Ok((r.y..r.bottom())
                .all(|y| (r.x..r.right()).all(|x| *buf.get_pixel(x, y) == first)))
        }
    }
}

fn all_same(line: &[Rgba<u8>]) -> bool {
    line.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
#[path = "../../tests/unit/grid/bad_patch.rs"]
mod tests;

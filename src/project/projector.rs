use crate::{
    config::{DegeneratePolicy, ProjectOptions},
    foundation::{
        core::{Affine, Axis, IRect},
        error::{NinePatchError, NinePatchResult},
    },
    grid::chunks::{Chunk, ChunkGrid, Segment},
};

/// How one axis of a target size relates to the image's fixed content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisFit {
    /// Fixed segments kept their size.
    Fits,
    /// Fixed segments needed `required` pixels but only `target` were available; they were
    /// scaled down.
    TargetTooSmall {
        /// Sum of fixed segment lengths.
        required: u32,
        /// Requested destination length.
        target: u32,
    },
}

/// Where one chunk lands at a given target size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Projection<'a> {
    /// The projected chunk.
    pub chunk: &'a Chunk,
    /// Chunk rectangle in the source interior.
    pub source_rect: IRect,
    /// Rectangle in destination space, origin at the top-left of the target.
    pub dest_rect: IRect,
}

impl Projection<'_> {
    /// Map from source interior space onto `dest_rect`.
    ///
    /// Axes whose source extent is empty get a zero scale, so the chunk paints nothing.
    pub fn transform(&self) -> Affine {
        let src = self.source_rect.to_rect();
        let dst = self.dest_rect.to_rect();
        let scale = |d: f64, s: f64| if s > 0.0 { d / s } else { 0.0 };
        Affine::translate(dst.origin().to_vec2())
            * Affine::scale_non_uniform(
                scale(dst.width(), src.width()),
                scale(dst.height(), src.height()),
            )
            * Affine::translate(-src.origin().to_vec2())
    }
}

/// Projections for a whole grid, row-major like the grid itself.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Projections<'a> {
    /// One row of projections per grid row.
    pub cells: Vec<Vec<Projection<'a>>>,
    /// Fit of the target width.
    pub horizontal: AxisFit,
    /// Fit of the target height.
    pub vertical: AxisFit,
}

impl<'a> Projections<'a> {
    /// Every projection, row-major.
    pub fn iter(&self) -> impl Iterator<Item = &Projection<'a>> + '_ {
        self.cells.iter().flatten()
    }

    /// Whether either axis had to shrink its fixed segments.
    pub fn target_too_small(&self) -> bool {
        self.horizontal != AxisFit::Fits || self.vertical != AxisFit::Fits
    }
}

/// Destination lengths of `segments` for an axis of `target` pixels.
///
/// Fixed segments keep their length and stretch segments share the rest in proportion to their
/// source length, the rounding remainder going to the last stretch segment. If the target cannot
/// hold the fixed segments, those are scaled down instead and stretch segments get nothing. An
/// axis without stretch extent scales its fixed segments to the target. The lengths always sum
/// to `target`.
pub fn scale_axis(segments: &[Segment], target: u32) -> (Vec<u32>, AxisFit) {
    let total_fixed: u64 = segments
        .iter()
        .filter(|s| !s.is_stretch())
        .map(|s| u64::from(s.len))
        .sum();
    let total_stretch: u64 = segments
        .iter()
        .filter(|s| s.is_stretch())
        .map(|s| u64::from(s.len))
        .sum();
    let target64 = u64::from(target);

    let fit = if target64 < total_fixed {
        AxisFit::TargetTooSmall {
            required: u32::try_from(total_fixed).unwrap_or(u32::MAX),
            target,
        }
    } else {
        AxisFit::Fits
    };

    let mut lens: Vec<u32> = segments.iter().map(|s| s.len).collect();
    if total_stretch == 0 {
        distribute(segments, &mut lens, |_| true, target64, total_fixed);
    } else if fit == AxisFit::Fits {
        distribute(
            segments,
            &mut lens,
            Segment::is_stretch,
            target64 - total_fixed,
            total_stretch,
        );
    } else {
        distribute(segments, &mut lens, |s| !s.is_stretch(), target64, total_fixed);
        for (len, seg) in lens.iter_mut().zip(segments) {
            if seg.is_stretch() {
                *len = 0;
            }
        }
    }
    (lens, fit)
}

// Spread `amount` over the selected segments in proportion to their source lengths. The remainder
// goes to the last selected segment with a nonzero length (or the last selected one).
fn distribute(
    segments: &[Segment],
    lens: &mut [u32],
    select: impl Fn(Segment) -> bool,
    amount: u64,
    total: u64,
) {
    let mut given = 0u64;
    let mut last = None;
    for (i, seg) in segments.iter().enumerate() {
        if !select(*seg) {
            continue;
        }
        let share = if total == 0 {
            0
        } else {
            amount * u64::from(seg.len) / total
        };
        lens[i] = share as u32;
        given += share;
        if seg.len > 0 || last.is_none() {
            last = Some(i);
        }
    }
    if let Some(i) = last {
        lens[i] += (amount - given) as u32;
    }
}

// Running offsets of `lens`, starting at 0.
fn offsets(lens: &[u32]) -> Vec<u32> {
    lens.iter()
        .scan(0u32, |acc, &len| {
            let start = *acc;
            *acc += len;
            Some(start)
        })
        .collect()
}

/// Destination rectangles for every chunk of `grid` rendered at `target_width`x`target_height`.
///
/// Destination rows sum to `target_width` and columns to `target_height` exactly. Corrupt chunks
/// are projected like any other. Under [`DegeneratePolicy::Reject`] a target that cannot hold the
/// fixed segments fails with [`NinePatchError::TargetTooSmall`].
#[tracing::instrument(level = "debug", skip(grid), fields(
    rows = grid.row_count(),
    columns = grid.column_count(),
))]
pub fn get_projections(
    grid: &ChunkGrid,
    target_width: u32,
    target_height: u32,
    opts: ProjectOptions,
) -> NinePatchResult<Projections<'_>> {
    let (widths, horizontal) = scale_axis(grid.columns(), target_width);
    let (heights, vertical) = scale_axis(grid.rows(), target_height);

    for (axis, fit) in [(Axis::Horizontal, horizontal), (Axis::Vertical, vertical)] {
        if let AxisFit::TargetTooSmall { required, target } = fit {
            if opts.degenerate == DegeneratePolicy::Reject {
                return Err(NinePatchError::TargetTooSmall {
                    axis,
                    required,
                    target,
                });
            }
            tracing::debug!(%axis, required, target, "target too small, shrinking fixed segments");
        }
    }

    let xs = offsets(&widths);
    let ys = offsets(&heights);
    let cells = grid
        .chunks()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, chunk)| Projection {
                    chunk,
                    source_rect: chunk.rect,
                    dest_rect: IRect::new(xs[c], ys[r], widths[c], heights[r]),
                })
                .collect()
        })
        .collect();

    Ok(Projections {
        cells,
        horizontal,
        vertical,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/project/projector.rs"]
mod tests;

use crate::{
    foundation::core::{Axis, IRect},
    patch::model::{PatchModel, Tick},
};

/// Whether a segment keeps its size or absorbs extra space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Kept at its source length.
    Fixed,
    /// Shares the space left over by fixed segments.
    Stretch,
}

/// One interval of an axis partition, in interior coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// First pixel.
    pub start: u32,
    /// Length in pixels; may be 0.
    pub len: u32,
    /// Fixed or stretch.
    pub kind: SegmentKind,
    /// `false` when the segment is an empty stretch or an empty gap between two ticks, or when
    /// its tick could not be laid out as given (reversed, overlapping, past the interior).
    pub consistent: bool,
}

impl Segment {
    /// End (exclusive).
    pub fn end(self) -> u32 {
        self.start + self.len
    }

    /// Whether this segment absorbs extra space.
    pub fn is_stretch(self) -> bool {
        self.kind == SegmentKind::Stretch
    }
}

/// Directions in which a chunk is scaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StretchAxis {
    /// Drawn at its authored size.
    None,
    /// Scaled along x only.
    Horizontal,
    /// Scaled along y only.
    Vertical,
    /// Scaled along both axes.
    Both,
}

impl StretchAxis {
    fn classify(row: SegmentKind, col: SegmentKind) -> Self {
        match (row, col) {
            (SegmentKind::Fixed, SegmentKind::Fixed) => Self::None,
            (SegmentKind::Fixed, SegmentKind::Stretch) => Self::Horizontal,
            (SegmentKind::Stretch, SegmentKind::Fixed) => Self::Vertical,
            (SegmentKind::Stretch, SegmentKind::Stretch) => Self::Both,
        }
    }

    /// Whether the chunk scales along `axis`.
    pub fn stretches(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => matches!(self, Self::Horizontal | Self::Both),
            Axis::Vertical => matches!(self, Self::Vertical | Self::Both),
        }
    }
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Chunk {
    /// Interior-coordinate rectangle.
    pub rect: IRect,
    /// Directions the chunk scales in.
    pub stretch_axis: StretchAxis,
    /// Advisory: set by [`corrupted_chunks`].
    pub corrupt: bool,
}

/// Row/column address of a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct CellIndex {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

/// Row-major partition of the interior into chunks.
///
/// Rows follow the vertical segments and columns the horizontal ones, so a model with `H`
/// horizontal and `V` vertical ticks gives `2V + 1` rows of `2H + 1` chunks.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ChunkGrid {
    columns: Vec<Segment>,
    rows: Vec<Segment>,
    chunks: Vec<Vec<Chunk>>,
}

impl ChunkGrid {
    /// Horizontal segments, left to right.
    pub fn columns(&self) -> &[Segment] {
        &self.columns
    }

    /// Vertical segments, top to bottom.
    pub fn rows(&self) -> &[Segment] {
        &self.rows
    }

    /// Segments along `axis`.
    pub fn segments(&self, axis: Axis) -> &[Segment] {
        match axis {
            Axis::Horizontal => &self.columns,
            Axis::Vertical => &self.rows,
        }
    }

    /// Number of chunk rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of chunks per row.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Chunk rows, top to bottom.
    pub fn chunks(&self) -> &[Vec<Chunk>] {
        &self.chunks
    }

    /// Chunk at `row`/`col`, if in range.
    pub fn get(&self, row: usize, col: usize) -> Option<&Chunk> {
        self.chunks.get(row).and_then(|r| r.get(col))
    }

    /// Every chunk with its address, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Chunk)> + '_ {
        self.chunks.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, chunk)| (CellIndex { row, col }, chunk))
        })
    }

    /// Addresses of chunks flagged corrupt.
    pub fn corrupt_cells(&self) -> Vec<CellIndex> {
        self.iter()
            .filter(|(_, c)| c.corrupt)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Whether any chunk is flagged corrupt.
    pub fn has_corruption(&self) -> bool {
        self.iter().any(|(_, c)| c.corrupt)
    }

    /// Width of the partitioned interior.
    pub fn interior_width(&self) -> u32 {
        self.columns.last().map_or(0, |s| s.end())
    }

    /// Height of the partitioned interior.
    pub fn interior_height(&self) -> u32 {
        self.rows.last().map_or(0, |s| s.end())
    }
}

/// Lay `ticks` out along an interior of length `interior` as `fixed, stretch, ..., fixed`.
///
/// Segments are placed back to back from 0, so they always cover `[0, interior)` exactly.
/// Ticks that cannot be honored are clamped and their segments marked inconsistent. The first
/// and last fixed segments are empty when a tick touches the interior boundary; that is not
/// an inconsistency.
pub fn axis_segments(ticks: &[Tick], interior: u32) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(2 * ticks.len() + 1);
    let mut cursor = 0u32;

    for (i, tick) in ticks.iter().enumerate() {
        let ordered = tick.start >= cursor;

        // The leading gap may be empty (tick touching the border); a gap between two ticks
        // may not, since adjacent runs would have merged into one.
        let gap_end = tick.start.clamp(cursor, interior);
        segments.push(Segment {
            start: cursor,
            len: gap_end - cursor,
            kind: SegmentKind::Fixed,
            consistent: ordered && tick.start <= interior && (i == 0 || gap_end > cursor),
        });
        cursor = gap_end;

        let well_formed = ordered && tick.start <= tick.end && tick.end < interior;
        let end = tick.end.saturating_add(1).clamp(cursor, interior);
        segments.push(Segment {
            start: cursor,
            len: end - cursor,
            kind: SegmentKind::Stretch,
            consistent: well_formed && end > cursor,
        });
        cursor = end;
    }

    segments.push(Segment {
        start: cursor,
        len: interior - cursor,
        kind: SegmentKind::Fixed,
        consistent: true,
    });
    segments
}

/// Partition the interior of `model` into classified chunks. No chunk is flagged corrupt.
#[tracing::instrument(level = "debug", skip(model), fields(
    horizontal = model.horizontal_ticks().len(),
    vertical = model.vertical_ticks().len(),
))]
pub fn build_chunk_grid(model: &PatchModel) -> ChunkGrid {
    let columns = axis_segments(model.horizontal_ticks(), model.interior_width());
    let rows = axis_segments(model.vertical_ticks(), model.interior_height());

    let chunks = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|col| Chunk {
                    rect: IRect::new(col.start, row.start, col.len, row.len),
                    stretch_axis: StretchAxis::classify(row.kind, col.kind),
                    corrupt: false,
                })
                .collect()
        })
        .collect();

    ChunkGrid {
        columns,
        rows,
        chunks,
    }
}

/// Copy of `grid` with `corrupt` set on every chunk whose row or column segment is
/// inconsistent. Rectangles are left as they are.
pub fn corrupted_chunks(grid: &ChunkGrid) -> ChunkGrid {
    let mut out = grid.clone();
    for (row, cells) in out.chunks.iter_mut().enumerate() {
        let row_ok = grid.rows[row].consistent;
        for (col, chunk) in cells.iter_mut().enumerate() {
            chunk.corrupt = !(row_ok && grid.columns[col].consistent);
        }
    }
    let flagged = out.corrupt_cells().len();
    if flagged > 0 {
        tracing::debug!(flagged, "chunk grid has corrupt cells");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/grid/chunks.rs"]
mod tests;

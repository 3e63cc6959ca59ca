//! ninepatch decodes, validates and scales nine-patch images.
//!
//! A nine-patch is a raster image whose 1-pixel border marks which interior rows and columns
//! may stretch (top and left edges) and where foreground content belongs (bottom and right
//! edges). This crate turns that border into geometry; it does not resample pixels.
//!
//! # Pipeline overview
//!
//! 1. **Scan**: `RgbaImage -> PatchModel` (ticks per edge, content area, validity)
//! 2. **Partition**: `PatchModel -> ChunkGrid` (fixed/stretch cells, corruption flags)
//! 3. **Project**: `ChunkGrid + target size -> Projections` (destination rectangles)
//!
//! All coordinates past the scan step are *interior* coordinates: 0-based with the marker
//! border excluded. Every stage is a pure function over values; [`NinePatch`] bundles them for
//! the common load-then-query case.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod grid;
mod nine_patch;
mod patch;
mod pixels;
mod project;
mod scan;

pub use config::{DegeneratePolicy, NinePatchConfig, ProjectOptions, ScanOptions};
pub use foundation::core::{Affine, Axis, IRect, MARKER_RGBA, Rect, TRANSPARENT_RGBA};
pub use foundation::error::{NinePatchError, NinePatchResult};
pub use grid::bad_patch::bad_patches;
pub use grid::chunks::{
    CellIndex, Chunk, ChunkGrid, Segment, SegmentKind, StretchAxis, axis_segments,
    build_chunk_grid, corrupted_chunks,
};
pub use nine_patch::NinePatch;
pub use patch::model::{PatchModel, Tick};
pub use pixels::decode::{decode_image, open_image, save_png};
pub use pixels::utils::{
    clear_image_data, convert_to_nine_patch, copy, get_horizontal_pixels, get_vertical_pixels,
    interior,
};
pub use project::projector::{AxisFit, Projection, Projections, get_projections, scale_axis};
pub use scan::border::{
    Edge, PixelPos, ScanReport, scan, scan_and_normalize, scan_and_normalize_with, scan_with,
};

/// Re-export of the pixel buffer type used throughout the API.
pub use image::{Rgba, RgbaImage};

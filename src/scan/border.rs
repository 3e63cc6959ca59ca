use image::{Rgba, RgbaImage};

use crate::{
    config::ScanOptions,
    foundation::core::{MARKER_RGBA, TRANSPARENT_RGBA},
    patch::model::{PatchModel, Tick},
};

/// Pixel position in bordered image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelPos {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

/// One of the four annotation edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Row 0: horizontal stretch ticks.
    Top,
    /// Column 0: vertical stretch ticks.
    Left,
    /// Last row: horizontal content ticks.
    Bottom,
    /// Last column: vertical content ticks.
    Right,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    // Bordered position of interior index `i` along this edge.
    fn pos(self, w: u32, h: u32, i: u32) -> PixelPos {
        match self {
            Edge::Top => PixelPos { x: i + 1, y: 0 },
            Edge::Bottom => PixelPos { x: i + 1, y: h - 1 },
            Edge::Left => PixelPos { x: 0, y: i + 1 },
            Edge::Right => PixelPos { x: w - 1, y: i + 1 },
        }
    }

    fn interior_len(self, w: u32, h: u32) -> u32 {
        match self {
            Edge::Top | Edge::Bottom => w - 2,
            Edge::Left | Edge::Right => h - 2,
        }
    }
}

/// Result of scanning a border, with the pixels that made it invalid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ScanReport {
    /// Decoded annotations.
    pub model: PatchModel,
    /// Corner pixels that were not transparent.
    pub bad_corners: Vec<PixelPos>,
    /// Edge pixels that are neither transparent nor markers.
    pub stray_pixels: Vec<PixelPos>,
}

impl ScanReport {
    /// Every pixel that `scan_and_normalize` rewrites.
    pub fn normalized_pixels(&self) -> impl Iterator<Item = PixelPos> + '_ {
        self.bad_corners.iter().chain(&self.stray_pixels).copied()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum BorderPixel {
    Clear,
    Marker,
    Stray,
}

fn classify(px: &Rgba<u8>) -> BorderPixel {
    if px.0[3] == 0 {
        BorderPixel::Clear
    } else if px.0 == MARKER_RGBA {
        BorderPixel::Marker
    } else {
        BorderPixel::Stray
    }
}

/// Decode the border of `buf` with default options. The buffer is left untouched.
pub fn scan(buf: &RgbaImage) -> PatchModel {
    scan_with(buf, ScanOptions::default()).model
}

/// Decode the border of `buf` and normalize it in place.
pub fn scan_and_normalize(buf: &mut RgbaImage) -> PatchModel {
    scan_and_normalize_with(buf, ScanOptions::default()).model
}

/// Decode the border of `buf`, reporting which pixels broke validity.
#[tracing::instrument(level = "debug", skip(buf), fields(width = buf.width(), height = buf.height()))]
pub fn scan_with(buf: &RgbaImage, opts: ScanOptions) -> ScanReport {
    let (w, h) = buf.dimensions();
    if w < 3 || h < 3 {
        tracing::warn!(width = w, height = h, "image too small to carry a nine-patch border");
        return ScanReport {
            model: PatchModel::new(w, h).with_valid(false),
            bad_corners: Vec::new(),
            stray_pixels: Vec::new(),
        };
    }

    let bad_corners: Vec<PixelPos> = [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)]
        .into_iter()
        .filter(|&(x, y)| classify(buf.get_pixel(x, y)) != BorderPixel::Clear)
        .map(|(x, y)| PixelPos { x, y })
        .collect();

    let mut stray_pixels = Vec::new();
    let mut ticks: [Vec<Tick>; 4] = Default::default();
    for (slot, edge) in ticks.iter_mut().zip(Edge::ALL) {
        *slot = scan_edge(buf, edge, &mut stray_pixels);
    }
    let [top, left, bottom, right] = ticks;

    let valid = bad_corners.is_empty() && (!opts.strict_edges || stray_pixels.is_empty());
    if !valid {
        tracing::warn!(
            bad_corners = bad_corners.len(),
            stray_pixels = stray_pixels.len(),
            "invalid nine-patch border"
        );
    }
    tracing::debug!(
        horizontal = top.len(),
        vertical = left.len(),
        horizontal_content = bottom.len(),
        vertical_content = right.len(),
        "scanned border ticks"
    );

    let model = PatchModel::new(w, h)
        .with_horizontal_ticks(top)
        .with_vertical_ticks(left)
        .with_horizontal_content(bottom)
        .with_vertical_content(right)
        .with_valid(valid);
    ScanReport {
        model,
        bad_corners,
        stray_pixels,
    }
}

/// Like [`scan_with`], then rewrite bad corners and stray edge pixels to transparent.
///
/// Ticks are taken from the buffer before normalization, so the returned model still reports an
/// invalid border; scanning the normalized buffer again yields a valid one.
pub fn scan_and_normalize_with(buf: &mut RgbaImage, opts: ScanOptions) -> ScanReport {
    let report = scan_with(buf, opts);
    if opts.normalize_stray_pixels {
        for p in report.normalized_pixels() {
            buf.put_pixel(p.x, p.y, Rgba(TRANSPARENT_RGBA));
        }
    }
    report
}

// Maximal marker runs strictly inside one edge, corners excluded.
fn scan_edge(buf: &RgbaImage, edge: Edge, strays: &mut Vec<PixelPos>) -> Vec<Tick> {
    let (w, h) = buf.dimensions();
    let mut ticks = Vec::new();
    let mut run_start: Option<u32> = None;

    for i in 0..edge.interior_len(w, h) {
        let pos = edge.pos(w, h, i);
        match classify(buf.get_pixel(pos.x, pos.y)) {
            BorderPixel::Marker => {
                run_start.get_or_insert(i);
            }
            kind => {
                if kind == BorderPixel::Stray {
                    strays.push(pos);
                }
                if let Some(start) = run_start.take() {
                    ticks.push(Tick::new(start, i - 1));
                }
            }
        }
    }
    if let Some(start) = run_start {
        ticks.push(Tick::new(start, edge.interior_len(w, h) - 1));
    }
    ticks
}

#[cfg(test)]
#[path = "../../tests/unit/scan/border.rs"]
mod tests;

use crate::foundation::core::{Axis, IRect};

/// Inclusive run of marker pixels along one axis, in interior coordinates.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Tick {
    /// First covered pixel.
    pub start: u32,
    /// Last covered pixel (inclusive).
    pub end: u32,
}

impl Tick {
    /// Tick covering `start..=end`.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of covered pixels; 0 for a reversed tick.
    pub fn len(self) -> u32 {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Whether the tick is reversed.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Stretch and content annotations decoded from a nine-patch border.
///
/// `width`/`height` are the bordered image size; every tick is in interior coordinates
/// (0-based, border excluded). Values are immutable once built: re-scan the image after
/// editing its border.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PatchModel {
    width: u32,
    height: u32,
    horizontal_ticks: Vec<Tick>,
    vertical_ticks: Vec<Tick>,
    horizontal_content: Vec<Tick>,
    vertical_content: Vec<Tick>,
    valid: bool,
}

impl PatchModel {
    /// Valid model of a `width`x`height` bordered image with no ticks.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            horizontal_ticks: Vec::new(),
            vertical_ticks: Vec::new(),
            horizontal_content: Vec::new(),
            vertical_content: Vec::new(),
            valid: true,
        }
    }

    /// Set the stretch ticks from the top edge.
    pub fn with_horizontal_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.horizontal_ticks = ticks;
        self
    }

    /// Set the stretch ticks from the left edge.
    pub fn with_vertical_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.vertical_ticks = ticks;
        self
    }

    /// Set the content ticks from the bottom edge.
    pub fn with_horizontal_content(mut self, ticks: Vec<Tick>) -> Self {
        self.horizontal_content = ticks;
        self
    }

    /// Set the content ticks from the right edge.
    pub fn with_vertical_content(mut self, ticks: Vec<Tick>) -> Self {
        self.vertical_content = ticks;
        self
    }

    /// Set the validity flag.
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Bordered image width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bordered image height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width without the border.
    pub fn interior_width(&self) -> u32 {
        self.width.saturating_sub(2)
    }

    /// Height without the border.
    pub fn interior_height(&self) -> u32 {
        self.height.saturating_sub(2)
    }

    /// Interior length along `axis`.
    pub fn interior_len(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.interior_width(),
            Axis::Vertical => self.interior_height(),
        }
    }

    /// Stretch ticks from the top edge.
    pub fn horizontal_ticks(&self) -> &[Tick] {
        &self.horizontal_ticks
    }

    /// Stretch ticks from the left edge.
    pub fn vertical_ticks(&self) -> &[Tick] {
        &self.vertical_ticks
    }

    /// Content ticks from the bottom edge.
    pub fn horizontal_content(&self) -> &[Tick] {
        &self.horizontal_content
    }

    /// Content ticks from the right edge.
    pub fn vertical_content(&self) -> &[Tick] {
        &self.vertical_content
    }

    /// Stretch ticks along `axis`.
    pub fn stretch_ticks(&self, axis: Axis) -> &[Tick] {
        match axis {
            Axis::Horizontal => &self.horizontal_ticks,
            Axis::Vertical => &self.vertical_ticks,
        }
    }

    /// Content ticks along `axis`.
    pub fn content_ticks(&self, axis: Axis) -> &[Tick] {
        match axis {
            Axis::Horizontal => &self.horizontal_content,
            Axis::Vertical => &self.vertical_content,
        }
    }

    /// Whether the border had clean corners and no stray pixels.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Safe area for foreground content, in interior coordinates.
    ///
    /// Several content ticks on one axis collapse to their bounding interval. An axis without
    /// content ticks spans the whole interior.
    pub fn content_area(&self) -> IRect {
        let (x, width) = content_span(&self.horizontal_content, self.interior_width());
        let (y, height) = content_span(&self.vertical_content, self.interior_height());
        IRect::new(x, y, width, height)
    }
}

fn content_span(ticks: &[Tick], interior: u32) -> (u32, u32) {
    let start = ticks.iter().map(|t| t.start).min();
    let end = ticks.iter().map(|t| t.end).max();
    match (start, end) {
        (Some(start), Some(end)) => {
            let x0 = start.min(interior);
            let x1 = end.saturating_add(1).min(interior);
            (x0, x1.saturating_sub(x0))
        }
        _ => (0, interior),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patch/model.rs"]
mod tests;

use image::RgbaImage;

use crate::{
    config::{NinePatchConfig, ProjectOptions},
    foundation::{core::IRect, error::NinePatchResult},
    grid::{
        bad_patch::bad_patches,
        chunks::{CellIndex, ChunkGrid, build_chunk_grid, corrupted_chunks},
    },
    patch::model::PatchModel,
    pixels::utils::{convert_to_nine_patch, interior},
    project::projector::{Projections, get_projections},
    scan::border::{ScanReport, scan_and_normalize_with},
};

/// An annotated image together with its decoded border.
///
/// The border is normalized on load, so [`NinePatch::image`] is the cleaned buffer while
/// [`NinePatch::report`] still describes what was found before cleaning.
#[derive(Clone, Debug)]
pub struct NinePatch {
    name: Option<String>,
    image: RgbaImage,
    report: ScanReport,
    grid: ChunkGrid,
}

impl NinePatch {
    /// Scan an already-annotated image. `name` is only used for display.
    pub fn from_image(image: RgbaImage, name: Option<String>) -> Self {
        Self::from_image_with(image, name, &NinePatchConfig::default())
    }

    /// Like [`NinePatch::from_image`], scanning with `config.scan`.
    pub fn from_image_with(
        mut image: RgbaImage,
        name: Option<String>,
        config: &NinePatchConfig,
    ) -> Self {
        let report = scan_and_normalize_with(&mut image, config.scan);
        let grid = corrupted_chunks(&build_chunk_grid(&report.model));
        Self {
            name,
            image,
            report,
            grid,
        }
    }

    /// Pad a plain image into nine-patch form, then scan it.
    pub fn from_plain(plain: &RgbaImage, name: Option<String>) -> NinePatchResult<Self> {
        Ok(Self::from_image(convert_to_nine_patch(plain)?, name))
    }

    /// Name given at load time, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for messages: the given name, or the image size.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => format!("<{}x{} image>", self.image.width(), self.image.height()),
        }
    }

    /// Bordered buffer after normalization.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the normalized buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Decoded border annotations.
    pub fn model(&self) -> &PatchModel {
        &self.report.model
    }

    /// Full scan report, including the pixels that were cleared.
    pub fn report(&self) -> &ScanReport {
        &self.report
    }

    /// Chunk grid with corruption flags applied.
    pub fn chunk_grid(&self) -> &ChunkGrid {
        &self.grid
    }

    /// See [`PatchModel::content_area`].
    pub fn content_area(&self) -> IRect {
        self.report.model.content_area()
    }

    /// Destination rectangles of every chunk at `target_width`x`target_height`.
    pub fn projections(
        &self,
        target_width: u32,
        target_height: u32,
        opts: ProjectOptions,
    ) -> NinePatchResult<Projections<'_>> {
        get_projections(&self.grid, target_width, target_height, opts)
    }

    /// Stretching chunks that would smear; see [`bad_patches`].
    pub fn bad_patches(&self) -> NinePatchResult<Vec<CellIndex>> {
        bad_patches(&self.image, &self.grid)
    }

    /// Image content without the marker border.
    pub fn interior(&self) -> NinePatchResult<RgbaImage> {
        interior(&self.image)
    }
}

#[cfg(test)]
#[path = "../tests/unit/nine_patch.rs"]
mod tests;

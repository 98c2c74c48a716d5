mod glyph;
mod image_pipeline;
mod layout;
mod raster;

use log::debug;

pub use glyph::{
    bitmap::Bitmap,
    catalog::{Glyph, GlyphCatalog},
    font::{GLYPH_COLS, GLYPH_ROWS},
    upscale::{upscale, MAX_FONT_SCALE},
};
pub use image_pipeline::store::{
    grid_from_image, grid_to_image, ImageFile, MemoryStore, PixelStore,
};
pub use layout::stencil::{layout, Stencil};
pub use raster::{
    composite::{composite, stencil_origin, PLACEMENT_INSET_UNITS},
    pixel::{Pixel, PixelGrid},
};

#[derive(Debug, thiserror::Error)]
pub enum WatermarkError {
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(char),
    #[error("invalid font scale {0}: must be at least 1")]
    InvalidScale(u32),
    #[error("font scale {scale} is too large: at most {max} is supported")]
    ScaleTooLarge { scale: u32, max: u32 },
    #[error("{chars} characters at font scale {scale} do not fit in memory")]
    StencilTooLarge { chars: usize, scale: u32 },
    #[error("one of the image dimensions is zero ({width}x{height})")]
    EmptyDimension { width: usize, height: usize },
    #[error("pixel row {row} has {found} pixels, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },
    #[error("image file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode or encode image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderParameters {
    pub margin_top: usize,
    pub margin_left: usize,
    /// Integer upscale factor applied to every glyph; must be at least 1.
    pub font_scale: u32,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self { margin_top: 0, margin_left: 0, font_scale: 1 }
    }
}

/// Lays text out and burns it into pixel grids.
///
/// Holds no mutable state, so one renderer can serve any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct WatermarkRenderer<'a> {
    catalog: &'a GlyphCatalog,
}

impl Default for WatermarkRenderer<'static> {
    fn default() -> Self {
        Self { catalog: GlyphCatalog::global() }
    }
}

impl<'a> WatermarkRenderer<'a> {
    pub fn new(catalog: &'a GlyphCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a GlyphCatalog {
        self.catalog
    }

    /// Stencil for `text` without drawing it anywhere.
    pub fn preview(&self, text: &str, font_scale: u32) -> Result<Stencil, WatermarkError> {
        layout(text, self.catalog, font_scale)
    }

    pub fn render_grid(
        &self,
        grid: &PixelGrid,
        text: &str,
        params: RenderParameters,
    ) -> Result<PixelGrid, WatermarkError> {
        let stencil = layout(text, self.catalog, params.font_scale)?;
        composite(grid, &stencil, params.margin_top, params.margin_left)
    }

    /// Read pixels from `store`, draw `text`, and write the result back.
    ///
    /// Nothing is written if any stage fails. Returns the rendered grid.
    pub fn render_store<S: PixelStore + ?Sized>(
        &self,
        store: &S,
        text: &str,
        params: RenderParameters,
    ) -> Result<PixelGrid, WatermarkError> {
        let grid = store.read_pixels()?;
        debug!("rendering {text:?} onto {}x{} grid with {params:?}", grid.width(), grid.height());

        let rendered = self.render_grid(&grid, text, params)?;
        store.write_pixels(&rendered)?;
        Ok(rendered)
    }
}

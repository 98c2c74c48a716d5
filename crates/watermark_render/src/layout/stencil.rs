use log::debug;

use crate::glyph::bitmap::Bitmap;
use crate::glyph::catalog::GlyphCatalog;
use crate::glyph::upscale::upscale;
use crate::WatermarkError;

/// Composite ink mask for a whole line of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stencil {
    bitmap: Bitmap,
    /// Font scale the glyphs were upscaled by.
    scale: u32,
}

impl Stencil {
    pub fn new(bitmap: Bitmap, scale: u32) -> Self {
        Self { bitmap, scale }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn rows(&self) -> usize {
        self.bitmap.rows()
    }

    pub fn cols(&self) -> usize {
        self.bitmap.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }

    pub fn is_ink(&self, row: usize, col: usize) -> bool {
        self.bitmap.get(row, col)
    }

    /// Text preview of the stencil, one string per row.
    pub fn text_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.bitmap.text_rows('#', ' ')
    }
}

/// Lay `text` out left to right as a single stencil.
///
/// Every character is upscaled by `font_scale` and followed by the separator
/// glyph, except the last one. The first unsupported character aborts the
/// whole layout.
pub fn layout(
    text: &str,
    catalog: &GlyphCatalog,
    font_scale: u32,
) -> Result<Stencil, WatermarkError> {
    let separator = upscale(catalog.separator(), font_scale)?;

    // Glyphs and separators all share the separator's size.
    let char_count = text.chars().count();
    let glyph_cells = separator.rows() * separator.cols();
    char_count
        .checked_mul(2)
        .and_then(|slots| slots.checked_mul(glyph_cells))
        .ok_or(WatermarkError::StencilTooLarge { chars: char_count, scale: font_scale })?;

    let mut bitmap = Bitmap::default();

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let glyph = u8::try_from(ch)
            .ok()
            .and_then(|code| catalog.lookup(code))
            .ok_or(WatermarkError::UnknownSymbol(ch))?;

        bitmap.append_columns(&upscale(glyph, font_scale)?);

        if chars.peek().is_some() {
            bitmap.append_columns(&separator);
        }
    }

    debug!(
        "laid out {char_count} chars at scale {font_scale}: {}x{} stencil",
        bitmap.cols(),
        bitmap.rows()
    );

    Ok(Stencil::new(bitmap, font_scale))
}

use super::bitmap::Bitmap;
use super::catalog::Glyph;
use crate::WatermarkError;

/// Largest accepted upscale factor. A 5x7 glyph at this scale is already
/// 5120x7168 cells.
pub const MAX_FONT_SCALE: u32 = 1024;

/// Nearest-neighbour block replication: every source cell becomes a
/// `factor x factor` block of the same value.
pub fn upscale(glyph: &Glyph, factor: u32) -> Result<Glyph, WatermarkError> {
    if factor == 0 {
        return Err(WatermarkError::InvalidScale(factor));
    }
    if factor > MAX_FONT_SCALE {
        return Err(WatermarkError::ScaleTooLarge { scale: factor, max: MAX_FONT_SCALE });
    }

    let scale = factor as usize;
    if scale == 1 {
        return Ok(glyph.clone());
    }

    let too_large = || WatermarkError::ScaleTooLarge { scale: factor, max: MAX_FONT_SCALE };
    let rows = glyph.rows().checked_mul(scale).ok_or_else(too_large)?;
    let cols = glyph.cols().checked_mul(scale).ok_or_else(too_large)?;
    let mut cells = Vec::with_capacity(rows.checked_mul(cols).ok_or_else(too_large)?);
    for row in 0..glyph.rows() {
        let mut scaled_row = Vec::with_capacity(cols);
        for &cell in glyph.row(row) {
            scaled_row.extend(std::iter::repeat(cell).take(scale));
        }
        for _ in 0..scale {
            cells.extend_from_slice(&scaled_row);
        }
    }

    Ok(Bitmap::new(rows, cols, cells))
}

use log::debug;

use super::pixel::{Pixel, PixelGrid};
use crate::layout::stencil::Stencil;
use crate::WatermarkError;

/// Stencil placement is shifted inward from the margins by this many
/// font-scale units on both axes.
pub const PLACEMENT_INSET_UNITS: usize = 1;

/// Top-left grid position `(x, y)` of the stencil's first cell.
pub fn stencil_origin(stencil: &Stencil, margin_top: usize, margin_left: usize) -> (usize, usize) {
    let inset = stencil.scale() as usize * PLACEMENT_INSET_UNITS;
    (margin_left.saturating_add(inset), margin_top.saturating_add(inset))
}

/// Burn `stencil` into a copy of `grid`.
///
/// Ink cells become [`Pixel::INK`]; everything else is copied through. Ink
/// that falls outside the grid is dropped.
pub fn composite(
    grid: &PixelGrid,
    stencil: &Stencil,
    margin_top: usize,
    margin_left: usize,
) -> Result<PixelGrid, WatermarkError> {
    if grid.is_empty() {
        return Err(WatermarkError::EmptyDimension { width: grid.width(), height: grid.height() });
    }

    let (origin_x, origin_y) = stencil_origin(stencil, margin_top, margin_left);
    let mut output = grid.clone();
    let mut inked = 0usize;

    for (row, col) in stencil.bitmap().ink() {
        let (Some(x), Some(y)) = (origin_x.checked_add(col), origin_y.checked_add(row)) else {
            continue;
        };
        if x < output.width() && y < output.height() {
            output.set(x, y, Pixel::INK);
            inked += 1;
        }
    }

    debug!("composited {inked} ink pixels at ({origin_x}, {origin_y})");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::bitmap::Bitmap;
    use crate::glyph::catalog::GlyphCatalog;
    use crate::layout::stencil::layout;

    fn gradient_grid(width: usize, height: usize) -> PixelGrid {
        let pixels = (0..width * height)
            .map(|i| Pixel::new((i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8, 200))
            .collect();
        PixelGrid::new(width, height, pixels)
    }

    #[test]
    fn empty_grid_is_rejected() {
        let stencil = layout("A", GlyphCatalog::global(), 1).unwrap();
        let grids = [
            PixelGrid::default(),
            PixelGrid::filled(0, 5, Pixel::WHITE),
            PixelGrid::filled(5, 0, Pixel::WHITE),
        ];
        for grid in grids {
            let err = composite(&grid, &stencil, 0, 0).unwrap_err();
            assert!(matches!(err, WatermarkError::EmptyDimension { .. }));
        }
    }

    #[test]
    fn blank_stencil_passes_through() {
        let grid = gradient_grid(12, 9);
        let stencil = Stencil::new(Bitmap::blank(7, 15), 1);
        for (top, left) in [(0, 0), (3, 4), (100, 100)] {
            assert_eq!(composite(&grid, &stencil, top, left).unwrap(), grid);
        }
        let empty = layout("", GlyphCatalog::global(), 1).unwrap();
        assert_eq!(composite(&grid, &empty, 0, 0).unwrap(), grid);
    }

    #[test]
    fn ink_is_opaque_black_and_rest_untouched() {
        let grid = gradient_grid(40, 30);
        let stencil = layout("OK", GlyphCatalog::global(), 2).unwrap();
        let (top, left) = (3, 5);
        let output = composite(&grid, &stencil, top, left).unwrap();
        let (ox, oy) = stencil_origin(&stencil, top, left);
        assert_eq!((ox, oy), (7, 5));

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let ink = x >= ox && y >= oy && stencil.is_ink(y - oy, x - ox);
                let expected = if ink { Pixel::INK } else { grid.get(x, y).unwrap() };
                assert_eq!(output.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn overhanging_stencil_is_clipped() {
        let grid = PixelGrid::filled(6, 4, Pixel::WHITE);
        let stencil = Stencil::new(Bitmap::from_pattern(&["####", "####", "####", "####"]), 1);
        let output = composite(&grid, &stencil, 1, 3).unwrap();

        assert_eq!((output.width(), output.height()), (6, 4));
        let inked: Vec<(usize, usize)> = (0..4)
            .flat_map(|y| (0..6).map(move |x| (x, y)))
            .filter(|&(x, y)| output.get(x, y) == Some(Pixel::INK))
            .collect();
        assert_eq!(inked, vec![(4, 2), (5, 2), (4, 3), (5, 3)]);
    }

    #[test]
    fn stencil_beyond_grid_draws_nothing() {
        let grid = PixelGrid::filled(4, 4, Pixel::WHITE);
        let stencil = layout("A", GlyphCatalog::global(), 1).unwrap();
        assert_eq!(composite(&grid, &stencil, 10, 0).unwrap(), grid);
        assert_eq!(composite(&grid, &stencil, 0, usize::MAX).unwrap(), grid);
    }

    #[test]
    fn inset_scales_with_font() {
        let stencil = Stencil::new(Bitmap::from_pattern(&["#"]), 3);
        assert_eq!(stencil_origin(&stencil, 2, 4), (7, 5));

        let grid = PixelGrid::filled(10, 10, Pixel::WHITE);
        let output = composite(&grid, &stencil, 2, 4).unwrap();
        assert_eq!(output.get(7, 5), Some(Pixel::INK));
        assert_eq!(output.pixels().iter().filter(|&&p| p == Pixel::INK).count(), 1);
    }
}

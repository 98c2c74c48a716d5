//! End-to-end rendering through the public API.

use watermark_render::{
    layout, GlyphCatalog, ImageFile, Pixel, PixelGrid, PixelStore, RenderParameters,
    WatermarkError, WatermarkRenderer, GLYPH_COLS, GLYPH_ROWS,
};

/// Row strings of `grid` with `#` for ink and `.` for anything else.
fn ink_map(grid: &PixelGrid) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().map(|&p| if p == Pixel::INK { '#' } else { '.' }).collect())
        .collect()
}

#[test]
fn letter_a_on_white_ten_by_ten() {
    let grid = PixelGrid::filled(10, 10, Pixel::WHITE);
    let renderer = WatermarkRenderer::default();
    let output = renderer.render_grid(&grid, "A", RenderParameters::default()).unwrap();

    // One font-scale unit of inset on both axes.
    let expected = [
        "..........",
        "..###.....",
        ".#...#....",
        ".#...#....",
        ".#####....",
        ".#...#....",
        ".#...#....",
        ".#...#....",
        "..........",
        "..........",
    ];
    assert_eq!(ink_map(&output), expected);

    for y in 0..10 {
        for x in 0..10 {
            let pixel = output.get(x, y).unwrap();
            assert!(pixel == Pixel::INK || pixel == Pixel::WHITE);
        }
    }
}

#[test]
fn margins_shift_the_stencil() {
    let grid = PixelGrid::filled(30, 20, Pixel::WHITE);
    let renderer = WatermarkRenderer::default();
    let params = RenderParameters { margin_top: 4, margin_left: 6, font_scale: 2 };
    let output = renderer.render_grid(&grid, "L", params).unwrap();

    // `L` has ink down its left column and along its bottom row.
    let (x0, y0) = (6 + 2, 4 + 2);
    let bottom = y0 + GLYPH_ROWS * 2 - 1;
    for y in y0..=bottom {
        assert_eq!(output.get(x0, y), Some(Pixel::INK), "left stroke at y={y}");
    }
    for x in x0..x0 + GLYPH_COLS * 2 {
        assert_eq!(output.get(x, bottom), Some(Pixel::INK), "bottom stroke at x={x}");
    }
    assert_eq!(output.get(x0 - 1, y0), Some(Pixel::WHITE));
    assert_eq!(output.get(x0, y0 - 1), Some(Pixel::WHITE));
}

#[test]
fn unsupported_text_fails_fast() {
    let grid = PixelGrid::filled(10, 10, Pixel::WHITE);
    let renderer = WatermarkRenderer::default();
    let err = renderer.render_grid(&grid, "A1", RenderParameters::default()).unwrap_err();
    assert!(matches!(err, WatermarkError::UnknownSymbol('1')));
}

#[test]
fn zero_scale_fails() {
    let grid = PixelGrid::filled(10, 10, Pixel::WHITE);
    let params = RenderParameters { font_scale: 0, ..RenderParameters::default() };
    let err = WatermarkRenderer::default().render_grid(&grid, "A", params).unwrap_err();
    assert!(matches!(err, WatermarkError::InvalidScale(0)));
}

#[test]
fn empty_grid_fails() {
    let err = WatermarkRenderer::default()
        .render_grid(&PixelGrid::default(), "A", RenderParameters::default())
        .unwrap_err();
    assert!(matches!(err, WatermarkError::EmptyDimension { width: 0, height: 0 }));
}

#[test]
fn renders_are_independent_across_threads() {
    let renderer = WatermarkRenderer::default();
    let texts = ["HELLO", "WORLD", "RUST!", "A-Z"];
    let expected: Vec<PixelGrid> = texts
        .iter()
        .map(|text| {
            let grid = PixelGrid::filled(120, 40, Pixel::new(90, 160, 220, 255));
            renderer.render_grid(&grid, text, RenderParameters::default()).unwrap()
        })
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                scope.spawn(move || {
                    let grid = PixelGrid::filled(120, 40, Pixel::new(90, 160, 220, 255));
                    renderer.render_grid(&grid, text, RenderParameters::default()).unwrap()
                })
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn png_file_is_watermarked_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let file = ImageFile::new(dir.path().join("photo.png"));
    let background = Pixel::new(30, 60, 90, 255);
    file.write_pixels(&PixelGrid::filled(64, 24, background)).unwrap();

    let params = RenderParameters { margin_top: 2, margin_left: 3, font_scale: 1 };
    let rendered = WatermarkRenderer::default().render_store(&file, "HI", params).unwrap();
    let reloaded = file.read_pixels().unwrap();
    assert_eq!(reloaded, rendered);

    let stencil = layout("HI", GlyphCatalog::global(), 1).unwrap();
    let ink = reloaded.pixels().iter().filter(|&&p| p == Pixel::INK).count();
    assert_eq!(ink, stencil.bitmap().ink_count());
    assert_eq!(reloaded.get(0, 0), Some(background));
}

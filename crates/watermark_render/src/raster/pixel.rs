use crate::WatermarkError;

/// 8-bit RGBA pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Opaque black, written wherever the stencil has ink.
    pub const INK: Pixel = Pixel::new(0, 0, 0, 255);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Row-major `height x width` pixel storage with the origin at the top left.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Self {
        assert_eq!(width * height, pixels.len());
        Self { width, height, pixels }
    }

    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self { width, height, pixels: vec![pixel; width * height] }
    }

    /// Build a grid from nested rows, rejecting rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, WatermarkError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * height);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(WatermarkError::RaggedRows {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            pixels.extend(row);
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = pixel;
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        // `chunks` panics on zero; an empty grid has no rows either way.
        self.pixels.chunks(self.width.max(1))
    }
}

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use log::trace;
use parking_lot::RwLock;

use crate::raster::pixel::{Pixel, PixelGrid};
use crate::WatermarkError;

/// Backing storage the renderer reads pixels from and writes them back to.
pub trait PixelStore {
    fn read_pixels(&self) -> Result<PixelGrid, WatermarkError>;
    fn write_pixels(&self, grid: &PixelGrid) -> Result<(), WatermarkError>;
}

/// Image file on disk guarded by a reader/writer lock.
///
/// Decodes may run concurrently; an encode excludes both readers and writers.
#[derive(Debug)]
pub struct ImageFile {
    path: PathBuf,
    format: ImageFormat,
    lock: RwLock<()>,
}

impl ImageFile {
    /// Output format follows the file extension, falling back to PNG.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = ImageFormat::from_path(&path).unwrap_or(ImageFormat::Png);
        Self { path, format, lock: RwLock::new(()) }
    }

    pub fn with_format<P: AsRef<Path>>(path: P, format: ImageFormat) -> Self {
        Self { path: path.as_ref().to_path_buf(), format, lock: RwLock::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

impl PixelStore for ImageFile {
    fn read_pixels(&self) -> Result<PixelGrid, WatermarkError> {
        let _guard = self.lock.read();
        trace!("shared lock taken for {}", self.path.display());

        // Sniff the content: a copied input may not match its extension.
        let image = image::io::Reader::open(&self.path)?.with_guessed_format()?.decode()?;
        Ok(grid_from_image(&image))
    }

    fn write_pixels(&self, grid: &PixelGrid) -> Result<(), WatermarkError> {
        if grid.is_empty() {
            let (width, height) = (grid.width(), grid.height());
            return Err(WatermarkError::EmptyDimension { width, height });
        }

        let image = grid_to_image(grid);
        let _guard = self.lock.write();
        trace!("exclusive lock taken for {}", self.path.display());

        image.save_with_format(&self.path, self.format)?;
        Ok(())
    }
}

/// In-memory store, mostly useful for callers that already hold decoded pixels.
#[derive(Debug, Default)]
pub struct MemoryStore {
    grid: RwLock<PixelGrid>,
}

impl MemoryStore {
    pub fn new(grid: PixelGrid) -> Self {
        Self { grid: RwLock::new(grid) }
    }

    pub fn into_inner(self) -> PixelGrid {
        self.grid.into_inner()
    }
}

impl PixelStore for MemoryStore {
    fn read_pixels(&self) -> Result<PixelGrid, WatermarkError> {
        Ok(self.grid.read().clone())
    }

    fn write_pixels(&self, grid: &PixelGrid) -> Result<(), WatermarkError> {
        *self.grid.write() = grid.clone();
        Ok(())
    }
}

/// Convert any decoded image to 8-bit RGBA, dividing 16-bit channels by 257.
pub fn grid_from_image(image: &DynamicImage) -> PixelGrid {
    let wide = image.to_rgba16();
    let (width, height) = (wide.width() as usize, wide.height() as usize);
    let pixels = wide
        .pixels()
        .map(|pixel| {
            let [r, g, b, a] = pixel.0.map(|channel| (channel / 257) as u8);
            Pixel::new(r, g, b, a)
        })
        .collect();
    PixelGrid::new(width, height, pixels)
}

pub fn grid_to_image(grid: &PixelGrid) -> RgbaImage {
    let width = grid.width();
    let pixels = grid.pixels();
    RgbaImage::from_fn(width as u32, grid.height() as u32, |x, y| {
        Rgba(pixels[y as usize * width + x as usize].channels())
    })
}

//! Decoding and scaling of animal pictures.
//!
//! The image viewport is measured in "pixels" where one terminal column is
//! one pixel wide and one row is two pixels tall (see
//! [`crate::ui::image_view`]).

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use ratatui::layout::Rect;
use std::path::Path;

/// Pixel dimensions of the image viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixels covered by a cell area (two pixels per row).
    pub fn of_cells(area: Rect) -> Self {
        Self {
            width: u32::from(area.width),
            height: u32::from(area.height) * 2,
        }
    }

    /// True until the viewport has been laid out with a usable size.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Decode an image file.
pub fn decode(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| format!("Failed to decode image: {}", path.display()))
}

/// Scale to exactly `size`, ignoring aspect ratio.
pub fn scale(image: &DynamicImage, size: PixelSize) -> RgbaImage {
    image
        .resize_exact(size.width, size.height, FilterType::Triangle)
        .to_rgba8()
}

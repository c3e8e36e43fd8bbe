//! # Picture Widget
//!
//! A ratatui widget that draws an RGBA image into the terminal buffer.
//!
//! Each cell shows two vertically stacked pixels using the upper half block
//! `▀`: the foreground colour is the top pixel and the background colour is
//! the bottom pixel. An image of `w x 2h` pixels therefore fills exactly
//! `w x h` cells.
//!
//! Transparent pixels are blended over the viewport background colour so
//! that PNGs with alpha look right on every theme.

use image::{Rgba, RgbaImage};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const UPPER_HALF_BLOCK: &str = "▀";

/// Blend an RGBA pixel over an opaque background.
fn blend(pixel: Rgba<u8>, background: (u8, u8, u8)) -> Color {
    let [r, g, b, a] = pixel.0;
    let alpha = u16::from(a);
    let mix = |fg: u8, bg: u8| -> u8 {
        let value = (u16::from(fg) * alpha + u16::from(bg) * (255 - alpha)) / 255;
        // Weighted average of two u8 values always fits.
        u8::try_from(value).unwrap_or(u8::MAX)
    };
    Color::Rgb(
        mix(r, background.0),
        mix(g, background.1),
        mix(b, background.2),
    )
}

/// RGB components of a theme colour; non-RGB colours fall back to white.
fn rgb_of(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        _ => (255, 255, 255),
    }
}

pub struct PictureView<'a> {
    image: &'a RgbaImage,
    background: Color,
}

impl<'a> PictureView<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        Self {
            image,
            background: Color::Rgb(255, 255, 255),
        }
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

impl Widget for PictureView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = rgb_of(self.background);
        let (width, height) = self.image.dimensions();

        for row in 0..area.height {
            let top_y = u32::from(row) * 2;
            if top_y >= height {
                break;
            }
            let bottom_y = top_y + 1;

            for column in 0..area.width {
                let x = u32::from(column);
                if x >= width {
                    break;
                }

                let top = blend(*self.image.get_pixel(x, top_y), background);
                let bottom = if bottom_y < height {
                    blend(*self.image.get_pixel(x, bottom_y), background)
                } else {
                    self.background
                };

                buf.set_string(
                    area.x + column,
                    area.y + row,
                    UPPER_HALF_BLOCK,
                    Style::default().fg(top).bg(bottom),
                );
            }
        }
    }
}

//! RGBA raster canvas
//!
//! Small immediate-mode drawing surface behind the poster renderer: bounds-
//! checked pixel writes, rectangles, lines, indicator arrows, and bitmap text
//! from the embedded [`font`](crate::font). Encodes to PNG through the
//! `image` crate.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};

use crate::font;
use crate::style::Rgba;

/// Fixed-size RGBA8 drawing surface
pub struct Canvas {
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let mut buf = vec![0u8; (width * height * 4) as usize];
        for px in buf.chunks_exact_mut(4) {
            px.copy_from_slice(&background);
        }
        Self { width, height, buf }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Write one pixel. Out-of-bounds writes are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            self.buf[idx..idx + 4].copy_from_slice(&color);
        }
    }

    /// Color currently at a pixel, if it is on the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            let mut px = [0u8; 4];
            px.copy_from_slice(&self.buf[idx..idx + 4]);
            Some(px)
        } else {
            None
        }
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        for dy in 0..h {
            for dx in 0..w {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// One-pixel rectangle outline.
    pub fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        if w == 0 || h == 0 {
            return;
        }
        self.draw_hline(x, y, w, color);
        self.draw_hline(x, y + h - 1, w, color);
        self.draw_vline(x, y, h, color);
        self.draw_vline(x + w - 1, y, h, color);
    }

    pub fn draw_hline(&mut self, x: u32, y: u32, w: u32, color: Rgba) {
        for dx in 0..w {
            self.set_pixel(x + dx, y, color);
        }
    }

    pub fn draw_vline(&mut self, x: u32, y: u32, h: u32, color: Rgba) {
        for dy in 0..h {
            self.set_pixel(x, y + dy, color);
        }
    }

    /// Horizontal indicator line ending in a right-pointing arrowhead at
    /// `(x + len, y)`.
    pub fn draw_arrow_right(&mut self, x: u32, y: u32, len: u32, head: u32, color: Rgba) {
        self.draw_hline(x, y, len, color);
        let tip = x + len;
        for d in 1..=head {
            if tip >= d {
                self.set_pixel(tip - d, y.saturating_sub(d), color);
                self.set_pixel(tip - d, y + d, color);
            }
        }
    }

    /// Vertical indicator line ending in a down-pointing arrowhead at
    /// `(x, y + len)`.
    pub fn draw_arrow_down(&mut self, x: u32, y: u32, len: u32, head: u32, color: Rgba) {
        self.draw_vline(x, y, len, color);
        let tip = y + len;
        for d in 1..=head {
            if tip >= d {
                self.set_pixel(x.saturating_sub(d), tip - d, color);
                self.set_pixel(x + d, tip - d, color);
            }
        }
    }

    /// Draw one character at an integer scale. Characters the font does not
    /// cover are skipped silently.
    pub fn draw_char(&mut self, x: u32, y: u32, ch: char, scale: u32, color: Rgba) {
        let Some(rows) = font::glyph(ch) else {
            return;
        };
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..font::GLYPH_W {
                if bits & (0x10 >> col) != 0 {
                    self.fill_rect(
                        x + col * scale,
                        y + row as u32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }

    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, scale: u32, color: Rgba) {
        for (i, ch) in text.chars().enumerate() {
            self.draw_char(x + i as u32 * font::advance(scale), y, ch, scale, color);
        }
    }

    /// Draw text horizontally centered on `cx`.
    pub fn draw_text_centered(&mut self, cx: u32, y: u32, text: &str, scale: u32, color: Rgba) {
        let w = font::text_width(text, scale);
        self.draw_text(cx.saturating_sub(w / 2), y, text, scale, color);
    }

    /// Encode the canvas as a PNG bitstream (RGBA, lossless).
    pub fn encode_png(&self) -> Result<Vec<u8>, ImageError> {
        let mut out = Vec::new();
        PngEncoder::new(Cursor::new(&mut out)).write_image(
            &self.buf,
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }
}

//! Accumulating grayscale canvas with sub-pixel drawing.
//!
//! The canvas owns a `width * height` buffer of `f32` intensities. Writes
//! accumulate additively and are **not** clamped; overlapping anti-aliased
//! strokes brighten toward saturation and the `[0, 1]` clamp happens once at
//! export time. Exclusively owned by its caller: create, clear/draw any
//! number of times, export, drop.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::GrayImage;

/// Error produced when exporting a canvas to an image file.
#[derive(Debug)]
pub enum ExportError {
    /// The output file could not be written.
    Io(io::Error),
    /// PNG encoding failed.
    Encode(image::ImageError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "failed to write image file: {e}"),
            ExportError::Encode(e) => write!(f, "failed to encode image: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Encode(e) => Some(e),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Encode(e)
    }
}

pub struct Canvas {
    pixels: Vec<f32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0.0; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every cell to `value`.
    pub fn clear(&mut self, value: f32) {
        self.pixels.fill(value);
    }

    /// Get the raw accumulated intensity at (x, y), or None if out of bounds.
    #[inline]
    pub fn intensity(&self, x: i32, y: i32) -> Option<f32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    #[inline]
    fn accumulate(&mut self, x: i32, y: i32, amount: f32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.pixels[(y as u32 * self.width + x as u32) as usize] += amount;
        }
    }

    /// Splat `intensity` at a real-valued position.
    ///
    /// The intensity is distributed over the up-to-four integer pixels
    /// surrounding `(x, y)` with bilinear weights that sum to 1, so a splat
    /// deposits the same total energy wherever it lands inside the canvas.
    /// Out-of-bounds corners are silently dropped.
    pub fn set_pixel(&mut self, x: f32, y: f32, intensity: f32) {
        let xi = x.floor() as i32;
        let yi = y.floor() as i32;
        let xf = x - xi as f32;
        let yf = y - yi as f32;

        self.accumulate(xi, yi, intensity * (1.0 - xf) * (1.0 - yf));
        self.accumulate(xi + 1, yi, intensity * xf * (1.0 - yf));
        self.accumulate(xi, yi + 1, intensity * (1.0 - xf) * yf);
        self.accumulate(xi + 1, yi + 1, intensity * xf * yf);
    }

    /// Draw an anti-aliased line of the given thickness.
    ///
    /// Walks the segment at sub-pixel granularity (consecutive samples at
    /// most one pixel apart) and stamps a disc of radius `thickness / 2` at
    /// each sample, with linear falloff from the centerline. A zero-length
    /// segment or non-positive thickness draws nothing.
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let length = dx.abs().max(dy.abs());
        let radius = thickness / 2.0;
        if length == 0.0 || radius <= 0.0 {
            return;
        }

        let steps = length.ceil() as i32;
        let reach = radius.ceil() as i32;

        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let cx = x0 + dx * t;
            let cy = y0 + dy * t;

            for oy in -reach..=reach {
                for ox in -reach..=reach {
                    let dist = ((ox * ox + oy * oy) as f32).sqrt();
                    if dist <= radius {
                        let falloff = 1.0 - dist / radius;
                        self.set_pixel(cx + ox as f32, cy + oy as f32, falloff);
                    }
                }
            }
        }
    }

    /// Map the accumulated intensities to bytes: `round(255 * clamp(v, 0, 1))`.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&v| (255.0 * v.clamp(0.0, 1.0)).round() as u8)
            .collect()
    }

    /// Write the canvas as ASCII PGM (`P2`) to the given writer.
    ///
    /// Format: a `P2` magic line, a `<width> <height>` line, a `255`
    /// max-value line, then one text row per pixel row (top row first) of
    /// space-separated integers in `[0, 255]`.
    pub fn write_pgm<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "P2")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;

        let bytes = self.to_bytes();
        let mut row = String::with_capacity(self.width as usize * 4);
        for y in 0..self.height as usize {
            row.clear();
            for x in 0..self.width as usize {
                if x > 0 {
                    row.push(' ');
                }
                row.push_str(&bytes[y * self.width as usize + x].to_string());
            }
            writeln!(out, "{row}")?;
        }
        Ok(())
    }

    /// Save the canvas as an ASCII PGM file.
    pub fn save_pgm<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pgm(&mut writer)?;
        writer.flush()
    }

    /// Save the canvas as an 8-bit grayscale PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let img = GrayImage::from_raw(self.width, self.height, self.to_bytes())
            .expect("buffer length matches canvas dimensions");
        img.save(path)?;
        Ok(())
    }
}

//! RGB pixel grid types

use crate::image_pipeline::common::error::{BlurError, Result};

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// A single 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; CHANNELS]> for Rgb {
    fn from([r, g, b]: [u8; CHANNELS]) -> Self {
        Self { r, g, b }
    }
}

/// Rectangular RGB raster addressed by `(x, y)`.
///
/// Pixels are stored row by row, interleaved `[R, G, B, R, G, B, ...]`.
/// A grid may be built with a zero dimension; the convolver rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wraps an interleaved RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BlurError::BufferSizeMismatch`] if `data.len() != width * height * 3`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(BlurError::InvalidDimensions(width, height))?;

        if data.len() != expected {
            return Err(BlurError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a grid with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgb) -> Self {
        let data = fill.channels().repeat(width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Creates a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).channels());
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Returns the pixel at `(x, y)`, or `None` for signed coordinates outside the grid.
    pub fn get_checked(&self, x: isize, y: isize) -> Option<Rgb> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get(x, y))
    }

    pub fn set(&mut self, x: usize, y: usize, pixel: Rgb) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel.channels());
    }

    /// Interleaved RGB bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        (y * self.width + x) * CHANNELS
    }
}

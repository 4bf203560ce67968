//! Image reader backed by the `image` crate.
//!
//! Any format enabled on the `image` dependency (PNG, JPEG, BMP, TIFF) is
//! accepted. Grayscale and alpha images are converted to 8-bit RGB; alpha is
//! dropped.

use tracing::debug;
use crate::image_pipeline::codec::reader::GridReader;
use crate::image_pipeline::common::error::{BlurError, Result};
use crate::image_pipeline::grid::PixelGrid;

pub struct ImageCrateReader;

impl GridReader for ImageCrateReader {
    /// Decodes an encoded image into an RGB [`PixelGrid`].
    ///
    /// # Errors
    ///
    /// Returns [`BlurError::InputNotImage`] if the bytes are not a recognized image.
    fn read_grid(&self, data: &[u8]) -> Result<PixelGrid> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| BlurError::InputNotImage(e.to_string()))?;

        debug!("Decoded {:?} image: {}x{}", decoded.color(), decoded.width(), decoded.height());

        let rgb = decoded.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);

        PixelGrid::new(width, height, rgb.into_raw())
    }
}

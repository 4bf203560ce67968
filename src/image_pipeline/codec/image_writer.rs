use std::io::Write;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;
use crate::image_pipeline::codec::types::{BlurConfig, OutputFormat};
use crate::image_pipeline::codec::writer::GridWriter;
use crate::image_pipeline::common::error::{BlurError, Result};
use crate::image_pipeline::grid::PixelGrid;

pub struct ImageCrateWriter;

impl GridWriter for ImageCrateWriter {
    fn write_grid(&self, grid: &PixelGrid, output: &mut dyn Write, config: &BlurConfig) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", config.output_format, grid.width(), grid.height());

        if grid.is_empty() {
            return Err(BlurError::InvalidDimensions(grid.width(), grid.height()));
        }

        let width = u32::try_from(grid.width())
            .map_err(|_| BlurError::InvalidDimensions(grid.width(), grid.height()))?;
        let height = u32::try_from(grid.height())
            .map_err(|_| BlurError::InvalidDimensions(grid.width(), grid.height()))?;

        let mut buffer = Vec::new();

        let encoded = match config.output_format {
            OutputFormat::Png => PngEncoder::new(&mut buffer)
                .write_image(grid.as_raw(), width, height, ExtendedColorType::Rgb8),
            OutputFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, config.jpeg_quality)
                .write_image(grid.as_raw(), width, height, ExtendedColorType::Rgb8),
        };
        encoded.map_err(|e| BlurError::OutputIO(e.to_string()))?;

        output
            .write_all(&buffer)
            .map_err(|e| BlurError::OutputIO(e.to_string()))?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

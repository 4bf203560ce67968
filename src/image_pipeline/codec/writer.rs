use std::io::Write;
use crate::image_pipeline::codec::types::BlurConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::grid::PixelGrid;

pub trait GridWriter {
    fn write_grid(&self, grid: &PixelGrid, output: &mut dyn Write, config: &BlurConfig) -> Result<()>;
}

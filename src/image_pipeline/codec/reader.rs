use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::grid::PixelGrid;

pub trait GridReader {
    fn read_grid(&self, data: &[u8]) -> Result<PixelGrid>;
}

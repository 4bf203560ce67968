//! Pixel grid module
//!
//! In-memory RGB raster shared by the codec and the convolver.

pub mod types;

pub use types::{PixelGrid, Rgb};

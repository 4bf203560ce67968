//! Image processing pipeline module
//!
//! Decodes an image, applies a fixed 3x3 blur and encodes the result, with
//! separate modules for the pixel grid, the convolution, the codec and the
//! orchestration.

pub mod grid;
pub mod convolve;
pub mod codec;
pub mod conversions;
pub mod common;

pub use common::{
    BlurError,
    Result,
};

pub use grid::{
    PixelGrid,
    Rgb,
};

pub use convolve::{
    BLUR_KERNEL,
    Kernel,
    convolve,
};

pub use codec::{
    BlurConfig,
    BlurConfigBuilder,
    GridReader,
    GridWriter,
    ImageCrateReader,
    ImageCrateWriter,
    OutputFormat,
    decode,
    encode,
    encode_with,
    output_path_for,
};

pub use conversions::{
    BlurPipeline,
    blur,
};

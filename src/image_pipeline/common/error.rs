use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlurError {
    #[error("Failed to read input file: {0}")]
    InputMissing(String),

    #[error("Input is not a decodable image: {0}")]
    InputNotImage(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to write output file: {0}")]
    OutputIO(String),
}

pub type Result<T> = std::result::Result<T, BlurError>;

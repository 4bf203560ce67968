//! Convolution module
//!
//! Fixed 3x3 blur kernel and the single-pass zero-padded convolver.

pub mod kernel;
mod convolver;

pub use kernel::{BLUR_KERNEL, Kernel};
pub use convolver::{convolve, normalized_to_u8};

//! Pipeline conversions module
//!
//! Orchestration of decode, convolve and encode.

mod blur_pipeline;

pub use blur_pipeline::{BlurPipeline, blur};

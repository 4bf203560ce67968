//! Blur kernel definition

/// 3x3 weight table indexed as `kernel[ki][kj]`, where `ki` follows the
/// x offset and `kj` the y offset, both shifted by one.
pub type Kernel = [[f32; 3]; 3];

/// Gaussian-style blur weights. Non-negative, sums to exactly 1.0.
pub const BLUR_KERNEL: Kernel = [
    [0.046875, 0.140625, 0.046875],
    [0.140625, 0.25, 0.140625],
    [0.046875, 0.140625, 0.046875],
];

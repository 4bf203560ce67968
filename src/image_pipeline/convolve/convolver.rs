use tracing::{debug, instrument};

use crate::image_pipeline::common::error::{BlurError, Result};
use crate::image_pipeline::convolve::kernel::Kernel;
use crate::image_pipeline::grid::{PixelGrid, Rgb};

/// Maps a normalized channel value to 8 bits, rounding half up.
///
/// Values outside `[0.0, 1.0]` (float drift on the kernel sum) are clamped
/// first; NaN maps to 0.
pub fn normalized_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Convolves `source` with a 3x3 `kernel` using zero padding.
///
/// Neighbours outside the grid contribute nothing, so border pixels come out
/// darker than the interior. Per pixel, contributions are accumulated in
/// `f32`, rows outer (`j`) and columns inner (`i`).
///
/// # Errors
///
/// Returns [`BlurError::InvalidDimensions`] if either dimension is zero.
#[instrument(skip_all, fields(width = source.width(), height = source.height()))]
pub fn convolve(source: &PixelGrid, kernel: &Kernel) -> Result<PixelGrid> {
    let (width, height) = source.dimensions();
    if source.is_empty() {
        return Err(BlurError::InvalidDimensions(width, height));
    }

    debug!("Convolving {}x{} grid", width, height);

    let mut destination = PixelGrid::filled(width, height, Rgb::default());

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0.0f32; 3];

            for j in -1isize..=1 {
                for i in -1isize..=1 {
                    let Some(neighbour) = source.get_checked(x as isize + i, y as isize + j) else {
                        continue;
                    };
                    let weight = kernel[(1 + i) as usize][(1 + j) as usize];
                    for (acc, channel) in sum.iter_mut().zip(neighbour.channels()) {
                        *acc += (channel as f32 / 255.0) * weight;
                    }
                }
            }

            destination.set(
                x,
                y,
                Rgb::new(
                    normalized_to_u8(sum[0]),
                    normalized_to_u8(sum[1]),
                    normalized_to_u8(sum[2]),
                ),
            );
        }
    }

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::convolve::kernel::BLUR_KERNEL;

    fn assert_close(actual: u8, expected: u8) {
        assert!(
            actual.abs_diff(expected) <= 1,
            "channel {actual} differs from {expected} by more than 1 LSB"
        );
    }

    fn assert_pixel_close(actual: Rgb, expected: Rgb) {
        for (a, e) in actual.channels().into_iter().zip(expected.channels()) {
            assert_close(a, e);
        }
    }

    #[test]
    fn test_normalized_to_u8_rounds_half_up_and_clamps() {
        assert_eq!(normalized_to_u8(0.0), 0);
        assert_eq!(normalized_to_u8(1.0), 255);
        assert_eq!(normalized_to_u8(1.0000001), 255);
        assert_eq!(normalized_to_u8(-0.001), 0);
        assert_eq!(normalized_to_u8(f32::NAN), 0);
        assert_eq!(normalized_to_u8(0.5), 128);
    }

    #[test]
    fn test_single_pixel_keeps_only_center_weight() {
        let source = PixelGrid::filled(1, 1, Rgb::new(200, 100, 50));
        let out = convolve(&source, &BLUR_KERNEL).unwrap();
        // 12.5 rounds up to 13
        assert_pixel_close(out.get(0, 0), Rgb::new(50, 25, 13));
    }

    #[test]
    fn test_uniform_white_3x3() {
        let source = PixelGrid::filled(3, 3, Rgb::new(255, 255, 255));
        let out = convolve(&source, &BLUR_KERNEL).unwrap();

        assert_pixel_close(out.get(1, 1), Rgb::new(255, 255, 255));
        assert_pixel_close(out.get(0, 0), Rgb::new(147, 147, 147));
        assert_pixel_close(out.get(2, 2), Rgb::new(147, 147, 147));
        assert_pixel_close(out.get(1, 0), Rgb::new(195, 195, 195));
        assert_pixel_close(out.get(0, 1), Rgb::new(195, 195, 195));
    }

    #[test]
    fn test_two_pixel_row() {
        let source = PixelGrid::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb::new(255, 0, 0)
            } else {
                Rgb::new(0, 0, 255)
            }
        });
        let out = convolve(&source, &BLUR_KERNEL).unwrap();

        // each pixel sees only itself (0.25) and its horizontal neighbour (0.140625)
        assert_pixel_close(out.get(0, 0), Rgb::new(64, 0, 36));
        assert_pixel_close(out.get(1, 0), Rgb::new(36, 0, 64));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let source = PixelGrid::new(0, 4, Vec::new()).unwrap();
        let result = convolve(&source, &BLUR_KERNEL);
        assert!(matches!(result, Err(BlurError::InvalidDimensions(0, 4))));
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let source = PixelGrid::new(4, 0, Vec::new()).unwrap();
        let result = convolve(&source, &BLUR_KERNEL);
        assert!(matches!(result, Err(BlurError::InvalidDimensions(4, 0))));
    }

    #[test]
    fn test_impulse_spreads_kernel_weights() {
        let source = PixelGrid::from_fn(3, 3, |x, y| {
            if (x, y) == (1, 1) {
                Rgb::new(255, 255, 255)
            } else {
                Rgb::default()
            }
        });
        let out = convolve(&source, &BLUR_KERNEL).unwrap();

        assert_pixel_close(out.get(1, 1), Rgb::new(64, 64, 64));
        assert_pixel_close(out.get(0, 0), Rgb::new(12, 12, 12));
        assert_pixel_close(out.get(2, 0), Rgb::new(12, 12, 12));
        assert_pixel_close(out.get(1, 0), Rgb::new(36, 36, 36));
        assert_pixel_close(out.get(2, 1), Rgb::new(36, 36, 36));
    }

    #[test]
    fn test_uniform_interior_is_preserved_and_border_darkened() {
        let v = 180u8;
        let source = PixelGrid::filled(6, 5, Rgb::new(v, v / 2, v / 3));
        let out = convolve(&source, &BLUR_KERNEL).unwrap();

        assert_eq!(out.dimensions(), source.dimensions());
        for y in 1..4 {
            for x in 1..5 {
                assert_pixel_close(out.get(x, y), Rgb::new(v, v / 2, v / 3));
            }
        }

        let corner = (v as f32 * 0.578125).round() as u8;
        let edge = (v as f32 * 0.765625).round() as u8;
        assert_close(out.get(0, 0).r, corner);
        assert_close(out.get(5, 4).r, corner);
        assert_close(out.get(3, 0).r, edge);
        assert_close(out.get(0, 2).r, edge);
    }

    #[test]
    fn test_scaling_input_scales_output() {
        // even channel values keep the halved input exact
        let source = PixelGrid::from_fn(7, 4, |x, y| {
            Rgb::new((x * 36) as u8 & !1, (y * 60) as u8 & !1, ((x + y) * 20) as u8 & !1)
        });
        let halved = PixelGrid::from_fn(7, 4, |x, y| {
            let p = source.get(x, y);
            Rgb::new(p.r / 2, p.g / 2, p.b / 2)
        });

        let full = convolve(&source, &BLUR_KERNEL).unwrap();
        let half = convolve(&halved, &BLUR_KERNEL).unwrap();

        for y in 0..4 {
            for x in 0..7 {
                let expected = full.get(x, y).channels().map(|c| (c as f32 / 2.0).round() as u8);
                assert_pixel_close(half.get(x, y), Rgb::from(expected));
            }
        }
    }

    #[test]
    fn test_convolution_is_deterministic() {
        let source = PixelGrid::from_fn(9, 9, |x, y| Rgb::new((x * 29) as u8, (y * 17) as u8, (x * y) as u8));
        let first = convolve(&source, &BLUR_KERNEL).unwrap();
        let second = convolve(&source, &BLUR_KERNEL).unwrap();
        assert_eq!(first, second);
        assert_eq!(source.get(4, 4), Rgb::new(116, 68, 16));
    }
}

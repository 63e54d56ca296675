//! Synthetic test images
//!
//! Deterministic generators used by the regression tests in place of
//! checked-in image data.

use pixkit_core::{ImageGi, ImageRgbaD, ImageRgbaF};
use std::f64::consts::PI;

/// Gray checkerboard with `1` where `row + col` is odd and `0` elsewhere.
pub fn checkerboard(height: usize, width: usize) -> ImageGi {
    let data = (0..height * width)
        .map(|k| ((k / width.max(1) + k % width.max(1)) % 2) as i32)
        .collect();
    ImageGi::from_vec(height, width, data).unwrap_or_default()
}

/// Smooth RGBA pattern with every channel in `[0, 1]`.
///
/// Each channel is `0.5 * (1 + cos(pi * f(u, v)))` for normalized
/// coordinates `u = row / (height - 1)` and `v = col / (width - 1)`.
pub fn cosine_pattern(height: usize, width: usize) -> ImageRgbaD {
    let mut image = ImageRgbaD::new(height, width);
    let hn = height.saturating_sub(1).max(1) as f64;
    let wn = width.saturating_sub(1).max(1) as f64;
    let wave = |t: f64| 0.5 * (1.0 + (PI * t).cos());

    for i in 0..height {
        for j in 0..width {
            let u = i as f64 / hn;
            let v = j as f64 / wn;
            image[(i, j)] = [
                wave((1.0 + v) * u),
                wave((1.0 + 2.0 * u) * v),
                wave((1.0 + 4.0 * v) * u),
                wave((1.0 - u) * v),
            ];
        }
    }
    image
}

/// Mandelbrot set over `[-2.5, 1] x [-1, 1]`, opaque.
///
/// Points inside the set are white; escaping points blend from black to
/// green by iteration count.
pub fn mandelbrot(height: usize, width: usize, max_iteration: u32) -> ImageRgbaF {
    let mut image = ImageRgbaF::new(height, width);
    let hn = height.saturating_sub(1).max(1) as f32;
    let wn = width.saturating_sub(1).max(1) as f32;

    for i in 0..height {
        for j in 0..width {
            let x0 = j as f32 / wn * 3.5 - 2.5;
            let y0 = i as f32 / hn * 2.0 - 1.0;
            let (mut x, mut y) = (0.0f32, 0.0f32);
            let mut iteration = 0;
            while x * x + y * y <= 4.0 && iteration < max_iteration {
                let xtemp = x * x - y * y + x0;
                y = 2.0 * x * y + y0;
                x = xtemp;
                iteration += 1;
            }
            image[(i, j)] = if iteration == max_iteration {
                [1.0, 1.0, 1.0, 1.0]
            } else {
                let t = iteration as f32 / max_iteration as f32;
                [0.0, t, 0.0, 1.0]
            };
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard() {
        let board = checkerboard(2, 3);
        assert_eq!(board.components(), &[0, 1, 0, 1, 0, 1]);
        assert!(checkerboard(0, 0).is_empty());
    }

    #[test]
    fn test_cosine_pattern_range() {
        let image = cosine_pattern(16, 12);
        assert_eq!(image.dimensions(), (16, 12));
        assert!(image.components().iter().all(|&c| (0.0..=1.0).contains(&c)));
        // u = v = 0 gives cos(0) on every channel
        assert_eq!(image[(0, 0)], [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_mandelbrot() {
        let image = mandelbrot(21, 36, 50);
        assert!(image.pixels().iter().all(|p| p[3] == 1.0));
        assert!(image.pixels().contains(&[1.0, 1.0, 1.0, 1.0]));
        // Top-left corner (-2.5, -1) escapes at once
        assert!(image[(0, 0)][1] < 0.1);
    }
}

//! Image container regression test
//!
//! Exercises construction, access, filling, sampling and flipping on the
//! synthetic fixture images.

use pixkit_core::{ChannelLayout, Error, ImageGaF, ImageGi, ImageRgbaF, binarize};
use pixkit_test::{RegParams, fixtures};

#[test]
fn image_reg() {
    let mut rp = RegParams::new("image");

    let fractal = fixtures::mandelbrot(61, 108, 100);
    rp.compare_values(61.0, fractal.height() as f64, 0.0);
    rp.compare_values(108.0, fractal.width() as f64, 0.0);
    rp.compare_values((61 * 108) as f64, fractal.size() as f64, 0.0);
    rp.compare_values((61 * 108 * 4) as f64, fractal.capacity() as f64, 0.0);
    assert_eq!(fractal.layout(), ChannelLayout::Rgba);

    // Linear and 2D access agree
    let k = 30 * 108 + 70;
    rp.compare_images(
        &ImageRgbaF::filled(1, 1, fractal[(30, 70)]),
        &ImageRgbaF::filled(1, 1, fractal[k]),
    );

    // Out-of-bounds checked access reports the position
    assert!(matches!(
        fractal.get(61, 0),
        Err(Error::PixelOutOfBounds { row: 61, col: 0, .. })
    ));
    assert!(fractal.get_linear(61 * 108).is_err());

    // Normalized sampling hits the corners
    assert_eq!(fractal.sample(0.0, 0.0).unwrap(), &fractal[(0, 0)]);
    assert_eq!(fractal.sample(1.0, 1.0).unwrap(), &fractal[(60, 107)]);

    // Flipping twice is the identity
    let mut flipped = fractal.clone();
    flipped.flip_vertical();
    rp.compare_images(
        &ImageRgbaF::filled(1, 1, fractal[(0, 5)]),
        &ImageRgbaF::filled(1, 1, flipped[(60, 5)]),
    );
    flipped.flip_vertical();
    rp.compare_images(&fractal, &flipped);

    // The set interior is white; binarizing at mid gray finds it
    let binary = binarize(&fractal, 0.5);
    let white = fractal.pixels().iter().filter(|p| p[0] == 1.0).count();
    let ones = binary.components().iter().filter(|&&c| c == 1.0).count();
    rp.compare_values(white as f64, ones as f64, 0.0);

    if rp.display() {
        rp.write_image_and_check(&fractal).unwrap();
        rp.write_image_and_check(&binary).unwrap();
    }

    assert!(rp.cleanup(), "image regression test failed");
}

#[test]
fn image_edit_reg() {
    let mut rp = RegParams::new("image_edit");

    let mut board = fixtures::checkerboard(4, 6);
    let ones = board.components().iter().filter(|&&c| c == 1).count();
    rp.compare_values(12.0, ones as f64, 0.0);

    board.fill(7);
    rp.compare_images(&ImageGi::filled(4, 6, [7]), &board);

    board.resize(2, 3);
    rp.compare_images(&ImageGi::new(2, 3), &board);

    board.clear();
    assert!(board.is_empty());
    assert_eq!(board.dimensions(), (0, 0));

    let mut ga = ImageGaF::filled(2, 2, [0.5, 0.0]);
    ga.set_channel(1, 1.0).unwrap();
    rp.compare_images(&ImageGaF::filled(2, 2, [0.5, 1.0]), &ga);
    assert!(matches!(
        ga.set_channel(2, 1.0),
        Err(Error::InvalidChannel { channel: 2, channels: 2 })
    ));

    assert!(matches!(
        ImageGi::from_vec(2, 2, vec![0; 3]),
        Err(Error::ComponentCountMismatch { expected: 4, actual: 3 })
    ));

    assert!(rp.cleanup(), "image edit regression test failed");
}

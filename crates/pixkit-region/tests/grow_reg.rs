//! Region growing regression test
//!
//! Labels a fractal image by intensity similarity and checks the
//! structural properties of the result: dense labels, maximal regions,
//! determinism, and the parity recoloring of the label image.

use pixkit_core::{ImageGf, ImageGi, LabelImage, cast_with};
use pixkit_io::write_labels;
use pixkit_region::{
    ConnectivityType, RegionGrowingOptions, label_regions, region_growing,
    region_growing_with_options, region_means, region_sizes, region_stats,
};
use pixkit_test::{RegParams, fixtures, regout_dir};

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count neighbor pairs that satisfy `similar` but carry different labels
fn count_unmerged<F>(labels: &LabelImage, similar: F) -> usize
where
    F: Fn(usize, usize, usize, usize) -> bool,
{
    let (h, w) = labels.dimensions();
    let mut count = 0;
    for i in 0..h {
        for j in 0..w {
            for &(di, dj) in &NEIGHBORS {
                let (Some(k), Some(l)) = (i.checked_add_signed(di), j.checked_add_signed(dj))
                else {
                    continue;
                };
                if k < h && l < w && similar(i, j, k, l) && labels.value(i, j) != labels.value(k, l)
                {
                    count += 1;
                }
            }
        }
    }
    count
}

#[test]
fn grow_reg() {
    let mut rp = RegParams::new("grow");

    // Go through a PNG file, as a real pipeline would
    std::fs::create_dir_all(regout_dir()).unwrap();
    let path = format!("{}/grow_fractal.png", regout_dir());
    pixkit_io::save(&path, &fixtures::mandelbrot(61, 108, 100)).unwrap();
    let gray: ImageGf = pixkit_io::load(&path).unwrap();

    let similar = |i: usize, j: usize, k: usize, l: usize| {
        (gray.value(i, j) - gray.value(k, l)).abs() < 0.01
    };

    let mut labels = LabelImage::default();
    let n = region_growing(&gray, &mut labels, similar);
    eprintln!("{} regions created", n);
    assert!(n > 1);
    assert_eq!(labels.dimensions(), gray.dimensions());

    // Labels are exactly 0..n, each used at least once
    let sizes = region_sizes(&labels).unwrap();
    rp.compare_values(n as f64, sizes.len() as f64, 0.0);
    rp.compare_values(0.0, sizes.iter().filter(|&&s| s == 0).count() as f64, 0.0);
    rp.compare_values(gray.size() as f64, sizes.iter().sum::<usize>() as f64, 0.0);

    // Labels are numbered by first pixel in row-major order
    let stats = region_stats(&labels).unwrap();
    let firsts: Vec<usize> = (0..n as i32)
        .map(|label| {
            labels
                .components()
                .iter()
                .position(|&l| l == label)
                .unwrap_or(usize::MAX)
        })
        .collect();
    rp.compare_values(
        1.0,
        firsts.windows(2).all(|w| w[0] < w[1]) as u8 as f64,
        0.0,
    );
    rp.compare_values(n as f64, stats.len() as f64, 0.0);

    // Regions are maximal
    rp.compare_values(0.0, count_unmerged(&labels, similar) as f64, 0.0);

    // Every region mean lies in the intensity range of its members
    let means = region_means(&gray, &labels).unwrap();
    let mut ranges = vec![(f32::MAX, f32::MIN); n];
    for (k, pixel) in gray.pixels().iter().enumerate() {
        let range = &mut ranges[labels[k][0] as usize];
        range.0 = range.0.min(pixel[0]);
        range.1 = range.1.max(pixel[0]);
    }
    let outside = means
        .iter()
        .zip(&ranges)
        .filter(|(mean, (lo, hi))| mean[0] < *lo as f64 - 1e-6 || mean[0] > *hi as f64 + 1e-6)
        .count();
    rp.compare_values(0.0, outside as f64, 0.0);

    // Same input, same labels
    let (again, n2) = label_regions(&gray, similar);
    rp.compare_values(n as f64, n2 as f64, 0.0);
    rp.compare_images(&labels, &again);

    // Four-way growth never merges more than eight-way
    let options = RegionGrowingOptions::new(ConnectivityType::FourWay);
    let mut labels4 = LabelImage::default();
    let n4 = region_growing_with_options(&gray, &mut labels4, &options, similar);
    rp.compare_values(1.0, (n4 >= n) as u8 as f64, 0.0);

    // Recolor by label parity
    let mut parity = ImageGf::default();
    cast_with(&labels, &mut parity, |l| [(l[0] % 2) as f32]);
    for (k, p) in parity.pixels().iter().enumerate() {
        rp.compare_values((labels[k][0] % 2) as f64, p[0] as f64, 0.0);
    }

    if rp.display() {
        rp.write_image_and_check(&gray).unwrap();
        rp.write_image_and_check(&parity).unwrap();
    }

    assert!(rp.cleanup(), "grow regression test failed");
}

#[test]
fn grow_checkerboard_reg() {
    let mut rp = RegParams::new("grow_checkerboard");

    let board = fixtures::checkerboard(6, 7);
    let equal = |i: usize, j: usize, k: usize, l: usize| board.value(i, j) == board.value(k, l);

    // Diagonals join every square of one color
    let (labels, n) = label_regions(&board, equal);
    rp.compare_values(2.0, n as f64, 0.0);
    let expected: ImageGi = board.clone();
    rp.compare_images(&expected, &labels);

    // Without diagonals every square is alone
    let options = RegionGrowingOptions::new(ConnectivityType::FourWay).with_progress(true);
    let mut labels4 = LabelImage::default();
    let n4 = region_growing_with_options(&board, &mut labels4, &options, equal);
    rp.compare_values(42.0, n4 as f64, 0.0);
    let dense: Vec<i32> = (0..42).collect();
    rp.compare_images(&LabelImage::from_vec(6, 7, dense).unwrap(), &labels4);

    // Empty input gives no regions and an empty label image
    let mut labels = LabelImage::filled(3, 3, [1]);
    let n = region_growing(&ImageGf::default(), &mut labels, |_, _, _, _| true);
    rp.compare_values(0.0, n as f64, 0.0);
    rp.compare_values(0.0, labels.size() as f64, 0.0);

    assert!(rp.cleanup(), "grow checkerboard regression test failed");
}

#[test]
fn grow_labels_reg() {
    let mut rp = RegParams::new("grow_labels");

    let board = fixtures::checkerboard(3, 4);
    let equal = |i: usize, j: usize, k: usize, l: usize| board.value(i, j) == board.value(k, l);

    let options = RegionGrowingOptions::new(ConnectivityType::FourWay);
    let mut labels4 = LabelImage::default();
    region_growing_with_options(&board, &mut labels4, &options, equal);
    let mut text = Vec::new();
    write_labels(&mut text, &labels4).unwrap();
    rp.write_data_and_check(&text, "lbl").unwrap();

    let (labels8, _) = label_regions(&board, equal);
    let mut text = Vec::new();
    write_labels(&mut text, &labels8).unwrap();
    rp.write_data_and_check(&text, "lbl").unwrap();

    let parity: ImageGf = labels4.convert_with(|l| [(l[0] % 2) as f32]);
    rp.write_image_and_check(&parity).unwrap();

    assert!(rp.cleanup(), "grow labels regression test failed");
}

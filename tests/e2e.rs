mod common;

use common::synthetic_image::{quadrants_rgb, solid_rgb};

use cartoon_filter::{restore_original, CartoonFilter, CartoonParams, ImageRgbU8};
use std::collections::HashSet;

fn distinct_colors(img: &ImageRgbU8) -> HashSet<[u8; 3]> {
    let mut colors = HashSet::new();
    for y in 0..img.h {
        for x in 0..img.w {
            let off = img.idx(x, y);
            colors.insert([img.data[off], img.data[off + 1], img.data[off + 2]]);
        }
    }
    colors
}

#[test]
fn black_white_quadrants_flatten_to_two_colors() {
    let mut img = quadrants_rgb(4, 4, [0, 0, 0], [255, 255, 255]);
    let params = CartoonParams {
        local_threshold_radius: 1,
        dilation_radius: 1,
    };
    let report = CartoonFilter::new(params).process(&mut img);

    assert_eq!((img.w, img.h, img.channels), (4, 4, 3));
    assert_eq!(img.data.len(), 4 * 4 * 3);
    assert!(report.region_count >= 1);

    let colors = distinct_colors(&img);
    assert!(
        colors.len() <= 2,
        "expected at most two output colors, got {colors:?}"
    );
    for color in &colors {
        assert!(
            color[0] == color[1] && color[1] == color[2],
            "output of a black/white input must stay gray, got {color:?}"
        );
    }
}

#[test]
fn two_channel_buffer_passes_through_untouched() {
    let mut img = ImageRgbU8::new(9, 7, 2);
    for (i, v) in img.data.iter_mut().enumerate() {
        *v = (i % 256) as u8;
    }
    let before = img.clone();

    let report = CartoonFilter::new(CartoonParams::default()).process(&mut img);
    assert_eq!(img, before, "sub-3-channel buffers must not be modified");
    assert_eq!(report.region_count, 0);
}

#[test]
fn uniform_photo_keeps_its_dimensions() {
    let mut img = solid_rgb(32, 24, [180, 90, 60]);
    let report = CartoonFilter::new(CartoonParams::default()).process(&mut img);
    assert_eq!((img.w, img.h, img.channels), (32, 24, 3));
    assert!(report.region_count >= 1);
    assert_eq!(report.timing.stages.len(), 5);
}

#[test]
fn rerunning_after_restore_is_deterministic() {
    let original = quadrants_rgb(16, 12, [200, 40, 40], [40, 40, 200]);
    let filter = CartoonFilter::new(CartoonParams {
        local_threshold_radius: 2,
        dilation_radius: 1,
    });

    let mut img = original.clone();
    filter.process(&mut img);
    let first = img.clone();

    restore_original(&original, &mut img);
    assert_eq!(img, original);
    filter.process(&mut img);
    assert_eq!(img, first, "the pipeline is a pure function of its inputs");
}

use seamless::compositor::*;
use seamless::domain::*;
use seamless::{seamless_clone, CloneMode, Error};

use image::{Rgb, RgbImage};

fn checkerboard(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x / 2 + y / 2) % 2 == 0 {
            Rgb([30, 60, 90])
        } else {
            Rgb([150, 120, 90])
        }
    })
}

#[test]
fn three_by_three_scenario() {
    let mut destination = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
    for ((x, y), v) in [((0, 1), 10), ((1, 0), 20), ((2, 1), 30), ((1, 2), 40)]
    {
        destination.put_pixel(x, y, Rgb([v, v, v]));
    }
    let source = RgbImage::from_pixel(3, 3, Rgb([5, 5, 5]));
    let domain: Domain = [Point::new(1, 1)].into_iter().collect();

    // Imported: b = 100 + 0, x = 25. Mixed: the destination gradients
    // 0 - 10, 0 - 20, 0 - 30, 0 - 40 beat the flat source, b = 0.
    for (mode, expected) in [(CloneMode::Imported, 25), (CloneMode::Mixed, 0)]
    {
        let output = seamless_clone(
            &source,
            &destination,
            &domain,
            Point::new(0, 0),
            mode,
        )
        .unwrap();
        assert_eq!(
            *output.get_pixel(1, 1),
            Rgb([expected, expected, expected]),
            "{mode:?}"
        );
    }
}

#[test]
fn exterior_is_untouched() {
    let source = checkerboard(10, 10);
    let destination = RgbImage::from_fn(30, 20, |x, y| {
        Rgb([(x * 8) as u8, (y * 12) as u8, 200])
    });
    // L shaped piece plus a separate square.
    let mut domain = Domain::from_rect(12, 6, 6, 2);
    domain.extend(Domain::from_rect(12, 8, 2, 6));
    domain.extend(Domain::from_rect(16, 10, 2, 2));

    for mode in [
        CloneMode::Flatten,
        CloneMode::Imported,
        CloneMode::Mixed,
        CloneMode::Averaged,
    ] {
        let output = seamless_clone(
            &source,
            &destination,
            &domain,
            Point::new(10, 5),
            mode,
        )
        .unwrap();
        for (x, y, pixel) in output.enumerate_pixels() {
            if !domain.contains(&Point::new(x, y)) {
                assert_eq!(pixel, destination.get_pixel(x, y), "{mode:?}");
            }
        }
    }
}

#[test]
fn seam_is_continuous() {
    // A bright flat patch on a dark flat background: imported gradients
    // are zero, so the patch takes the background colour and no seam
    // survives, while flatten keeps the hard edge.
    let source = RgbImage::from_pixel(8, 8, Rgb([250, 250, 250]));
    let destination = RgbImage::from_pixel(16, 16, Rgb([20, 40, 60]));
    let domain = Domain::from_rect(5, 5, 6, 6);
    let anchor = Point::new(4, 4);

    let flat = flatten(&source, &destination, &domain, anchor).unwrap();
    assert_eq!(*flat.get_pixel(5, 5), Rgb([250, 250, 250]));

    let cloned =
        clone_imported_gradient(&source, &destination, &domain, anchor)
            .unwrap();
    assert_eq!(cloned, destination);
}

#[test]
fn mixed_keeps_strong_destination_edges() {
    // Flat source, striped destination: mixed keeps the stripes,
    // imported smooths them away.
    let source = RgbImage::from_pixel(12, 12, Rgb([128, 128, 128]));
    let destination = RgbImage::from_fn(12, 12, |x, _| {
        if x % 2 == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    let domain = Domain::from_rect(3, 3, 6, 6);
    let anchor = Point::new(0, 0);

    let mixed =
        clone_mixed_gradient(&source, &destination, &domain, anchor).unwrap();
    assert_eq!(mixed, destination);

    let imported =
        clone_imported_gradient(&source, &destination, &domain, anchor)
            .unwrap();
    let a = imported.get_pixel(5, 5).0[0] as i32;
    let b = imported.get_pixel(6, 5).0[0] as i32;
    assert!((a - b).abs() < 200);
}

#[test]
fn out_of_bounds_domain_is_rejected() {
    let image = checkerboard(6, 6);
    let domain: Domain =
        [Point::new(2, 2), Point::new(6, 2)].into_iter().collect();
    let result = seamless_clone(
        &image,
        &image,
        &domain,
        Point::new(0, 0),
        CloneMode::Imported,
    );
    assert!(matches!(result, Err(Error::OutOfBoundsDomain { .. })));
}

#[test]
fn mask_image_round_trip() {
    let mut mask = image::GrayImage::new(9, 9);
    for (x, y) in [(3, 3), (4, 3), (4, 4), (5, 5)] {
        mask.put_pixel(x, y, image::Luma([255]));
    }
    let domain = Domain::from_mask_image(&mask);
    let index = DomainMask::new(9, 9, &domain).unwrap();
    assert_eq!(index.len(), 4);
    for (p, i) in index.indices() {
        assert_eq!(mask.get_pixel(p.x, p.y).0[0], 255);
        assert_eq!(domain.iter().nth(i), Some(&p));
    }
}

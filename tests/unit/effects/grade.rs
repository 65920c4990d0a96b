use super::*;

fn uniform(width: u32, height: u32, rgba: [u8; 4]) -> Bitmap {
    Bitmap::from_raw(width, height, rgba.repeat((width * height) as usize)).unwrap()
}

#[test]
fn neutral_params_are_identity() {
    let mut frame = Bitmap::from_raw(
        2,
        2,
        vec![0, 1, 2, 3, 100, 101, 102, 103, 200, 201, 202, 203, 255, 254, 253, 252],
    )
    .unwrap();
    let original = frame.clone();
    grade(&mut frame, &EffectParameters::default());
    assert_eq!(frame, original);
}

#[test]
fn brightness_minus_100_darkens_white_to_155() {
    let mut frame = uniform(4, 4, [255, 255, 255, 255]);
    let params = EffectParameters {
        brightness: -100.0,
        ..EffectParameters::default()
    };
    grade(&mut frame, &params);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, [155, 155, 155, 255]);
    }
}

#[test]
fn grayscale_collapses_to_luma() {
    let mut frame = uniform(1, 1, [200, 50, 50, 255]);
    let params = EffectParameters {
        grayscale: true,
        ..EffectParameters::default()
    };
    grade(&mut frame, &params);
    // round(0.299*200 + 0.587*50 + 0.114*50) = 95
    assert_eq!(&frame.data, &[95, 95, 95, 255]);
}

#[test]
fn invert_flips_channels() {
    let mut frame = uniform(1, 1, [10, 100, 250, 128]);
    let params = EffectParameters {
        invert: true,
        ..EffectParameters::default()
    };
    grade(&mut frame, &params);
    assert_eq!(&frame.data, &[245, 155, 5, 128]);
}

#[test]
fn contrast_keeps_midpoint_fixed() {
    for contrast in [-80.0, -20.0, 35.0, 90.0] {
        let mut frame = uniform(1, 1, [128, 128, 128, 255]);
        let params = EffectParameters {
            contrast,
            ..EffectParameters::default()
        };
        grade(&mut frame, &params);
        assert_eq!(&frame.data, &[128, 128, 128, 255], "contrast {contrast}");
    }
}

#[test]
fn contrast_spreads_values_away_from_midpoint() {
    let mut frame = uniform(1, 1, [200, 60, 128, 255]);
    let params = EffectParameters {
        contrast: 50.0,
        ..EffectParameters::default()
    };
    grade(&mut frame, &params);
    assert!(frame.data[0] > 200);
    assert!(frame.data[1] < 60);
}

#[test]
fn gamma_above_one_brightens_midtones() {
    let mut frame = uniform(1, 1, [128, 128, 128, 255]);
    let params = EffectParameters {
        gamma: 2.0,
        ..EffectParameters::default()
    };
    grade(&mut frame, &params);
    // round(sqrt(128/255) * 255) = 181
    assert_eq!(frame.data[0], 181);
}

#[test]
fn black_white_points_remap_the_tone_window() {
    let mut frame = Bitmap::from_raw(
        3,
        1,
        vec![50, 50, 50, 255, 205, 205, 205, 255, 30, 30, 30, 255],
    )
    .unwrap();
    let params = EffectParameters {
        black_point: 50.0,
        white_point: 205.0,
        ..EffectParameters::default()
    };
    grade(&mut frame, &params);
    assert_eq!(&frame.data[0..4], &[0, 0, 0, 255]);
    assert_eq!(&frame.data[4..8], &[255, 255, 255, 255]);
    // Values below the black point clamp to the floor.
    assert_eq!(&frame.data[8..12], &[0, 0, 0, 255]);
}

#[test]
fn saturation_minus_100_equals_grayscale() {
    let mut desaturated = uniform(1, 1, [200, 50, 50, 255]);
    let params = EffectParameters {
        saturation: -100.0,
        ..EffectParameters::default()
    };
    grade(&mut desaturated, &params);
    assert_eq!(&desaturated.data, &[95, 95, 95, 255]);
}

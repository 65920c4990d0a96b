use super::*;

fn solid_patch(
    left: u32,
    top: u32,
    width: u32,
    height: u32,
    rgba: [u8; 4],
    disposal: Disposal,
) -> FramePatch {
    FramePatch {
        left,
        top,
        width,
        height,
        disposal,
        rgba: rgba.repeat((width * height) as usize),
    }
}

fn pixel(bitmap: &Bitmap, x: u32, y: u32) -> [u8; 4] {
    let i = bitmap.offset(x, y);
    [
        bitmap.data[i],
        bitmap.data[i + 1],
        bitmap.data[i + 2],
        bitmap.data[i + 3],
    ]
}

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

#[test]
fn empty_patch_list_is_empty_animation_error() {
    let err = compose_frames(&[], 2, 2).unwrap_err();
    assert!(matches!(err, TapewarpError::EmptyAnimation));
}

#[test]
fn zero_canvas_is_invalid_dimensions() {
    let patches = [solid_patch(0, 0, 1, 1, RED, Disposal::Keep)];
    let err = compose_frames(&patches, 0, 2).unwrap_err();
    assert!(matches!(
        err,
        TapewarpError::InvalidDimensions {
            width: 0,
            height: 2
        }
    ));
}

#[test]
fn patch_buffer_length_mismatch_is_validation_error() {
    let patch = FramePatch {
        left: 0,
        top: 0,
        width: 2,
        height: 2,
        disposal: Disposal::Keep,
        rgba: vec![0u8; 15],
    };
    let err = compose_frames(&[patch], 2, 2).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn single_full_patch_composes_verbatim() {
    let patch = FramePatch {
        left: 0,
        top: 0,
        width: 2,
        height: 2,
        disposal: Disposal::Keep,
        rgba: vec![
            10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150, 160,
        ],
    };
    let out = compose_frames(std::slice::from_ref(&patch), 2, 2).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].data, patch.rgba);
}

#[test]
fn every_patch_yields_one_canvas_sized_bitmap() {
    let patches = [
        solid_patch(0, 0, 1, 1, RED, Disposal::Keep),
        solid_patch(1, 0, 2, 1, GREEN, Disposal::Background),
        solid_patch(0, 0, 5, 5, BLUE, Disposal::Previous),
    ];
    let out = compose_frames(&patches, 3, 3).unwrap();
    assert_eq!(out.len(), 3);
    for bitmap in &out {
        assert_eq!((bitmap.width, bitmap.height), (3, 3));
        assert_eq!(bitmap.data.len(), 3 * 3 * 4);
    }
}

#[test]
fn keep_disposal_persists_previous_content() {
    let patches = [
        solid_patch(0, 0, 2, 2, RED, Disposal::Keep),
        solid_patch(1, 1, 1, 1, GREEN, Disposal::Keep),
    ];
    let out = compose_frames(&patches, 2, 2).unwrap();
    assert_eq!(pixel(&out[1], 0, 0), RED);
    assert_eq!(pixel(&out[1], 1, 1), GREEN);
}

#[test]
fn background_disposal_clears_uncovered_area() {
    let patches = [
        solid_patch(0, 0, 2, 2, RED, Disposal::Background),
        solid_patch(0, 0, 1, 1, GREEN, Disposal::Keep),
    ];
    let out = compose_frames(&patches, 2, 2).unwrap();
    assert_eq!(pixel(&out[1], 0, 0), GREEN);
    assert_eq!(pixel(&out[1], 1, 0), CLEAR);
    assert_eq!(pixel(&out[1], 0, 1), CLEAR);
    assert_eq!(pixel(&out[1], 1, 1), CLEAR);
}

#[test]
fn previous_disposal_restores_pre_draw_canvas() {
    let patches = [
        solid_patch(0, 0, 2, 2, RED, Disposal::Keep),
        solid_patch(0, 0, 1, 1, BLUE, Disposal::Previous),
        solid_patch(1, 1, 1, 1, GREEN, Disposal::Keep),
    ];
    let out = compose_frames(&patches, 2, 2).unwrap();
    // Frame 2 draws blue over the red canvas.
    assert_eq!(pixel(&out[1], 0, 0), BLUE);
    // Frame 3 starts from the canvas as it was before frame 2 drew.
    assert_eq!(pixel(&out[2], 0, 0), RED);
    assert_eq!(pixel(&out[2], 1, 1), GREEN);
}

#[test]
fn out_of_bounds_patch_is_clipped() {
    let patches = [
        solid_patch(1, 1, 2, 2, RED, Disposal::Keep),
        solid_patch(5, 5, 1, 1, GREEN, Disposal::Keep),
    ];
    let out = compose_frames(&patches, 2, 2).unwrap();
    assert_eq!(pixel(&out[0], 1, 1), RED);
    assert_eq!(pixel(&out[0], 0, 0), CLEAR);
    // A patch entirely outside the canvas changes nothing.
    assert_eq!(out[1], out[0]);
}

#[test]
fn disposal_code_mapping() {
    assert_eq!(Disposal::from_code(0), Disposal::Keep);
    assert_eq!(Disposal::from_code(1), Disposal::Keep);
    assert_eq!(Disposal::from_code(2), Disposal::Background);
    assert_eq!(Disposal::from_code(3), Disposal::Previous);
    assert_eq!(Disposal::from_code(7), Disposal::Keep);
}

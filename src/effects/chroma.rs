//! Channel-shift and row-shift stages. Sample coordinates are always
//! clamped to the row before addressing the buffer.

use rand::Rng;

use crate::foundation::core::Bitmap;
use crate::foundation::math::{clamp_u8, luma601};

/// Horizontal sine wave: each row samples from
/// `x + floor(sin(y * 0.1) * intensity * 5)`, clamped to the row.
pub(crate) fn edge_wave(frame: &mut Bitmap, intensity: f32) {
    if intensity <= 0.0 || frame.is_empty() {
        return;
    }
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        let offset = ((y as f32 * 0.1).sin() * intensity * 5.0).floor() as i32;
        for x in 0..w {
            let sx = (x + offset).clamp(0, w - 1);
            let i = ((y * w + x) as usize) * 4;
            let si = ((y * w + sx) as usize) * 4;
            for c in 0..3 {
                frame.data[i + c] = src[si + c];
            }
        }
    }
}

/// Deterministic chroma phase error: red samples `floor(value)` pixels to
/// the right, blue the same distance to the left; green is untouched.
pub(crate) fn chroma_phase(frame: &mut Bitmap, value: f32) {
    let shift = value.floor() as i32;
    if shift <= 0 || frame.is_empty() {
        return;
    }
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        for x in 0..w {
            let rx = (x + shift).min(w - 1);
            let bx = (x - shift).max(0);
            let i = ((y * w + x) as usize) * 4;
            frame.data[i] = src[((y * w + rx) as usize) * 4];
            frame.data[i + 2] = src[((y * w + bx) as usize) * 4 + 2];
        }
    }
}

/// Blend RGB toward luma by `value / 100`.
pub(crate) fn chroma_loss(frame: &mut Bitmap, value: f32) {
    if value <= 0.0 {
        return;
    }
    let loss = value / 100.0;
    for px in frame.data.chunks_exact_mut(4) {
        let gray = luma601(f32::from(px[0]), f32::from(px[1]), f32::from(px[2]));
        for c in 0..3 {
            let cur = f32::from(px[c]);
            px[c] = clamp_u8(cur * (1.0 - loss) + gray * loss);
        }
    }
}

/// Chromatic aberration: red samples from `x - shift`, blue from
/// `x + shift`, both clamped to the row; green is untouched.
pub(crate) fn chromatic_aberration(frame: &mut Bitmap, value: f32) {
    let shift = value.floor() as i32;
    if shift <= 0 || frame.is_empty() {
        return;
    }
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        for x in 0..w {
            let rx = (x - shift).clamp(0, w - 1);
            let bx = (x + shift).clamp(0, w - 1);
            let i = ((y * w + x) as usize) * 4;
            frame.data[i] = src[((y * w + rx) as usize) * 4];
            frame.data[i + 2] = src[((y * w + bx) as usize) * 4 + 2];
        }
    }
}

/// Randomized RGB separation: per pixel, red samples a random offset in
/// `[0, floor(value))` to the right, blue the same to the left.
pub(crate) fn color_shift<R: Rng>(frame: &mut Bitmap, value: f32, rng: &mut R) {
    let max_shift = value.floor() as i32;
    if max_shift <= 0 || frame.is_empty() {
        return;
    }
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        for x in 0..w {
            let r_off = (rng.random::<f32>() * max_shift as f32).floor() as i32;
            let b_off = (rng.random::<f32>() * max_shift as f32).floor() as i32;
            let rx = (x + r_off).min(w - 1);
            let bx = (x - b_off).max(0);
            let i = ((y * w + x) as usize) * 4;
            frame.data[i] = src[((y * w + rx) as usize) * 4];
            frame.data[i + 2] = src[((y * w + bx) as usize) * 4 + 2];
        }
    }
}

/// Tracking error: one random horizontal shift in `[-value, value)` per
/// invocation, applied to every third row.
pub(crate) fn tracking_noise<R: Rng>(frame: &mut Bitmap, value: f32, rng: &mut R) {
    if value <= 0.0 || frame.is_empty() {
        return;
    }
    let shift = (rng.random::<f32>() * value * 2.0 - value).floor() as i32;
    if shift == 0 {
        return;
    }
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        if y % 3 != 0 {
            continue;
        }
        for x in 0..w {
            let sx = (x + shift).clamp(0, w - 1);
            let i = ((y * w + x) as usize) * 4;
            let si = ((y * w + sx) as usize) * 4;
            for c in 0..3 {
                frame.data[i + c] = src[si + c];
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/chroma.rs"]
mod tests;

//! Neighborhood stages: every filter here reads pixels other than the one
//! it writes, so each one snapshots its input before mutating the frame.

use crate::foundation::core::Bitmap;
use crate::foundation::math::{clamp_u8, luma601};

/// Directional emboss over the interior (1-pixel border untouched),
/// offset by 128 and blended with the pre-stage pixels at `amount / 2`.
pub(crate) fn emboss(frame: &mut Bitmap, amount: f32) {
    if amount <= 0.0 || frame.width < 3 || frame.height < 3 {
        return;
    }
    const KERNEL: [[f32; 3]; 3] = [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]];
    let src = frame.data.clone();
    let w = frame.width as usize;
    let h = frame.height as usize;
    let blend = amount / 2.0;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut acc = [0.0f32; 3];
            for (ky, row) in KERNEL.iter().enumerate() {
                for (kx, &k) in row.iter().enumerate() {
                    let i = ((y + ky - 1) * w + (x + kx - 1)) * 4;
                    for c in 0..3 {
                        acc[c] += f32::from(src[i + c]) * k;
                    }
                }
            }
            let i = (y * w + x) * 4;
            for c in 0..3 {
                let embossed = (acc[c] + 128.0).clamp(0.0, 255.0);
                let orig = f32::from(src[i + c]);
                frame.data[i + c] = clamp_u8(orig * (1.0 - blend) + embossed * blend);
            }
        }
    }
}

/// CRT-style glow: a radius-5 box blur blended back at `strength / 100`.
pub(crate) fn tv_glow(frame: &mut Bitmap, strength: f32) {
    if strength <= 0.0 || frame.is_empty() {
        return;
    }
    const RADIUS: i32 = 5;
    let t = strength / 100.0;
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            let mut count = 0.0f32;
            for dy in -RADIUS..=RADIUS {
                for dx in -RADIUS..=RADIUS {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx >= 0 && nx < w && ny >= 0 && ny < h {
                        let i = ((ny * w + nx) as usize) * 4;
                        for c in 0..3 {
                            acc[c] += f32::from(src[i + c]);
                        }
                        count += 1.0;
                    }
                }
            }
            let i = ((y * w + x) as usize) * 4;
            for c in 0..3 {
                let cur = f32::from(src[i + c]);
                frame.data[i + c] = clamp_u8(cur * (1.0 - t) + (acc[c] / count) * t);
            }
        }
    }
}

/// 4-neighbor unsharp mask over the interior: `v + amount * (4v - sum)`.
pub(crate) fn sharpen(frame: &mut Bitmap, amount: f32) {
    if amount <= 0.0 || frame.width < 3 || frame.height < 3 {
        return;
    }
    let src = frame.data.clone();
    let w = frame.width as usize;
    let h = frame.height as usize;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let i = (y * w + x) * 4;
            for c in 0..3 {
                let center = f32::from(src[i + c]);
                let sum = f32::from(src[((y - 1) * w + x) * 4 + c])
                    + f32::from(src[((y + 1) * w + x) * 4 + c])
                    + f32::from(src[(y * w + x - 1) * 4 + c])
                    + f32::from(src[(y * w + x + 1) * 4 + c]);
                frame.data[i + c] = clamp_u8(center + amount * (center * 4.0 - sum));
            }
        }
    }
}

/// Vertical luma smear: blend RGB toward the average luma of a vertical
/// window of radius `max(1, floor(amount))` at mix `min(1, amount / 10)`.
pub(crate) fn luma_smear(frame: &mut Bitmap, amount: f32) {
    if amount <= 0.0 || frame.is_empty() {
        return;
    }
    let radius = (amount.floor() as i32).max(1);
    let mix = (amount / 10.0).min(1.0);
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        for x in 0..w {
            let mut luma_sum = 0.0f32;
            let mut count = 0.0f32;
            for dy in -radius..=radius {
                let ny = y + dy;
                if ny >= 0 && ny < h {
                    let i = ((ny * w + x) as usize) * 4;
                    luma_sum += luma601(
                        f32::from(src[i]),
                        f32::from(src[i + 1]),
                        f32::from(src[i + 2]),
                    );
                    count += 1.0;
                }
            }
            let avg = luma_sum / count;
            let i = ((y * w + x) as usize) * 4;
            for c in 0..3 {
                let cur = f32::from(src[i + c]);
                frame.data[i + c] = clamp_u8(cur * (1.0 - mix) + avg * mix);
            }
        }
    }
}

/// Horizontal color bleed: box-average RGB along each row over a window of
/// radius `floor(radius)`, edge windows shrinking to the valid span.
pub(crate) fn color_bleed_h(frame: &mut Bitmap, radius: f32) {
    let radius = radius.floor() as i32;
    if radius <= 0 || frame.is_empty() {
        return;
    }
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            let mut count = 0.0f32;
            for dx in -radius..=radius {
                let nx = x + dx;
                if nx >= 0 && nx < w {
                    let i = ((y * w + nx) as usize) * 4;
                    for c in 0..3 {
                        acc[c] += f32::from(src[i + c]);
                    }
                    count += 1.0;
                }
            }
            let i = ((y * w + x) as usize) * 4;
            for c in 0..3 {
                frame.data[i + c] = clamp_u8(acc[c] / count);
            }
        }
    }
}

/// Vertical counterpart of [`color_bleed_h`].
pub(crate) fn color_bleed_v(frame: &mut Bitmap, radius: f32) {
    let radius = radius.floor() as i32;
    if radius <= 0 || frame.is_empty() {
        return;
    }
    let src = frame.data.clone();
    let w = frame.width as i32;
    let h = frame.height as i32;

    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            let mut count = 0.0f32;
            for dy in -radius..=radius {
                let ny = y + dy;
                if ny >= 0 && ny < h {
                    let i = ((ny * w + x) as usize) * 4;
                    for c in 0..3 {
                        acc[c] += f32::from(src[i + c]);
                    }
                    count += 1.0;
                }
            }
            let i = ((y * w + x) as usize) * 4;
            for c in 0..3 {
                frame.data[i + c] = clamp_u8(acc[c] / count);
            }
        }
    }
}

/// Box blur of radius `floor(radius)` over the interior; a border of
/// `radius` pixels is left untouched, so the window never leaves the frame.
pub(crate) fn box_blur(frame: &mut Bitmap, radius: f32) {
    let radius = radius.floor() as i32;
    if radius <= 0 {
        return;
    }
    let r = radius as usize;
    let w = frame.width as usize;
    let h = frame.height as usize;
    if w <= 2 * r || h <= 2 * r {
        return;
    }
    let src = frame.data.clone();
    let count = ((2 * r + 1) * (2 * r + 1)) as f32;

    for y in r..h - r {
        for x in r..w - r {
            let mut acc = [0.0f32; 3];
            for ny in y - r..=y + r {
                for nx in x - r..=x + r {
                    let i = (ny * w + nx) * 4;
                    for c in 0..3 {
                        acc[c] += f32::from(src[i + c]);
                    }
                }
            }
            let i = (y * w + x) * 4;
            for c in 0..3 {
                frame.data[i + c] = clamp_u8(acc[c] / count);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/convolve.rs"]
mod tests;

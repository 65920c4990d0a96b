//! Additive and multiplicative overlays: noise, shading, and tape wear.
//! These stages write each pixel from its own value only, so none of them
//! needs a snapshot.

use rand::Rng;

use crate::foundation::core::Bitmap;
use crate::foundation::math::clamp_u8;

/// Luma-correlated noise: one uniform draw in `[-amount/2, amount/2]` per
/// pixel, added to all three channels, where `amount = value * 2.55`.
pub(crate) fn video_noise<R: Rng>(frame: &mut Bitmap, value: f32, rng: &mut R) {
    if value <= 0.0 {
        return;
    }
    let amount = value * 2.55;
    for px in frame.data.chunks_exact_mut(4) {
        let n = (rng.random::<f32>() - 0.5) * amount;
        for c in 0..3 {
            px[c] = clamp_u8(f32::from(px[c]) + n);
        }
    }
}

/// Independent per-channel noise with the same uniform range as
/// [`video_noise`].
pub(crate) fn color_noise<R: Rng>(frame: &mut Bitmap, value: f32, rng: &mut R) {
    if value <= 0.0 {
        return;
    }
    let amount = value * 2.55;
    for px in frame.data.chunks_exact_mut(4) {
        for c in 0..3 {
            let n = (rng.random::<f32>() - 0.5) * amount;
            px[c] = clamp_u8(f32::from(px[c]) + n);
        }
    }
}

/// Radial darkening: multiply by `1 - (dist / max_dist) * (value / 100)`.
pub(crate) fn vignette(frame: &mut Bitmap, value: f32) {
    if value <= 0.0 || frame.is_empty() {
        return;
    }
    let strength = value / 100.0;
    let cx = frame.width as f32 / 2.0;
    let cy = frame.height as f32 / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt();
    let w = frame.width as usize;

    for y in 0..frame.height as usize {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let factor = 1.0 - (dist / max_dist) * strength;
            let i = (y * w + x) * 4;
            for c in 0..3 {
                frame.data[i + c] = clamp_u8(f32::from(frame.data[i + c]) * factor);
            }
        }
    }
}

/// Darken every odd-indexed row by `1 - value / 200`.
pub(crate) fn scanlines(frame: &mut Bitmap, value: f32) {
    if value <= 0.0 || frame.is_empty() {
        return;
    }
    let factor = 1.0 - value / 200.0;
    let w = frame.width as usize;

    for y in (1..frame.height as usize).step_by(2) {
        for x in 0..w {
            let i = (y * w + x) * 4;
            for c in 0..3 {
                frame.data[i + c] = clamp_u8(f32::from(frame.data[i + c]) * factor);
            }
        }
    }
}

/// Corner fade: radial falloff from the center with per-channel weights, so
/// red burns out faster than blue.
pub(crate) fn corner_burn(frame: &mut Bitmap, value: f32) {
    if value <= 0.0 || frame.is_empty() {
        return;
    }
    let strength = value / 100.0;
    let half_w = frame.width as f32 / 2.0;
    let half_h = frame.height as f32 / 2.0;
    let w = frame.width as usize;

    for y in 0..frame.height as usize {
        for x in 0..w {
            let dx = (x as f32 - half_w).abs() / half_w;
            let dy = (y as f32 - half_h).abs() / half_h;
            let fade = (dx * dx + dy * dy).sqrt() * strength;
            let i = (y * w + x) * 4;
            frame.data[i] = clamp_u8(f32::from(frame.data[i]) * (1.0 - fade * 0.8));
            frame.data[i + 1] = clamp_u8(f32::from(frame.data[i + 1]) * (1.0 - fade * 0.6));
            frame.data[i + 2] = clamp_u8(f32::from(frame.data[i + 2]) * (1.0 - fade * 0.5));
        }
    }
}

/// Blend each pixel toward its sepia transform by `value / 100`.
pub(crate) fn tape_age(frame: &mut Bitmap, value: f32) {
    if value <= 0.0 {
        return;
    }
    let factor = value / 100.0;
    for px in frame.data.chunks_exact_mut(4) {
        let r = f32::from(px[0]);
        let g = f32::from(px[1]);
        let b = f32::from(px[2]);
        let tr = 0.393 * r + 0.769 * g + 0.189 * b;
        let tg = 0.349 * r + 0.686 * g + 0.168 * b;
        let tb = 0.272 * r + 0.534 * g + 0.131 * b;
        px[0] = clamp_u8(r * (1.0 - factor) + tr * factor);
        px[1] = clamp_u8(g * (1.0 - factor) + tg * factor);
        px[2] = clamp_u8(b * (1.0 - factor) + tb * factor);
    }
}

/// Scatter `floor((w*h / 10000) * (value / 10))` dark circular spots of
/// random radius 1..=5 and darkness 0.3..0.7, with radial falloff.
pub(crate) fn dust<R: Rng>(frame: &mut Bitmap, value: f32, rng: &mut R) {
    if value <= 0.0 || frame.is_empty() {
        return;
    }
    let w = frame.width as i32;
    let h = frame.height as i32;
    let spots = (w as f32 * h as f32 / 10_000.0 * (value / 10.0)).floor() as i32;

    for _ in 0..spots {
        let x = ((rng.random::<f32>() * w as f32).floor() as i32).min(w - 1);
        let y = ((rng.random::<f32>() * h as f32).floor() as i32).min(h - 1);
        let size = (rng.random::<f32>() * 5.0).floor() as i32 + 1;
        let darkness = 0.3 + rng.random::<f32>() * 0.4;

        for dy in -size..=size {
            for dx in -size..=size {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    continue;
                }
                let dist = ((dx * dx + dy * dy) as f32).sqrt();
                if dist > size as f32 {
                    continue;
                }
                let factor = 1.0 - (dist / size as f32) * darkness;
                let i = ((ny * w + nx) as usize) * 4;
                for c in 0..3 {
                    frame.data[i + c] = clamp_u8(f32::from(frame.data[i + c]) * factor);
                }
            }
        }
    }
}

/// Draw `floor((value / 10) * 3)` scratch lines, ~70% vertical, each
/// randomly brightening (1.3x) or darkening (0.7x) a run covering 30-70%
/// of the relevant dimension.
pub(crate) fn scratches<R: Rng>(frame: &mut Bitmap, value: f32, rng: &mut R) {
    if value <= 0.0 || frame.is_empty() {
        return;
    }
    let w = frame.width as usize;
    let h = frame.height as usize;
    let count = (value / 10.0 * 3.0).floor() as i32;

    for _ in 0..count {
        let vertical = rng.random::<f32>() > 0.3;
        let gain = if rng.random::<f32>() > 0.5 { 1.3 } else { 0.7 };

        if vertical {
            let x = ((rng.random::<f32>() * w as f32).floor() as usize).min(w - 1);
            let start = (rng.random::<f32>() * h as f32 * 0.5).floor() as usize;
            let len = (h as f32 * 0.3 + rng.random::<f32>() * h as f32 * 0.4).floor() as usize;
            for y in start..(start + len).min(h) {
                let i = (y * w + x) * 4;
                for c in 0..3 {
                    frame.data[i + c] = clamp_u8(f32::from(frame.data[i + c]) * gain);
                }
            }
        } else {
            let y = ((rng.random::<f32>() * h as f32).floor() as usize).min(h - 1);
            let start = (rng.random::<f32>() * w as f32 * 0.3).floor() as usize;
            let len = (w as f32 * 0.4 + rng.random::<f32>() * w as f32 * 0.3).floor() as usize;
            for x in start..(start + len).min(w) {
                let i = (y * w + x) * 4;
                for c in 0..3 {
                    frame.data[i + c] = clamp_u8(f32::from(frame.data[i + c]) * gain);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/overlay.rs"]
mod tests;

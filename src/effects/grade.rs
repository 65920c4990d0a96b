use crate::effects::params::EffectParameters;
use crate::foundation::core::Bitmap;
use crate::foundation::math::{clamp_u8, luma601};

/// Base color correction, always applied, one pass per pixel:
/// black/white-point + gamma tone map, additive brightness, contrast curve,
/// saturation blend, then the grayscale and invert toggles. Channels are
/// clamped back to `[0, 255]` once per pixel. At the neutral bundle the
/// whole pass is the identity up to rounding.
pub(crate) fn grade(frame: &mut Bitmap, params: &EffectParameters) {
    let black = params.black_point;
    let span = if params.white_point - black == 0.0 {
        1.0
    } else {
        params.white_point - black
    };
    let inv_gamma = 1.0 / params.gamma;

    for px in frame.data.chunks_exact_mut(4) {
        let mut r = tone_map(f32::from(px[0]), black, span, inv_gamma);
        let mut g = tone_map(f32::from(px[1]), black, span, inv_gamma);
        let mut b = tone_map(f32::from(px[2]), black, span, inv_gamma);

        if params.brightness != 0.0 {
            r += params.brightness;
            g += params.brightness;
            b += params.brightness;
        }
        if params.contrast != 0.0 {
            let f = (259.0 * (params.contrast + 255.0)) / (255.0 * (259.0 - params.contrast));
            r = f * (r - 128.0) + 128.0;
            g = f * (g - 128.0) + 128.0;
            b = f * (b - 128.0) + 128.0;
        }
        if params.saturation != 0.0 {
            let gray = luma601(r, g, b);
            let sat = 1.0 + params.saturation / 100.0;
            r = gray + sat * (r - gray);
            g = gray + sat * (g - gray);
            b = gray + sat * (b - gray);
        }
        if params.grayscale {
            let gray = luma601(r, g, b);
            r = gray;
            g = gray;
            b = gray;
        }
        if params.invert {
            r = 255.0 - r;
            g = 255.0 - g;
            b = 255.0 - b;
        }

        px[0] = clamp_u8(r);
        px[1] = clamp_u8(g);
        px[2] = clamp_u8(b);
    }
}

fn tone_map(v: f32, black: f32, span: f32, inv_gamma: f32) -> f32 {
    let t = ((v - black) / span).clamp(0.0, 1.0);
    (t.powf(inv_gamma) * 255.0).round()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/grade.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Parameter bundle for the effect pipeline.
///
/// Every numeric field has a documented range; [`EffectParameters::clamped`]
/// recovers out-of-range values rather than rejecting them, and the pipeline
/// clamps on entry. The `Default` bundle is neutral: running the pipeline
/// with it returns the input unchanged.
///
/// Deserialization fills unspecified fields from the neutral default, so a
/// JSON document with a handful of keys is a valid partial bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectParameters {
    /// Additive brightness, `[-100, 100]`.
    pub brightness: f32,
    /// Contrast curve strength, `[-100, 100]`.
    pub contrast: f32,
    /// Saturation blend, `[-100, 100]`.
    pub saturation: f32,
    /// Gamma curve exponent, `[0.1, 3]`.
    pub gamma: f32,
    /// Tone curve floor, `[0, 128]`.
    pub black_point: f32,
    /// Tone curve ceiling, `[127, 255]`.
    pub white_point: f32,
    /// Collapse every pixel to its luma.
    pub grayscale: bool,
    /// Invert every color channel.
    pub invert: bool,
    /// Unsharp-mask amount, `[0, 3]`.
    pub sharpen: f32,
    /// Per-row horizontal wave intensity, `[0, 3]`.
    pub edge_wave: f32,
    /// Vertical luma smear amount, `[0, 10]`.
    pub luma_smear: f32,
    /// Horizontal color bleed radius, `[0, 5]`.
    pub color_bleed_h: f32,
    /// Vertical color bleed radius, `[0, 5]`.
    pub color_bleed_v: f32,
    /// Deterministic R/B pixel shift, `[0, 10]`.
    pub chroma_phase: f32,
    /// Chromatic aberration R/B shift, `[0, 10]`.
    pub chromatic: f32,
    /// Blend toward luma, `[0, 100]` percent.
    pub chroma_loss: f32,
    /// Luma-correlated noise, `[0, 100]` percent.
    pub video_noise: f32,
    /// Independent per-channel noise, `[0, 100]` percent.
    pub noise: f32,
    /// Radial darkening, `[0, 100]` percent.
    pub vignette: f32,
    /// Box blur radius, `[0, 5]`.
    pub blur: f32,
    /// Odd-row darkening, `[0, 100]` percent.
    pub scanlines: f32,
    /// Randomized R/B sample offset, `[0, 20]`.
    pub color_shift: f32,
    /// Corner fade strength, `[0, 100]` percent.
    pub burn: f32,
    /// Periodic row shift magnitude, `[0, 50]`.
    pub tracking_noise: f32,
    /// Emboss convolution blend, `[0, 2]`.
    pub emboss: f32,
    /// Blur-glow blend, `[0, 100]` percent.
    pub tv_glow: f32,
    /// Sepia blend, `[0, 100]` percent.
    pub tape_age: f32,
    /// Dust spot density, `[0, 100]` percent.
    pub dust: f32,
    /// Scratch line count, `[0, 100]` percent.
    pub scratches: f32,
}

impl Default for EffectParameters {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            gamma: 1.0,
            black_point: 0.0,
            white_point: 255.0,
            grayscale: false,
            invert: false,
            sharpen: 0.0,
            edge_wave: 0.0,
            luma_smear: 0.0,
            color_bleed_h: 0.0,
            color_bleed_v: 0.0,
            chroma_phase: 0.0,
            chromatic: 0.0,
            chroma_loss: 0.0,
            video_noise: 0.0,
            noise: 0.0,
            vignette: 0.0,
            blur: 0.0,
            scanlines: 0.0,
            color_shift: 0.0,
            burn: 0.0,
            tracking_noise: 0.0,
            emboss: 0.0,
            tv_glow: 0.0,
            tape_age: 0.0,
            dust: 0.0,
            scratches: 0.0,
        }
    }
}

impl EffectParameters {
    /// Copy of the bundle with every numeric field clamped to its range.
    pub fn clamped(&self) -> Self {
        Self {
            brightness: self.brightness.clamp(-100.0, 100.0),
            contrast: self.contrast.clamp(-100.0, 100.0),
            saturation: self.saturation.clamp(-100.0, 100.0),
            gamma: self.gamma.clamp(0.1, 3.0),
            black_point: self.black_point.clamp(0.0, 128.0),
            white_point: self.white_point.clamp(127.0, 255.0),
            grayscale: self.grayscale,
            invert: self.invert,
            sharpen: self.sharpen.clamp(0.0, 3.0),
            edge_wave: self.edge_wave.clamp(0.0, 3.0),
            luma_smear: self.luma_smear.clamp(0.0, 10.0),
            color_bleed_h: self.color_bleed_h.clamp(0.0, 5.0),
            color_bleed_v: self.color_bleed_v.clamp(0.0, 5.0),
            chroma_phase: self.chroma_phase.clamp(0.0, 10.0),
            chromatic: self.chromatic.clamp(0.0, 10.0),
            chroma_loss: self.chroma_loss.clamp(0.0, 100.0),
            video_noise: self.video_noise.clamp(0.0, 100.0),
            noise: self.noise.clamp(0.0, 100.0),
            vignette: self.vignette.clamp(0.0, 100.0),
            blur: self.blur.clamp(0.0, 5.0),
            scanlines: self.scanlines.clamp(0.0, 100.0),
            color_shift: self.color_shift.clamp(0.0, 20.0),
            burn: self.burn.clamp(0.0, 100.0),
            tracking_noise: self.tracking_noise.clamp(0.0, 50.0),
            emboss: self.emboss.clamp(0.0, 2.0),
            tv_glow: self.tv_glow.clamp(0.0, 100.0),
            tape_age: self.tape_age.clamp(0.0, 100.0),
            dust: self.dust.clamp(0.0, 100.0),
            scratches: self.scratches.clamp(0.0, 100.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/params.rs"]
mod tests;

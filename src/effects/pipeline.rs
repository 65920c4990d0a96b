use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::effects::params::EffectParameters;
use crate::effects::{chroma, convolve, grade, overlay};
use crate::foundation::core::Bitmap;

/// Apply the full effect chain to one bitmap, drawing randomness from the
/// caller's source.
///
/// The stage order is fixed: later stages consume the output of earlier
/// ones, and the blends involved do not commute.
///
/// base grade -> emboss -> TV glow -> sharpen -> edge wave -> luma smear ->
/// color bleed H -> color bleed V -> chroma phase -> chroma loss ->
/// video noise -> vignette -> chromatic aberration -> blur -> color noise ->
/// scanlines -> color shift -> corner burn -> tracking noise -> tape age ->
/// dust -> scratches.
///
/// The base grade always runs; every other stage is skipped while its
/// controlling parameter sits at the neutral value, so the neutral bundle
/// returns the input unchanged. Parameters are clamped to their documented
/// ranges on entry. A zero-area bitmap is returned unchanged. Output
/// dimensions always equal input dimensions; alpha is never modified.
#[tracing::instrument(skip_all, fields(width = frame.width, height = frame.height))]
pub fn apply_effects_with<R: Rng>(
    frame: &Bitmap,
    params: &EffectParameters,
    rng: &mut R,
) -> Bitmap {
    let mut out = frame.clone();
    if out.is_empty() {
        return out;
    }
    let p = params.clamped();

    grade::grade(&mut out, &p);
    convolve::emboss(&mut out, p.emboss);
    convolve::tv_glow(&mut out, p.tv_glow);
    convolve::sharpen(&mut out, p.sharpen);
    chroma::edge_wave(&mut out, p.edge_wave);
    convolve::luma_smear(&mut out, p.luma_smear);
    convolve::color_bleed_h(&mut out, p.color_bleed_h);
    convolve::color_bleed_v(&mut out, p.color_bleed_v);
    chroma::chroma_phase(&mut out, p.chroma_phase);
    chroma::chroma_loss(&mut out, p.chroma_loss);
    overlay::video_noise(&mut out, p.video_noise, rng);
    overlay::vignette(&mut out, p.vignette);
    chroma::chromatic_aberration(&mut out, p.chromatic);
    convolve::box_blur(&mut out, p.blur);
    overlay::color_noise(&mut out, p.noise, rng);
    overlay::scanlines(&mut out, p.scanlines);
    chroma::color_shift(&mut out, p.color_shift, rng);
    overlay::corner_burn(&mut out, p.burn);
    chroma::tracking_noise(&mut out, p.tracking_noise, rng);
    overlay::tape_age(&mut out, p.tape_age);
    overlay::dust(&mut out, p.dust, rng);
    overlay::scratches(&mut out, p.scratches, rng);
    out
}

/// [`apply_effects_with`] against a freshly seeded OS-entropy source.
pub fn apply_effects(frame: &Bitmap, params: &EffectParameters) -> Bitmap {
    let mut rng = rand::rng();
    apply_effects_with(frame, params, &mut rng)
}

/// Deterministic [`apply_effects_with`]: the same seed reproduces the same
/// output bit for bit.
pub fn apply_effects_seeded(frame: &Bitmap, params: &EffectParameters, seed: u64) -> Bitmap {
    let mut rng = StdRng::seed_from_u64(seed);
    apply_effects_with(frame, params, &mut rng)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pipeline.rs"]
mod tests;

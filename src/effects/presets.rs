use crate::effects::params::EffectParameters;

/// A named, ready-to-use parameter bundle.
#[derive(Clone, Debug)]
pub struct Preset {
    /// Stable ASCII identifier, e.g. `classic-vhs`.
    pub name: &'static str,
    /// Full parameter bundle; fields the preset does not set stay neutral.
    pub params: EffectParameters,
}

/// The builtin preset catalog.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "original",
            params: EffectParameters::default(),
        },
        Preset {
            name: "classic-vhs",
            params: EffectParameters {
                brightness: -5.0,
                contrast: 15.0,
                saturation: -20.0,
                chromatic: 3.0,
                scanlines: 25.0,
                blur: 1.0,
                vignette: 30.0,
                sharpen: 0.8,
                color_bleed_h: 2.0,
                chroma_phase: 2.0,
                chroma_loss: 15.0,
                video_noise: 8.0,
                burn: 15.0,
                tracking_noise: 5.0,
                tv_glow: 20.0,
                tape_age: 30.0,
                dust: 20.0,
                scratches: 15.0,
                ..EffectParameters::default()
            },
        },
        Preset {
            name: "camcorder-90s",
            params: EffectParameters {
                brightness: 10.0,
                contrast: 20.0,
                saturation: 30.0,
                chromatic: 2.0,
                scanlines: 15.0,
                vignette: 20.0,
                sharpen: 1.2,
                color_bleed_h: 1.0,
                color_bleed_v: 1.0,
                chroma_phase: 1.0,
                video_noise: 5.0,
                color_shift: 3.0,
                burn: 10.0,
                tv_glow: 15.0,
                tape_age: 10.0,
                dust: 5.0,
                scratches: 5.0,
                ..EffectParameters::default()
            },
        },
        Preset {
            name: "damaged-tape",
            params: EffectParameters {
                brightness: -15.0,
                contrast: -10.0,
                saturation: -40.0,
                chromatic: 8.0,
                scanlines: 40.0,
                blur: 2.0,
                vignette: 50.0,
                edge_wave: 2.0,
                color_bleed_h: 4.0,
                color_bleed_v: 3.0,
                chroma_phase: 5.0,
                chroma_loss: 60.0,
                video_noise: 30.0,
                tracking_noise: 35.0,
                color_shift: 10.0,
                burn: 40.0,
                emboss: 0.3,
                tv_glow: 10.0,
                tape_age: 80.0,
                dust: 60.0,
                scratches: 50.0,
                ..EffectParameters::default()
            },
        },
        Preset {
            name: "dreamy-retro",
            params: EffectParameters {
                brightness: 5.0,
                contrast: 10.0,
                saturation: -30.0,
                gamma: 1.2,
                chromatic: 5.0,
                scanlines: 20.0,
                blur: 2.0,
                vignette: 70.0,
                sharpen: 0.3,
                luma_smear: 5.0,
                chroma_loss: 30.0,
                video_noise: 12.0,
                burn: 50.0,
                tv_glow: 60.0,
                emboss: 0.5,
                tape_age: 40.0,
                dust: 30.0,
                scratches: 20.0,
                ..EffectParameters::default()
            },
        },
        Preset {
            name: "bw-vintage",
            params: EffectParameters {
                brightness: -10.0,
                contrast: 30.0,
                grayscale: true,
                gamma: 1.3,
                scanlines: 35.0,
                vignette: 60.0,
                sharpen: 1.5,
                video_noise: 20.0,
                burn: 30.0,
                tracking_noise: 15.0,
                tv_glow: 25.0,
                tape_age: 70.0,
                dust: 50.0,
                scratches: 40.0,
                ..EffectParameters::default()
            },
        },
    ]
}

/// Look up a builtin preset by name (ASCII case-insensitive).
pub fn find_preset(name: &str) -> Option<EffectParameters> {
    builtin_presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .map(|p| p.params)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/presets.rs"]
mod tests;

//! Tapewarp turns clean bitmaps into degraded analog video.
//!
//! The crate is two tightly coupled halves:
//!
//! 1. **Frame compositing**: [`compose_frames`] reconstructs full-canvas
//!    bitmaps from a sequence of possibly-partial animation frame patches,
//!    applying per-frame [`Disposal`] rules between frames.
//! 2. **Effect pipeline**: [`apply_effects`] runs a fixed-order chain of
//!    per-pixel and convolution filters (tone grading, chroma errors, tape
//!    noise, wear overlays) over one RGBA bitmap. The stage order is
//!    load-bearing and documented on [`apply_effects_with`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every randomized stage draws from an
//!   injected random source; [`apply_effects_seeded`] reproduces output
//!   bit-for-bit for a given seed, and [`process_frames`] produces the same
//!   bytes on its sequential and parallel paths.
//! - **No IO in the engine**: the engine consumes and produces raw RGBA
//!   buffers. Container decode and file output belong to callers (see the
//!   `tapewarp-cli` crate).
//! - **Straight RGBA8 end-to-end**: effect stages never touch alpha.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod foundation;
mod render;

pub use animation::compositor::{Disposal, FramePatch, compose_frames};
pub use effects::params::EffectParameters;
pub use effects::pipeline::{apply_effects, apply_effects_seeded, apply_effects_with};
pub use effects::presets::{Preset, builtin_presets, find_preset};
pub use foundation::core::Bitmap;
pub use foundation::error::{TapewarpError, TapewarpResult};
pub use render::pipeline::{RenderThreading, process_frames};

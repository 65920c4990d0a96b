use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::effects::params::EffectParameters;
use crate::effects::pipeline::apply_effects_with;
use crate::foundation::core::Bitmap;
use crate::foundation::error::{TapewarpError, TapewarpResult};

/// Threading configuration for multi-frame processing.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Process frames on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

// Odd 64-bit mixing constant (2^64 / phi) for per-frame seed derivation.
const FRAME_SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

fn frame_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(FRAME_SEED_MIX))
}

/// Run the effect pipeline over every frame.
///
/// Frame order is preserved. Each frame gets its own random source derived
/// from `seed` and the frame index, so for a fixed seed the sequential and
/// parallel paths produce identical bytes; there is no inter-frame data
/// dependency in the effect stage. Compositing, by contrast, is a strictly
/// sequential fold; see [`crate::compose_frames`].
#[tracing::instrument(skip(frames, params), fields(frames = frames.len()))]
pub fn process_frames(
    frames: &[Bitmap],
    params: &EffectParameters,
    threading: &RenderThreading,
    seed: u64,
) -> TapewarpResult<Vec<Bitmap>> {
    if !threading.parallel {
        let mut out = Vec::with_capacity(frames.len());
        for (i, frame) in frames.iter().enumerate() {
            let mut rng = frame_rng(seed, i);
            out.push(apply_effects_with(frame, params, &mut rng));
        }
        return Ok(out);
    }

    let pool = build_thread_pool(threading.threads)?;
    let out = pool.install(|| {
        frames
            .par_iter()
            .enumerate()
            .map(|(i, frame)| {
                let mut rng = frame_rng(seed, i);
                apply_effects_with(frame, params, &mut rng)
            })
            .collect()
    });
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> TapewarpResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TapewarpError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TapewarpError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

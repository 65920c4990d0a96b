use crate::foundation::core::Bitmap;
use crate::foundation::error::{TapewarpError, TapewarpResult};

/// How the canvas is treated after a frame has been shown, before the next
/// frame is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disposal {
    /// Container codes 0/1: leave the canvas as drawn.
    #[default]
    Keep,
    /// Container code 2: clear the canvas to fully transparent.
    Background,
    /// Container code 3: restore the canvas to its state from just before
    /// this frame's patch was drawn.
    Previous,
}

impl Disposal {
    /// Map a raw container disposal code. Unknown codes behave like `Keep`.
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Background,
            3 => Self::Previous,
            _ => Self::Keep,
        }
    }
}

/// One decoded animation frame: a possibly-partial RGBA patch plus the
/// instructions needed to place it and dispose of it.
///
/// Patches come from an external container decoder and are consumed exactly
/// once by [`compose_frames`].
#[derive(Clone, Debug)]
pub struct FramePatch {
    /// Horizontal offset of the patch on the canvas.
    pub left: u32,
    /// Vertical offset of the patch on the canvas.
    pub top: u32,
    /// Patch width in pixels.
    pub width: u32,
    /// Patch height in pixels.
    pub height: u32,
    /// Disposal applied after this frame, before the next one draws.
    pub disposal: Disposal,
    /// Straight RGBA8 pixels, `width * height * 4` long.
    pub rgba: Vec<u8>,
}

impl FramePatch {
    fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
    }
}

/// Resolve a patch sequence into one full-canvas bitmap per input frame.
///
/// The canvas starts fully transparent. For each patch, in order:
///
/// 1. apply the *previous* frame's disposal ([`Disposal::Background`]
///    clears the canvas, [`Disposal::Previous`] restores the snapshot taken
///    just before the previous patch was drawn, [`Disposal::Keep`] leaves
///    the canvas alone),
/// 2. snapshot the canvas,
/// 3. blit the patch at `(left, top)`: source pixels replace destination
///    pixels, no alpha blending, silently clipped to the canvas bounds,
/// 4. emit a copy of the full canvas.
///
/// Disposal state is a linear recurrence over frame order, so this fold is
/// strictly sequential.
///
/// # Errors
///
/// [`TapewarpError::EmptyAnimation`] for an empty patch list,
/// [`TapewarpError::InvalidDimensions`] for a zero canvas dimension, and a
/// validation error for a patch whose buffer length does not match its
/// declared size.
#[tracing::instrument(skip(patches), fields(frames = patches.len()))]
pub fn compose_frames(
    patches: &[FramePatch],
    canvas_width: u32,
    canvas_height: u32,
) -> TapewarpResult<Vec<Bitmap>> {
    if patches.is_empty() {
        return Err(TapewarpError::EmptyAnimation);
    }
    if canvas_width == 0 || canvas_height == 0 {
        return Err(TapewarpError::InvalidDimensions {
            width: canvas_width,
            height: canvas_height,
        });
    }
    for (i, patch) in patches.iter().enumerate() {
        if patch.expected_len() != Some(patch.rgba.len()) {
            return Err(TapewarpError::validation(format!(
                "frame {i}: patch buffer length {} does not match {}x{} rgba8",
                patch.rgba.len(),
                patch.width,
                patch.height
            )));
        }
    }

    let mut canvas = Bitmap::new(canvas_width, canvas_height);
    // Snapshot from just before the previous patch was drawn; the target of
    // a `Previous` disposal.
    let mut before_prev_draw: Option<Bitmap> = None;
    let mut prev_disposal = Disposal::Keep;
    let mut out = Vec::with_capacity(patches.len());

    for (i, patch) in patches.iter().enumerate() {
        if i > 0 {
            match prev_disposal {
                Disposal::Keep => {}
                Disposal::Background => canvas.data.fill(0),
                Disposal::Previous => {
                    if let Some(snapshot) = &before_prev_draw {
                        canvas = snapshot.clone();
                    }
                }
            }
        }
        before_prev_draw = Some(canvas.clone());
        blit(&mut canvas, patch);
        out.push(canvas.clone());
        prev_disposal = patch.disposal;
    }
    Ok(out)
}

fn blit(canvas: &mut Bitmap, patch: &FramePatch) {
    if patch.left >= canvas.width || patch.top >= canvas.height {
        return;
    }
    let w = patch.width.min(canvas.width - patch.left);
    let h = patch.height.min(canvas.height - patch.top);
    for row in 0..h {
        let src_start = (row as usize) * (patch.width as usize) * 4;
        let dst_start = canvas.offset(patch.left, patch.top + row);
        let n = (w as usize) * 4;
        canvas.data[dst_start..dst_start + n]
            .copy_from_slice(&patch.rgba[src_start..src_start + n]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/compositor.rs"]
mod tests;

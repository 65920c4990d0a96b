use crate::foundation::error::{TapewarpError, TapewarpResult};

/// A rectangular buffer of straight (non-premultiplied) RGBA8 pixels.
///
/// Pixels are interleaved `[r, g, b, a]`, row-major, top-left origin.
/// Invariant: `data.len() == width * height * 4`. Constructors uphold it;
/// everything in this crate mutates `data` without changing its length.
///
/// Zero-area bitmaps are legal values; the effect pipeline treats them as
/// a no-op. Only the compositor rejects a zero-sized canvas request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Interleaved RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Allocate a fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        Self {
            width,
            height,
            data: vec![0u8; len],
        }
    }

    /// Wrap an existing RGBA8 buffer, validating its length.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> TapewarpResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| TapewarpError::validation("bitmap size overflow"))?;
        if data.len() != expected {
            return Err(TapewarpError::validation(format!(
                "bitmap buffer length {} does not match {width}x{height} rgba8",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Byte offset of pixel `(x, y)`. Callers must pass in-bounds coords.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

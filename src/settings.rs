use crate::constants::{DEFAULT_QUALITY, DEFAULT_TARGET_WIDTH, MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressError, Result};

/// Output sizing and encoding parameters shared by every backend.
///
/// Quality uses one convention everywhere: 0-100, higher is better, the same
/// scale the JPEG encoder exposes. Backends that speak a different scale (the
/// ffmpeg qscale is 2-31, lower is better) convert internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSettings {
    pub target_width: u32,
    pub quality: u8,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl CompressionSettings {
    pub fn new(target_width: Option<u32>, quality: Option<u8>) -> Result<Self> {
        let target_width = target_width.unwrap_or(DEFAULT_TARGET_WIDTH);
        if target_width == 0 {
            return Err(CompressError::InvalidTargetWidth(target_width));
        }

        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressError::InvalidQuality(quality));
        }

        Ok(Self {
            target_width,
            quality,
        })
    }

    /// Height that keeps the source aspect ratio at `target_width`:
    /// `round(target_width * h / w)`, never below 1 pixel.
    pub fn target_height(&self, width: u32, height: u32) -> u32 {
        let scaled = (self.target_width as f64 * height as f64 / width as f64).round();
        (scaled as u32).max(1)
    }
}

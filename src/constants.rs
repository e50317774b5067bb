/// Default output width in pixels. Every image is scaled to this width,
/// preserving aspect ratio.
pub const DEFAULT_TARGET_WIDTH: u32 = 1920;

/// Default JPEG quality on the 0-100 higher-is-better scale.
pub const DEFAULT_QUALITY: u8 = 60;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Name of the per-directory output folder. Matched case-sensitively during
/// traversal so outputs from earlier runs are never picked up as inputs.
pub const COMPRESSED_DIR_NAME: &str = "Compressed";

/// Extensions (lowercased) accepted as transcoder input.
pub const ELIGIBLE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// ffmpeg qscale bounds for mjpeg. Lower is better quality there; the 0-100
/// scale used everywhere else in this crate is mapped into this range.
pub const FFMPEG_QSCALE_BEST: u8 = 2;
pub const FFMPEG_QSCALE_WORST: u8 = 31;

use crate::constants::{COMPRESSED_DIR_NAME, FFMPEG_QSCALE_BEST, FFMPEG_QSCALE_WORST, MAX_QUALITY};
use crate::error::{CompressError, Result};
use crate::settings::CompressionSettings;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{GenericImageView, ImageReader};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where a source file's compressed copy goes:
/// `<source dir>/Compressed/<stem>.jpg`, one such folder per directory level.
pub fn output_location(source: &Path) -> PathBuf {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let mut name = source
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(".jpg");
    dir.join(COMPRESSED_DIR_NAME).join(name)
}

/// One decode-resize-encode step, treated as a black box by the batch runner.
/// Implementations overwrite any existing file at the output location.
pub trait Transcoder {
    /// Compress `source` according to `settings` and return the path written.
    fn transcode(&self, source: &Path, settings: &CompressionSettings) -> Result<PathBuf>;
}

/// Which transcoding backend to run. A deployment choice, not a per-file one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    /// In-process decode/resize/encode via the image crate.
    #[default]
    Library,
    /// Shell out to ffmpeg; requires it on PATH.
    Ffmpeg,
}

pub fn make_transcoder(backend: Backend) -> Box<dyn Transcoder> {
    match backend {
        Backend::Library => Box::new(LibraryTranscoder),
        Backend::Ffmpeg => Box::new(FfmpegTranscoder::default()),
    }
}

fn ensure_output_dir(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|_| CompressError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }
    Ok(())
}

/// In-process backend built on the image crate.
pub struct LibraryTranscoder;

impl Transcoder for LibraryTranscoder {
    fn transcode(&self, source: &Path, settings: &CompressionSettings) -> Result<PathBuf> {
        let img = ImageReader::open(source)?.decode()?;
        let (width, height) = img.dimensions();

        let target_height = settings.target_height(width, height);
        let resized = img.resize_exact(settings.target_width, target_height, FilterType::Lanczos3);

        let output = output_location(source);
        ensure_output_dir(&output)?;

        // JPEG has no alpha channel; flatten PNG inputs to RGB before encoding.
        let file = File::create(&output)?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, settings.quality);
        resized.to_rgb8().write_with_encoder(encoder)?;

        Ok(output)
    }
}

/// External-process backend. Runs ffmpeg with an aspect-preserving scale
/// filter and treats any non-zero exit as a per-file failure.
pub struct FfmpegTranscoder {
    program: String,
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
        }
    }
}

impl FfmpegTranscoder {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Convert the crate-wide 0-100 higher-is-better quality to ffmpeg's
    /// 2-31 lower-is-better qscale.
    fn qscale(quality: u8) -> u8 {
        let span = (FFMPEG_QSCALE_WORST - FFMPEG_QSCALE_BEST) as f64;
        let scaled = (quality as f64 / MAX_QUALITY as f64 * span).round() as u8;
        (FFMPEG_QSCALE_WORST - scaled).clamp(FFMPEG_QSCALE_BEST, FFMPEG_QSCALE_WORST)
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, source: &Path, settings: &CompressionSettings) -> Result<PathBuf> {
        let output = output_location(source);
        ensure_output_dir(&output)?;

        let result = Command::new(&self.program)
            .arg("-y")
            .args(["-loglevel", "error"])
            .arg("-i")
            .arg(source)
            .args(["-vf", &format!("scale={}:-1", settings.target_width)])
            .args(["-q:v", &Self::qscale(settings.quality).to_string()])
            .arg(&output)
            .output()?;

        if !result.status.success() {
            return Err(CompressError::ExternalTool {
                path: source.to_path_buf(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};
    use tempfile::TempDir;

    fn write_test_png(path: &Path, width: u32, height: u32) {
        DynamicImage::new_rgb8(width, height).save(path).unwrap();
    }

    #[test]
    fn test_output_location() {
        let result = output_location(Path::new("/photos/trip/beach.png"));
        assert_eq!(result, PathBuf::from("/photos/trip/Compressed/beach.jpg"));
    }

    #[test]
    fn test_output_location_keeps_jpg_extension() {
        let result = output_location(Path::new("/photos/cat.jpeg"));
        assert_eq!(result, PathBuf::from("/photos/Compressed/cat.jpg"));
    }

    #[test]
    fn test_qscale_mapping() {
        // Best quality maps to the low end of the qscale range.
        assert_eq!(FfmpegTranscoder::qscale(100), 2);
        assert_eq!(FfmpegTranscoder::qscale(1), 31);
        // Higher quality never yields a worse qscale.
        let mut last = u8::MAX;
        for q in 1..=100 {
            let scale = FfmpegTranscoder::qscale(q);
            assert!((2..=31).contains(&scale));
            assert!(scale <= last);
            last = scale;
        }
    }

    #[test]
    fn test_library_transcoder_resizes_and_writes_jpeg() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("photo.png");
        write_test_png(&source, 100, 50);

        let settings = CompressionSettings::new(Some(64), Some(80)).unwrap();
        let output = LibraryTranscoder.transcode(&source, &settings).unwrap();

        assert_eq!(output, temp_dir.path().join("Compressed").join("photo.jpg"));
        let written = ImageReader::open(&output).unwrap().decode().unwrap();
        assert_eq!(written.dimensions(), (64, 32));
    }

    #[test]
    fn test_library_transcoder_upscales_small_images() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("tiny.jpg");
        DynamicImage::new_rgb8(10, 20)
            .to_rgb8()
            .save_with_format(&source, image::ImageFormat::Jpeg)
            .unwrap();

        let settings = CompressionSettings::new(Some(100), Some(60)).unwrap();
        let output = LibraryTranscoder.transcode(&source, &settings).unwrap();

        let written = ImageReader::open(&output).unwrap().decode().unwrap();
        assert_eq!(written.dimensions(), (100, 200));
    }

    #[test]
    fn test_library_transcoder_flattens_alpha() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("overlay.png");
        DynamicImage::ImageRgba8(RgbaImage::new(40, 40))
            .save(&source)
            .unwrap();

        let settings = CompressionSettings::new(Some(20), Some(60)).unwrap();
        let output = LibraryTranscoder.transcode(&source, &settings).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_library_transcoder_overwrites_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("photo.png");
        write_test_png(&source, 80, 80);

        let settings = CompressionSettings::new(Some(40), Some(60)).unwrap();
        let first = LibraryTranscoder.transcode(&source, &settings).unwrap();

        let settings = CompressionSettings::new(Some(20), Some(60)).unwrap();
        let second = LibraryTranscoder.transcode(&source, &settings).unwrap();

        assert_eq!(first, second);
        let written = ImageReader::open(&second).unwrap().decode().unwrap();
        assert_eq!(written.dimensions(), (20, 20));
    }

    #[test]
    fn test_library_transcoder_corrupt_input_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("broken.jpg");
        std::fs::write(&source, b"not actually a jpeg").unwrap();

        let settings = CompressionSettings::default();
        let result = LibraryTranscoder.transcode(&source, &settings);
        assert!(result.is_err());
        // No stray Compressed output for the failed file.
        assert!(!output_location(&source).exists());
    }

    #[test]
    fn test_ffmpeg_transcoder_missing_binary_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("photo.png");
        write_test_png(&source, 10, 10);

        let transcoder = FfmpegTranscoder::with_program("definitely-not-ffmpeg");
        let result = transcoder.transcode(&source, &CompressionSettings::default());
        assert!(result.is_err());
    }
}

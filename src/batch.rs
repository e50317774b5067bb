use crate::error::{CompressError, Result};
use crate::settings::CompressionSettings;
use crate::transcode::Transcoder;
use crate::walker::collect_image_files;
use crate::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Outcome of one compression pass over a directory tree.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failures: Vec<(PathBuf, CompressError)>,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn processed(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    /// True when some files compressed and at least one did not.
    pub fn is_partial_failure(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Run one compression pass: walk `root`, transcode every eligible file
/// strictly in sequence, and aggregate per-file outcomes.
///
/// A failing file is reported and counted but never aborts the batch; only an
/// unusable root directory makes this return `Err`. When the tree holds no
/// eligible files nothing is written, so no `Compressed` folder appears.
pub fn run_batch(
    root: &Path,
    settings: &CompressionSettings,
    transcoder: &dyn Transcoder,
) -> Result<BatchSummary> {
    let image_files = collect_image_files(root)?;

    if image_files.is_empty() {
        info!("⚠️  No image files found under {:?}", root);
        return Ok(BatchSummary::default());
    }

    verbose!("Found {} image files under {:?}", image_files.len(), root);

    let mut summary = BatchSummary::default();

    for source in image_files {
        match transcoder.transcode(&source, settings) {
            Ok(_) => {
                summary.succeeded += 1;
                info!(
                    "✅ Compressed {}",
                    source.file_name().unwrap_or(source.as_os_str()).to_string_lossy()
                );
            }
            Err(e) => {
                error!("Failed to compress {:?}: {}", source, e);
                summary.failures.push((source, e));
            }
        }
    }

    info!(
        "📊 Done: {} compressed, {} failed",
        summary.succeeded,
        summary.failed()
    );

    Ok(summary)
}

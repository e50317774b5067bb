pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod settings;
pub mod transcode;
pub mod walker;

pub use batch::{run_batch, BatchSummary};
pub use error::{CompressError, Result};
pub use settings::CompressionSettings;
pub use transcode::{
    make_transcoder, output_location, Backend, FfmpegTranscoder, LibraryTranscoder, Transcoder,
};
pub use walker::{collect_image_files, is_eligible_file};

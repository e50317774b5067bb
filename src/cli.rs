use crate::transcode::Backend;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "photo-press",
    about = "Batch-compress a photo folder into sibling Compressed directories",
    long_about = "photo-press walks a directory tree, resizes every JPEG/PNG photo to a \
                  fixed width, and re-encodes it as JPEG into a Compressed folder next to \
                  the original. Originals are never modified, and Compressed folders from \
                  earlier runs are never reprocessed.",
    version,
    after_help = "EXAMPLES:\n  \
    photo-press ~/Pictures/Holiday\n  \
    photo-press ./photos -w 1280 -q 75\n  \
    photo-press ./photos --backend ffmpeg --quiet\n\n\
    EXIT STATUS:\n  \
    0  every file compressed (or none found)\n  \
    1  fatal error before processing (bad root, invalid settings)\n  \
    2  completed, but some files failed"
)]
pub struct Args {
    #[arg(help = "Root directory containing the photos to compress")]
    pub root: PathBuf,

    #[arg(
        short = 'w',
        long,
        help = "Target output width in pixels (default: 1920)",
        long_help = "Every image is resized to exactly this width; the height is derived \
                     from the source aspect ratio."
    )]
    pub width: Option<u32>,

    #[arg(
        short = 'q',
        long,
        help = "JPEG quality (1-100, higher is better, default: 60)",
        long_help = "JPEG quality from 1 (smallest files) to 100 (best fidelity). \
                     The same scale applies to both backends; the ffmpeg backend \
                     translates it to a qscale value internally."
    )]
    pub quality: Option<u8>,

    #[arg(
        short = 'b',
        long,
        value_enum,
        default_value_t = Backend::Library,
        help = "Transcoding backend",
        long_help = "Which backend performs the decode/resize/encode step. 'library' runs \
                     in-process; 'ffmpeg' shells out to an ffmpeg binary on PATH."
    )]
    pub backend: Backend,

    #[arg(long, help = "Suppress per-file output")]
    pub quiet: bool,

    #[arg(long, help = "Print extra diagnostics")]
    pub verbose: bool,
}

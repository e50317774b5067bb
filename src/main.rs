use clap::Parser;
use photo_press::batch::run_batch;
use photo_press::cli::Args;
use photo_press::error;
use photo_press::logger;
use photo_press::settings::CompressionSettings;
use photo_press::transcode::make_transcoder;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    logger::init(args.quiet, args.verbose);

    let settings = match CompressionSettings::new(args.width, args.quality) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let transcoder = make_transcoder(args.backend);

    match run_batch(&args.root, &settings, transcoder.as_ref()) {
        Ok(summary) if summary.is_partial_failure() => ExitCode::from(2),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

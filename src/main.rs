use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use blur_image_rs::image_pipeline::{BlurConfig, BlurPipeline, OutputFormat};
use blur_image_rs::logger;

use tracing::{error, info};

/// Applies a 3x3 blur to an image and writes `<name>_blurred.jpg`
#[derive(Debug, FromArgs)]
struct Args {
    /// path of the image to blur
    #[argh(positional)]
    input: PathBuf,

    /// output encoding: png (default) or jpeg
    #[argh(option, short = 'f', default = "OutputFormat::Png", from_str_fn(to_output_format))]
    format: OutputFormat,

    /// jpeg quality 1-100, only used with --format jpeg
    #[argh(option, short = 'q', default = "90")]
    quality: u8,

    /// directory for the output file (defaults to the current directory)
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn to_output_format(value: &str) -> Result<OutputFormat, String> {
    match value.to_ascii_lowercase().as_str() {
        "png" => Ok(OutputFormat::Png),
        "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
        other => Err(format!("unsupported output format: {other}")),
    }
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    logger::init(args.verbose);

    let config = BlurConfig::builder()
        .output_format(args.format)
        .jpeg_quality(args.quality)
        .output_dir(args.output_dir)
        .build();
    let pipeline = BlurPipeline::new(config);

    info!("Output format: {:?}", pipeline.config().output_format);

    match pipeline.blur_file(&args.input) {
        Ok(output) => {
            info!(output = %output.display(), "Image blurred");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Blur failed: {}", e);
            // stderr diagnostic independent of the log filter
            eprintln!("blur_image: {e}");
            ExitCode::FAILURE
        }
    }
}

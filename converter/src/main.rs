mod load;
mod output;
mod resize;

use std::path::PathBuf;

use c64mc_core::background::parse_background;
use c64mc_core::compress::stream_sizes;
use c64mc_core::format::{HEIGHT, WIDTH};
use c64mc_core::OutputFormat;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::load::load_rgb;
use crate::output::write_output;
use crate::resize::BitmapResizer;

#[derive(Parser, Debug)]
#[command(
    name = "c64mc-convert",
    about = "Convert an image to a Commodore 64 multi-colour bitmap"
)]
struct Cli {
    /// The image file to read
    input: PathBuf,

    /// Output filename
    output: PathBuf,

    /// Output file format: S, H or PRG
    #[arg(short, long, default_value = "S")]
    format: OutputFormat,

    /// Background colour 0-15 (default: most used colour)
    #[arg(short, long, value_parser = parse_background, allow_hyphen_values = true)]
    background: Option<u8>,

    /// Image ID used as the label prefix in S and H files
    #[arg(long, default_value = "image")]
    id: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Argument errors print usage and exit here, before any file is touched.
    let cli = Cli::parse();

    let source = load_rgb(&cli.input)?;
    info!(
        "Source: {}x{} pixels, target {WIDTH}x{HEIGHT}",
        source.width, source.height
    );

    let mut resizer = BitmapResizer::new();
    let rgb = resizer.resize(source.data, source.width, source.height)?;

    let image = c64mc_core::convert(&rgb, cli.background)?;

    let sizes = stream_sizes(&image);
    info!(
        bitmap = sizes.bitmap,
        screen = sizes.screen,
        colour = sizes.colour,
        "LZ4 stream sizes: {} bytes total",
        sizes.total()
    );

    let written = write_output(&cli.output, &image, cli.format, &cli.id)?;
    info!("Wrote {} ({written} bytes, format {})", cli.output.display(), cli.format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_invocation() {
        let cli = Cli::try_parse_from(["c64mc-convert", "in.png", "out.s"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Source);
        assert_eq!(cli.background, None);
        assert_eq!(cli.id, "image");
    }

    #[test]
    fn format_is_case_insensitive() {
        let cli = Cli::try_parse_from(["c64mc-convert", "in.png", "out.prg", "-f", "prg"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Prg);
        let cli = Cli::try_parse_from(["c64mc-convert", "in.png", "out.h", "--format", "h"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Header);
    }

    #[test]
    fn explicit_black_background_is_kept() {
        let cli = Cli::try_parse_from(["c64mc-convert", "in.png", "out.s", "-b", "0"]).unwrap();
        assert_eq!(cli.background, Some(0));
    }

    #[test]
    fn bad_arguments_are_rejected_without_touching_files() {
        // The input path does not exist; parsing must fail on the option first.
        let missing = "/nonexistent/in.png";
        let err = Cli::try_parse_from(["c64mc-convert", missing, "out.s", "-f", "X"]).unwrap_err();
        assert!(err.to_string().contains("Invalid output format X"));
        let err = Cli::try_parse_from(["c64mc-convert", missing, "out.s", "-b", "20"]).unwrap_err();
        assert!(err.to_string().contains("Invalid background colour 20"));
        let err = Cli::try_parse_from(["c64mc-convert", missing, "out.s", "-b", "-3"]).unwrap_err();
        assert!(err.to_string().contains("Invalid background colour -3"));
    }
}

//! vibrance - perceptual saturation adjustment for raster images.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vibrance_cli::commands::{self, calibrate, formats, saturate, spaces};
use vibrance_core::CancelToken;

#[derive(Parser)]
#[command(name = "vibrance")]
#[command(author, version, about = "Perceptual saturation adjustment for raster images")]
#[command(long_about = "
Adjusts color saturation by operating on the chroma axis of a perceptually
motivated color space instead of scaling RGB.

Examples:
  vibrance spaces                                # list color spaces
  vibrance formats                               # list save formats
  vibrance saturate photo.jpg -g 0.4             # boost, Oklch, masked
  vibrance saturate '*.png' -s HSLuv -g -0.5     # desaturate a batch
  vibrance saturate in.png -g 0.8 --mask false -f png16
  vibrance calibrate --step 5                    # re-derive norm constants
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Adjust saturation of one or more images
    #[command(visible_alias = "s")]
    Saturate(saturate::SaturateArgs),

    /// List the registered color spaces in selector order
    Spaces,

    /// List the registered save formats
    Formats,

    /// Re-derive the per-space normalization constants (slow)
    Calibrate(calibrate::CalibrateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Saturate(args) => {
            let summary = saturate::run(args, &CancelToken::new())?;
            commands::report_batch(&summary, cli.verbose)
        }
        Commands::Spaces => {
            spaces::run();
            Ok(())
        }
        Commands::Formats => {
            formats::run();
            Ok(())
        }
        Commands::Calibrate(args) => {
            calibrate::run(args);
            Ok(())
        }
    }
}

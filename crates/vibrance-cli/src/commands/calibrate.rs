//! Offline normalization search command.
//!
//! Prints, per color space, the largest chroma value found in the sampled
//! RGB cube and one triple attaining it. With the default step of 1 this
//! scans all 16.7M triples and is the authoritative source for the
//! constants baked into the adapter table.

use clap::Args;

use vibrance_color::calibrate_with_step;

/// Arguments for `vibrance calibrate`.
#[derive(Args, Debug, Clone)]
pub struct CalibrateArgs {
    /// Sample every Nth code value per axis (1 = full cube, slow)
    #[arg(long, default_value_t = 1)]
    pub step: usize,
}

/// Runs the search and prints the per-space maxima.
pub fn run(args: CalibrateArgs) {
    if args.step > 1 {
        println!("subsampled cube (step {}), values are approximate:", args.step);
    }
    for result in calibrate_with_step(args.step) {
        let (r, g, b) = result.attaining_rgb;
        println!(
            "{:10} max {:.17} at ({}, {}, {})",
            result.space.name(),
            result.max_value,
            r,
            g,
            b
        );
    }
}

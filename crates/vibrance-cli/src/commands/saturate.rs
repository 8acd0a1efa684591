//! Batch saturation command.
//!
//! Expands globs, builds one engine for the run, then processes the inputs
//! on rayon workers. A failing input (unreadable file, undecodable content,
//! unwritable output) is collected and reported at the end; the other
//! inputs still process and save. Cancellation stops issuing work but is
//! reported as an outcome, not a failure.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use rayon::prelude::*;
use tracing::{debug, info};

use vibrance_color::{ColorSpace, GainConfig, SaturationEngine};
use vibrance_core::CancelToken;
use vibrance_io::{SaveFormat, output_path, read};
use vibrance_ops::{OpsError, pipeline};

/// Arguments for `vibrance saturate`.
#[derive(Args, Debug, Clone)]
pub struct SaturateArgs {
    /// Input images (paths or glob patterns)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Color space to adjust in (see `vibrance spaces`)
    #[arg(short, long, default_value = "Oklch")]
    pub space: String,

    /// Gain in [-1, 1]: positive boosts, negative desaturates
    #[arg(short, long, allow_hyphen_values = true)]
    pub gain: f64,

    /// Taper the adjustment near clipping boundaries
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub mask: bool,

    /// Save format (see `vibrance formats`); defaults to a PNG matching the
    /// source's alpha and bit depth
    #[arg(short, long)]
    pub format: Option<String>,
}

/// What happened to a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Output paths written successfully.
    pub saved: Vec<PathBuf>,
    /// Inputs that failed, with the reason; the rest still processed.
    pub failed: Vec<(PathBuf, String)>,
    /// Inputs skipped because the token was raised.
    pub cancelled: usize,
}

/// Runs the batch.
///
/// # Errors
///
/// Configuration errors (unknown space or format, out-of-range gain, no
/// matching inputs) fail the whole run up front. Per-file errors do not -
/// they land in the summary.
pub fn run(args: SaturateArgs, token: &CancelToken) -> Result<BatchSummary> {
    let space: ColorSpace = args.space.parse()?;
    let config = GainConfig::new(space, args.gain, args.mask)?;
    let engine = SaturationEngine::build(config);
    let format = args
        .format
        .as_deref()
        .map(SaveFormat::parse)
        .transpose()?;

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        bail!("no inputs match {:?}", args.inputs);
    }
    info!(
        files = files.len(),
        space = %space,
        gain = args.gain,
        mask = args.mask,
        "starting batch"
    );

    let results: Vec<(PathBuf, Result<Option<PathBuf>>)> = files
        .into_par_iter()
        .map(|input| {
            let outcome = process_file(&input, &engine, format, token);
            (input, outcome)
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (input, outcome) in results {
        match outcome {
            Ok(Some(output)) => summary.saved.push(output),
            Ok(None) => summary.cancelled += 1,
            Err(e) => summary.failed.push((input, format!("{e:#}"))),
        }
    }
    info!(
        saved = summary.saved.len(),
        failed = summary.failed.len(),
        cancelled = summary.cancelled,
        "batch complete"
    );
    Ok(summary)
}

/// Processes one input; `Ok(None)` means the run was cancelled under it.
fn process_file(
    input: &PathBuf,
    engine: &SaturationEngine,
    format: Option<SaveFormat>,
    token: &CancelToken,
) -> Result<Option<PathBuf>> {
    let loaded = read(input).with_context(|| format!("failed to load {}", input.display()))?;
    let mut buffer = loaded.buffer;

    match pipeline::apply(&mut buffer, engine, token) {
        Ok(()) => {}
        Err(OpsError::Cancelled) => return Ok(None),
    }

    let format = format.unwrap_or_else(|| SaveFormat::default_for(loaded.has_alpha, loaded.sixteen_bit));
    let output = output_path(input, format.extension())?;
    format
        .save(&output, &buffer)
        .with_context(|| format!("failed to save {}", output.display()))?;
    debug!(input = %input.display(), output = %output.display(), "saturated");
    Ok(Some(output))
}

/// Expands glob patterns and plain paths, preserving argument order.
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.contains(['*', '?', '[']) {
            let matched: Vec<PathBuf> = glob::glob(input)
                .with_context(|| format!("bad glob pattern '{input}'"))?
                .filter_map(|r| r.ok())
                .collect();
            files.extend(matched);
        } else {
            files.push(PathBuf::from(input));
        }
    }
    files.dedup();
    Ok(files)
}

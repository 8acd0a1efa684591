//! CLI command implementations.

pub mod calibrate;
pub mod formats;
pub mod saturate;
pub mod spaces;

use anyhow::Result;

use saturate::BatchSummary;

/// Prints the batch outcome and turns collected failures into the exit code.
///
/// Failures were already collected per file; none of them aborted the rest
/// of the batch. Cancellation is not a failure and only gets a note.
pub fn report_batch(summary: &BatchSummary, verbose: bool) -> Result<()> {
    if verbose {
        for path in &summary.saved {
            println!("saved {}", path.display());
        }
    }
    for (path, reason) in &summary.failed {
        eprintln!("error: {}: {}", path.display(), reason);
    }
    if summary.cancelled > 0 {
        println!("cancelled with {} file(s) unprocessed", summary.cancelled);
    }
    println!(
        "Processed: {} saved, {} failed",
        summary.saved.len(),
        summary.failed.len()
    );

    if !summary.failed.is_empty() {
        anyhow::bail!("{} file(s) failed", summary.failed.len());
    }
    Ok(())
}

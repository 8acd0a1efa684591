//! Batch-level behavior of the saturate command.

use std::path::Path;

use vibrance_cli::commands::saturate::{self, SaturateArgs};
use vibrance_core::{CancelToken, PixelBuffer};
use vibrance_io::SaveFormat;

fn args(inputs: Vec<String>, gain: f64) -> SaturateArgs {
    SaturateArgs {
        inputs,
        space: "Oklch".to_string(),
        gain,
        mask: true,
        format: None,
    }
}

fn write_test_png(path: &Path) {
    let buffer = PixelBuffer::filled(8, 8, [0.6, 0.3, 0.2, 1.0]);
    SaveFormat::Png8Alpha.save(path, &buffer).unwrap();
}

#[test]
fn one_bad_input_does_not_abort_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let good_a = dir.path().join("a.png");
    let good_b = dir.path().join("b.png");
    let missing = dir.path().join("missing.png");
    write_test_png(&good_a);
    write_test_png(&good_b);

    let inputs = vec![
        good_a.display().to_string(),
        missing.display().to_string(),
        good_b.display().to_string(),
    ];
    let summary = saturate::run(args(inputs, 0.4), &CancelToken::new()).unwrap();

    assert_eq!(summary.saved.len(), 2);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.cancelled, 0);
    assert!(summary.failed[0].0.ends_with("missing.png"));
    for output in &summary.saved {
        assert!(output.exists(), "{} was not written", output.display());
    }
    assert!(dir.path().join("a_saturated.png").exists());
    assert!(dir.path().join("b_saturated.png").exists());
}

#[test]
fn unknown_space_fails_up_front() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.png");
    write_test_png(&input);

    let mut bad = args(vec![input.display().to_string()], 0.4);
    bad.space = "NotASpace".to_string();
    let err = saturate::run(bad, &CancelToken::new()).unwrap_err();
    assert!(err.to_string().contains("NotASpace"));
    assert!(!dir.path().join("a_saturated.png").exists());
}

#[test]
fn out_of_range_gain_fails_up_front() {
    let err = saturate::run(args(vec!["x.png".into()], 1.5), &CancelToken::new()).unwrap_err();
    assert!(err.to_string().contains("1.5"));
}

#[test]
fn cancelled_batch_reports_skips_not_failures() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.png");
    write_test_png(&input);

    let token = CancelToken::new();
    token.cancel();
    let summary = saturate::run(args(vec![input.display().to_string()], 0.4), &token).unwrap();

    assert!(summary.saved.is_empty());
    assert!(summary.failed.is_empty());
    assert_eq!(summary.cancelled, 1);
    assert!(!dir.path().join("a_saturated.png").exists());
}

#[test]
fn zero_gain_still_saves_a_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.png");
    write_test_png(&input);

    let summary = saturate::run(args(vec![input.display().to_string()], 0.0), &CancelToken::new())
        .unwrap();
    assert_eq!(summary.saved.len(), 1);

    let original = vibrance_io::read(&input).unwrap();
    let copy = vibrance_io::read(&summary.saved[0]).unwrap();
    assert_eq!(original.buffer, copy.buffer);
}

#[test]
fn saturated_output_differs_from_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.png");
    write_test_png(&input);

    let summary = saturate::run(args(vec![input.display().to_string()], 0.8), &CancelToken::new())
        .unwrap();
    let output = vibrance_io::read(&summary.saved[0]).unwrap();
    let original = vibrance_io::read(&input).unwrap();
    assert_ne!(original.buffer, output.buffer);
}

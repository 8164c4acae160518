use evoplot::{ChartError, Marker, Plot};
use polars::prelude::*;

#[test]
fn malformed_series_fails_before_any_output() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("chart.png");

  let df = df! {
    "generation" => &[1i64, 2, 3],
    "success_rate" => &["0.1", "oops", "0.9"],
  }
  .unwrap();

  let mut plot = Plot::new();
  plot.line(df.column("generation").unwrap(), df.column("success_rate").unwrap());

  // The scene is built before the GPU is touched, so this fails cleanly and
  // never creates the output file.
  let err = plot.save(&out).unwrap_err();
  assert!(matches!(err, ChartError::Data(_)));
  assert!(!out.exists());
}

#[test]
#[ignore = "needs a wgpu adapter"]
fn renders_a_png_for_well_formed_data() {
  let dir = tempfile::tempdir().unwrap();
  let out = dir.path().join("chart.png");

  let df = df! {
    "generation" => &[1i64, 2, 3],
    "success_rate" => &[0.1f64, 0.4, 0.9],
  }
  .unwrap();

  let mut plot = Plot::new();
  plot.title("Rocket evolution over time");
  plot.x_label("Generation");
  plot.y_label("Rockets that reached the target (%)");
  plot.grid(true);
  plot
    .line(df.column("generation").unwrap(), df.column("success_rate").unwrap())
    .marker(Marker::Circle)
    .label("Success rate");

  plot.save(&out).unwrap();
  assert!(out.exists());
}

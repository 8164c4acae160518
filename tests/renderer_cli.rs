//! The renderer's process-level contract: it always exits 0, reports
//! failures on stdout, and leaves the chart file alone when it fails.

use std::process::Command;

fn run_renderer(dir: &std::path::Path) -> std::process::Output {
  Command::new(env!("CARGO_BIN_EXE_plot")).current_dir(dir).output().unwrap()
}

#[test]
fn missing_csv_prints_error_and_exits_zero() {
  let dir = tempfile::tempdir().unwrap();

  let output = run_renderer(dir.path());
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("failed to generate chart"), "stdout was: {stdout}");
  assert!(!dir.path().join("chart.png").exists());
}

#[test]
fn malformed_csv_prints_error_and_writes_no_chart() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("data.csv"), "1,0.1\n2,oops\n3,0.9\n").unwrap();

  let output = run_renderer(dir.path());
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("failed to generate chart"), "stdout was: {stdout}");
  assert!(!dir.path().join("chart.png").exists());
}

#[test]
#[ignore = "needs a wgpu adapter"]
fn well_formed_csv_produces_a_chart() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("data.csv"), "1,0.1\n2,0.4\n3,0.9\n").unwrap();

  let output = run_renderer(dir.path());
  assert!(output.status.success());
  assert!(dir.path().join("chart.png").exists());
}

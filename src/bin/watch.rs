use std::{
  path::{Path, PathBuf},
  process::Command,
  sync::mpsc,
};

use evoplot::{data, watch};
use notify::{RecursiveMode, Watcher};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Watches the working directory for changes to `data.csv` and re-renders the
/// chart on each one. Runs until interrupted. The watch handle is released by
/// scope exit on the channel-disconnect path; an interrupt kills the process
/// outright and the OS reclaims the handle without running destructors.
fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let (tx, rx) = mpsc::channel();
  let mut watcher = notify::recommended_watcher(tx)?;
  watcher.watch(Path::new("."), RecursiveMode::NonRecursive)?;

  info!("watching {} for changes", data::DATA_FILE);
  watch::dispatch(&rx, data::DATA_FILE, render_chart);

  Ok(())
}

/// Spawns the sibling `plot` binary and waits for it to exit, so renders
/// never overlap. The renderer swallows its own failures and exits 0; a
/// non-zero status here means the process itself died.
fn render_chart() {
  info!("data changed, rendering new chart");

  let exe = renderer_exe();
  match Command::new(&exe).status() {
    Ok(status) if !status.success() => error!("renderer exited with {status}"),
    Ok(_) => {}
    Err(err) => error!("failed to launch {}: {err}", exe.display()),
  }
}

fn renderer_exe() -> PathBuf {
  let name = format!("plot{}", std::env::consts::EXE_SUFFIX);
  std::env::current_exe()
    .ok()
    .and_then(|path| path.parent().map(|dir| dir.join(&name)))
    .unwrap_or_else(|| PathBuf::from(name))
}

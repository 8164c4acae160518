use polars::error::PolarsError;
use thiserror::Error;
use vello::wgpu;

/// Everything that can go wrong between reading the CSV and writing the PNG.
/// Callers are expected to treat these uniformly; the renderer binary prints
/// whichever one it gets and moves on.
#[derive(Debug, Error)]
pub enum ChartError {
  #[error("data error: {0}")]
  Data(#[from] PolarsError),

  #[error("no gpu adapter available: {0}")]
  Adapter(#[from] wgpu::RequestAdapterError),

  #[error("gpu device request failed: {0}")]
  Device(#[from] wgpu::RequestDeviceError),

  #[error("render failed: {0}")]
  Render(#[from] vello::Error),

  #[error("gpu poll failed: {0}")]
  Poll(#[from] wgpu::PollError),

  #[error("gpu readback failed: {0}")]
  Readback(#[from] wgpu::BufferAsyncError),

  #[error("gpu readback channel closed before the buffer was mapped")]
  ReadbackClosed,

  #[error("gpu buffer had an unexpected size")]
  BufferSize,

  #[error("image encode failed: {0}")]
  Image(#[from] image::ImageError),
}

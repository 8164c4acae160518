use std::path::Path;

use image::{ImageBuffer, Rgba};
use vello::wgpu;

use crate::{
  ChartError,
  render::{GpuHandle, RenderConfig},
};

/// Copies the rendered texture back to the CPU and encodes it as a PNG. The
/// readback is synchronous: we block on the device until the buffer is
/// mapped.
pub(crate) fn write_png(
  handle: &GpuHandle,
  config: &RenderConfig,
  path: &Path,
) -> Result<(), ChartError> {
  let buffer = handle.device.create_buffer(&wgpu::BufferDescriptor {
    label:              Some("Output Buffer"),
    size:               u64::from(4 * config.width * config.height),
    usage:              wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
    mapped_at_creation: false,
  });

  let mut encoder = handle.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
    label: Some("texture_buffer_copy_encoder"),
  });

  encoder.copy_texture_to_buffer(
    wgpu::TexelCopyTextureInfo {
      texture:   &handle.texture,
      mip_level: 0,
      origin:    wgpu::Origin3d::ZERO,
      aspect:    wgpu::TextureAspect::All,
    },
    wgpu::TexelCopyBufferInfo {
      buffer: &buffer,
      layout: wgpu::TexelCopyBufferLayout {
        offset:         0,
        bytes_per_row:  Some(4 * config.width),
        rows_per_image: Some(config.height),
      },
    },
    config.extent_3d(),
  );

  handle.queue.submit(std::iter::once(encoder.finish()));

  let slice = buffer.slice(..);
  let (tx, rx) = std::sync::mpsc::channel();
  slice.map_async(wgpu::MapMode::Read, move |result| {
    let _ = tx.send(result);
  });

  handle.device.poll(wgpu::PollType::Wait)?;
  rx.recv().map_err(|_| ChartError::ReadbackClosed)??;

  let data = slice.get_mapped_range();
  let image = ImageBuffer::<Rgba<u8>, _>::from_raw(config.width, config.height, data.to_vec())
    .ok_or(ChartError::BufferSize)?;
  image.save(path)?;

  Ok(())
}

use std::path::Path;

use kurbo::{Affine, Point, Shape, Stroke};
use parley::{Alignment, FontWeight, PositionedLayoutItem, StyleProperty};
use peniko::{Brush, Color, Fill};
use vello::{
  peniko::color::palette,
  wgpu::{self, TextureDescriptor},
};

use crate::{ChartError, Plot};

mod texture;

/// Canvas size in pixels. 4:3, and a row of RGBA pixels stays aligned to
/// wgpu's 256-byte copy requirement.
pub(crate) const WIDTH: f64 = 960.0;
pub(crate) const HEIGHT: f64 = 720.0;

pub(crate) struct Render {
  scene:  vello::Scene,
  font:   parley::FontContext,
  layout: parley::LayoutContext<Brush>,
}

pub(crate) struct GpuHandle {
  pub(crate) device:  wgpu::Device,
  pub(crate) queue:   wgpu::Queue,
  pub(crate) texture: wgpu::Texture,
}

pub(crate) struct RenderConfig {
  pub(crate) width:  u32,
  pub(crate) height: u32,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub(crate) enum Align {
  #[default]
  Start,
  Center,
  End,
}

pub(crate) struct DrawText<'a> {
  pub text:             &'a str,
  pub size:             f32,
  pub weight:           FontWeight,
  pub brush:            Brush,
  pub position:         Point,
  pub transform:        Affine,
  pub horizontal_align: Align,
  pub vertical_align:   Align,
}

impl Default for DrawText<'_> {
  fn default() -> Self {
    DrawText {
      text:             "",
      size:             16.0,
      weight:           FontWeight::NORMAL,
      brush:            Brush::Solid(Color::from_rgb8(32, 32, 32)),
      position:         Point::ZERO,
      transform:        Affine::IDENTITY,
      horizontal_align: Align::Start,
      vertical_align:   Align::Start,
    }
  }
}

impl Plot<'_> {
  /// Renders the chart and writes it as a PNG, replacing whatever was at
  /// `path`. The scene is built before any GPU work, so data errors never
  /// touch the output file.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
    let mut render = Render::new();
    self.draw(&mut render)?;

    let config = RenderConfig { width: WIDTH as u32, height: HEIGHT as u32 };
    let handle = GpuHandle::new(&config)?;

    let mut renderer = vello::Renderer::new(&handle.device, vello::RendererOptions::default())?;
    let view = handle.texture.create_view(&wgpu::TextureViewDescriptor::default());

    renderer.render_to_texture(
      &handle.device,
      &handle.queue,
      &render.scene,
      &view,
      &vello::RenderParams {
        base_color:          palette::css::WHITE,
        width:               config.width,
        height:              config.height,
        antialiasing_method: vello::AaConfig::Msaa16,
      },
    )?;

    texture::write_png(&handle, &config, path.as_ref())
  }
}

impl Render {
  pub(crate) fn new() -> Self {
    Render {
      scene:  vello::Scene::new(),
      font:   parley::FontContext::new(),
      layout: parley::LayoutContext::new(),
    }
  }

  pub(crate) fn stroke(
    &mut self,
    shape: &impl Shape,
    transform: Affine,
    brush: &Brush,
    stroke: &Stroke,
  ) {
    self.scene.stroke(stroke, transform, brush, None, shape);
  }

  pub(crate) fn fill(&mut self, shape: &impl Shape, transform: Affine, brush: &Brush) {
    self.scene.fill(Fill::NonZero, transform, brush, None, shape);
  }

  pub(crate) fn layout_text(&mut self, text: &DrawText) -> parley::Layout<Brush> {
    let mut builder = self.layout.ranged_builder(&mut self.font, text.text, 1.0, true);

    builder.push_default(StyleProperty::FontSize(text.size));
    builder.push_default(StyleProperty::FontWeight(text.weight));
    builder.push_default(StyleProperty::Brush(text.brush.clone()));

    let mut layout = builder.build(text.text);
    layout.break_all_lines(None);
    layout.align(None, Alignment::Start, Default::default());
    layout
  }

  pub(crate) fn draw_text(&mut self, text: DrawText) {
    let layout = self.layout_text(&text);
    self.draw_text_layout(layout, text);
  }

  /// Glyphs are laid out with the layout's top-left at the local origin; the
  /// alignment offset is applied inside the text's own transform, so rotated
  /// labels align along their rotated baseline.
  pub(crate) fn draw_text_layout(&mut self, layout: parley::Layout<Brush>, text: DrawText) {
    let width = f64::from(layout.width());
    let height = f64::from(layout.height());

    let dx = match text.horizontal_align {
      Align::Start => 0.0,
      Align::Center => -width / 2.0,
      Align::End => -width,
    };
    let dy = match text.vertical_align {
      Align::Start => 0.0,
      Align::Center => -height / 2.0,
      Align::End => -height,
    };

    let transform = Affine::translate(text.position.to_vec2())
      * text.transform
      * Affine::translate((dx, dy));

    for line in layout.lines() {
      for item in line.items() {
        let PositionedLayoutItem::GlyphRun(glyph_run) = item else { continue };

        let run = glyph_run.run();
        let mut x = glyph_run.offset();
        let baseline = glyph_run.baseline();

        self
          .scene
          .draw_glyphs(run.font())
          .brush(&glyph_run.style().brush)
          .hint(false)
          .transform(transform)
          .glyph_transform(
            run.synthesis().skew().map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0)),
          )
          .font_size(run.font_size())
          .normalized_coords(run.normalized_coords())
          .draw(
            Fill::NonZero,
            glyph_run.glyphs().map(|glyph| {
              let gx = x + glyph.x;
              let gy = baseline + glyph.y;
              x += glyph.advance;
              vello::Glyph { id: glyph.id.into(), x: gx, y: gy }
            }),
          );
      }
    }
  }
}

impl GpuHandle {
  fn new(config: &RenderConfig) -> Result<Self, ChartError> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter =
      pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default()))?;

    let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
      label:             None,
      required_features: wgpu::Features::empty(),
      required_limits:   wgpu::Limits::defaults(),
      memory_hints:      wgpu::MemoryHints::MemoryUsage,
      trace:             wgpu::Trace::Off,
    }))?;

    let texture = device.create_texture(&TextureDescriptor {
      label:           Some("Render Texture"),
      size:            config.extent_3d(),
      mip_level_count: 1,
      sample_count:    1,
      dimension:       wgpu::TextureDimension::D2,
      format:          wgpu::TextureFormat::Rgba8Unorm,
      usage:           wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::COPY_SRC,
      view_formats:    &[],
    });

    Ok(GpuHandle { device, queue, texture })
  }
}

impl RenderConfig {
  pub(crate) fn extent_3d(&self) -> wgpu::Extent3d {
    wgpu::Extent3d {
      width:                 self.width,
      height:                self.height,
      depth_or_array_layers: 1,
    }
  }
}

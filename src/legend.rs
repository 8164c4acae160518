use kurbo::{Affine, Point, Rect, RoundedRect, Size, Stroke, Vec2};
use peniko::Brush;

use crate::{
  Bounds, Plot,
  render::{Align, DrawText, Render},
};

struct LegendItem {
  label: String,
  color: Brush,
}

impl Plot<'_> {
  /// Draws a legend box inside the top-right corner of the plot area, one
  /// entry per labeled series. No-op when nothing is labeled.
  pub(crate) fn draw_legend(&self, render: &mut Render, viewport: Bounds) {
    let items: Vec<LegendItem> = self
      .series
      .iter()
      .filter_map(|series| {
        series.options.label.as_ref().map(|label| LegendItem {
          label: label.clone(),
          color: series.options.color.clone(),
        })
      })
      .collect();

    if items.is_empty() {
      return;
    }

    const MARGIN: f64 = 20.0;
    const PADDING: f64 = 10.0;
    const FONT_SIZE: f64 = 16.0;
    const LINE_HEIGHT: f64 = 20.0;
    const SWATCH_WIDTH: f64 = 40.0;

    let mut inner_width = 0.0_f64;
    let mut layouts = vec![];
    for item in &items {
      let text = DrawText {
        text: &item.label,
        size: FONT_SIZE as f32,
        vertical_align: Align::Center,
        ..Default::default()
      };
      let layout = render.layout_text(&text);
      inner_width = inner_width.max(f64::from(layout.width()));
      layouts.push((layout, text));
    }

    inner_width += SWATCH_WIDTH;
    let inner_height = items.len() as f64 * LINE_HEIGHT;

    // viewport.y.max is the top edge in screen coordinates.
    let rect = Rect::new(
      viewport.x.max - inner_width - MARGIN - PADDING * 2.0,
      viewport.y.max + MARGIN,
      viewport.x.max - MARGIN,
      viewport.y.max + MARGIN + inner_height + PADDING * 2.0,
    );
    let background = RoundedRect::from_rect(rect, 5.0);
    render.fill(
      &background,
      Affine::IDENTITY,
      &Brush::Solid(peniko::Color::from_rgba8(255, 255, 255, 220)),
    );
    render.stroke(
      &background,
      Affine::IDENTITY,
      &Brush::Solid(peniko::Color::from_rgb8(128, 128, 128)),
      &Stroke::new(1.5),
    );

    for (i, (layout, mut text)) in layouts.into_iter().enumerate() {
      let pos = Point::new(
        rect.x0 + PADDING,
        rect.y0 + i as f64 * LINE_HEIGHT + PADDING + LINE_HEIGHT / 2.0,
      );

      let swatch =
        Rect::from_origin_size(pos - Vec2::new(0.0, 1.0), Size::new(SWATCH_WIDTH - 5.0, 2.0));
      render.fill(&swatch, Affine::IDENTITY, &items[i].color);

      text.position = pos + Vec2::new(SWATCH_WIDTH, 0.0);
      render.draw_text_layout(layout, text);
    }
  }
}

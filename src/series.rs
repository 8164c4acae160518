use kurbo::{Affine, BezPath, Point, Stroke};
use peniko::{Brush, Color};
use polars::prelude::{Column, PolarsResult};

use crate::{Bounds, Marker, Range, render::Render};

/// One line series over a pair of columns. Point extraction is fallible so a
/// non-numeric cell surfaces as a `PolarsError` instead of a panic.
pub struct LineSeries<'a> {
  x: &'a Column,
  y: &'a Column,

  pub(crate) options: LineOptions,
}

pub struct LineOptions {
  pub width:  f64,
  pub color:  Brush,
  pub marker: Option<MarkerOptions>,
  pub label:  Option<String>,
}

pub struct MarkerOptions {
  pub kind:  Marker,
  pub size:  f64,
  pub color: Option<Brush>,
}

impl Default for LineOptions {
  fn default() -> Self {
    LineOptions {
      width:  2.0,
      color:  Brush::Solid(Color::from_rgb8(117, 158, 208)),
      marker: None,
      label:  None,
    }
  }
}

impl<'a> LineSeries<'a> {
  pub(crate) fn new(x: &'a Column, y: &'a Column) -> Self {
    LineSeries { x, y, options: LineOptions::default() }
  }

  pub fn color(&mut self, color: Color) -> &mut Self {
    self.options.color = Brush::Solid(color);
    self
  }

  pub fn width(&mut self, width: f64) -> &mut Self {
    self.options.width = width;
    self
  }

  /// Decorates every data point with a marker, in the line's color.
  pub fn marker(&mut self, kind: Marker) -> &mut Self {
    self.options.marker = Some(MarkerOptions { kind, size: 6.0, color: None });
    self
  }

  /// Adds the series to the legend under the given label.
  pub fn label(&mut self, label: &str) -> &mut Self {
    self.options.label = Some(label.to_string());
    self
  }

  pub(crate) fn data_bounds(&self) -> PolarsResult<Bounds> {
    Ok(Bounds::new(
      Range::new(
        self.x.min_reduce()?.into_value().try_extract::<f64>()?,
        self.x.max_reduce()?.into_value().try_extract::<f64>()?,
      ),
      Range::new(
        self.y.min_reduce()?.into_value().try_extract::<f64>()?,
        self.y.max_reduce()?.into_value().try_extract::<f64>()?,
      ),
    ))
  }

  fn points(&self) -> PolarsResult<Vec<Point>> {
    (0..self.x.len())
      .map(|i| {
        let x = self.x.get(i)?.try_extract::<f64>()?;
        let y = self.y.get(i)?.try_extract::<f64>()?;

        Ok(Point::new(x, y))
      })
      .collect()
  }

  pub(crate) fn draw(&self, render: &mut Render, transform: Affine) -> PolarsResult<()> {
    let points: Vec<Point> = self.points()?.into_iter().map(|p| transform * p).collect();

    let mut shape = BezPath::new();
    for (i, point) in points.iter().enumerate() {
      if i == 0 {
        shape.move_to(*point);
      } else {
        shape.line_to(*point);
      }
    }

    render.stroke(&shape, Affine::IDENTITY, &self.options.color, &Stroke::new(self.options.width));

    if let Some(marker) = &self.options.marker {
      let path = marker.kind.to_path(0.01);
      let color = marker.color.as_ref().unwrap_or(&self.options.color);

      for point in points {
        render.fill(&path, Affine::translate(point.to_vec2()) * Affine::scale(marker.size), color);
      }
    }

    Ok(())
  }
}

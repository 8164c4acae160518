use kurbo::{Affine, Cap, Line, Point, Stroke};
use parley::FontWeight;
use peniko::{Brush, Color};
use polars::prelude::{Column, PolarsResult};

use crate::render::{Align, DrawText, Render};

mod bounds;
mod error;
mod legend;
mod marker;
mod render;
mod series;

pub mod data;
pub mod watch;

pub use bounds::{Bounds, NiceTicksIter, Range};
pub use error::ChartError;
pub use marker::Marker;
pub use series::LineSeries;

/// A single chart: axis decorations plus any number of line series, rendered
/// headlessly to a PNG with [`Plot::save`].
#[derive(Default)]
pub struct Plot<'a> {
  title:   Option<String>,
  x_label: Option<String>,
  y_label: Option<String>,
  bounds:  Option<Bounds>,
  grid:    bool,

  series: Vec<LineSeries<'a>>,
}

impl<'a> Plot<'a> {
  pub fn new() -> Plot<'a> { Plot::default() }

  pub fn title(&mut self, title: &str) -> &mut Self {
    self.title = Some(title.to_string());
    self
  }

  pub fn x_label(&mut self, label: &str) -> &mut Self {
    self.x_label = Some(label.to_string());
    self
  }

  pub fn y_label(&mut self, label: &str) -> &mut Self {
    self.y_label = Some(label.to_string());
    self
  }

  /// Overrides the data bounds inferred from the series.
  pub fn bounds(&mut self, bounds: Bounds) -> &mut Self {
    self.bounds = Some(bounds);
    self
  }

  pub fn grid(&mut self, enabled: bool) -> &mut Self {
    self.grid = enabled;
    self
  }

  pub fn line(&mut self, x: &'a Column, y: &'a Column) -> &mut LineSeries<'a> {
    self.series.push(LineSeries::new(x, y));
    self.series.last_mut().unwrap()
  }
}

impl Plot<'_> {
  fn draw(&self, render: &mut Render) -> PolarsResult<()> {
    const TEXT_COLOR: Brush = Brush::Solid(Color::from_rgb8(32, 32, 32));
    const LINE_COLOR: Brush = Brush::Solid(Color::from_rgb8(128, 128, 128));
    const GRID_COLOR: Brush = Brush::Solid(Color::from_rgb8(222, 222, 222));

    let viewport =
      Bounds::new(Range::new(0.0, render::WIDTH), Range::new(render::HEIGHT, 0.0)).shrink(80.0);
    let center_x = render::WIDTH / 2.0;

    if let Some(title) = &self.title {
      render.draw_text(DrawText {
        text: title,
        size: 28.0,
        weight: FontWeight::BOLD,
        brush: TEXT_COLOR,
        position: Point { x: center_x, y: viewport.y.max - 30.0 },
        horizontal_align: Align::Center,
        ..Default::default()
      });
    }

    if let Some(x_label) = &self.x_label {
      render.draw_text(DrawText {
        text: x_label,
        size: 20.0,
        position: Point { x: center_x, y: viewport.y.min + 40.0 },
        brush: TEXT_COLOR,
        horizontal_align: Align::Center,
        vertical_align: Align::Start,
        ..Default::default()
      });
    }

    if let Some(y_label) = &self.y_label {
      render.draw_text(DrawText {
        text: y_label,
        size: 20.0,
        position: Point { x: viewport.x.min - 45.0, y: render::HEIGHT / 2.0 },
        brush: TEXT_COLOR,
        transform: Affine::rotate(-std::f64::consts::FRAC_PI_2),
        horizontal_align: Align::Center,
        vertical_align: Align::End,
        ..Default::default()
      });
    }

    let border_stroke = Stroke::new(2.0);
    render.stroke(
      &Line::new(
        Point::new(viewport.x.min, viewport.y.min),
        Point::new(viewport.x.max, viewport.y.min),
      ),
      Affine::IDENTITY,
      &LINE_COLOR,
      &border_stroke,
    );
    render.stroke(
      &Line::new(
        Point::new(viewport.x.min, viewport.y.min),
        Point::new(viewport.x.min, viewport.y.max),
      ),
      Affine::IDENTITY,
      &LINE_COLOR,
      &border_stroke,
    );

    let data_bounds = match self.bounds {
      Some(bounds) => bounds,
      None => {
        let mut union = Bounds::empty();
        for series in &self.series {
          union = union.union(series.data_bounds()?);
        }
        union.expand_by(0.05)
      }
    };
    let data_bounds = data_bounds.pad_degenerate(0.5);

    let transform = data_bounds.transform_to(viewport);
    let tick_stroke = border_stroke.clone().with_start_cap(Cap::Butt);
    let grid_stroke = Stroke::new(1.0);
    let ticks = 10;

    let iter = data_bounds.y.nice_ticks(ticks);
    let precision = iter.precision();
    for (y, vy) in iter
      .map(|v| (v, (transform * Point::new(0.0, v)).y))
      .filter(|(_, vy)| viewport.y.contains(vy))
    {
      if self.grid {
        render.stroke(
          &Line::new(Point::new(viewport.x.min, vy), Point::new(viewport.x.max, vy)),
          Affine::IDENTITY,
          &GRID_COLOR,
          &grid_stroke,
        );
      }
      render.stroke(
        &Line::new(Point::new(viewport.x.min, vy), Point::new(viewport.x.min - 10.0, vy)),
        Affine::IDENTITY,
        &LINE_COLOR,
        &tick_stroke,
      );
      render.draw_text(DrawText {
        text: &format!("{:.*}", precision.saturating_sub(3), y),
        size: 12.0,
        position: Point { x: viewport.x.min - 15.0, y: vy },
        brush: TEXT_COLOR,
        horizontal_align: Align::End,
        vertical_align: Align::Center,
        ..Default::default()
      });
    }

    let iter = data_bounds.x.nice_ticks(ticks);
    let precision = iter.precision();
    for (x, vx) in iter
      .map(|v| (v, (transform * Point::new(v, 0.0)).x))
      .filter(|(_, vx)| viewport.x.contains(vx))
    {
      if self.grid {
        render.stroke(
          &Line::new(Point::new(vx, viewport.y.min), Point::new(vx, viewport.y.max)),
          Affine::IDENTITY,
          &GRID_COLOR,
          &grid_stroke,
        );
      }
      render.stroke(
        &Line::new(Point::new(vx, viewport.y.min), Point::new(vx, viewport.y.min + 10.0)),
        Affine::IDENTITY,
        &LINE_COLOR,
        &tick_stroke,
      );
      render.draw_text(DrawText {
        text: &format!("{:.*}", precision.saturating_sub(3), x),
        size: 12.0,
        position: Point { x: vx, y: viewport.y.min + 15.0 },
        brush: TEXT_COLOR,
        horizontal_align: Align::Center,
        vertical_align: Align::Start,
        ..Default::default()
      });
    }

    for series in &self.series {
      series.draw(render, transform)?;
    }

    self.draw_legend(render, viewport);

    Ok(())
  }
}

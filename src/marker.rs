use kurbo::{BezPath, Circle, Point, Rect, Shape};

/// Marker shapes, built as unit-size paths centered on the origin. Scale and
/// translate to place them on a chart.
pub enum Marker {
  Circle,
  Square,
  Diamond,
  Triangle,
}

impl Marker {
  pub(crate) fn to_path(&self, tolerance: f64) -> BezPath {
    match self {
      Marker::Circle => Circle::new(Point::new(0.0, 0.0), 0.5).to_path(tolerance),
      Marker::Square => Rect::new(-0.5, -0.5, 0.5, 0.5).to_path(tolerance),
      Marker::Diamond => {
        let mut path = BezPath::new();
        path.move_to(Point::new(0.0, -0.5));
        path.line_to(Point::new(0.5, 0.0));
        path.line_to(Point::new(0.0, 0.5));
        path.line_to(Point::new(-0.5, 0.0));
        path.close_path();
        path
      }
      Marker::Triangle => {
        // Height of an equilateral triangle with unit sides, halved.
        const Y: f64 = 1.732050807568877293527446341505872367_f64 / 4.0;

        let mut path = BezPath::new();
        path.move_to(Point::new(0.0, -Y));
        path.line_to(Point::new(0.5, Y));
        path.line_to(Point::new(-0.5, Y));
        path.close_path();
        path
      }
    }
  }
}

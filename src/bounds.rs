use kurbo::Affine;

/// Axis-aligned data bounds, `x` by `y`.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
  pub x: Range,
  pub y: Range,
}

/// A closed interval. `min > max` is allowed and means the axis is flipped,
/// which is how screen-space y ranges are expressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
  pub min: f64,
  pub max: f64,
}

impl Bounds {
  pub const fn empty() -> Self { Bounds { x: Range::empty(), y: Range::empty() } }
  pub const fn new(x: Range, y: Range) -> Self { Bounds { x, y } }

  pub const fn shrink(self, amount: f64) -> Self {
    Bounds { x: self.x.shrink(amount), y: self.y.shrink(amount) }
  }

  pub const fn expand(self, amount: f64) -> Self {
    Bounds { x: self.x.expand(amount), y: self.y.expand(amount) }
  }
  pub const fn expand_by(self, fract: f64) -> Self {
    Bounds { x: self.x.expand_by(fract), y: self.y.expand_by(fract) }
  }

  pub fn union(&self, other: Bounds) -> Bounds {
    Bounds { x: self.x.union(other.x), y: self.y.union(other.y) }
  }

  /// Gives zero-size ranges a real extent so the viewport transform stays
  /// finite for degenerate data, e.g. a single point.
  pub const fn pad_degenerate(self, amount: f64) -> Self {
    Bounds { x: self.x.pad_degenerate(amount), y: self.y.pad_degenerate(amount) }
  }

  pub(crate) fn transform_to(&self, viewport: Bounds) -> Affine {
    let scale_x = viewport.x.size() / self.x.size();
    let scale_y = viewport.y.size() / self.y.size();
    let translate_x = viewport.x.min - self.x.min * scale_x;
    let translate_y = viewport.y.min - self.y.min * scale_y;

    Affine::new([scale_x, 0.0, 0.0, scale_y, translate_x, translate_y])
  }
}

impl Default for Range {
  fn default() -> Self { Range::empty() }
}

impl Range {
  pub const fn empty() -> Self { Range { min: 0.0, max: 0.0 } }
  pub const fn new(min: f64, max: f64) -> Self { Range { min, max } }
  pub const fn size(&self) -> f64 { self.max - self.min }

  pub const fn shrink(self, amount: f64) -> Self { self.expand(-amount) }
  pub const fn expand(self, amount: f64) -> Self {
    Range {
      min: self.min - amount * self.size().signum(),
      max: self.max + amount * self.size().signum(),
    }
  }
  pub const fn expand_by(self, fract: f64) -> Self { self.expand(self.size() * fract) }

  pub const fn pad_degenerate(self, amount: f64) -> Self {
    if self.size() == 0.0 {
      Range { min: self.min - amount, max: self.max + amount }
    } else {
      self
    }
  }

  pub const fn contains(&self, value: &f64) -> bool {
    (*value >= self.min && *value <= self.max) || (*value <= self.min && *value >= self.max)
  }

  pub fn union(&self, other: Range) -> Range {
    if self.size() == 0.0 {
      other
    } else if other.size() == 0.0 {
      *self
    } else {
      Range { min: self.min.min(other.min), max: self.max.max(other.max) }
    }
  }

  /// Rounds the range out to "nice" tick positions, aiming for roughly
  /// `count` ticks.
  pub fn nice_ticks(&self, count: u32) -> NiceTicksIter {
    let step = (self.max - self.min) / f64::from(count);
    let k = step.log10().floor();
    let base = step / 10f64.powf(k);

    let nice_base = match base {
      b if b < 1.0 => 1.0,
      b if b < 2.0 => 2.0,
      b if b < 2.5 => 2.5,
      b if b < 5.0 => 5.0,
      _ => 10.0,
    };

    let step = nice_base * 10f64.powf(k);
    let lo = (self.min / step).floor() * step;
    let hi = (self.max / step).ceil() * step;

    let precision = (-k as i32 + 4).max(0) as usize;
    NiceTicksIter::new(lo, hi, step, precision)
  }
}

pub struct NiceTicksIter {
  current:   f64,
  step:      f64,
  hi:        f64,
  precision: usize,
}

impl NiceTicksIter {
  fn new(lo: f64, hi: f64, step: f64, precision: usize) -> Self {
    NiceTicksIter { current: lo, step, hi, precision }
  }

  pub fn precision(&self) -> usize { self.precision }
}

impl Iterator for NiceTicksIter {
  type Item = f64;
  fn next(&mut self) -> Option<Self::Item> {
    if self.current < self.hi + self.step * 0.5 {
      let p = 10f64.powi(self.precision as i32);
      let result = (self.current * p).round() / p;
      self.current += self.step;
      Some(result)
    } else {
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use kurbo::Point;

  use super::*;

  #[test]
  fn nice_ticks_round_outward() {
    let ticks: Vec<f64> = Range::new(0.0, 1.0).nice_ticks(10).collect();
    assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);

    let ticks: Vec<f64> = Range::new(1.0, 3.0).nice_ticks(10).collect();
    assert_eq!(ticks.first(), Some(&1.0));
    assert_eq!(ticks.last(), Some(&3.0));
    assert!(ticks.windows(2).all(|w| w[1] > w[0]));
  }

  #[test]
  fn contains_handles_flipped_ranges() {
    let flipped = Range::new(640.0, 80.0);
    assert!(flipped.contains(&100.0));
    assert!(flipped.contains(&640.0));
    assert!(!flipped.contains(&700.0));
  }

  #[test]
  fn union_ignores_empty() {
    let a = Range::new(2.0, 5.0);
    assert_eq!(Range::empty().union(a), a);
    assert_eq!(a.union(Range::empty()), a);
    assert_eq!(a.union(Range::new(0.0, 3.0)), Range::new(0.0, 5.0));
  }

  #[test]
  fn transform_maps_data_to_viewport() {
    let data = Bounds::new(Range::new(0.0, 10.0), Range::new(0.0, 1.0));
    let viewport = Bounds::new(Range::new(0.0, 100.0), Range::new(100.0, 0.0));

    let transform = data.transform_to(viewport);
    let mapped = transform * Point::new(5.0, 0.5);
    assert!((mapped.x - 50.0).abs() < 1e-9);
    assert!((mapped.y - 50.0).abs() < 1e-9);

    // Corners land on corners, with y flipped.
    let origin = transform * Point::new(0.0, 0.0);
    assert!((origin.x - 0.0).abs() < 1e-9);
    assert!((origin.y - 100.0).abs() < 1e-9);
  }

  #[test]
  fn degenerate_bounds_transform_to_finite_coordinates() {
    // A single data point collapses both ranges to zero size.
    let data = Bounds::new(Range::new(2.0, 2.0), Range::new(0.5, 0.5)).pad_degenerate(0.5);
    assert_eq!(data.x, Range::new(1.5, 2.5));
    assert_eq!(data.y, Range::new(0.0, 1.0));

    let viewport = Bounds::new(Range::new(0.0, 100.0), Range::new(100.0, 0.0));
    let mapped = data.transform_to(viewport) * Point::new(2.0, 0.5);
    assert!(mapped.x.is_finite() && mapped.y.is_finite());
    assert!((mapped.x - 50.0).abs() < 1e-9);
    assert!((mapped.y - 50.0).abs() < 1e-9);

    // Ranges with real extent are untouched.
    let range = Range::new(1.0, 3.0);
    assert_eq!(range.pad_degenerate(0.5), range);
  }

  #[test]
  fn expand_by_grows_both_ends() {
    let range = Range::new(0.0, 10.0).expand_by(0.1);
    assert!((range.min + 1.0).abs() < 1e-9);
    assert!((range.max - 11.0).abs() < 1e-9);
  }
}

use evoplot::{Marker, Plot, data};
use peniko::Color;

/// Renders `data.csv` into `chart.png`. Any failure is printed and swallowed;
/// the exit status is always 0 and a stale chart is left untouched.
fn main() {
  if let Err(err) = run() {
    println!("failed to generate chart: {err}");
  }
}

fn run() -> anyhow::Result<()> {
  let df = data::load(data::DATA_FILE)?;

  let mut plot = Plot::new();
  plot.title("Rocket evolution over time");
  plot.x_label("Generation");
  plot.y_label("Rockets that reached the target (%)");
  plot.grid(true);
  plot
    .line(df.column(data::GENERATION)?, df.column(data::SUCCESS_RATE)?)
    .color(Color::from_rgb8(255, 0, 0))
    .marker(Marker::Circle)
    .label("Success rate");

  plot.save(data::CHART_FILE)?;

  Ok(())
}

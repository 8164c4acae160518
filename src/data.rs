use polars::prelude::*;

/// The watched input and the rendered output, both relative to the working
/// directory. Neither path is configurable.
pub const DATA_FILE: &str = "data.csv";
pub const CHART_FILE: &str = "chart.png";

pub const GENERATION: &str = "generation";
pub const SUCCESS_RATE: &str = "success_rate";

/// Reads a headerless two-column CSV into a dataframe with columns
/// `generation` and `success_rate`. Anything the CSV parser accepts is
/// accepted here; type problems surface later, at point extraction.
pub fn load(path: &str) -> PolarsResult<DataFrame> {
  LazyCsvReader::new(PlPath::new(path))
    .with_has_header(false)
    .finish()?
    .rename(["column_1", "column_2"], [GENERATION, SUCCESS_RATE], true)
    .collect()
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  fn write_csv(dir: &std::path::Path, contents: &str) -> String {
    let path = dir.join(DATA_FILE);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
  }

  #[test]
  fn loads_headerless_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "1,0.1\n2,0.4\n3,0.9\n");

    let df = load(&path).unwrap();
    assert_eq!(df.height(), 3);

    let r#gen = df.column(GENERATION).unwrap();
    let rate = df.column(SUCCESS_RATE).unwrap();
    assert_eq!(r#gen.get(2).unwrap().try_extract::<f64>().unwrap(), 3.0);
    assert_eq!(rate.get(1).unwrap().try_extract::<f64>().unwrap(), 0.4);
  }

  #[test]
  fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DATA_FILE);

    assert!(load(path.to_str().unwrap()).is_err());
  }

  #[test]
  fn non_numeric_cell_fails_at_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "1,0.1\n2,oops\n");

    // The parser accepts the file; the column just isn't numeric.
    let df = load(&path).unwrap();
    let rate = df.column(SUCCESS_RATE).unwrap();
    assert!(rate.get(1).unwrap().try_extract::<f64>().is_err());
  }
}

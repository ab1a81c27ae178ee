use std::io::Read;
use std::path::Path;

use super::error::LoadError;
use super::model::{Dataset, Record, Sector, STATE_COLUMN};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the activity table from a CSV file.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!(
        "Loaded {} states from {} with columns {:?}",
        dataset.len(),
        path.display(),
        dataset.columns()
    );
    Ok(dataset)
}

/// CSV layout: header row with at least `Estado`, `Primaria`, `Secundaria`
/// and `Terciaria`. Any further columns are kept as raw text.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let state_idx = column_index(&headers, STATE_COLUMN)?;
    let primary_idx = column_index(&headers, Sector::Primary.column())?;
    let secondary_idx = column_index(&headers, Sector::Secondary.column())?;
    let tertiary_idx = column_index(&headers, Sector::Tertiary.column())?;

    let mut records = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = result?;
        let row_no = i + 1;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        records.push(Record {
            state: cell(state_idx).to_string(),
            primary: parse_float(cell(primary_idx), row_no, Sector::Primary)?,
            secondary: parse_float(cell(secondary_idx), row_no, Sector::Secondary)?,
            tertiary: parse_float(cell(tertiary_idx), row_no, Sector::Tertiary)?,
            cells: row.iter().map(|c| c.to_string()).collect(),
        });
    }

    Ok(Dataset::new(headers, records))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn column_index(headers: &[String], name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(LoadError::MissingColumn(name))
}

/// Blank cells and NaN are rejected rather than carried into the rankings.
fn parse_float(s: &str, row: usize, sector: Sector) -> Result<f64, LoadError> {
    let not_numeric = || LoadError::NotNumeric {
        row,
        column: sector.column(),
        value: s.to_string(),
    };
    let v = s.trim().parse::<f64>().map_err(|_| not_numeric())?;
    if v.is_nan() {
        return Err(not_numeric());
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Estado,Primaria,Secundaria,Terciaria\n";

    fn load(body: &str) -> Result<Dataset, LoadError> {
        load_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn parses_rows_in_file_order() {
        let ds = load("Jalisco,10.5,20,30\nSonora, 4 ,5e1,-6\n").unwrap();
        assert_eq!(ds.len(), 2);
        let r = &ds.records()[1];
        assert_eq!(r.state, "Sonora");
        assert_eq!((r.primary, r.secondary, r.tertiary), (4.0, 50.0, -6.0));
        assert_eq!(r.cells, vec!["Sonora", " 4 ", "5e1", "-6"]);
    }

    #[test]
    fn header_only_gives_empty_dataset() {
        let ds = load("").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.columns().len(), 4);
    }

    #[test]
    fn columns_may_appear_in_any_order() {
        let ds = load_reader("Terciaria,Clave,Estado,Secundaria,Primaria\n3,14,Jalisco,2,1\n".as_bytes()).unwrap();
        let r = &ds.records()[0];
        assert_eq!(r.state, "Jalisco");
        assert_eq!((r.primary, r.secondary, r.tertiary), (1.0, 2.0, 3.0));
    }

    #[test]
    fn non_numeric_primary_is_rejected() {
        let err = load("Jalisco,1,2,3\nSonora,n/a,2,3\n").unwrap_err();
        match err {
            LoadError::NotNumeric { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Primaria");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_and_nan_cells_are_rejected() {
        assert!(matches!(
            load("Jalisco,1,,3\n").unwrap_err(),
            LoadError::NotNumeric { column: "Secundaria", .. }
        ));
        assert!(matches!(
            load("Jalisco,1,2,NaN\n").unwrap_err(),
            LoadError::NotNumeric { column: "Terciaria", .. }
        ));
    }

    #[test]
    fn missing_sector_column_is_reported() {
        let err = load_reader("Estado,Primaria,Terciaria\nJalisco,1,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Secundaria")));
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        assert!(matches!(load("Jalisco,1,2\n").unwrap_err(), LoadError::Csv(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.csv"));
    }
}

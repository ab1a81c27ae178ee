use std::fmt;
use std::str::FromStr;

use super::error::FieldError;

/// Header of the state identifier column.
pub const STATE_COLUMN: &str = "Estado";

// ---------------------------------------------------------------------------
// Sector – the closed set of rankable columns
// ---------------------------------------------------------------------------

/// One of the three economic activity sectors present in the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sector {
    Primary,
    Secondary,
    Tertiary,
}

impl Sector {
    /// All sectors in report order.
    pub const ALL: [Sector; 3] = [Sector::Primary, Sector::Secondary, Sector::Tertiary];

    /// CSV header of this sector's column.
    pub fn column(self) -> &'static str {
        match self {
            Sector::Primary => "Primaria",
            Sector::Secondary => "Secundaria",
            Sector::Tertiary => "Terciaria",
        }
    }

    /// Section heading shown above the ranking table.
    pub fn heading(self) -> &'static str {
        match self {
            Sector::Primary => "🌾 Desempeño por Estado en Actividades Primarias",
            Sector::Secondary => "🪚 Desempeño por Estado en Actividades Secundarias",
            Sector::Tertiary => "💻 Desempeño por Estado en Actividades Terciarias",
        }
    }

    /// Paragraph introducing the sector's section.
    pub fn description(self) -> &'static str {
        match self {
            Sector::Primary => {
                "Las actividades primarias incluyen la agricultura, pesca y ganadería. \
                 A continuación, se muestran los estados con mayor participación en esta actividad:"
            }
            Sector::Secondary => {
                "Las actividades secundarias son aquellas que transforman la materia prima en productos. \
                 A continuación, se muestran los estados con mayor participación en este sector:"
            }
            Sector::Tertiary => {
                "Las actividades terciarias son todas aquellas donde se da el comercio y la prestación \
                 de servicios tangibles e intangibles. A continuación, se muestran los estados con \
                 mayor participación en este sector:"
            }
        }
    }

    /// Y-axis title of the sector's bar chart.
    pub fn axis_label(self) -> String {
        format!("Nivel de Actividad {}", self.column())
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Sector {
    type Err = FieldError;

    /// Accepts exactly the CSV column names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.column() == s)
            .ok_or_else(|| FieldError {
                field: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Record – one state's row
// ---------------------------------------------------------------------------

/// One row of the activity CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub state: String,
    pub primary: f64,
    pub secondary: f64,
    pub tertiary: f64,
    /// Raw text of every cell, in header order.
    pub cells: Vec<String>,
}

impl Record {
    pub fn value(&self, sector: Sector) -> f64 {
        match sector {
            Sector::Primary => self.primary,
            Sector::Secondary => self.secondary,
            Sector::Tertiary => self.tertiary,
        }
    }
}

/// A `(state, value)` pair of a ranking or chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub state: String,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { columns, records }
    }

    /// Header names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` rows as display text, sector values formatted as floats.
    ///
    /// Only the first column carrying a sector's header is formatted, the one
    /// the loader read; repeated headers show their raw text.
    pub fn head(&self, n: usize) -> Preview {
        let mut sector_at: Vec<Option<Sector>> = vec![None; self.columns.len()];
        for sector in Sector::ALL {
            if let Some(idx) = self.columns.iter().position(|c| c == sector.column()) {
                sector_at[idx] = Some(sector);
            }
        }

        let rows = self
            .records
            .iter()
            .take(n)
            .map(|rec| {
                rec.cells
                    .iter()
                    .zip(&sector_at)
                    .map(|(cell, sector)| match sector {
                        Some(s) => format_value(rec.value(*s)),
                        None => cell.clone(),
                    })
                    .collect()
            })
            .collect();

        Preview {
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// Head-of-dataset table as text cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Sector values are shown with four decimals, like a pandas float column.
pub fn format_value(v: f64) -> String {
    format!("{v:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, primary: f64) -> Record {
        Record {
            state: state.to_string(),
            primary,
            secondary: primary * 2.0,
            tertiary: primary * 3.0,
            cells: vec![
                state.to_string(),
                primary.to_string(),
                (primary * 2.0).to_string(),
                (primary * 3.0).to_string(),
                "x".to_string(),
            ],
        }
    }

    #[test]
    fn sector_parses_only_column_names() {
        for sector in Sector::ALL {
            assert_eq!(sector.column().parse::<Sector>(), Ok(sector));
        }
        let err = "primaria".parse::<Sector>().unwrap_err();
        assert_eq!(err.field, "primaria");
        assert!("Estado".parse::<Sector>().is_err());
    }

    #[test]
    fn record_value_selects_field() {
        let r = record("Jalisco", 1.5);
        assert_eq!(r.value(Sector::Primary), 1.5);
        assert_eq!(r.value(Sector::Secondary), 3.0);
        assert_eq!(r.value(Sector::Tertiary), 4.5);
    }

    #[test]
    fn head_formats_sector_cells_and_keeps_others() {
        let columns = ["Estado", "Primaria", "Secundaria", "Terciaria", "Clave"]
            .map(String::from)
            .to_vec();
        let ds = Dataset::new(columns.clone(), (1..=7).map(|i| record("S", i as f64)).collect());

        let preview = ds.head(5);
        assert_eq!(preview.columns, columns);
        assert_eq!(preview.rows.len(), 5);
        assert_eq!(preview.rows[0], vec!["S", "1.0000", "2.0000", "3.0000", "x"]);
    }

    #[test]
    fn head_formats_only_the_loaded_sector_column() {
        let columns = ["Estado", "Primaria", "Secundaria", "Terciaria", "Primaria"]
            .map(String::from)
            .to_vec();
        let mut rec = record("A", 1.0);
        rec.cells[4] = "99".to_string();
        let ds = Dataset::new(columns, vec![rec]);

        assert_eq!(ds.head(5).rows[0], vec!["A", "1.0000", "2.0000", "3.0000", "99"]);
    }

    #[test]
    fn head_of_short_dataset_returns_all_rows() {
        let ds = Dataset::new(vec![], vec![record("A", 1.0)]);
        assert_eq!(ds.head(5).rows.len(), 1);
        assert!(Dataset::new(vec![], vec![]).head(5).rows.is_empty());
    }
}

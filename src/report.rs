use std::fmt;

use crate::data::model::{format_value, Dataset, Preview, RankedEntry, Sector, STATE_COLUMN};
use crate::data::rank::{ascending_series, top_k};

/// Rows shown in the "Datos Iniciales" preview.
pub const PREVIEW_ROWS: usize = 5;

/// Everything a renderer needs for one pass over the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub preview: Preview,
    pub sections: Vec<SectorSection>,
}

/// Ranking table plus chart series for one sector.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSection {
    pub sector: Sector,
    /// Top-k states, highest first.
    pub ranking: Vec<RankedEntry>,
    /// All states, lowest first.
    pub series: Vec<RankedEntry>,
}

impl Report {
    /// Derive the preview and one section per sector. Nothing is cached.
    pub fn build(dataset: &Dataset, k: usize) -> Self {
        let sections = Sector::ALL
            .into_iter()
            .map(|sector| SectorSection {
                sector,
                ranking: top_k(dataset, sector, k),
                series: ascending_series(dataset, sector),
            })
            .collect();

        Report {
            preview: dataset.head(PREVIEW_ROWS),
            sections,
        }
    }
}

/// Plain-text ranking table, `Estado | <Sector>`.
impl fmt::Display for SectorSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .ranking
            .iter()
            .map(|e| e.state.chars().count())
            .chain(std::iter::once(STATE_COLUMN.len()))
            .max()
            .unwrap_or(0);

        writeln!(f, "{:<width$}  {}", STATE_COLUMN, self.sector.column())?;
        for entry in &self.ranking {
            writeln!(f, "{:<width$}  {}", entry.state, format_value(entry.value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    const CSV: &str = "\
Estado,Primaria,Secundaria,Terciaria
Aguascalientes,1,60,30
Baja California,2,50,20
Campeche,3,40,60
Chiapas,4,30,10
Colima,5,20,50
Durango,6,10,40
";

    fn states(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.state.as_str()).collect()
    }

    #[test]
    fn one_section_per_sector_in_order() {
        let ds = load_reader(CSV.as_bytes()).unwrap();
        let report = Report::build(&ds, 3);

        let sectors: Vec<Sector> = report.sections.iter().map(|s| s.sector).collect();
        assert_eq!(sectors, Sector::ALL.to_vec());

        let [primary, secondary, tertiary] = &report.sections[..] else {
            panic!("expected three sections");
        };
        assert_eq!(states(&primary.ranking), vec!["Durango", "Colima", "Chiapas"]);
        assert_eq!(states(&secondary.ranking), vec!["Aguascalientes", "Baja California", "Campeche"]);
        assert_eq!(states(&tertiary.ranking), vec!["Campeche", "Colima", "Durango"]);
        assert_eq!(tertiary.series.len(), 6);
        assert_eq!(tertiary.series[0].state, "Chiapas");
    }

    #[test]
    fn preview_holds_first_rows() {
        let ds = load_reader(CSV.as_bytes()).unwrap();
        let report = Report::build(&ds, 5);
        assert_eq!(report.preview.rows.len(), PREVIEW_ROWS);
        assert_eq!(report.preview.rows[1][0], "Baja California");
        assert_eq!(report.preview.columns[0], "Estado");
    }

    #[test]
    fn section_renders_as_aligned_table() {
        let section = SectorSection {
            sector: Sector::Primary,
            ranking: vec![
                RankedEntry { state: "Veracruz".into(), value: 12.5 },
                RankedEntry { state: "Colima".into(), value: 3.0 },
            ],
            series: Vec::new(),
        };
        assert_eq!(
            section.to_string(),
            "Estado    Primaria\nVeracruz  12.5000\nColima    3.0000\n"
        );
    }
}

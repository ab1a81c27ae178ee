use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use sector_ranking::config::DATA_PATH;

/// One output row; field names are the CSV headers.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Estado")]
    state: &'a str,
    #[serde(rename = "Primaria")]
    primary: f64,
    #[serde(rename = "Secundaria")]
    secondary: f64,
    #[serde(rename = "Terciaria")]
    tertiary: f64,
}

/// Sector activity per state, billions of pesos.
const STATES: [(&str, f64, f64, f64); 32] = [
    ("Aguascalientes", 14.2, 118.6, 151.3),
    ("Baja California", 24.9, 246.1, 437.8),
    ("Baja California Sur", 11.3, 42.7, 137.9),
    ("Campeche", 8.6, 385.2, 96.4),
    ("Coahuila", 22.5, 352.9, 327.1),
    ("Colima", 8.9, 32.4, 85.6),
    ("Chiapas", 52.7, 88.3, 229.5),
    ("Chihuahua", 68.4, 271.5, 382.7),
    ("Ciudad de México", 1.8, 271.9, 2762.4),
    ("Durango", 33.1, 72.8, 118.2),
    ("Guanajuato", 55.6, 380.4, 454.9),
    ("Guerrero", 27.4, 51.6, 212.8),
    ("Hidalgo", 20.7, 125.1, 178.3),
    ("Jalisco", 135.2, 412.7, 1017.6),
    ("México", 48.3, 653.8, 1410.2),
    ("Michoacán", 111.9, 115.5, 340.6),
    ("Morelos", 13.8, 71.2, 155.4),
    ("Nayarit", 18.6, 24.9, 97.7),
    ("Nuevo León", 19.7, 683.5, 1002.9),
    ("Oaxaca", 35.9, 70.4, 192.6),
    ("Puebla", 42.5, 263.8, 443.1),
    ("Querétaro", 17.2, 240.6, 319.8),
    ("Quintana Roo", 4.9, 41.3, 323.5),
    ("San Luis Potosí", 27.8, 182.7, 216.4),
    ("Sinaloa", 90.6, 93.1, 314.7),
    ("Sonora", 82.1, 284.6, 298.3),
    ("Tabasco", 16.3, 311.2, 173.9),
    ("Tamaulipas", 31.6, 221.4, 340.2),
    ("Tlaxcala", 5.8, 39.5, 56.1),
    ("Veracruz", 96.4, 320.6, 585.3),
    ("Yucatán", 18.1, 88.9, 215.6),
    ("Zacatecas", 32.7, 78.3, 83.9),
];

fn main() -> Result<()> {
    env_logger::init();

    let output_path = Path::new(DATA_PATH);
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    for (state, primary, secondary, tertiary) in STATES {
        writer
            .serialize(Row {
                state,
                primary,
                secondary,
                tertiary,
            })
            .with_context(|| format!("writing row for {state}"))?;
    }
    writer.flush().context("flushing CSV writer")?;

    log::info!("Wrote {} states to {}", STATES.len(), output_path.display());
    Ok(())
}

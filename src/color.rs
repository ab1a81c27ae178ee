use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Sector;

/// Page title colour.
pub const TITLE: Color32 = Color32::from_rgb(0x2E, 0x86, 0xC1);
/// Author line colour.
pub const SUBTITLE: Color32 = Color32::from_rgb(0x7D, 0x3C, 0x98);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from `start_hue` degrees.
pub fn generate_palette(n: usize, start_hue: f32, saturation: f32, lightness: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (start_hue + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, saturation, lightness);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sector colours
// ---------------------------------------------------------------------------

/// Bar colour of each sector chart. The first sector keeps the page's blue hue.
#[derive(Debug, Clone)]
pub struct SectorPalette {
    mapping: BTreeMap<Sector, Color32>,
}

impl SectorPalette {
    pub fn new(saturation: f32, lightness: f32) -> Self {
        let palette = generate_palette(Sector::ALL.len(), 204.0, saturation, lightness);
        let mapping = Sector::ALL.into_iter().zip(palette).collect();
        SectorPalette { mapping }
    }

    pub fn color_for(&self, sector: Sector) -> Color32 {
        self.mapping.get(&sector).copied().unwrap_or(TITLE)
    }
}

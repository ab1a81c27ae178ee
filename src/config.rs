use std::path::PathBuf;

use crate::data::rank::DEFAULT_TOP_K;

/// Fixed location of the merged activity table, relative to the working directory.
pub const DATA_PATH: &str = "data/merged_activities.csv";

/// Settings for one report window. There is no user-facing way to change them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub data_path: PathBuf,
    /// Rows in each sector's ranking table.
    pub top_k: usize,
    pub chart_height: f32,
    /// HSL saturation and lightness of the sector bar colours.
    pub bar_saturation: f32,
    pub bar_lightness: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_PATH),
            top_k: DEFAULT_TOP_K,
            chart_height: 400.0,
            bar_saturation: 0.6,
            bar_lightness: 0.45,
            window_size: [1200.0, 900.0],
            min_window_size: [600.0, 400.0],
        }
    }
}

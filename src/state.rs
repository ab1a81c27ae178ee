use anyhow::{Context, Result};

use crate::color::SectorPalette;
use crate::config::ReportConfig;
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::report::Report;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full report state, independent of rendering.
pub struct AppState {
    pub config: ReportConfig,

    /// Loaded once at start-up; `None` when loading failed.
    pub dataset: Option<Dataset>,

    pub palette: SectorPalette,

    /// Load error shown in place of the report.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load the configured CSV. A failure is kept as the status message.
    pub fn load(config: ReportConfig) -> Self {
        let palette = SectorPalette::new(config.bar_saturation, config.bar_lightness);
        let mut state = Self {
            config,
            dataset: None,
            palette,
            status_message: None,
        };
        match load_dataset(&state.config) {
            Ok(dataset) => {
                if log::log_enabled!(log::Level::Debug) {
                    for section in Report::build(&dataset, state.config.top_k).sections {
                        log::debug!("Top {} by {}:\n{section}", state.config.top_k, section.sector);
                    }
                }
                state.dataset = Some(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
        state
    }

    /// Derive a fresh report from the loaded dataset.
    pub fn report(&self) -> Option<Report> {
        self.dataset
            .as_ref()
            .map(|ds| Report::build(ds, self.config.top_k))
    }
}

fn load_dataset(config: &ReportConfig) -> Result<Dataset> {
    load_file(&config.data_path)
        .with_context(|| format!("loading economic activity data from {}", config.data_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_becomes_status_message() {
        let config = ReportConfig {
            data_path: "no/such/activities.csv".into(),
            ..ReportConfig::default()
        };
        let state = AppState::load(config);
        assert!(state.dataset.is_none());
        assert!(state.report().is_none());
        let msg = state.status_message.unwrap();
        assert!(msg.contains("no/such/activities.csv"));
    }

    #[test]
    fn loaded_file_yields_report() {
        let config = ReportConfig {
            data_path: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/activities.csv").into(),
            top_k: 2,
            ..ReportConfig::default()
        };
        let state = AppState::load(config);
        assert!(state.status_message.is_none());
        let report = state.report().unwrap();
        assert_eq!(report.sections.len(), 3);
        assert!(report.sections.iter().all(|s| s.ranking.len() == 2));
    }
}

use eframe::egui;
use sector_ranking::app::SectorReportApp;
use sector_ranking::config::ReportConfig;
use sector_ranking::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ReportConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Crecimiento Económico en México")
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    // The dataset is loaded once, before the first frame.
    let state = AppState::load(config);

    eframe::run_native(
        "Crecimiento Económico en México",
        options,
        Box::new(|_cc| Ok(Box::new(SectorReportApp::new(state)))),
    )
}

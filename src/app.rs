use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SectorReportApp {
    pub state: AppState,
}

impl SectorReportApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SectorReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::header(ui);
        });

        // ---- Central panel: preview, rankings and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::report_body(ui, &self.state);
        });
    }
}

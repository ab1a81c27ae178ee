use eframe::egui::{self, Align, Color32, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::data::model::{format_value, Preview, STATE_COLUMN};
use crate::report::{Report, SectorSection};
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Page header
// ---------------------------------------------------------------------------

/// Render the centred title and author line.
pub fn header(ui: &mut Ui) {
    ui.with_layout(Layout::top_down(Align::Center), |ui: &mut Ui| {
        ui.label(
            RichText::new("📊 Análisis del Crecimiento Económico en México")
                .size(28.0)
                .strong()
                .color(color::TITLE),
        );
        ui.label(
            RichText::new("Created by Jesus Siqueiros")
                .size(16.0)
                .color(color::SUBTITLE),
        );
    });
    ui.separator();
}

// ---------------------------------------------------------------------------
// Report body
// ---------------------------------------------------------------------------

/// Render the preview and every sector section, or the load error.
pub fn report_body(ui: &mut Ui, state: &AppState) {
    if let Some(msg) = &state.status_message {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new(msg).color(Color32::RED));
        });
        return;
    }
    // Rebuilt on every frame.
    let Some(report) = state.report() else {
        return;
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            preview_section(ui, &report);
            for section in &report.sections {
                sector_section(ui, section, state);
            }
        });
}

fn preview_section(ui: &mut Ui, report: &Report) {
    ui.heading("📂 Datos Iniciales");
    ui.label("Primeras filas del archivo de actividades:");
    ui.add_space(4.0);
    preview_table(ui, &report.preview);
    ui.separator();
}

fn sector_section(ui: &mut Ui, section: &SectorSection, state: &AppState) {
    let sector = section.sector;

    ui.heading(sector.heading());
    ui.label(sector.description());
    ui.add_space(4.0);

    let rows: Vec<Vec<String>> = section
        .ranking
        .iter()
        .map(|e| vec![e.state.clone(), format_value(e.value)])
        .collect();
    let columns = [STATE_COLUMN.to_string(), sector.column().to_string()];
    ui.push_id(("ranking", sector.column()), |ui: &mut Ui| {
        text_table(ui, &columns, &rows);
    });

    ui.add_space(8.0);
    ui.strong(format!(
        "📈 Comparación Visual de Actividad {} por Estado",
        sector.column()
    ));
    plot::sector_bar_chart(
        ui,
        sector,
        &section.series,
        state.palette.color_for(sector),
        state.config.chart_height,
    );
    ui.separator();
}

fn preview_table(ui: &mut Ui, preview: &Preview) {
    ui.push_id("preview", |ui: &mut Ui| {
        text_table(ui, &preview.columns, &preview.rows);
    });
}

// ---------------------------------------------------------------------------
// Table helper
// ---------------------------------------------------------------------------

/// Striped, non-scrolling table of text cells.
fn text_table(ui: &mut Ui, columns: &[String], rows: &[Vec<String>]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(90.0), columns.len())
        .header(20.0, |mut header| {
            for name in columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(name.as_str());
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(18.0, |mut table_row| {
                    for cell in row {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            }
        });
}

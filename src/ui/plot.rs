use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{uniform_grid_spacer, Bar, BarChart, GridMark, Plot};

use crate::data::model::{RankedEntry, Sector, STATE_COLUMN};

// ---------------------------------------------------------------------------
// Sector bar chart
// ---------------------------------------------------------------------------

/// Render one bar per state, in the order given by `series`.
pub fn sector_bar_chart(ui: &mut Ui, sector: Sector, series: &[RankedEntry], color: Color32, height: f32) {
    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, entry)| Bar::new(i as f64, entry.value).name(&entry.state).width(0.7))
        .collect();

    let chart = BarChart::new(bars)
        .color(color)
        .name(sector.column())
        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
            format!("{}\n{:.4}", bar.name, bar.value)
        }));

    let labels: Vec<String> = series.iter().map(|e| e.state.clone()).collect();

    Plot::new(("sector_chart", sector.column()))
        .height(height)
        .x_axis_label(STATE_COLUMN)
        .y_axis_label(sector.axis_label())
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .show_x(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// Axis text for an x grid mark: the state at an integer position, blank elsewhere.
fn category_label(labels: &[String], x: f64) -> String {
    if x < 0.0 || x.fract() != 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}

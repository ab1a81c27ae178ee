//! Ranks Mexican states by primary, secondary and tertiary economic activity
//! and renders the rankings as tables and bar charts.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod report;
pub mod state;
pub mod ui;

pub use data::error::{FieldError, LoadError};
pub use data::loader::{load_file, load_reader};
pub use data::model::{Dataset, RankedEntry, Record, Sector};
pub use data::rank::{ascending_series, top_k, DEFAULT_TOP_K};
pub use report::{Report, SectorSection};

use std::cmp::Ordering;

use super::error::FieldError;
use super::model::{Dataset, RankedEntry, Sector};

/// Size of the per-sector ranking table.
pub const DEFAULT_TOP_K: usize = 5;

/// The `k` states with the highest `sector` value, highest first.
///
/// Ties keep file order. Returns every row when `k` exceeds the dataset size.
pub fn top_k(dataset: &Dataset, sector: Sector, k: usize) -> Vec<RankedEntry> {
    let mut entries = entries(dataset, sector);
    entries.sort_by(|a, b| compare(b.value, a.value));
    entries.truncate(k);
    entries
}

/// Every state ordered by `sector` value, lowest first.
///
/// The order doubles as the bar chart's category order; renderers must not re-sort it.
pub fn ascending_series(dataset: &Dataset, sector: Sector) -> Vec<RankedEntry> {
    let mut entries = entries(dataset, sector);
    entries.sort_by(|a, b| compare(a.value, b.value));
    entries
}

/// [`top_k`] addressed by CSV column name.
pub fn top_k_by_name(dataset: &Dataset, field: &str, k: usize) -> Result<Vec<RankedEntry>, FieldError> {
    Ok(top_k(dataset, field.parse()?, k))
}

/// [`ascending_series`] addressed by CSV column name.
pub fn ascending_series_by_name(dataset: &Dataset, field: &str) -> Result<Vec<RankedEntry>, FieldError> {
    Ok(ascending_series(dataset, field.parse()?))
}

/// Numeric order with `-0.0 == 0.0`. The loader rejects NaN, so values are always comparable.
fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn entries(dataset: &Dataset, sector: Sector) -> Vec<RankedEntry> {
    dataset
        .records()
        .iter()
        .map(|r| RankedEntry {
            state: r.state.clone(),
            value: r.value(sector),
        })
        .collect()
}

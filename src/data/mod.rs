/// Data layer: core types, loading, and ranking.
///
/// Architecture:
/// ```text
///  merged_activities.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + coerce sector columns → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, header names (immutable)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  rank     │  top_k (descending) / ascending_series per Sector
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod rank;

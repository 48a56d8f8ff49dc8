/// Data layer: film table, loading, and filtering.
///
/// Architecture:
/// ```text
///    mafima.csv  (';'-separated, header row)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset   (once, at startup)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Film>, immutable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  RangeFilter → matching indices, best rated first
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;

/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  read file → RawTable (text cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  type, derive Year/Decade, drop invalid rows (cached)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ GameDataset   │  Vec<GameRecord>, rating vocabulary
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  score / year / rating predicates → subset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  top-N per year, top-K, decade × tier, text, density
///   └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod source;
pub mod view;

//! Derivations over a filtered subset. Every function here is pure, accepts
//! an empty subset, and returns an owned result.

pub mod density;
pub mod ranking;
pub mod summary;
pub mod text;
pub mod tiers;

pub use density::{DensityGrid, density};
pub use ranking::{RankedGame, top_k, top_n_per_year};
pub use summary::{Summary, summarize};
pub use text::{concatenate_details, word_count};
pub use tiers::{CrossTab, Tier, cross_tab};

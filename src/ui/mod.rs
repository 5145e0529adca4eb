//! egui rendering. Every function here reads the pre-computed
//! [`DashboardView`](crate::data::view::DashboardView) and draws it; none of
//! them filter or aggregate.

pub mod heatmap;
pub mod panels;
pub mod plot;
pub mod tables;

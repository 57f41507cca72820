//! Greedy placement and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyPlacer` orders bands by constrainedness and places each into the
//! first compatible slot. It is not optimal, but provides fast, deterministic
//! baseline assignments.
//!
//! # KPI
//!
//! `AssignmentKpi` computes placement metrics: placed count, placement rate,
//! and slot load.

mod greedy;
mod kpi;

pub(crate) use greedy::first_fit;
pub use greedy::GreedyPlacer;
pub use kpi::AssignmentKpi;

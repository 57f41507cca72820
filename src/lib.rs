//! Band-to-slot assignment engine.
//!
//! Places named groups of members ("bands") into a small, fixed set of
//! mutually exclusive slots so that no two bands sharing a member occupy the
//! same slot, no band occupies a slot it forbids, each band occupies at most
//! one slot, and as many bands as possible are placed.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Slot`, `SlotSet`, `Band`, `Registry`,
//!   `Assignment`
//! - **`validation`**: Input integrity checks (duplicate names, empty member
//!   sets, unknown slots)
//! - **`conflict`**: Member-overlap relation and forbidden-slot table
//! - **`scheduler`**: Greedy first-fit placer and assignment KPIs
//! - **`cp`**: Exact branch-and-bound optimizer with a time budget
//! - **`solver`**: Strategy selection
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use u_bandslot::models::{Band, Registry, SlotSet};
//!
//! let registry = Registry::new()
//!     .with_band(Band::new("X").with_members(["a", "b"]))
//!     .with_band(Band::new("Y").with_members(["b", "c"]));
//! let slots = SlotSet::default_week();
//!
//! let greedy = u_bandslot::place_greedy(&registry, &slots).unwrap();
//! let (optimal, certified) =
//!     u_bandslot::place_optimal(&registry, &slots, Duration::from_secs(1)).unwrap();
//! assert!(certified);
//! assert_eq!(greedy.placed_count(), 2);
//! assert_eq!(optimal.placed_count(), 2);
//! ```
//!
//! # Concurrency
//!
//! Each run borrows its registry snapshot immutably and allocates its own
//! working state, so independent runs may execute on separate threads.

pub mod conflict;
pub mod cp;
mod error;
pub mod models;
pub mod scheduler;
pub mod solver;
pub mod validation;

use std::time::Duration;

pub use error::{Error, Result};
pub use solver::{place, PlacementConfig, PlacementOutcome, Strategy};

use conflict::ConflictModel;
use cp::{ExactOptimizer, SolverConfig};
use models::{Assignment, Registry, SlotSet};
use scheduler::GreedyPlacer;

/// Places bands first-fit in constrainedness order.
///
/// # Errors
/// [`Error::InvalidInput`] if the registry or slot enumeration is invalid.
pub fn place_greedy(registry: &Registry, slots: &SlotSet) -> Result<Assignment> {
    let model = ConflictModel::build(registry, slots)?;
    Ok(GreedyPlacer::new().place(&model))
}

/// Places as many bands as possible within `time_budget`.
///
/// Returns the assignment and whether it is certified optimal. An
/// uncertified assignment is still valid; the search ran out of time.
///
/// # Errors
/// [`Error::InvalidInput`] if the registry or slot enumeration is invalid.
pub fn place_optimal(
    registry: &Registry,
    slots: &SlotSet,
    time_budget: Duration,
) -> Result<(Assignment, bool)> {
    let model = ConflictModel::build(registry, slots)?;
    let config = SolverConfig::new().with_time_limit(time_budget);
    let result = ExactOptimizer::new(config).solve(&model)?;
    Ok((result.assignment, result.certified))
}

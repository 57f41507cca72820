//! Strategy selection and placement configuration.

use std::time::{Duration, Instant};

use crate::conflict::ConflictModel;
use crate::cp::{ExactOptimizer, SolverConfig};
use crate::error::Result;
use crate::models::{Assignment, Registry, SlotSet};
use crate::scheduler::GreedyPlacer;

/// Placement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// First-fit in constrainedness order (fast, not optimal).
    Greedy,
    /// Branch-and-bound maximizing placed bands (bounded by a budget).
    #[default]
    Exact,
}

/// Configuration for [`place`].
#[derive(Debug, Clone, Default)]
pub struct PlacementConfig {
    /// Placement strategy.
    pub strategy: Strategy,
    /// Budget for [`Strategy::Exact`]. Ignored by greedy placement.
    pub solver: SolverConfig,
}

impl PlacementConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the exact search time budget.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.solver.time_limit = time_limit;
        self
    }

    /// Sets the exact search node budget.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.solver.node_limit = Some(nodes);
        self
    }
}

/// Result of a placement run.
#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    /// The assignment.
    pub assignment: Assignment,
    /// Strategy that produced the assignment.
    pub strategy: Strategy,
    /// Whether the placed count is provably maximal.
    ///
    /// Greedy outcomes are certified only when every band was placed.
    pub certified: bool,
    /// Search nodes expanded (zero for greedy).
    pub nodes_explored: u64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Validates the inputs and runs the configured strategy.
///
/// # Errors
/// [`Error::InvalidInput`](crate::Error::InvalidInput) if validation fails,
/// [`Error::InvalidConfig`](crate::Error::InvalidConfig) for an invalid
/// solver budget.
pub fn place(
    registry: &Registry,
    slots: &SlotSet,
    config: &PlacementConfig,
) -> Result<PlacementOutcome> {
    let start = Instant::now();
    let model = ConflictModel::build(registry, slots)?;

    match config.strategy {
        Strategy::Greedy => {
            let assignment = GreedyPlacer::new().place(&model);
            Ok(PlacementOutcome {
                certified: assignment.is_complete(),
                assignment,
                strategy: Strategy::Greedy,
                nodes_explored: 0,
                elapsed: start.elapsed(),
            })
        }
        Strategy::Exact => {
            let result = ExactOptimizer::new(config.solver.clone()).solve(&model)?;
            Ok(PlacementOutcome {
                assignment: result.assignment,
                strategy: Strategy::Exact,
                certified: result.certified,
                nodes_explored: result.nodes_explored,
                elapsed: start.elapsed(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::Band;

    fn sample() -> Registry {
        Registry::new()
            .with_band(Band::new("A").with_members(["x", "y", "z"]).with_forbidden_slot("S2"))
            .with_band(Band::new("B").with_members(["x", "p"]).with_forbidden_slot("S2"))
            .with_band(Band::new("C").with_members(["y", "q"]).with_forbidden_slot("S2"))
    }

    #[test]
    fn test_strategy_default_exact() {
        assert_eq!(Strategy::default(), Strategy::Exact);
        let config = PlacementConfig::new();
        assert_eq!(config.solver.time_limit, Duration::from_secs(10));
    }

    #[test]
    fn test_place_greedy() {
        let slots = SlotSet::new(["S1", "S2"]);
        let config = PlacementConfig::new().with_strategy(Strategy::Greedy);
        let outcome = place(&sample(), &slots, &config).unwrap();
        assert_eq!(outcome.strategy, Strategy::Greedy);
        assert_eq!(outcome.assignment.placed_count(), 1);
        assert!(!outcome.certified);
        assert_eq!(outcome.nodes_explored, 0);
    }

    #[test]
    fn test_place_exact() {
        let slots = SlotSet::new(["S1", "S2"]);
        let config = PlacementConfig::new().with_time_limit(Duration::from_secs(5));
        let outcome = place(&sample(), &slots, &config).unwrap();
        assert_eq!(outcome.strategy, Strategy::Exact);
        assert_eq!(outcome.assignment.placed_count(), 2);
        assert!(outcome.certified);
        assert!(outcome.nodes_explored > 0);
    }

    #[test]
    fn test_place_rejects_invalid() {
        let registry = Registry::new().with_band(Band::new("A"));
        let err = place(&registry, &SlotSet::default_week(), &PlacementConfig::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_place_rejects_zero_node_limit() {
        let config = PlacementConfig::new().with_node_limit(0);
        let err = place(&sample(), &SlotSet::new(["S1", "S2"]), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}

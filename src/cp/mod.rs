//! Exact placement by branch-and-bound.
//!
//! Finds an assignment maximizing the number of placed bands. The model is
//! one 0/1 decision per (band, slot) with:
//! - at most one slot per band
//! - at most one band of each conflicting pair per slot
//! - forbidden (band, slot) pairs fixed to zero
//!
//! # Algorithm
//!
//! Depth-first search over bands in constrainedness order (the greedy
//! order). Each band branches on its currently feasible slots in enumeration
//! order, then on being left unplaced. Per-slot counters of conflicting
//! occupants make each feasibility test O(1).
//!
//! A node is pruned when `placed + open <= best`, where `open` counts the
//! remaining bands that still have a feasible slot. The incumbent is only
//! replaced by a strictly better leaf, so the result is the first optimum in
//! search order. The first leaf of the search is the greedy assignment, which
//! seeds the incumbent; the optimizer never places fewer bands than greedy.
//!
//! The time and node budgets are checked at every node. When either is
//! exhausted the incumbent is returned uncertified.
//!
//! # Reference
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"
//! - Baptiste et al. (2001), "Constraint-Based Scheduling"

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::conflict::ConflictModel;
use crate::error::{Error, Result};
use crate::models::Assignment;
use crate::scheduler::first_fit;

/// Default wall-clock budget for the exact search.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Search budget for [`ExactOptimizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Wall-clock budget for the search.
    pub time_limit: Duration,
    /// Maximum number of search nodes. `None` = unlimited.
    pub node_limit: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            node_limit: None,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the node budget.
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] for a node limit of zero.
    pub fn validate(&self) -> Result<()> {
        if self.node_limit == Some(0) {
            return Err(Error::InvalidConfig("node_limit must be positive".into()));
        }
        Ok(())
    }
}

/// Outcome of an exact search.
#[derive(Debug, Clone)]
pub struct OptimizeResult {
    /// Best assignment found.
    pub assignment: Assignment,
    /// Whether the search completed, so the placed count is provably maximal.
    pub certified: bool,
    /// Search nodes expanded.
    pub nodes_explored: u64,
    /// Wall-clock time spent, including the greedy seed.
    pub elapsed: Duration,
}

/// Branch-and-bound optimizer maximizing the number of placed bands.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use u_bandslot::conflict::ConflictModel;
/// use u_bandslot::cp::{ExactOptimizer, SolverConfig};
/// use u_bandslot::models::{Band, Registry, SlotSet};
///
/// let registry = Registry::new()
///     .with_band(Band::new("A").with_members(["x", "y"]))
///     .with_band(Band::new("B").with_members(["y", "z"]))
///     .with_band(Band::new("C").with_members(["z", "x"]));
/// let slots = SlotSet::new(["S1", "S2"]);
///
/// let model = ConflictModel::build(&registry, &slots).unwrap();
/// let config = SolverConfig::new().with_time_limit(Duration::from_secs(1));
/// let result = ExactOptimizer::new(config).solve(&model).unwrap();
/// assert!(result.certified);
/// assert_eq!(result.assignment.placed_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExactOptimizer {
    config: SolverConfig,
}

impl ExactOptimizer {
    /// Creates an optimizer with the given budget.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The search budget.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches for an assignment placing as many bands as possible.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] if the configuration is invalid.
    pub fn solve(&self, model: &ConflictModel<'_>) -> Result<OptimizeResult> {
        self.config.validate()?;

        let start = Instant::now();
        let order = model.constrainedness_order();
        let seed = first_fit(model, &order);

        let mut search = Search::new(model, &order, seed, start, &self.config);
        let root_bound = search.open_bands(0);
        if search.best_placed < root_bound {
            search.dfs(0);
        }

        let certified = !search.stopped;
        let nodes_explored = search.nodes;
        let best_placed = search.best_placed;
        let assignment = model.to_assignment(&order, &search.best);
        let elapsed = start.elapsed();

        if certified {
            debug!(
                "exact placement: {}/{} bands placed, optimal, {} nodes in {:?}",
                best_placed,
                model.band_count(),
                nodes_explored,
                elapsed
            );
        } else {
            warn!(
                "exact placement stopped on budget after {} nodes in {:?}; best so far {}/{} bands",
                nodes_explored,
                elapsed,
                best_placed,
                model.band_count()
            );
        }

        Ok(OptimizeResult {
            assignment,
            certified,
            nodes_explored,
            elapsed,
        })
    }
}

/// Mutable state of one depth-first search.
struct Search<'m, 'a> {
    model: &'m ConflictModel<'a>,
    order: &'m [usize],
    bands: usize,
    slots: usize,
    /// `blocked[s * bands + i]`: occupants of slot `s` conflicting with band `i`.
    blocked: Vec<u32>,
    choice: Vec<Option<usize>>,
    placed: usize,
    best: Vec<Option<usize>>,
    best_placed: usize,
    nodes: u64,
    deadline: Option<Instant>,
    node_limit: Option<u64>,
    stopped: bool,
}

impl<'m, 'a> Search<'m, 'a> {
    fn new(
        model: &'m ConflictModel<'a>,
        order: &'m [usize],
        seed: Vec<Option<usize>>,
        start: Instant,
        config: &SolverConfig,
    ) -> Self {
        let bands = model.band_count();
        let slots = model.slot_count();
        let best_placed = seed.iter().filter(|c| c.is_some()).count();

        Self {
            model,
            order,
            bands,
            slots,
            blocked: vec![0; bands * slots],
            choice: vec![None; bands],
            placed: 0,
            best: seed,
            best_placed,
            nodes: 0,
            deadline: start.checked_add(config.time_limit),
            node_limit: config.node_limit,
            stopped: false,
        }
    }

    #[inline]
    fn feasible(&self, band: usize, slot: usize) -> bool {
        !self.model.forbids(band, slot) && self.blocked[slot * self.bands + band] == 0
    }

    fn has_feasible_slot(&self, band: usize) -> bool {
        (0..self.slots).any(|s| self.feasible(band, s))
    }

    /// Bands from `depth` onward that still have a feasible slot.
    fn open_bands(&self, depth: usize) -> usize {
        self.order[depth..]
            .iter()
            .filter(|&&band| self.has_feasible_slot(band))
            .count()
    }

    fn assign(&mut self, band: usize, slot: usize) {
        for &other in self.model.neighbors(band) {
            self.blocked[slot * self.bands + other] += 1;
        }
        self.choice[band] = Some(slot);
        self.placed += 1;
    }

    fn unassign(&mut self, band: usize, slot: usize) {
        for &other in self.model.neighbors(band) {
            self.blocked[slot * self.bands + other] -= 1;
        }
        self.choice[band] = None;
        self.placed -= 1;
    }

    fn budget_exhausted(&self) -> bool {
        if self.node_limit.is_some_and(|limit| self.nodes > limit) {
            return true;
        }
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Whether the incumbent places every band; nothing can beat it.
    fn done(&self) -> bool {
        self.stopped || self.best_placed == self.bands
    }

    fn dfs(&mut self, depth: usize) {
        self.nodes += 1;
        if self.budget_exhausted() {
            self.stopped = true;
            return;
        }

        if depth == self.bands {
            if self.placed > self.best_placed {
                self.best_placed = self.placed;
                self.best.clone_from(&self.choice);
            }
            return;
        }

        if self.placed + self.open_bands(depth) <= self.best_placed {
            return;
        }

        let band = self.order[depth];
        for slot in 0..self.slots {
            if self.feasible(band, slot) {
                self.assign(band, slot);
                self.dfs(depth + 1);
                self.unassign(band, slot);
                if self.done() {
                    return;
                }
            }
        }

        self.dfs(depth + 1);
    }
}

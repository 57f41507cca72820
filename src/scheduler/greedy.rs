//! Constrainedness-ordered first-fit placer.
//!
//! # Algorithm
//!
//! 1. Order bands by member count descending, then forbidden-slot count
//!    descending; ties keep registry order.
//! 2. For each band, scan slots in enumeration order and take the first
//!    slot that the band does not forbid and whose occupants share no
//!    member with it.
//! 3. A band with no such slot is recorded as unplaced.
//!
//! # Complexity
//! O(n * k * d) where n=bands, k=slots, d=occupants checked per slot.
//!
//! Not optimal: an early placement can block a later band that another
//! arrangement would have fitted. See [`ExactOptimizer`](crate::cp::ExactOptimizer).

use log::debug;

use crate::conflict::ConflictModel;
use crate::models::Assignment;

/// Fast deterministic first-fit placer.
///
/// # Example
///
/// ```
/// use u_bandslot::conflict::ConflictModel;
/// use u_bandslot::models::{Band, Registry, SlotSet};
/// use u_bandslot::scheduler::GreedyPlacer;
///
/// let registry = Registry::new()
///     .with_band(Band::new("X").with_members(["a", "b"]))
///     .with_band(Band::new("Y").with_members(["b", "c"]));
/// let slots = SlotSet::new(["S1", "S2"]);
///
/// let model = ConflictModel::build(&registry, &slots).unwrap();
/// let assignment = GreedyPlacer::new().place(&model);
/// assert_eq!(assignment.placed_count(), 2);
/// assert_ne!(assignment.slot_of("X"), assignment.slot_of("Y"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlacer;

impl GreedyPlacer {
    /// Creates a new placer.
    pub fn new() -> Self {
        Self
    }

    /// Places bands first-fit in constrainedness order.
    pub fn place(&self, model: &ConflictModel<'_>) -> Assignment {
        let order = model.constrainedness_order();
        let choice = first_fit(model, &order);
        let assignment = model.to_assignment(&order, &choice);

        debug!(
            "greedy placement: {}/{} bands placed over {} slots",
            assignment.placed_count(),
            model.band_count(),
            model.slot_count()
        );

        assignment
    }
}

/// Per-band slot choice (indexed by registry position) for first-fit in `order`.
pub(crate) fn first_fit(model: &ConflictModel<'_>, order: &[usize]) -> Vec<Option<usize>> {
    let mut occupants: Vec<Vec<usize>> = vec![Vec::new(); model.slot_count()];
    let mut choice = vec![None; model.band_count()];

    for &band in order {
        let slot = (0..model.slot_count()).find(|&s| {
            !model.forbids(band, s) && !occupants[s].iter().any(|&o| model.conflicts(band, o))
        });

        if let Some(s) = slot {
            occupants[s].push(band);
            choice[band] = Some(s);
        }
    }

    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Band, Registry, SlotSet};

    fn place(registry: &Registry, slots: &SlotSet) -> Assignment {
        let model = ConflictModel::build(registry, slots).unwrap();
        GreedyPlacer::new().place(&model)
    }

    #[test]
    fn test_conflicting_pair_split() {
        let registry = Registry::new()
            .with_band(Band::new("X").with_members(["a", "b"]))
            .with_band(Band::new("Y").with_members(["b", "c"]));
        let slots = SlotSet::new(["S1", "S2"]);

        let a = place(&registry, &slots);
        assert_eq!(a.slot_of("X").unwrap().as_str(), "S1");
        assert_eq!(a.slot_of("Y").unwrap().as_str(), "S2");
        assert!(a.unplaced().is_empty());
    }

    #[test]
    fn test_disjoint_bands_share_first_slot() {
        let registry = Registry::new()
            .with_band(Band::new("X").with_member("a"))
            .with_band(Band::new("Y").with_member("b"));
        let slots = SlotSet::new(["S1", "S2"]);

        let a = place(&registry, &slots);
        assert_eq!(a.occupants(&"S1".into()), ["X", "Y"]);
        assert!(a.occupants(&"S2".into()).is_empty());
    }

    #[test]
    fn test_forbidden_slot_skipped() {
        let registry = Registry::new()
            .with_band(Band::new("X").with_member("a").with_forbidden_slot("S1"));
        let slots = SlotSet::new(["S1", "S2"]);

        let a = place(&registry, &slots);
        assert_eq!(a.slot_of("X").unwrap().as_str(), "S2");
    }

    #[test]
    fn test_all_forbidden_unplaced() {
        let registry = Registry::new().with_band(
            Band::new("Z")
                .with_member("a")
                .with_forbidden_slots(["S1", "S2"]),
        );
        let slots = SlotSet::new(["S1", "S2"]);

        let a = place(&registry, &slots);
        assert_eq!(a.unplaced(), ["Z"]);
        assert_eq!(a.placed_count(), 0);
    }

    #[test]
    fn test_larger_band_placed_first() {
        // Y is larger, so it takes S1 even though X was registered first.
        let registry = Registry::new()
            .with_band(Band::new("X").with_members(["a"]))
            .with_band(Band::new("Y").with_members(["a", "b", "c"]));
        let slots = SlotSet::new(["S1", "S2"]);

        let a = place(&registry, &slots);
        assert_eq!(a.slot_of("Y").unwrap().as_str(), "S1");
        assert_eq!(a.slot_of("X").unwrap().as_str(), "S2");
    }

    #[test]
    fn test_greedy_suboptimal() {
        // Greedy puts A (largest) in S1, which blocks both B and C from S1
        // while each of them can only use S1 or nothing else useful.
        let registry = Registry::new()
            .with_band(Band::new("A").with_members(["x", "y", "z"]).with_forbidden_slot("S2"))
            .with_band(Band::new("B").with_members(["x", "p"]).with_forbidden_slot("S2"))
            .with_band(Band::new("C").with_members(["y", "q"]).with_forbidden_slot("S2"));
        let slots = SlotSet::new(["S1", "S2"]);

        let a = place(&registry, &slots);
        assert_eq!(a.placed_count(), 1);
        assert_eq!(a.unplaced(), ["B", "C"]);
        assert!(a.is_valid_for(&registry));
    }

    #[test]
    fn test_no_slots() {
        let registry = Registry::new().with_band(Band::new("X").with_member("a"));
        let a = place(&registry, &SlotSet::default());
        assert_eq!(a.unplaced(), ["X"]);
    }

    #[test]
    fn test_empty_registry() {
        let a = place(&Registry::new(), &SlotSet::default_week());
        assert_eq!(a.placed_count(), 0);
        assert_eq!(a.unplaced_count(), 0);
    }
}

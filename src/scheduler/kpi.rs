//! Assignment quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placed | Bands occupying a slot |
//! | Unplaced | Bands left without a slot |
//! | Placement Rate | placed / (placed + unplaced) |
//! | Slots Used | Slots with at least one occupant |
//! | Max Load | Largest occupant count of any slot |
//! | Avg Load | Mean occupant count over used slots |

use std::collections::HashMap;

use crate::models::Assignment;

/// Assignment performance indicators.
#[derive(Debug, Clone)]
pub struct AssignmentKpi {
    /// Number of placed bands.
    pub placed: usize,
    /// Number of unplaced bands.
    pub unplaced: usize,
    /// Fraction of bands placed (0.0..1.0). 1.0 when there are no bands.
    pub placement_rate: f64,
    /// Number of slots with at least one occupant.
    pub slots_used: usize,
    /// Largest number of occupants in one slot.
    pub max_load: usize,
    /// Average occupants per used slot. 0.0 when no slot is used.
    pub avg_load: f64,
    /// Occupant count per slot label.
    pub load_by_slot: HashMap<String, usize>,
}

impl AssignmentKpi {
    /// Computes KPIs from an assignment.
    pub fn calculate(assignment: &Assignment) -> Self {
        let placed = assignment.placed_count();
        let unplaced = assignment.unplaced_count();

        let load_by_slot: HashMap<String, usize> = assignment
            .iter()
            .map(|o| (o.slot.as_str().to_string(), o.bands.len()))
            .collect();

        let slots_used = load_by_slot.values().filter(|&&n| n > 0).count();
        let max_load = load_by_slot.values().copied().max().unwrap_or(0);

        let total = placed + unplaced;
        let placement_rate = if total == 0 {
            1.0
        } else {
            placed as f64 / total as f64
        };

        let avg_load = if slots_used == 0 {
            0.0
        } else {
            placed as f64 / slots_used as f64
        };

        Self {
            placed,
            unplaced,
            placement_rate,
            slots_used,
            max_load,
            avg_load,
            load_by_slot,
        }
    }

    /// Whether the assignment meets the given placement-rate threshold.
    pub fn meets_threshold(&self, min_placement_rate: f64) -> bool {
        self.placement_rate >= min_placement_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotSet;

    #[test]
    fn test_kpi_basic() {
        let slots = SlotSet::new(["S1", "S2", "S3"]);
        let mut a = Assignment::empty(&slots);
        a.place(&"S1".into(), "X");
        a.place(&"S1".into(), "Y");
        a.place(&"S2".into(), "Z");
        a.add_unplaced("W");

        let kpi = AssignmentKpi::calculate(&a);
        assert_eq!(kpi.placed, 3);
        assert_eq!(kpi.unplaced, 1);
        assert!((kpi.placement_rate - 0.75).abs() < 1e-10);
        assert_eq!(kpi.slots_used, 2);
        assert_eq!(kpi.max_load, 2);
        assert!((kpi.avg_load - 1.5).abs() < 1e-10);
        assert_eq!(kpi.load_by_slot["S3"], 0);
        assert!(kpi.meets_threshold(0.7));
        assert!(!kpi.meets_threshold(0.8));
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = AssignmentKpi::calculate(&Assignment::empty(&SlotSet::default_week()));
        assert_eq!(kpi.placed, 0);
        assert!((kpi.placement_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.slots_used, 0);
        assert_eq!(kpi.max_load, 0);
        assert_eq!(kpi.avg_load, 0.0);
    }
}

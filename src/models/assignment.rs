//! Assignment (solution) model.
//!
//! An assignment maps each slot to the bands occupying it and lists the
//! bands that could not be placed. Both placers produce this type.
//!
//! # Invariants
//! For an assignment returned by a placer, against its input registry:
//! 1. Every band appears exactly once, either in one slot or as unplaced.
//! 2. Occupants of the same slot have disjoint member sets.
//! 3. No band occupies one of its forbidden slots.
//!
//! [`Assignment::verify`] reports every breach of these invariants.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{Registry, Slot, SlotSet};

/// Bands occupying one slot, in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOccupancy {
    /// The slot.
    pub slot: Slot,
    /// Band names, in the order they were placed.
    pub bands: Vec<String>,
}

/// Result of a placement run.
///
/// Equality compares occupants per slot and the unplaced bands as sets;
/// placement order and empty slots do not matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assignment {
    slots: Vec<SlotOccupancy>,
    unplaced: Vec<String>,
}

/// A breach of the assignment invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub kind: ViolationKind,
    /// Band the violation concerns.
    pub band: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of assignment violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A registered band is neither placed nor unplaced.
    Missing,
    /// A band appears more than once.
    Duplicated,
    /// Two occupants of the same slot share a member.
    MemberClash,
    /// A band occupies a slot it forbids.
    ForbiddenSlot,
    /// The assignment names a band absent from the registry.
    UnknownBand,
}

impl Violation {
    fn new(kind: ViolationKind, band: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            band: band.into(),
            message: message.into(),
        }
    }
}

impl Assignment {
    /// Creates an assignment with every slot empty and nothing unplaced.
    pub fn empty(slots: &SlotSet) -> Self {
        Self {
            slots: slots
                .iter()
                .map(|slot| SlotOccupancy {
                    slot: slot.clone(),
                    bands: Vec::new(),
                })
                .collect(),
            unplaced: Vec::new(),
        }
    }

    /// Appends a band to a slot's occupants.
    ///
    /// Returns `false` if the slot is not part of this assignment.
    /// No constraint checks are made; see [`Assignment::verify`].
    pub fn place(&mut self, slot: &Slot, band: impl Into<String>) -> bool {
        match self.slots.iter_mut().find(|o| &o.slot == slot) {
            Some(occupancy) => {
                occupancy.bands.push(band.into());
                true
            }
            None => false,
        }
    }

    /// Appends a band to the slot at `index` in enumeration order.
    pub(crate) fn place_at(&mut self, index: usize, band: impl Into<String>) {
        self.slots[index].bands.push(band.into());
    }

    /// Records a band as unplaced.
    pub fn add_unplaced(&mut self, band: impl Into<String>) {
        self.unplaced.push(band.into());
    }

    /// Occupants of a slot. Empty for unknown slots.
    pub fn occupants(&self, slot: &Slot) -> &[String] {
        self.slots
            .iter()
            .find(|o| &o.slot == slot)
            .map(|o| o.bands.as_slice())
            .unwrap_or(&[])
    }

    /// Slot occupied by a band, if placed.
    pub fn slot_of(&self, band: &str) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|o| o.bands.iter().any(|b| b == band))
            .map(|o| &o.slot)
    }

    /// Whether the band was placed.
    pub fn is_placed(&self, band: &str) -> bool {
        self.slot_of(band).is_some()
    }

    /// Bands that could not be placed, in the order they were given up on.
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    /// Number of placed bands.
    pub fn placed_count(&self) -> usize {
        self.slots.iter().map(|o| o.bands.len()).sum()
    }

    /// Number of unplaced bands.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Whether every band was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Slots with their occupants, in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlotOccupancy> {
        self.slots.iter()
    }

    /// Checks the assignment invariants against a registry.
    ///
    /// Returns every violation found; an empty list means the assignment
    /// is valid for `registry`.
    pub fn verify(&self, registry: &Registry) -> Vec<Violation> {
        let mut violations = Vec::new();

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for name in self
            .slots
            .iter()
            .flat_map(|o| o.bands.iter())
            .chain(self.unplaced.iter())
        {
            *seen.entry(name.as_str()).or_insert(0) += 1;
        }

        for band in registry {
            match seen.get(band.name.as_str()).copied().unwrap_or(0) {
                0 => violations.push(Violation::new(
                    ViolationKind::Missing,
                    &band.name,
                    format!("Band '{}' is neither placed nor unplaced", band.name),
                )),
                1 => {}
                n => violations.push(Violation::new(
                    ViolationKind::Duplicated,
                    &band.name,
                    format!("Band '{}' appears {n} times", band.name),
                )),
            }
        }

        let mut unknown: Vec<&str> = seen
            .keys()
            .copied()
            .filter(|name| !registry.contains(name))
            .collect();
        unknown.sort_unstable();
        for name in unknown {
            violations.push(Violation::new(
                ViolationKind::UnknownBand,
                name,
                format!("Band '{name}' is not registered"),
            ));
        }

        for occupancy in &self.slots {
            let bands: Vec<_> = occupancy
                .bands
                .iter()
                .filter_map(|name| registry.get(name))
                .collect();

            for band in &bands {
                if band.forbids(&occupancy.slot) {
                    violations.push(Violation::new(
                        ViolationKind::ForbiddenSlot,
                        &band.name,
                        format!("Band '{}' placed in forbidden slot {}", band.name, occupancy.slot),
                    ));
                }
            }

            for i in 0..bands.len() {
                for j in (i + 1)..bands.len() {
                    if bands[i].conflicts_with(bands[j]) {
                        violations.push(Violation::new(
                            ViolationKind::MemberClash,
                            &bands[j].name,
                            format!(
                                "Bands '{}' and '{}' share a member in slot {}",
                                bands[i].name, bands[j].name, occupancy.slot
                            ),
                        ));
                    }
                }
            }
        }

        violations
    }

    /// Whether [`Assignment::verify`] finds no violations.
    pub fn is_valid_for(&self, registry: &Registry) -> bool {
        self.verify(registry).is_empty()
    }

    fn normalized(&self) -> (BTreeMap<&Slot, BTreeSet<&str>>, BTreeSet<&str>) {
        let slots = self
            .slots
            .iter()
            .filter(|o| !o.bands.is_empty())
            .map(|o| (&o.slot, o.bands.iter().map(String::as_str).collect()))
            .collect();
        let unplaced = self.unplaced.iter().map(String::as_str).collect();
        (slots, unplaced)
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Assignment {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Band;

    fn sample_registry() -> Registry {
        Registry::new()
            .with_band(Band::new("X").with_members(["a", "b"]))
            .with_band(Band::new("Y").with_members(["b", "c"]))
            .with_band(Band::new("Z").with_member("d").with_forbidden_slot("S1"))
    }

    fn slots() -> SlotSet {
        SlotSet::new(["S1", "S2"])
    }

    #[test]
    fn test_valid_assignment() {
        let mut a = Assignment::empty(&slots());
        a.place(&"S1".into(), "X");
        a.place(&"S2".into(), "Y");
        a.place(&"S2".into(), "Z");
        assert!(a.is_valid_for(&sample_registry()));
        assert_eq!(a.placed_count(), 3);
        assert_eq!(a.slot_of("Y").unwrap().as_str(), "S2");
        assert_eq!(a.occupants(&"S2".into()), ["Y", "Z"]);
        assert!(a.is_complete());
    }

    #[test]
    fn test_place_unknown_slot() {
        let mut a = Assignment::empty(&slots());
        assert!(!a.place(&"S9".into(), "X"));
        assert_eq!(a.placed_count(), 0);
        assert!(a.occupants(&"S9".into()).is_empty());
    }

    #[test]
    fn test_verify_member_clash() {
        let mut a = Assignment::empty(&slots());
        a.place(&"S1".into(), "X");
        a.place(&"S1".into(), "Y");
        a.add_unplaced("Z");
        let violations = a.verify(&sample_registry());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::MemberClash);
    }

    #[test]
    fn test_verify_forbidden_slot() {
        let mut a = Assignment::empty(&slots());
        a.place(&"S1".into(), "X");
        a.place(&"S2".into(), "Y");
        a.place(&"S1".into(), "Z");
        let violations = a.verify(&sample_registry());
        assert!(violations
            .iter()
            .any(|v| v.kind == ViolationKind::ForbiddenSlot && v.band == "Z"));
    }

    #[test]
    fn test_verify_missing_duplicated_unknown() {
        let mut a = Assignment::empty(&slots());
        a.place(&"S1".into(), "X");
        a.add_unplaced("X");
        a.add_unplaced("W");
        let kinds: Vec<ViolationKind> = a
            .verify(&sample_registry())
            .into_iter()
            .map(|v| v.kind)
            .collect();
        assert!(kinds.contains(&ViolationKind::Duplicated));
        assert!(kinds.contains(&ViolationKind::Missing));
        assert!(kinds.contains(&ViolationKind::UnknownBand));
    }

    #[test]
    fn test_set_equality() {
        let mut a = Assignment::empty(&slots());
        a.place(&"S2".into(), "Y");
        a.place(&"S2".into(), "Z");
        a.add_unplaced("X");

        let mut b = Assignment::empty(&slots());
        b.place(&"S2".into(), "Z");
        b.place(&"S2".into(), "Y");
        b.add_unplaced("X");
        assert_eq!(a, b);

        let mut c = Assignment::empty(&slots());
        c.place(&"S1".into(), "Y");
        c.place(&"S2".into(), "Z");
        c.add_unplaced("X");
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_assignment() {
        let a = Assignment::empty(&slots());
        assert_eq!(a.placed_count(), 0);
        assert_eq!(a.unplaced_count(), 0);
        assert!(a.is_valid_for(&Registry::new()));
        assert_eq!(a.iter().count(), 2);
    }
}

//! Slot model.
//!
//! A slot is an opaque placement target. Slots carry no time semantics;
//! the only structure is the stable enumeration order of a [`SlotSet`],
//! which drives greedy scan order and deterministic tie-breaking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day labels of the default weekly grid.
pub const DEFAULT_DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Period labels of the default weekly grid.
pub const DEFAULT_PERIODS: [&str; 2] = ["AM", "PM"];

/// An opaque slot identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(String);

impl Slot {
    /// Creates a slot from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The slot label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Slot {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Slot {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Ordered slot enumeration.
///
/// Construction does not reject repeated labels; repeats are reported by
/// [`validate_registry`](crate::validation::validate_registry) so that every
/// input problem surfaces in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSet {
    slots: Vec<Slot>,
}

impl SlotSet {
    /// Creates a slot set from labels, keeping their order.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Slot>,
    {
        Self {
            slots: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a `day × period` grid labelled `"{day}_{period}"`, day-major.
    ///
    /// # Example
    /// ```
    /// use u_bandslot::models::SlotSet;
    ///
    /// let slots = SlotSet::weekly(&["Mon", "Tue"], &["AM", "PM"]);
    /// let labels: Vec<&str> = slots.iter().map(|s| s.as_str()).collect();
    /// assert_eq!(labels, ["Mon_AM", "Mon_PM", "Tue_AM", "Tue_PM"]);
    /// ```
    pub fn weekly(days: &[&str], periods: &[&str]) -> Self {
        let mut slots = Vec::with_capacity(days.len() * periods.len());
        for day in days {
            for period in periods {
                slots.push(Slot::new(format!("{day}_{period}")));
            }
        }
        Self { slots }
    }

    /// The ten-slot default: Monday to Friday, morning and afternoon.
    pub fn default_week() -> Self {
        Self::weekly(&DEFAULT_DAYS, &DEFAULT_PERIODS)
    }

    /// Position of a slot in the enumeration.
    pub fn index_of(&self, slot: &Slot) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }

    /// Whether the slot is part of the enumeration.
    pub fn contains(&self, slot: &Slot) -> bool {
        self.index_of(slot).is_some()
    }

    /// Slot at the given position.
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the enumeration is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Slots as a slice.
    pub fn as_slice(&self) -> &[Slot] {
        &self.slots
    }
}

impl<'a> IntoIterator for &'a SlotSet {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_week() {
        let slots = SlotSet::default_week();
        assert_eq!(slots.len(), 10);
        assert_eq!(slots.get(0).unwrap().as_str(), "Mon_AM");
        assert_eq!(slots.get(1).unwrap().as_str(), "Mon_PM");
        assert_eq!(slots.get(9).unwrap().as_str(), "Fri_PM");
    }

    #[test]
    fn test_index_of() {
        let slots = SlotSet::new(["A", "B", "C"]);
        assert_eq!(slots.index_of(&Slot::from("B")), Some(1));
        assert_eq!(slots.index_of(&Slot::from("Z")), None);
        assert!(slots.contains(&"C".into()));
    }

    #[test]
    fn test_empty() {
        let slots = SlotSet::default();
        assert!(slots.is_empty());
        assert_eq!(slots.iter().count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Slot::new("Wed_PM").to_string(), "Wed_PM");
    }
}

//! Conflict model.
//!
//! Derives from a registry snapshot the pairwise member-overlap relation
//! between bands and each band's forbidden slots, indexed for the placers.
//! Bands are addressed by their position in the registry and slots by their
//! position in the enumeration.
//!
//! # Algorithm
//! Members are grouped by the bands that list them; every pair of bands
//! inside a group conflicts. This costs O(Σ g²) over member group sizes g
//! instead of comparing every band pair's member sets.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::{Assignment, Band, Registry, SlotSet};
use crate::validation::validate_registry;

/// Conflict relation and forbidden-slot table for one placement run.
///
/// Built fresh per run; borrows the registry and slot enumeration.
#[derive(Debug, Clone)]
pub struct ConflictModel<'a> {
    bands: Vec<&'a Band>,
    slots: &'a SlotSet,
    /// Row-major `band × band` conflict matrix.
    matrix: Vec<bool>,
    neighbors: Vec<Vec<usize>>,
    /// Row-major `band × slot` forbidden table.
    forbidden: Vec<bool>,
}

impl<'a> ConflictModel<'a> {
    /// Validates the inputs and builds the model.
    ///
    /// # Errors
    /// [`Error::InvalidInput`](crate::Error::InvalidInput) if the registry or
    /// slot enumeration fails [`validate_registry`].
    pub fn build(registry: &'a Registry, slots: &'a SlotSet) -> Result<Self> {
        validate_registry(registry, slots)?;

        let bands: Vec<&Band> = registry.iter().collect();
        let n = bands.len();
        let k = slots.len();

        let mut by_member: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, band) in bands.iter().enumerate() {
            for member in &band.members {
                by_member.entry(member.as_str()).or_default().push(i);
            }
        }

        let mut matrix = vec![false; n * n];
        for group in by_member.values() {
            for (x, &i) in group.iter().enumerate() {
                for &j in &group[x + 1..] {
                    matrix[i * n + j] = true;
                    matrix[j * n + i] = true;
                }
            }
        }

        let neighbors = (0..n)
            .map(|i| (0..n).filter(|&j| matrix[i * n + j]).collect())
            .collect();

        let mut forbidden = vec![false; n * k];
        for (i, band) in bands.iter().enumerate() {
            for (s, slot) in slots.iter().enumerate() {
                forbidden[i * k + s] = band.forbids(slot);
            }
        }

        Ok(Self {
            bands,
            slots,
            matrix,
            neighbors,
            forbidden,
        })
    }

    /// Number of bands.
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Band at registry position `i`.
    pub fn band(&self, i: usize) -> &'a Band {
        self.bands[i]
    }

    /// The slot enumeration.
    pub fn slots(&self) -> &'a SlotSet {
        self.slots
    }

    /// Whether bands `i` and `j` share a member. Always `false` for `i == j`.
    #[inline]
    pub fn conflicts(&self, i: usize, j: usize) -> bool {
        self.matrix[i * self.bands.len() + j]
    }

    /// Bands conflicting with band `i`, ascending.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    /// Number of bands conflicting with band `i`.
    pub fn degree(&self, i: usize) -> usize {
        self.neighbors[i].len()
    }

    /// Whether band `i` forbids slot `s`.
    #[inline]
    pub fn forbids(&self, i: usize, s: usize) -> bool {
        self.forbidden[i * self.slots.len() + s]
    }

    /// Slots band `i` may use, ignoring other bands.
    pub fn allowed_slots(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.slots.len()).filter(move |&s| !self.forbids(i, s))
    }

    /// All conflicting pairs `(i, j)` with `i < j`.
    pub fn conflict_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(i, ns)| ns.iter().filter(move |&&j| j > i).map(move |&j| (i, j)))
    }

    /// Band indices, most constrained first.
    ///
    /// Sorted by member count descending, then forbidden-slot count
    /// descending; ties keep registry order.
    pub fn constrainedness_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.bands.len()).collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (self.bands[a], self.bands[b]);
            b.member_count()
                .cmp(&a.member_count())
                .then_with(|| b.forbidden_count().cmp(&a.forbidden_count()))
        });
        order
    }

    /// Builds an [`Assignment`] from per-band slot choices.
    ///
    /// Bands are recorded in `order`, so occupants and unplaced bands list
    /// in placement order.
    pub(crate) fn to_assignment(&self, order: &[usize], choice: &[Option<usize>]) -> Assignment {
        let mut assignment = Assignment::empty(self.slots);
        for &i in order {
            let name = self.bands[i].name.as_str();
            match choice[i] {
                Some(s) => assignment.place_at(s, name),
                None => assignment.add_unplaced(name),
            }
        }
        assignment
    }
}

//! Band model.
//!
//! A band is a named group of members that must be placed into at most
//! one slot. Two bands that share a member can never occupy the same slot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Slot;

/// A named group with members and the slots it cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Unique band name within a registry.
    pub name: String,
    /// Member identifiers. Must be non-empty for a valid registry.
    pub members: BTreeSet<String>,
    /// Slots this band cannot occupy.
    #[serde(default)]
    pub forbidden_slots: BTreeSet<Slot>,
}

impl Band {
    /// Creates a band with no members and no forbidden slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeSet::new(),
            forbidden_slots: BTreeSet::new(),
        }
    }

    /// Adds a member.
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.insert(member.into());
        self
    }

    /// Adds several members.
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    /// Forbids a slot.
    pub fn with_forbidden_slot(mut self, slot: impl Into<Slot>) -> Self {
        self.forbidden_slots.insert(slot.into());
        self
    }

    /// Forbids several slots.
    pub fn with_forbidden_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Slot>,
    {
        self.forbidden_slots
            .extend(slots.into_iter().map(Into::into));
        self
    }

    /// Whether the two bands share at least one member.
    ///
    /// A band is never considered in conflict with a band of the same name.
    pub fn conflicts_with(&self, other: &Band) -> bool {
        self.name != other.name && !self.members.is_disjoint(&other.members)
    }

    /// Whether this band cannot occupy `slot`.
    pub fn forbids(&self, slot: &Slot) -> bool {
        self.forbidden_slots.contains(slot)
    }

    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of forbidden slots.
    pub fn forbidden_count(&self) -> usize {
        self.forbidden_slots.len()
    }
}

/// Splits a free-text member list on `,` and `，`.
///
/// Entries are trimmed, empty entries dropped, and repeats removed
/// keeping the first occurrence.
///
/// # Example
/// ```
/// use u_bandslot::models::parse_member_list;
///
/// let members = parse_member_list("alice, bob，carol,, alice");
/// assert_eq!(members, ["alice", "bob", "carol"]);
/// ```
pub fn parse_member_list(input: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    input
        .split([',', '，'])
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .filter(|m| seen.insert(*m))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let band = Band::new("X")
            .with_members(["a", "b"])
            .with_member("a")
            .with_forbidden_slot("Mon_AM");
        assert_eq!(band.member_count(), 2);
        assert_eq!(band.forbidden_count(), 1);
        assert!(band.forbids(&Slot::from("Mon_AM")));
        assert!(!band.forbids(&Slot::from("Mon_PM")));
    }

    #[test]
    fn test_conflicts_with() {
        let x = Band::new("X").with_members(["a", "b"]);
        let y = Band::new("Y").with_members(["b", "c"]);
        let z = Band::new("Z").with_members(["d"]);
        assert!(x.conflicts_with(&y));
        assert!(y.conflicts_with(&x));
        assert!(!x.conflicts_with(&z));
        assert!(!x.conflicts_with(&x));
    }

    #[test]
    fn test_parse_member_list() {
        assert_eq!(parse_member_list(" a ,b，c "), ["a", "b", "c"]);
        assert!(parse_member_list(" , ，").is_empty());
        assert_eq!(parse_member_list("a,a,b"), ["a", "b"]);
    }
}

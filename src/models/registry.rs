//! Band registry.
//!
//! An insertion-ordered collection of bands keyed by name. The registry is
//! owned by the caller; placers only read it.

use serde::{Deserialize, Serialize};

use super::Band;

/// Insertion-ordered mapping from band name to band.
///
/// Insertion order is the final tie-breaker when ordering bands for
/// placement, so it is preserved across serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    bands: Vec<Band>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a list of bands as-is.
    ///
    /// Names are not deduplicated here; duplicates are reported by
    /// validation before any placement run.
    pub fn from_bands(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    /// Inserts a band.
    ///
    /// A band with the same name is replaced in place, keeping its original
    /// position, and returned.
    pub fn insert(&mut self, band: Band) -> Option<Band> {
        match self.bands.iter_mut().find(|b| b.name == band.name) {
            Some(existing) => Some(std::mem::replace(existing, band)),
            None => {
                self.bands.push(band);
                None
            }
        }
    }

    /// Builder-style insert.
    pub fn with_band(mut self, band: Band) -> Self {
        self.insert(band);
        self
    }

    /// Removes a band by name.
    pub fn remove(&mut self, name: &str) -> Option<Band> {
        let idx = self.bands.iter().position(|b| b.name == name)?;
        Some(self.bands.remove(idx))
    }

    /// Finds a band by name.
    pub fn get(&self, name: &str) -> Option<&Band> {
        self.bands.iter().find(|b| b.name == name)
    }

    /// Whether a band with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Bands in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Band> {
        self.bands.iter()
    }

    /// Band names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bands.iter().map(|b| b.name.as_str())
    }

    /// Bands as a slice.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Band;
    type IntoIter = std::slice::Iter<'a, Band>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}

impl FromIterator<Band> for Registry {
    fn from_iter<I: IntoIterator<Item = Band>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for band in iter {
            registry.insert(band);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut registry = Registry::new();
        registry.insert(Band::new("A").with_member("a"));
        registry.insert(Band::new("B").with_member("b"));
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut registry = Registry::new()
            .with_band(Band::new("A").with_member("a"))
            .with_band(Band::new("B").with_member("b"));

        let old = registry.insert(Band::new("A").with_member("z"));
        assert!(old.unwrap().members.contains("a"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.bands()[0].name, "A");
        assert!(registry.get("A").unwrap().members.contains("z"));
    }

    #[test]
    fn test_remove() {
        let mut registry = Registry::new()
            .with_band(Band::new("A").with_member("a"))
            .with_band(Band::new("B").with_member("b"));
        assert!(registry.remove("A").is_some());
        assert!(registry.remove("A").is_none());
        assert!(!registry.contains("A"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_from_bands_keeps_duplicates() {
        let registry = Registry::from_bands(vec![
            Band::new("A").with_member("a"),
            Band::new("A").with_member("b"),
        ]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_from_iterator_dedups() {
        let registry: Registry = vec![
            Band::new("A").with_member("a"),
            Band::new("A").with_member("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(registry.len(), 1);
    }
}

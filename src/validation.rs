//! Input validation for placement problems.
//!
//! Checks structural integrity of the registry and slot enumeration
//! before any placement run. Detects:
//! - Duplicate band names
//! - Empty band names
//! - Bands without members, or with blank member identifiers
//! - Forbidden slots outside the enumeration
//! - Repeated labels in the slot enumeration
//!
//! All problems are collected in one pass so callers can report them
//! together.

use crate::models::{Registry, SlotSet};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two bands share the same name.
    DuplicateBandName,
    /// A band has an empty name.
    EmptyBandName,
    /// A band has no members.
    EmptyMembers,
    /// A member identifier is empty or whitespace.
    BlankMember,
    /// A band forbids a slot that is not in the enumeration.
    UnknownSlot,
    /// The slot enumeration lists the same slot twice.
    DuplicateSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a registry against a slot enumeration.
///
/// Checks:
/// 1. No repeated slot labels
/// 2. No duplicate band names
/// 3. No empty band names
/// 4. Every band has at least one member
/// 5. No blank member identifiers
/// 6. Every forbidden slot belongs to the enumeration
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_registry(registry: &Registry, slots: &SlotSet) -> ValidationResult {
    let mut errors = Vec::new();

    let mut slot_labels = HashSet::new();
    for slot in slots {
        if !slot_labels.insert(slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!("Duplicate slot: {slot}"),
            ));
        }
    }

    let mut names = HashSet::new();
    for band in registry {
        if band.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyBandName,
                "Band with empty name",
            ));
        } else if !names.insert(band.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateBandName,
                format!("Duplicate band name: {}", band.name),
            ));
        }

        if band.members.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyMembers,
                format!("Band '{}' has no members", band.name),
            ));
        }

        if band.members.iter().any(|m| m.trim().is_empty()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankMember,
                format!("Band '{}' has a blank member", band.name),
            ));
        }

        for slot in &band.forbidden_slots {
            if !slot_labels.contains(slot) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSlot,
                    format!("Band '{}' forbids unknown slot '{slot}'", band.name),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

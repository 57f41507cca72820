//! Band assignment domain models.
//!
//! Provides the data types for describing a placement problem and its
//! solution.
//!
//! # Domain Mappings
//!
//! | u-bandslot | Rehearsal rota | Exams | Shared equipment |
//! |------------|----------------|-------|------------------|
//! | Band | Band/ensemble | Exam paper | Project team |
//! | Member | Musician | Student | Engineer |
//! | Slot | Studio session | Exam sitting | Booking window |
//! | Assignment | Weekly rota | Sitting plan | Booking plan |

mod assignment;
mod band;
mod registry;
mod slot;

pub use assignment::{Assignment, SlotOccupancy, Violation, ViolationKind};
pub use band::{parse_member_list, Band};
pub use registry::Registry;
pub use slot::{Slot, SlotSet, DEFAULT_DAYS, DEFAULT_PERIODS};

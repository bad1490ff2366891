//! Assignment model.
//!
//! An assignment is the scheduling unit: one visit (or one asset-independent
//! work package, e.g. travel time) bound to one technician, one calendar day,
//! one start hour and one duration. The target is either an asset id or a
//! work-package id, disambiguated by `is_package`.
//!
//! # Status
//! `Planned → Completed`, terminal. Status is set at creation (defaulting to
//! `Planned`) and never transitioned automatically by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// On the board, not yet carried out.
    Planned,
    /// Visit carried out.
    Completed,
}

/// A scheduled visit or work package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Target reference: an asset id, or a work-package id when `is_package`.
    pub target_id: String,
    /// Whether the target is a work-package catalog entry.
    pub is_package: bool,
    /// Display-name override (set for package assignments).
    pub display_name: Option<String>,
    /// Assigned technician id.
    pub technician_id: String,
    /// Calendar day of the visit.
    pub date: NaiveDate,
    /// Visit length in hours.
    pub duration_hours: f64,
    /// Start hour of day; fractional (e.g. `8.5` for 08:30).
    pub start_hour: f64,
    /// Lifecycle state.
    pub status: AssignmentStatus,
}

impl Assignment {
    /// Creates a planned assignment starting at 08:00.
    pub fn new(
        id: impl Into<String>,
        target_id: impl Into<String>,
        technician_id: impl Into<String>,
        date: NaiveDate,
        duration_hours: f64,
    ) -> Self {
        Self {
            id: id.into(),
            target_id: target_id.into(),
            is_package: false,
            display_name: None,
            technician_id: technician_id.into(),
            date,
            duration_hours,
            start_hour: 8.0,
            status: AssignmentStatus::Planned,
        }
    }

    /// Marks the target as a work package with its display name.
    pub fn as_package(mut self, display_name: impl Into<String>) -> Self {
        self.is_package = true;
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the start hour.
    pub fn with_start_hour(mut self, start_hour: f64) -> Self {
        self.start_hour = start_hour;
        self
    }

    /// Sets the lifecycle state.
    pub fn with_status(mut self, status: AssignmentStatus) -> Self {
        self.status = status;
        self
    }

    /// End hour of day (start + duration).
    #[inline]
    pub fn end_hour(&self) -> f64 {
        self.start_hour + self.duration_hours
    }

    /// Whether this assignment books the given technician on the given day.
    #[inline]
    pub fn occupies(&self, technician_id: &str, date: NaiveDate) -> bool {
        self.technician_id == technician_id && self.date == date
    }
}

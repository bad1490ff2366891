//! Technician model.
//!
//! Technicians are the field resources assignments are scheduled on. Each has
//! a home location and a daily working window on a 24-hour scale; half-hour
//! boundaries are expressed as fractional hours (e.g. `7.5`).

use serde::{Deserialize, Serialize};

/// A field-service technician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    /// Unique technician identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Trade or role (e.g. "Elektrik", "Hydraulik").
    pub role: String,
    /// Home location / dispatch base.
    pub location: String,
    /// Daily capacity in hours.
    pub max_hours: f64,
    /// Working window start (hour of day).
    pub work_day_start: f64,
    /// Working window end (hour of day, exclusive).
    pub work_day_end: f64,
}

impl Technician {
    /// Creates a technician with the default 8–17 working window.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            location: String::new(),
            max_hours: 8.0,
            work_day_start: 8.0,
            work_day_end: 17.0,
        }
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the home location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the daily capacity.
    pub fn with_max_hours(mut self, max_hours: f64) -> Self {
        self.max_hours = max_hours;
        self
    }

    /// Sets the working window.
    pub fn with_working_hours(mut self, start: f64, end: f64) -> Self {
        self.work_day_start = start;
        self.work_day_end = end;
        self
    }

    /// Length of the working window in hours.
    #[inline]
    pub fn work_day_hours(&self) -> f64 {
        self.work_day_end - self.work_day_start
    }

    /// Whether an hour of day falls inside the working window.
    #[inline]
    pub fn is_working_hour(&self, hour: f64) -> bool {
        hour >= self.work_day_start && hour < self.work_day_end
    }
}

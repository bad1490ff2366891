//! Work-package catalog and service-duration configuration.

use serde::{Deserialize, Serialize};

use super::ServiceSize;

/// A reusable, asset-independent duration block (travel, paperwork, setup).
///
/// Schedulable on the board like a visit; not tied to any asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPackage {
    /// Unique catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Fixed duration in hours.
    pub duration_hours: f64,
}

impl WorkPackage {
    /// Creates a catalog entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration_hours: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_hours,
        }
    }
}

/// Visit durations per machine size class, in hours. Admin-editable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Small service duration.
    pub s: f64,
    /// Medium service duration.
    pub m: f64,
    /// Large service duration.
    pub l: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            s: 2.0,
            m: 4.0,
            l: 8.0,
        }
    }
}

impl ServiceConfig {
    /// Visit duration for a size class.
    #[inline]
    pub fn duration_for(&self, size: ServiceSize) -> f64 {
        match size {
            ServiceSize::S => self.s,
            ServiceSize::M => self.m,
            ServiceSize::L => self.l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_default() {
        let cfg = ServiceConfig::default();
        assert!((cfg.duration_for(ServiceSize::S) - 2.0).abs() < 1e-10);
        assert!((cfg.duration_for(ServiceSize::M) - 4.0).abs() < 1e-10);
        assert!((cfg.duration_for(ServiceSize::L) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_work_package() {
        let pkg = WorkPackage::new("pkg_2", "Abfahrt / Rüstzeit", 0.5);
        assert_eq!(pkg.name, "Abfahrt / Rüstzeit");
        assert!((pkg.duration_hours - 0.5).abs() < 1e-10);
    }
}

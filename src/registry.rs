//! Store administration operations.
//!
//! The thin mutating surface the surrounding application needs beyond the
//! board itself: technician lifecycle edits and the incident-escalation hook
//! that external ticket workflows use to pull a machine forward. Plain field
//! edits (names, catalog entries, service durations) are direct struct
//! mutation by the caller and need no engine surface.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{EngineError, EntityKind};
use crate::models::{Asset, AssetKind, Assignment, HealthStatus, Technician};

/// Removes a technician from the registry.
///
/// Rejected with [`EngineError::TechnicianInUse`] while any assignment still
/// references the technician; clear or re-slot the board first. Returns the
/// removed record.
pub fn remove_technician(
    technicians: &mut Vec<Technician>,
    assignments: &[Assignment],
    id: &str,
) -> Result<Technician, EngineError> {
    let position = technicians
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| EngineError::not_found(EntityKind::Technician, id))?;

    let referencing = assignments.iter().filter(|a| a.technician_id == id).count();
    if referencing > 0 {
        return Err(EngineError::TechnicianInUse {
            id: id.to_string(),
            assignments: referencing,
        });
    }

    let removed = technicians.remove(position);
    info!(technician = %id, "removed technician");
    Ok(removed)
}

/// Updates a technician's daily working window.
pub fn update_working_hours(
    technicians: &mut [Technician],
    id: &str,
    start: f64,
    end: f64,
) -> Result<(), EngineError> {
    let technician = technicians
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| EngineError::not_found(EntityKind::Technician, id))?;
    technician.work_day_start = start;
    technician.work_day_end = end;
    Ok(())
}

/// Escalates a machine after an incident: health becomes `Critical` and the
/// next service falls due today, which surfaces it in the backlog at once.
///
/// Fails with [`EngineError::NotFound`] when `id` does not resolve to a
/// machine-category asset.
pub fn escalate_machine(
    assets: &mut [Asset],
    id: &str,
    today: NaiveDate,
) -> Result<(), EngineError> {
    let machine = assets
        .iter_mut()
        .find(|a| a.id == id && a.kind == AssetKind::Machine)
        .ok_or_else(|| EngineError::not_found(EntityKind::Machine, id))?;

    // Kind was just checked, so the detail handle always exists.
    if let Some(detail) = machine.machine_detail_mut() {
        detail.health = Some(HealthStatus::Critical);
        detail.next_service_date = Some(today);
    }

    info!(machine = %id, due = %today, "escalated machine to critical");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backlog::{backlog, DateWindow};
    use crate::models::MachineDetail;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn crew() -> Vec<Technician> {
        vec![
            Technician::new("t1", "Max Mustermann").with_location("Berlin"),
            Technician::new("t2", "Julia Service").with_location("Hamburg"),
        ]
    }

    #[test]
    fn test_remove_technician_rejected_while_referenced() {
        let mut technicians = crew();
        let mut assignments = vec![
            Assignment::new("a1", "m1", "t1", date(2024, 1, 10), 4.0),
            Assignment::new("a2", "m2", "t1", date(2024, 1, 11), 2.0),
        ];

        let err = remove_technician(&mut technicians, &assignments, "t1").unwrap_err();
        assert_eq!(
            err,
            EngineError::TechnicianInUse {
                id: "t1".into(),
                assignments: 2
            }
        );
        assert_eq!(technicians.len(), 2);

        // Clearing the board unblocks the removal
        assignments.clear();
        let removed = remove_technician(&mut technicians, &assignments, "t1").unwrap();
        assert_eq!(removed.name, "Max Mustermann");
        assert_eq!(technicians.len(), 1);
    }

    #[test]
    fn test_remove_unknown_technician() {
        let mut technicians = crew();
        let err = remove_technician(&mut technicians, &[], "t9").unwrap_err();
        assert_eq!(err, EngineError::not_found(EntityKind::Technician, "t9"));
    }

    #[test]
    fn test_update_working_hours() {
        let mut technicians = crew();
        update_working_hours(&mut technicians, "t2", 7.0, 15.5).unwrap();
        assert!((technicians[1].work_day_start - 7.0).abs() < 1e-10);
        assert!((technicians[1].work_day_end - 15.5).abs() < 1e-10);

        let err = update_working_hours(&mut technicians, "t9", 8.0, 17.0).unwrap_err();
        assert_eq!(err, EngineError::not_found(EntityKind::Technician, "t9"));
    }

    #[test]
    fn test_escalate_machine_surfaces_in_backlog() {
        let today = date(2024, 1, 10);
        let mut assets = vec![Asset::machine("m1").with_name("Teigteilmaschine").with_machine_detail(
            MachineDetail::new()
                .with_health(HealthStatus::Ok)
                .with_next_service_date(today + Duration::days(90)),
        )];

        // Due in 90 days: outside the 30-day window
        let window = DateWindow::new(today, today + Duration::days(30));
        assert!(backlog(&assets, &[], window, today).is_empty());

        escalate_machine(&mut assets, "m1", today).unwrap();
        assert_eq!(assets[0].health(), Some(HealthStatus::Critical));
        assert_eq!(assets[0].next_service_date(), Some(today));
        assert_eq!(backlog(&assets, &[], window, today).len(), 1);
    }

    #[test]
    fn test_escalate_machine_without_detail() {
        let today = date(2024, 1, 10);
        let mut assets = vec![Asset::machine("m1")];
        escalate_machine(&mut assets, "m1", today).unwrap();
        assert_eq!(assets[0].health(), Some(HealthStatus::Critical));
    }

    #[test]
    fn test_escalate_rejects_non_machines() {
        let today = date(2024, 1, 10);
        let mut assets = vec![Asset::component("cmp1"), Asset::machine("m1")];

        let err = escalate_machine(&mut assets, "cmp1", today).unwrap_err();
        assert_eq!(err, EngineError::not_found(EntityKind::Machine, "cmp1"));

        let err = escalate_machine(&mut assets, "ghost", today).unwrap_err();
        assert_eq!(err, EngineError::not_found(EntityKind::Machine, "ghost"));
    }
}

//! Placement, movement and layout queries for the planning board.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EntityKind};
use crate::models::{Asset, Assignment, ServiceConfig, ServiceSize, Technician, WorkPackage};

/// Command: create an assignment from a backlog item or package drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceVisit {
    /// Asset id, or work-package id when `is_package`.
    pub target_id: String,
    /// Whether `target_id` references the work-package catalog.
    pub is_package: bool,
    /// Technician column the drop landed on.
    pub technician_id: String,
    /// Day the drop landed on.
    pub date: NaiveDate,
    /// Vertical drop position on the timeline, when the drop supplied one.
    pub dropped_hour: Option<f64>,
}

/// Command: re-slot an existing assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveVisit {
    /// Assignment to move.
    pub assignment_id: String,
    /// New technician.
    pub technician_id: String,
    /// New day.
    pub date: NaiveDate,
    /// New start hour; defaults to 8.0 when the drop carried no position.
    pub start_hour: Option<f64>,
}

/// A resolved board mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoardCommand {
    /// Create a new assignment.
    Place(PlaceVisit),
    /// Re-slot an existing assignment.
    Move(MoveVisit),
    /// Delete an assignment (drag back to the tray, or explicit removal).
    Remove {
        /// Assignment to delete.
        assignment_id: String,
    },
}

/// Outcome of [`BoardEngine::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum BoardUpdate {
    /// A new assignment was created.
    Placed(Assignment),
    /// An assignment was re-slotted.
    Moved(Assignment),
    /// The assignment was deleted (or was already absent).
    Removed,
}

/// Executes board commands against an assignment-store snapshot.
///
/// Holds the size-class duration configuration; all store state is passed per
/// call, with the caller responsible for persisting the mutated snapshot.
///
/// # Overlap
/// Neither [`place`](Self::place) nor [`move_assignment`](Self::move_assignment)
/// rejects a slot that already has an overlapping assignment; the board
/// renders overlapping bars and leaves resolution to the planner.
#[derive(Debug, Clone, Default)]
pub struct BoardEngine {
    service_config: ServiceConfig,
}

impl BoardEngine {
    /// Creates an engine with the given size-class durations.
    pub fn new(service_config: ServiceConfig) -> Self {
        Self { service_config }
    }

    /// The active size-class durations.
    pub fn service_config(&self) -> &ServiceConfig {
        &self.service_config
    }

    /// Creates an assignment for a dropped backlog item or work package.
    ///
    /// Duration comes from the package catalog, or from the service
    /// configuration by the machine's size class (default `M`). The start
    /// hour is the explicit drop position when given; otherwise the new
    /// assignment stacks after the technician's last assignment of that day,
    /// or opens the day at 8.0.
    ///
    /// Fails with [`EngineError::UnknownTarget`] when `target_id` resolves to
    /// neither an asset nor a package.
    pub fn place(
        &self,
        assignments: &mut Vec<Assignment>,
        assets: &[Asset],
        packages: &[WorkPackage],
        command: &PlaceVisit,
    ) -> Result<Assignment, EngineError> {
        let (duration, display_name) = if command.is_package {
            let pkg = packages
                .iter()
                .find(|p| p.id == command.target_id)
                .ok_or_else(|| EngineError::UnknownTarget {
                    id: command.target_id.clone(),
                })?;
            (pkg.duration_hours, Some(pkg.name.clone()))
        } else {
            let asset = assets
                .iter()
                .find(|a| a.id == command.target_id)
                .ok_or_else(|| EngineError::UnknownTarget {
                    id: command.target_id.clone(),
                })?;
            let size = asset.service_size().unwrap_or(ServiceSize::M);
            (self.service_config.duration_for(size), None)
        };

        let start_hour = command.dropped_hour.unwrap_or_else(|| {
            next_free_hour(assignments, &command.technician_id, command.date)
        });

        let mut assignment = Assignment::new(
            Uuid::new_v4().to_string(),
            &command.target_id,
            &command.technician_id,
            command.date,
            duration,
        )
        .with_start_hour(start_hour);
        if let Some(name) = display_name {
            assignment = assignment.as_package(name);
        }

        debug!(
            assignment = %assignment.id,
            target = %command.target_id,
            technician = %command.technician_id,
            date = %command.date,
            start_hour,
            duration,
            "placed assignment"
        );

        assignments.push(assignment.clone());
        Ok(assignment)
    }

    /// Re-slots an assignment onto a new technician/day/start hour.
    ///
    /// Duration and target are preserved. The start hour is taken as dropped
    /// (default 8.0) and is *not* clamped against the new technician's
    /// working window, so a moved assignment may render as off-hours.
    ///
    /// Fails with [`EngineError::NotFound`] for unknown assignment ids.
    pub fn move_assignment(
        &self,
        assignments: &mut [Assignment],
        command: &MoveVisit,
    ) -> Result<Assignment, EngineError> {
        let assignment = assignments
            .iter_mut()
            .find(|a| a.id == command.assignment_id)
            .ok_or_else(|| EngineError::not_found(EntityKind::Assignment, &command.assignment_id))?;

        assignment.technician_id = command.technician_id.clone();
        assignment.date = command.date;
        assignment.start_hour = command.start_hour.unwrap_or(8.0);

        debug!(
            assignment = %assignment.id,
            technician = %assignment.technician_id,
            date = %assignment.date,
            start_hour = assignment.start_hour,
            "moved assignment"
        );

        Ok(assignment.clone())
    }

    /// Deletes an assignment. Idempotent: an absent id is not an error, so a
    /// tray drop following an explicit removal stays a no-op.
    pub fn remove(&self, assignments: &mut Vec<Assignment>, assignment_id: &str) {
        let before = assignments.len();
        assignments.retain(|a| a.id != assignment_id);
        if assignments.len() < before {
            debug!(assignment = %assignment_id, "removed assignment");
        }
    }

    /// Executes a resolved [`BoardCommand`].
    pub fn apply(
        &self,
        assignments: &mut Vec<Assignment>,
        assets: &[Asset],
        packages: &[WorkPackage],
        command: &BoardCommand,
    ) -> Result<BoardUpdate, EngineError> {
        match command {
            BoardCommand::Place(place) => self
                .place(assignments, assets, packages, place)
                .map(BoardUpdate::Placed),
            BoardCommand::Move(mv) => self
                .move_assignment(assignments, mv)
                .map(BoardUpdate::Moved),
            BoardCommand::Remove { assignment_id } => {
                self.remove(assignments, assignment_id);
                Ok(BoardUpdate::Removed)
            }
        }
    }
}

/// First free hour of a technician's day: directly after the last existing
/// assignment, or 8.0 on an empty day.
fn next_free_hour(assignments: &[Assignment], technician_id: &str, date: NaiveDate) -> f64 {
    assignments
        .iter()
        .filter(|a| a.occupies(technician_id, date))
        .max_by(|a, b| a.start_hour.total_cmp(&b.start_hour))
        .map(|last| last.end_hour())
        .unwrap_or(8.0)
}

/// Timeline bounds for a technician set: (earliest window start, latest
/// window end). Defaults to (8.0, 18.0) when the set is empty.
pub fn day_window(technicians: &[Technician]) -> (f64, f64) {
    let min = technicians
        .iter()
        .map(|t| t.work_day_start)
        .min_by(f64::total_cmp)
        .unwrap_or(8.0);
    let max = technicians
        .iter()
        .map(|t| t.work_day_end)
        .max_by(f64::total_cmp)
        .unwrap_or(18.0);
    (min, max)
}

/// A technician's assignments for one day, ascending by start hour.
///
/// Display ordering only; no travel-time or distance computation.
pub fn route_for<'a>(
    assignments: &'a [Assignment],
    technician_id: &str,
    date: NaiveDate,
) -> Vec<&'a Assignment> {
    let mut day: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| a.occupies(technician_id, date))
        .collect();
    day.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));
    day
}

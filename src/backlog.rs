//! Maintenance backlog and task-list queries.
//!
//! The backlog is the set of machines due or overdue for a maintenance visit
//! with no qualifying future assignment on the board. Companion queries feed
//! the task list: due-date reminders, technicians with an unplanned week, and
//! free capacity on the upcoming Friday.
//!
//! All queries are pure functions over store snapshots; `today` is passed in
//! by the caller, never read from a clock.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{iso_week_number, monday_of};
use crate::models::{Asset, AssetKind, Assignment, HealthStatus, Technician};

/// Inclusive date window for backlog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day of the window.
    pub from: NaiveDate,
    /// Last day of the window.
    pub to: NaiveDate,
}

impl DateWindow {
    /// Creates a window covering `[from, to]`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Whether `date` falls within the window, boundaries included.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Machines that need scheduling now, in store order.
///
/// A machine is included when all of the following hold:
/// 1. No non-package assignment dated today or later targets it. Past visits,
///    completed or not, never exclude a machine.
/// 2. It has a due date, or its health is `Warning`/`Critical`.
/// 3. Its due date is before `today` (overdue machines always surface), or
///    falls within `window`. Machines without a due date qualify on health
///    alone.
///
/// Callers needing "most overdue first" sort the result themselves.
pub fn backlog<'a>(
    assets: &'a [Asset],
    assignments: &[Assignment],
    window: DateWindow,
    today: NaiveDate,
) -> Vec<&'a Asset> {
    let scheduled: HashSet<&str> = assignments
        .iter()
        .filter(|a| !a.is_package && a.date >= today)
        .map(|a| a.target_id.as_str())
        .collect();

    assets
        .iter()
        .filter(|asset| {
            if asset.kind != AssetKind::Machine {
                return false;
            }
            if scheduled.contains(asset.id.as_str()) {
                return false;
            }
            let due = asset.next_service_date();
            let health_due = matches!(
                asset.health(),
                Some(HealthStatus::Warning) | Some(HealthStatus::Critical)
            );
            match due {
                None => health_due,
                Some(d) if d < today => true,
                Some(d) => window.contains(d),
            }
        })
        .collect()
}

/// Urgency class of a [`MaintenanceReminder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Due date has passed.
    Overdue,
    /// Due date is approaching.
    Reminder,
}

/// A task-list entry for a machine approaching (or past) its due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceReminder {
    /// Machine asset id.
    pub asset_id: String,
    /// Machine display name.
    pub asset_name: String,
    /// Days from `today` to the due date; negative when overdue.
    pub days_until_due: i64,
    /// Urgency class.
    pub kind: ReminderKind,
}

/// Machines worth a reminder: due between 10 days overdue and 30 days out,
/// with no future assignment on the board.
pub fn maintenance_reminders(
    assets: &[Asset],
    assignments: &[Assignment],
    today: NaiveDate,
) -> Vec<MaintenanceReminder> {
    let scheduled: HashSet<&str> = assignments
        .iter()
        .filter(|a| !a.is_package && a.date >= today)
        .map(|a| a.target_id.as_str())
        .collect();

    assets
        .iter()
        .filter(|a| a.kind == AssetKind::Machine && !scheduled.contains(a.id.as_str()))
        .filter_map(|machine| {
            let due = machine.next_service_date()?;
            let days = (due - today).num_days();
            if days <= -10 || days >= 30 {
                return None;
            }
            Some(MaintenanceReminder {
                asset_id: machine.id.clone(),
                asset_name: machine.name.clone(),
                days_until_due: days,
                kind: if days < 0 {
                    ReminderKind::Overdue
                } else {
                    ReminderKind::Reminder
                },
            })
        })
        .collect()
}

/// A technician with no assignments in next week's Monday–Friday range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningGap {
    /// Technician id.
    pub technician_id: String,
    /// ISO week number of the unplanned week.
    pub week: u32,
    /// Monday of the unplanned week.
    pub week_start: NaiveDate,
}

/// Technicians whose next work week is still empty.
pub fn planning_gaps(
    technicians: &[Technician],
    assignments: &[Assignment],
    today: NaiveDate,
) -> Vec<PlanningGap> {
    let week_start = monday_of(today) + Duration::days(7);
    let week_end = week_start + Duration::days(4);

    technicians
        .iter()
        .filter(|t| {
            !assignments
                .iter()
                .any(|a| a.technician_id == t.id && a.date >= week_start && a.date <= week_end)
        })
        .map(|t| PlanningGap {
            technician_id: t.id.clone(),
            week: iso_week_number(week_start),
            week_start,
        })
        .collect()
}

/// A technician with spare hours on the upcoming Friday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeCapacity {
    /// Technician id.
    pub technician_id: String,
    /// The Friday in question.
    pub date: NaiveDate,
    /// Working-window hours not yet booked.
    pub hours_free: f64,
}

/// Technicians with more than four unbooked hours on the upcoming Friday.
///
/// When `today` is a Friday, that same day is examined.
pub fn free_capacity(
    technicians: &[Technician],
    assignments: &[Assignment],
    today: NaiveDate,
) -> Vec<FreeCapacity> {
    let days_ahead = (4 + 7 - i64::from(today.weekday().num_days_from_monday())) % 7;
    let friday = today + Duration::days(days_ahead);

    technicians
        .iter()
        .filter_map(|t| {
            let booked: f64 = assignments
                .iter()
                .filter(|a| a.occupies(&t.id, friday))
                .map(|a| a.duration_hours)
                .sum();
            let free = t.work_day_hours() - booked;
            (free > 4.0).then(|| FreeCapacity {
                technician_id: t.id.clone(),
                date: friday,
                hours_free: free,
            })
        })
        .collect()
}

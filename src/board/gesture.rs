//! Two-phase drag-and-drop protocol.
//!
//! Picking an item up captures an immutable [`DragPayload`]; the terminal
//! drop pairs it with a [`DropTarget`] and resolves to at most one
//! [`BoardCommand`]. There is no explicit cancel: an abandoned gesture simply
//! never produces a command, and a drop without a matching pick-up resolves
//! to `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BoardCommand, MoveVisit, PlaceVisit};

/// What kind of item was picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// A backlog asset from the tray.
    Asset,
    /// A work package from the tray.
    Package,
    /// An assignment already on the board.
    Assignment,
}

/// Where the item was picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragOrigin {
    /// The backlog/package tray.
    Tray,
    /// The planning board.
    Board,
}

/// Immutable pick-up capture of a drag gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Dragged item id: asset, package, or assignment id per `kind`.
    pub id: String,
    /// What was picked up.
    pub kind: DragKind,
    /// Where it was picked up.
    pub origin: DragOrigin,
    /// Duration carried along for display while dragging.
    pub duration_hours: Option<f64>,
}

impl DragPayload {
    /// Captures a pick-up.
    pub fn pick_up(id: impl Into<String>, kind: DragKind, origin: DragOrigin) -> Self {
        Self {
            id: id.into(),
            kind,
            origin,
            duration_hours: None,
        }
    }

    /// Attaches the dragged item's duration.
    pub fn with_duration(mut self, duration_hours: f64) -> Self {
        self.duration_hours = Some(duration_hours);
        self
    }
}

/// Where a drop landed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DropTarget {
    /// A technician/day slot, optionally with a vertical timeline position.
    Slot {
        /// Technician column.
        technician_id: String,
        /// Day column.
        date: NaiveDate,
        /// Timeline position, when the view supplies one.
        hour: Option<f64>,
    },
    /// The backlog tray.
    Tray,
}

/// Resolves a terminal drop to at most one board command.
///
/// | origin | target | command |
/// |--------|--------|---------|
/// | tray   | slot   | `Place` |
/// | board  | slot   | `Move`  |
/// | board  | tray   | `Remove` |
/// | tray   | tray   | none    |
///
/// A missing payload (drop without pick-up) is a no-op, as is a payload whose
/// kind contradicts its origin.
pub fn resolve_drop(payload: Option<DragPayload>, target: DropTarget) -> Option<BoardCommand> {
    let payload = payload?;
    match (payload.origin, target) {
        (
            DragOrigin::Board,
            DropTarget::Slot {
                technician_id,
                date,
                hour,
            },
        ) => Some(BoardCommand::Move(MoveVisit {
            assignment_id: payload.id,
            technician_id,
            date,
            start_hour: hour,
        })),
        (
            DragOrigin::Tray,
            DropTarget::Slot {
                technician_id,
                date,
                hour,
            },
        ) => match payload.kind {
            DragKind::Asset | DragKind::Package => Some(BoardCommand::Place(PlaceVisit {
                target_id: payload.id,
                is_package: payload.kind == DragKind::Package,
                technician_id,
                date,
                dropped_hour: hour,
            })),
            // An assignment cannot originate from the tray
            DragKind::Assignment => None,
        },
        (DragOrigin::Board, DropTarget::Tray) => Some(BoardCommand::Remove {
            assignment_id: payload.id,
        }),
        (DragOrigin::Tray, DropTarget::Tray) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slot(hour: Option<f64>) -> DropTarget {
        DropTarget::Slot {
            technician_id: "t1".into(),
            date: date(2024, 1, 10),
            hour,
        }
    }

    #[test]
    fn test_tray_asset_to_slot_places() {
        let payload = DragPayload::pick_up("m1", DragKind::Asset, DragOrigin::Tray);
        let cmd = resolve_drop(Some(payload), slot(Some(9.0))).unwrap();
        match cmd {
            BoardCommand::Place(p) => {
                assert_eq!(p.target_id, "m1");
                assert!(!p.is_package);
                assert_eq!(p.dropped_hour, Some(9.0));
            }
            other => panic!("expected Place, got {other:?}"),
        }
    }

    #[test]
    fn test_tray_package_to_slot_places_package() {
        let payload =
            DragPayload::pick_up("pkg_1", DragKind::Package, DragOrigin::Tray).with_duration(1.0);
        let cmd = resolve_drop(Some(payload), slot(None)).unwrap();
        assert!(matches!(cmd, BoardCommand::Place(ref p) if p.is_package));
    }

    #[test]
    fn test_board_to_slot_moves() {
        let payload = DragPayload::pick_up("a1", DragKind::Assignment, DragOrigin::Board);
        let cmd = resolve_drop(Some(payload), slot(None)).unwrap();
        match cmd {
            BoardCommand::Move(m) => {
                assert_eq!(m.assignment_id, "a1");
                assert_eq!(m.start_hour, None);
            }
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn test_board_to_tray_removes() {
        let payload = DragPayload::pick_up("a1", DragKind::Assignment, DragOrigin::Board);
        let cmd = resolve_drop(Some(payload), DropTarget::Tray).unwrap();
        assert_eq!(
            cmd,
            BoardCommand::Remove {
                assignment_id: "a1".into()
            }
        );
    }

    #[test]
    fn test_noop_drops() {
        // Drop without a pick-up
        assert!(resolve_drop(None, slot(None)).is_none());
        assert!(resolve_drop(None, DropTarget::Tray).is_none());

        // Tray back to tray
        let payload = DragPayload::pick_up("m1", DragKind::Asset, DragOrigin::Tray);
        assert!(resolve_drop(Some(payload), DropTarget::Tray).is_none());

        // Contradictory payload
        let payload = DragPayload::pick_up("a1", DragKind::Assignment, DragOrigin::Tray);
        assert!(resolve_drop(Some(payload), slot(None)).is_none());
    }
}

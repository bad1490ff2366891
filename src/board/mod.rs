//! Assignment board engine.
//!
//! Converts place/move/delete commands plus drop coordinates into assignment
//! records, derives visit durations and start times, and answers the board's
//! layout queries (timeline window, per-day route ordering).
//!
//! # Drag gestures
//!
//! Drag and drop is a two-phase protocol: a pick-up captures an immutable
//! [`DragPayload`], a terminal drop resolves to exactly one [`BoardCommand`]
//! via [`resolve_drop`]. Abandoned gestures and no-op drops (tray back to
//! tray) produce no command and mutate nothing.
//!
//! ```
//! use chrono::NaiveDate;
//! use fieldplan::board::{BoardEngine, PlaceVisit};
//! use fieldplan::models::{Asset, MachineDetail, ServiceConfig, ServiceSize};
//!
//! let assets = vec![Asset::machine("m1")
//!     .with_machine_detail(MachineDetail::new().with_service_size(ServiceSize::L))];
//! let mut assignments = Vec::new();
//!
//! let engine = BoardEngine::new(ServiceConfig::default());
//! let placed = engine
//!     .place(&mut assignments, &assets, &[], &PlaceVisit {
//!         target_id: "m1".into(),
//!         is_package: false,
//!         technician_id: "t1".into(),
//!         date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!         dropped_hour: None,
//!     })
//!     .unwrap();
//! assert_eq!(placed.duration_hours, 8.0);
//! assert_eq!(placed.start_hour, 8.0);
//! ```

mod engine;
mod gesture;

pub use engine::{
    day_window, route_for, BoardCommand, BoardEngine, BoardUpdate, MoveVisit, PlaceVisit,
};
pub use gesture::{resolve_drop, DragKind, DragOrigin, DragPayload, DropTarget};

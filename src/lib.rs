//! Maintenance scheduling engine for field-service dashboards.
//!
//! Determines which serviceable machines need an unscheduled visit, places
//! and moves technician assignments on a time-indexed planning board, derives
//! visit durations from size classes and package definitions, and rolls up
//! the material demand of the scheduled work.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Asset`, `Technician`, `WorkPackage`,
//!   `Assignment`, `ServiceConfig`
//! - **`calendar`**: ISO week arithmetic and the national-holiday table
//! - **`hierarchy`**: Traversal index over the asset tree (children,
//!   breadcrumbs, recursive part collection)
//! - **`backlog`**: Due/overdue machine queries and task-list advisories
//! - **`board`**: Place/move/remove commands, drag-gesture resolution,
//!   timeline layout queries
//! - **`materials`**: Part-requirement rollup for scheduled visits
//! - **`registry`**: Technician administration and incident escalation
//! - **`validation`**: Store integrity checks (duplicate IDs, parent cycles,
//!   dangling references)
//!
//! # Architecture
//!
//! Every operation is a synchronous, total function over in-memory snapshots
//! of the four stores (assets, technicians, assignments, work packages). The
//! engine performs no I/O and no locking; the caller serializes mutating
//! calls and owns persistence of the snapshots it passes in. Errors are
//! raised synchronously and a rejected command leaves all stores unchanged.

pub mod backlog;
pub mod board;
pub mod calendar;
pub mod error;
pub mod hierarchy;
pub mod materials;
pub mod models;
pub mod registry;
pub mod validation;

pub use error::{EngineError, EntityKind};

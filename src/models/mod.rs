//! Scheduling domain models.
//!
//! Core data types for the maintenance planning engine: the asset hierarchy,
//! the technician registry, the work-package catalog, and the assignment
//! records placed on the planning board.
//!
//! All models derive `Serialize`/`Deserialize`; the engine itself performs no
//! I/O; callers own persistence of the snapshots they pass in.

mod asset;
mod assignment;
mod package;
mod technician;

pub use asset::{
    Asset, AssetDetail, AssetKind, HealthStatus, MachineDetail, PartDetail, ServiceSize,
};
pub use assignment::{Assignment, AssignmentStatus};
pub use package::{ServiceConfig, WorkPackage};
pub use technician::Technician;

//! Engine error taxonomy.
//!
//! Every engine operation is a deterministic in-memory transform; errors are
//! raised synchronously and a failed command leaves all stores unchanged.
//! Edge cases with a stated default (empty technician set, missing size
//! class, missing due date) never surface as errors.

use std::fmt;

use thiserror::Error;

/// Store a failed lookup was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Asset,
    Machine,
    Technician,
    WorkPackage,
    Assignment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Asset => "asset",
            EntityKind::Machine => "machine",
            EntityKind::Technician => "technician",
            EntityKind::WorkPackage => "work package",
            EntityKind::Assignment => "assignment",
        };
        f.write_str(name)
    }
}

/// Errors raised by engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A referenced id is absent from its store.
    #[error("no {kind} with id '{id}'")]
    NotFound { kind: EntityKind, id: String },

    /// A placement target resolves to neither an asset nor a work package.
    #[error("placement target '{id}' is neither an asset nor a work package")]
    UnknownTarget { id: String },

    /// A technician cannot be removed while assignments reference it.
    #[error("technician '{id}' still has {assignments} assignment(s) on the board")]
    TechnicianInUse { id: String, assignments: usize },
}

impl EngineError {
    /// Convenience constructor for lookup failures.
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = EngineError::not_found(EntityKind::Assignment, "a9");
        assert_eq!(e.to_string(), "no assignment with id 'a9'");

        let e = EngineError::UnknownTarget { id: "x".into() };
        assert!(e.to_string().contains("neither an asset nor a work package"));

        let e = EngineError::TechnicianInUse {
            id: "t1".into(),
            assignments: 3,
        };
        assert!(e.to_string().contains("3 assignment(s)"));
    }
}

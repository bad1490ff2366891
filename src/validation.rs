//! Store integrity validation.
//!
//! Checks the four store snapshots before they reach the engine. Detects:
//! - Duplicate IDs in any store
//! - Dangling and cyclic parent references in the asset tree
//! - Assignments referencing unknown technicians or targets
//! - Detail variants that contradict the asset category
//!
//! The engine itself assumes validated stores; in particular the hierarchy
//! walks rely on cycle-free parent chains.

use std::collections::{HashMap, HashSet};

use crate::models::{Asset, AssetDetail, AssetKind, Assignment, Technician, WorkPackage};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities in one store share the same ID.
    DuplicateId,
    /// An asset references a parent that doesn't exist.
    DanglingParent,
    /// The asset tree contains a parent-pointer cycle.
    CyclicParentChain,
    /// An assignment references a technician that doesn't exist.
    UnknownTechnician,
    /// An assignment target resolves to neither an asset nor a package.
    UnknownTarget,
    /// An asset carries a detail variant of the wrong category.
    DetailMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the store snapshots.
///
/// Checks:
/// 1. No duplicate asset, technician, package, or assignment IDs
/// 2. Every parent reference resolves to a stored asset
/// 3. No cyclic parent chains
/// 4. Machine detail only on machines, part detail only on parts
/// 5. Every assignment's technician exists
/// 6. Every assignment target resolves to an asset or (for package
///    assignments) a catalog entry
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_stores(
    assets: &[Asset],
    technicians: &[Technician],
    packages: &[WorkPackage],
    assignments: &[Assignment],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect IDs per store, flagging duplicates
    let mut asset_ids = HashSet::new();
    for a in assets {
        if !asset_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate asset ID: {}", a.id),
            ));
        }
    }

    let mut technician_ids = HashSet::new();
    for t in technicians {
        if !technician_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate technician ID: {}", t.id),
            ));
        }
    }

    let mut package_ids = HashSet::new();
    for p in packages {
        if !package_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate work package ID: {}", p.id),
            ));
        }
    }

    let mut assignment_ids = HashSet::new();
    for a in assignments {
        if !assignment_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate assignment ID: {}", a.id),
            ));
        }
    }

    // Parent references and detail variants
    for a in assets {
        if let Some(parent) = &a.parent_id {
            if !asset_ids.contains(parent.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingParent,
                    format!("Asset '{}' references unknown parent '{parent}'", a.id),
                ));
            }
        }

        match &a.detail {
            Some(AssetDetail::Machine(_)) if a.kind != AssetKind::Machine => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DetailMismatch,
                    format!("Asset '{}' carries machine detail but is not a machine", a.id),
                ));
            }
            Some(AssetDetail::Part(_)) if a.kind != AssetKind::Part => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DetailMismatch,
                    format!("Asset '{}' carries part detail but is not a part", a.id),
                ));
            }
            _ => {}
        }
    }

    // Parent-pointer cycles
    if let Some(cycle_err) = detect_parent_cycle(assets) {
        errors.push(cycle_err);
    }

    // Assignment references
    for a in assignments {
        if !technician_ids.contains(a.technician_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTechnician,
                format!(
                    "Assignment '{}' references unknown technician '{}'",
                    a.id, a.technician_id
                ),
            ));
        }

        let resolves = if a.is_package {
            package_ids.contains(a.target_id.as_str())
        } else {
            asset_ids.contains(a.target_id.as_str())
        };
        if !resolves {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTarget,
                format!(
                    "Assignment '{}' references unknown target '{}'",
                    a.id, a.target_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects a cycle in the parent-pointer chains.
///
/// Walks each node's ancestor chain once; nodes proven to reach a root are
/// memoized so the whole pass stays linear.
fn detect_parent_cycle(assets: &[Asset]) -> Option<ValidationError> {
    let parent_of: HashMap<&str, Option<&str>> = assets
        .iter()
        .map(|a| (a.id.as_str(), a.parent_id.as_deref()))
        .collect();

    let mut safe: HashSet<&str> = HashSet::new();

    for asset in assets {
        let mut chain: Vec<&str> = Vec::new();
        let mut on_chain: HashSet<&str> = HashSet::new();
        let mut current = asset.id.as_str();

        loop {
            if safe.contains(current) {
                break;
            }
            if !on_chain.insert(current) {
                return Some(ValidationError::new(
                    ValidationErrorKind::CyclicParentChain,
                    format!("Cyclic parent chain detected involving asset '{current}'"),
                ));
            }
            chain.push(current);

            match parent_of.get(current) {
                Some(&Some(parent)) if parent_of.contains_key(parent) => current = parent,
                // Root reached, or the chain ends at a dangling reference
                _ => break,
            }
        }

        safe.extend(chain);
    }

    None
}

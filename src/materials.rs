//! Material requirement rollup.
//!
//! Forecasts the parts needed for the currently scheduled visits: every
//! non-package assignment resolving to an asset contributes that asset's
//! part-category descendants, with quantities accumulated by article number.
//!
//! Output order is first-seen across the assignment traversal, so the
//! purchasing list stays stable under re-aggregation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::hierarchy::AssetIndex;
use crate::models::Assignment;

/// Sentinel article number for unnumbered parts.
pub const UNNUMBERED: &str = "N/A";

/// An aggregated part requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRequirement {
    /// Supplier article number, or [`UNNUMBERED`].
    pub article_number: String,
    /// Part display name (first seen for this article).
    pub name: String,
    /// Total quantity across all scheduled assets.
    pub quantity: u32,
}

/// Aggregation key: numbered parts merge by article, unnumbered parts only
/// merge within the same display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PartKey {
    Article(String),
    Unnumbered(String),
}

/// Rolls up part requirements for the given assignments.
///
/// Package assignments and targets that no longer resolve to a stored asset
/// are skipped. Each assignment contributes independently: an asset
/// scheduled twice is counted twice.
pub fn required_parts(assignments: &[Assignment], index: &AssetIndex<'_>) -> Vec<PartRequirement> {
    let mut needed: IndexMap<PartKey, PartRequirement> = IndexMap::new();

    for assignment in assignments.iter().filter(|a| !a.is_package) {
        if index.get(&assignment.target_id).is_none() {
            continue;
        }
        for part in index.collect_descendant_parts(&assignment.target_id) {
            let detail = part.part_detail();
            let quantity = detail.map(|d| d.quantity).unwrap_or(1);
            let article = detail.and_then(|d| d.article_number.clone());

            let key = match &article {
                Some(a) => PartKey::Article(a.clone()),
                None => PartKey::Unnumbered(part.name.clone()),
            };
            needed
                .entry(key)
                .and_modify(|r| r.quantity += quantity)
                .or_insert_with(|| PartRequirement {
                    article_number: article.unwrap_or_else(|| UNNUMBERED.to_string()),
                    name: part.name.clone(),
                    quantity,
                });
        }
    }

    needed.into_values().collect()
}

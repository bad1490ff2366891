//! Asset hierarchy index.
//!
//! The asset store is a flat collection of parent-pointer nodes. `AssetIndex`
//! builds id and child lookups once per snapshot so traversals (children,
//! breadcrumbs, recursive part collection) avoid repeated linear scans.
//!
//! The index borrows the snapshot; rebuild it after mutating the store.

use std::collections::HashMap;

use crate::error::{EngineError, EntityKind};
use crate::models::{Asset, AssetKind};

/// Read-only traversal index over one asset-store snapshot.
#[derive(Debug)]
pub struct AssetIndex<'a> {
    assets: &'a [Asset],
    by_id: HashMap<&'a str, usize>,
    children: HashMap<&'a str, Vec<usize>>,
    roots: Vec<usize>,
}

impl<'a> AssetIndex<'a> {
    /// Builds the index. Child lists preserve store insertion order.
    pub fn build(assets: &'a [Asset]) -> Self {
        let mut by_id = HashMap::with_capacity(assets.len());
        let mut children: HashMap<&str, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();

        for (idx, asset) in assets.iter().enumerate() {
            by_id.insert(asset.id.as_str(), idx);
            match &asset.parent_id {
                Some(parent) => children.entry(parent.as_str()).or_default().push(idx),
                None => roots.push(idx),
            }
        }

        Self {
            assets,
            by_id,
            children,
            roots,
        }
    }

    /// Looks up an asset by id.
    pub fn get(&self, id: &str) -> Option<&'a Asset> {
        self.by_id.get(id).map(|&idx| &self.assets[idx])
    }

    /// Root (parentless) assets in store order.
    pub fn roots(&self) -> Vec<&'a Asset> {
        self.roots.iter().map(|&idx| &self.assets[idx]).collect()
    }

    /// Direct children of `id` in store insertion order.
    ///
    /// Unknown ids yield an empty list, same as leaves.
    pub fn children_of(&self, id: &str) -> Vec<&'a Asset> {
        self.children
            .get(id)
            .map(|idxs| idxs.iter().map(|&idx| &self.assets[idx]).collect())
            .unwrap_or_default()
    }

    /// Ancestor chain from the top-level node down to `id` inclusive.
    ///
    /// Fails with [`EngineError::NotFound`] when `id` is not in the store.
    /// A hop budget bounds the walk on unvalidated stores with cyclic parent
    /// chains; [`crate::validation`] is responsible for rejecting those.
    pub fn breadcrumb_path(&self, id: &str) -> Result<Vec<&'a Asset>, EngineError> {
        let mut node = self
            .get(id)
            .ok_or_else(|| EngineError::not_found(EntityKind::Asset, id))?;

        let mut path = vec![node];
        let mut hops = self.assets.len();
        while let Some(parent_id) = &node.parent_id {
            if hops == 0 {
                break;
            }
            hops -= 1;
            match self.get(parent_id) {
                Some(parent) => {
                    path.push(parent);
                    node = parent;
                }
                // Dangling parent reference: the chain ends here.
                None => break,
            }
        }

        path.reverse();
        Ok(path)
    }

    /// All part-category descendants of `id`, depth first.
    ///
    /// Non-part descendants are traversed into but not included.
    pub fn collect_descendant_parts(&self, id: &str) -> Vec<&'a Asset> {
        let mut parts = Vec::new();
        self.collect_parts_into(id, &mut parts);
        parts
    }

    fn collect_parts_into(&self, id: &str, parts: &mut Vec<&'a Asset>) {
        for child in self.children_of(id) {
            if child.kind == AssetKind::Part {
                parts.push(child);
            } else {
                self.collect_parts_into(&child.id, parts);
            }
        }
    }
}

//! Asset model.
//!
//! Assets form a strict parent-pointer tree across seven levels:
//! customer account → site → sub-site → assembly → machine → component → part.
//! Root nodes (customers) have no parent; every other node references exactly
//! one parent by id.
//!
//! # Detail variants
//! Category-specific attributes live in a tagged [`AssetDetail`] union:
//! machines carry service metadata (due date, health, size class), parts carry
//! ordering metadata (article number, quantity). Other categories carry no
//! detail. The category/detail correspondence is checked by
//! [`crate::validation`], not enforced structurally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hierarchy level of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Top-level customer account.
    Customer,
    /// Physical site (plant, branch).
    Site,
    /// Area within a site (hall, wing).
    SubSite,
    /// Functional assembly (e.g. a compressed-air line).
    Assembly,
    /// Serviceable machine, the unit maintenance visits are scheduled for.
    Machine,
    /// Machine component.
    Component,
    /// Replaceable part.
    Part,
}

/// Machine health as last recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// No action needed.
    Ok,
    /// Maintenance due.
    Warning,
    /// Immediate attention required.
    Critical,
}

/// Size class of a machine, mapping to a configured default visit duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceSize {
    S,
    M,
    L,
}

/// Service metadata carried by machine-category assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineDetail {
    /// Manufacturer name.
    pub manufacturer: Option<String>,
    /// Model designation.
    pub model: Option<String>,
    /// Operating hours counter.
    pub operating_hours: Option<u32>,
    /// Date the next maintenance visit is due.
    pub next_service_date: Option<NaiveDate>,
    /// Recorded health status.
    pub health: Option<HealthStatus>,
    /// Size class for visit-duration derivation.
    pub service_size: Option<ServiceSize>,
}

/// Ordering metadata carried by part-category assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDetail {
    /// Supplier article number. `None` for unnumbered parts.
    pub article_number: Option<String>,
    /// Quantity installed per parent.
    pub quantity: u32,
}

impl Default for PartDetail {
    fn default() -> Self {
        Self {
            article_number: None,
            quantity: 1,
        }
    }
}

/// Category-specific asset attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetDetail {
    /// Service metadata (machines only).
    Machine(MachineDetail),
    /// Ordering metadata (parts only).
    Part(PartDetail),
}

/// A node in the asset hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique asset identifier.
    pub id: String,
    /// Parent asset id. `None` for root (customer) nodes.
    pub parent_id: Option<String>,
    /// Hierarchy level.
    pub kind: AssetKind,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Category-specific attributes.
    pub detail: Option<AssetDetail>,
}

impl Asset {
    /// Creates a new asset of the given kind.
    pub fn new(id: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            kind,
            name: String::new(),
            description: None,
            detail: None,
        }
    }

    /// Creates a customer (root) asset.
    pub fn customer(id: impl Into<String>) -> Self {
        Self::new(id, AssetKind::Customer)
    }

    /// Creates a site asset.
    pub fn site(id: impl Into<String>) -> Self {
        Self::new(id, AssetKind::Site)
    }

    /// Creates a sub-site asset.
    pub fn sub_site(id: impl Into<String>) -> Self {
        Self::new(id, AssetKind::SubSite)
    }

    /// Creates an assembly asset.
    pub fn assembly(id: impl Into<String>) -> Self {
        Self::new(id, AssetKind::Assembly)
    }

    /// Creates a machine asset.
    pub fn machine(id: impl Into<String>) -> Self {
        Self::new(id, AssetKind::Machine)
    }

    /// Creates a component asset.
    pub fn component(id: impl Into<String>) -> Self {
        Self::new(id, AssetKind::Component)
    }

    /// Creates a part asset.
    pub fn part(id: impl Into<String>) -> Self {
        Self::new(id, AssetKind::Part)
    }

    /// Sets the parent asset.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches machine detail.
    pub fn with_machine_detail(mut self, detail: MachineDetail) -> Self {
        self.detail = Some(AssetDetail::Machine(detail));
        self
    }

    /// Attaches part detail.
    pub fn with_part_detail(mut self, detail: PartDetail) -> Self {
        self.detail = Some(AssetDetail::Part(detail));
        self
    }

    /// Returns the machine detail, if present.
    pub fn machine_detail(&self) -> Option<&MachineDetail> {
        match &self.detail {
            Some(AssetDetail::Machine(d)) => Some(d),
            _ => None,
        }
    }

    /// Returns the part detail, if present.
    pub fn part_detail(&self) -> Option<&PartDetail> {
        match &self.detail {
            Some(AssetDetail::Part(d)) => Some(d),
            _ => None,
        }
    }

    /// Mutable access to the machine detail, creating an empty one on a
    /// machine asset that has none yet. Returns `None` for other kinds.
    pub fn machine_detail_mut(&mut self) -> Option<&mut MachineDetail> {
        if self.kind != AssetKind::Machine {
            return None;
        }
        if self.detail.is_none() {
            self.detail = Some(AssetDetail::Machine(MachineDetail::default()));
        }
        match &mut self.detail {
            Some(AssetDetail::Machine(d)) => Some(d),
            _ => None,
        }
    }

    /// Next service due date, if recorded.
    #[inline]
    pub fn next_service_date(&self) -> Option<NaiveDate> {
        self.machine_detail().and_then(|d| d.next_service_date)
    }

    /// Recorded health status, if any.
    #[inline]
    pub fn health(&self) -> Option<HealthStatus> {
        self.machine_detail().and_then(|d| d.health)
    }

    /// Size class, if recorded.
    #[inline]
    pub fn service_size(&self) -> Option<ServiceSize> {
        self.machine_detail().and_then(|d| d.service_size)
    }
}

impl MachineDetail {
    /// Creates empty machine detail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the manufacturer.
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Sets the model designation.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the operating-hours counter.
    pub fn with_operating_hours(mut self, hours: u32) -> Self {
        self.operating_hours = Some(hours);
        self
    }

    /// Sets the next service due date.
    pub fn with_next_service_date(mut self, date: NaiveDate) -> Self {
        self.next_service_date = Some(date);
        self
    }

    /// Sets the health status.
    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = Some(health);
        self
    }

    /// Sets the size class.
    pub fn with_service_size(mut self, size: ServiceSize) -> Self {
        self.service_size = Some(size);
        self
    }
}

impl PartDetail {
    /// Creates part detail with the given quantity.
    pub fn new(quantity: u32) -> Self {
        Self {
            article_number: None,
            quantity,
        }
    }

    /// Sets the article number.
    pub fn with_article_number(mut self, article_number: impl Into<String>) -> Self {
        self.article_number = Some(article_number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_asset_builder() {
        let a = Asset::machine("m1")
            .with_parent("bg1")
            .with_name("Schraubenkompressor GA 37")
            .with_description("Hauptkompressor")
            .with_machine_detail(
                MachineDetail::new()
                    .with_manufacturer("Atlas Copco")
                    .with_model("GA 37")
                    .with_operating_hours(1950)
                    .with_next_service_date(date(2024, 1, 15))
                    .with_health(HealthStatus::Warning)
                    .with_service_size(ServiceSize::M),
            );

        assert_eq!(a.id, "m1");
        assert_eq!(a.parent_id.as_deref(), Some("bg1"));
        assert_eq!(a.kind, AssetKind::Machine);
        assert_eq!(a.next_service_date(), Some(date(2024, 1, 15)));
        assert_eq!(a.health(), Some(HealthStatus::Warning));
        assert_eq!(a.service_size(), Some(ServiceSize::M));
    }

    #[test]
    fn test_detail_accessors_wrong_kind() {
        let part = Asset::part("p1").with_part_detail(PartDetail::new(2).with_article_number("OR-55"));
        assert!(part.machine_detail().is_none());
        assert_eq!(part.part_detail().unwrap().quantity, 2);
        assert_eq!(
            part.part_detail().unwrap().article_number.as_deref(),
            Some("OR-55")
        );

        let site = Asset::site("s1").with_name("Werk Berlin");
        assert!(site.machine_detail().is_none());
        assert!(site.part_detail().is_none());
    }

    #[test]
    fn test_machine_detail_mut_creates_default() {
        let mut m = Asset::machine("m1");
        assert!(m.machine_detail().is_none());

        let detail = m.machine_detail_mut().unwrap();
        detail.health = Some(HealthStatus::Critical);
        assert_eq!(m.health(), Some(HealthStatus::Critical));

        // Non-machines never grow machine detail
        let mut p = Asset::part("p1");
        assert!(p.machine_detail_mut().is_none());
        assert!(p.detail.is_none());
    }

    #[test]
    fn test_part_detail_default_quantity() {
        let d = PartDetail::default();
        assert_eq!(d.quantity, 1);
        assert!(d.article_number.is_none());
    }

    #[test]
    fn test_asset_serde_roundtrip() {
        let a = Asset::machine("m1")
            .with_name("Kältetrockner TE 141")
            .with_machine_detail(
                MachineDetail::new()
                    .with_next_service_date(date(2024, 2, 1))
                    .with_service_size(ServiceSize::S),
            );
        let json = serde_json::to_string(&a).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert!(json.contains("2024-02-01"));
    }
}

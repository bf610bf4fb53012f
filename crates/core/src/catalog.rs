//! The fixed catalog of monitored heritage sites.
//!
//! Built once at startup and shared read-only across all handlers. Lookups
//! never fail: an unknown id resolves to the first catalog entry.

use serde::Serialize;

use crate::types::SiteId;

/// Site id used when a request does not name one.
pub const DEFAULT_SITE_ID: SiteId = 1;

/// A monitored heritage site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeritageSite {
    pub id: SiteId,
    pub name: &'static str,
    pub location: &'static str,
    #[serde(rename = "type")]
    pub site_type: &'static str,
}

const HERITAGE_SITES: [HeritageSite; 4] = [
    HeritageSite {
        id: 1,
        name: "Taj Mahal",
        location: "Agra, India",
        site_type: "Monument",
    },
    HeritageSite {
        id: 2,
        name: "Colosseum",
        location: "Rome, Italy",
        site_type: "Amphitheatre",
    },
    HeritageSite {
        id: 3,
        name: "Machu Picchu",
        location: "Peru",
        site_type: "Archaeological Site",
    },
    HeritageSite {
        id: 4,
        name: "Great Wall",
        location: "China",
        site_type: "Fortification",
    },
];

/// Immutable, ordered collection of heritage sites.
///
/// The only constructor is [`Default`], which always yields the four
/// built-in sites, so the catalog is never empty.
#[derive(Debug, Clone)]
pub struct SiteCatalog {
    sites: Vec<HeritageSite>,
}

impl Default for SiteCatalog {
    fn default() -> Self {
        Self {
            sites: HERITAGE_SITES.to_vec(),
        }
    }
}

impl SiteCatalog {
    /// Resolve a site by id, falling back to the first entry when no site
    /// matches.
    pub fn get_site(&self, id: SiteId) -> &HeritageSite {
        self.sites
            .iter()
            .find(|site| site.id == id)
            .unwrap_or(&self.sites[0])
    }

    /// All sites in catalog order.
    pub fn list_sites(&self) -> &[HeritageSite] {
        &self.sites
    }

    /// Number of monitored sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_sites_in_declared_order() {
        let catalog = SiteCatalog::default();
        let ids: Vec<SiteId> = catalog.list_sites().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn get_site_returns_matching_record() {
        let catalog = SiteCatalog::default();
        let site = catalog.get_site(3);
        assert_eq!(site.name, "Machu Picchu");
        assert_eq!(site.location, "Peru");
        assert_eq!(site.site_type, "Archaeological Site");
    }

    #[test]
    fn unknown_ids_fall_back_to_first_site() {
        let catalog = SiteCatalog::default();
        for id in [0, -1, 5, 999, SiteId::MAX] {
            assert_eq!(catalog.get_site(id).id, 1, "id {id} should fall back");
        }
    }

    #[test]
    fn site_type_serializes_as_type_key() {
        let catalog = SiteCatalog::default();
        let json = serde_json::to_value(catalog.get_site(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "name": "Colosseum",
                "location": "Rome, Italy",
                "type": "Amphitheatre",
            })
        );
    }
}

//! Embedded venue registry.

use std::collections::HashMap;
use std::sync::OnceLock;

use crowdsphere_types::{Venue, VenueType};

/// The venue seed JSON embedded at compile time.
const VENUES_JSON: &str = include_str!("../data/venues.json");

/// Global venue registry instance.
static REGISTRY: OnceLock<VenueRegistry> = OnceLock::new();

/// Registry of all seeded CrowdSphere venues.
#[derive(Debug)]
pub struct VenueRegistry {
    venues: HashMap<String, Venue>,
}

impl VenueRegistry {
    /// Returns the global venue registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads venues from the embedded JSON data.
    fn load() -> Self {
        let venues: HashMap<String, Venue> =
            serde_json::from_str(VENUES_JSON).expect("Invalid venues.json");
        Self { venues }
    }

    /// Creates a registry from a list of venues, keyed by venue id.
    #[must_use]
    pub fn from_venues(venues: impl IntoIterator<Item = Venue>) -> Self {
        Self {
            venues: venues.into_iter().map(|v| (v.id.clone(), v)).collect(),
        }
    }

    /// Looks up a venue by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.get(id)
    }

    /// Returns all venues as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &Venue> {
        self.venues.values()
    }

    /// Returns the total number of venues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Returns venues matching the given type.
    pub fn by_type(&self, venue_type: VenueType) -> impl Iterator<Item = &Venue> {
        self.venues
            .values()
            .filter(move |v| v.venue_type == venue_type)
    }

    /// Returns all verified venues.
    pub fn verified(&self) -> impl Iterator<Item = &Venue> {
        self.venues.values().filter(|v| v.is_verified)
    }

    /// Searches venues by name or address substring (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&Venue> {
        let pattern = pattern.to_lowercase();
        self.venues
            .values()
            .filter(|v| {
                v.name.to_lowercase().contains(&pattern)
                    || v.address.to_lowercase().contains(&pattern)
            })
            .collect()
    }

    /// Returns all venue ids sorted alphabetically.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.venues.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_registry_loads() {
        let registry = VenueRegistry::global();
        assert_eq!(registry.len(), 6);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let registry = VenueRegistry::global();
        let venue = registry.get("v4").unwrap();
        assert_eq!(venue.name, "Neon Nights");
        assert!(registry.get("v99").is_none());
    }

    #[test]
    fn test_by_type() {
        let registry = VenueRegistry::global();
        assert_eq!(registry.by_type(VenueType::Club).count(), 4);
        assert_eq!(registry.by_type(VenueType::Restaurant).count(), 2);
        assert_eq!(registry.by_type(VenueType::Event).count(), 0);
    }

    #[test]
    fn test_search() {
        let registry = VenueRegistry::global();
        let hits = registry.search("rooftop");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "v3");

        // Address substrings match too.
        assert_eq!(registry.search("mumbai").len(), 6);
    }

    #[test]
    fn test_ids_sorted() {
        let registry = VenueRegistry::global();
        assert_eq!(registry.ids(), vec!["v1", "v2", "v3", "v4", "v5", "v6"]);
    }

    #[test]
    fn test_from_venues() {
        let seed = VenueRegistry::global().get("v1").unwrap().clone();
        let registry = VenueRegistry::from_venues([seed]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("v1").unwrap().name, "Skybar Lounge");
    }

    #[test]
    fn test_all_timezones_resolve() {
        for venue in VenueRegistry::global().all() {
            assert!(venue.timezone().is_ok(), "bad tz for {}", venue.id);
        }
    }
}

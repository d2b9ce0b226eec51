//! TV watch provider catalogue.

use serde::Serialize;

use crate::raw::types::ProviderListEntry;

/// Region the provider catalogue is fetched and ranked for.
pub const WATCH_PROVIDER_REGION: &str = "US";

/// Provider in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchProviderEntry {
    /// Provider ID.
    pub provider_id: u32,
    /// Provider name.
    pub provider: String,
    /// Display priority in [`WATCH_PROVIDER_REGION`].
    pub display_priority: Option<i32>,
    /// Logo image path.
    pub logo_path: Option<String>,
}

/// Ranks providers by their priority in `region`, ascending.
///
/// Providers without a priority for the region sort last. Ties keep the
/// upstream order.
#[must_use]
pub fn sort_providers(providers: &[ProviderListEntry], region: &str) -> Vec<WatchProviderEntry> {
    let mut entries: Vec<WatchProviderEntry> = providers
        .iter()
        .map(|entry| WatchProviderEntry {
            provider_id: entry.provider_id,
            provider: entry.provider_name.clone(),
            display_priority: entry.display_priorities.get(region).copied(),
            logo_path: entry.logo_path.clone(),
        })
        .collect();
    entries.sort_by_key(|entry| (entry.display_priority.is_none(), entry.display_priority));
    entries
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::raw::types::ProviderListResponse;

    #[test]
    fn test_sort_providers_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/tmdb/watch_providers_tv.json");
        let response: ProviderListResponse = serde_json::from_str(json).unwrap();

        // Act
        let sorted = sort_providers(&response.results, WATCH_PROVIDER_REGION);

        // Assert
        assert_eq!(sorted.len(), response.results.len());
        assert_eq!(sorted[0].provider, "Netflix");
        assert_eq!(sorted[0].display_priority, Some(0));
        assert!(
            sorted
                .windows(2)
                .all(|pair| match (pair[0].display_priority, pair[1].display_priority) {
                    (Some(a), Some(b)) => a <= b,
                    (Some(_) | None, None) => true,
                    (None, Some(_)) => false,
                })
        );
    }

    #[test]
    fn test_missing_priority_sorts_last() {
        // Arrange
        let json = r#"{"results":[
            {"provider_id":1,"provider_name":"Nowhere","display_priorities":{"GB":0}},
            {"provider_id":2,"provider_name":"Second","display_priorities":{"US":5}},
            {"provider_id":3,"provider_name":"First","display_priorities":{"US":1}}
        ]}"#;
        let response: ProviderListResponse = serde_json::from_str(json).unwrap();

        // Act
        let sorted = sort_providers(&response.results, "US");

        // Assert
        let names: Vec<&str> = sorted.iter().map(|e| e.provider.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Nowhere"]);
        assert_eq!(sorted[2].display_priority, None);
    }
}

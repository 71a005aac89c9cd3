//! Station-level visibility scoping.
//!
//! An [`AccessScope`] describes what a caller is allowed to see: either
//! everything (a global scope) or a single station. A [`ScopeFilter`]
//! applies a scope to any list of [`Stationed`] records and returns the
//! visible subset. Ambiguous scopes fail closed: a restricted caller with no
//! station sees nothing, never everything.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::records::Stationed;

/// Station names that grant visibility over every station.
pub const GLOBAL_STATION_ALIASES: [&str; 2] = ["todas", "all"];

/// A caller's station-level access grant, built per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessScope {
    /// Station the caller is assigned to, if any.
    pub station: Option<String>,

    /// Whether the caller may view every station regardless of assignment.
    pub view_all: bool,
}

impl AccessScope {
    /// A scope that can see every station.
    #[must_use]
    pub fn global() -> Self {
        Self {
            station: None,
            view_all: true,
        }
    }

    /// A scope restricted to a single station.
    #[must_use]
    pub fn for_station(station: impl Into<String>) -> Self {
        Self {
            station: Some(station.into()),
            view_all: false,
        }
    }

    /// The caller's station, trimmed and lowercased; `None` when absent or
    /// blank.
    #[must_use]
    pub fn normalized_station(&self) -> Option<String> {
        self.station
            .as_deref()
            .map(normalize)
            .filter(|s| !s.is_empty())
    }
}

/// Applies [`AccessScope`] grants to lists of stationed records.
///
/// Holds the alias list that promotes a station name to global visibility;
/// the aliases come from configuration and default to
/// [`GLOBAL_STATION_ALIASES`].
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    aliases: Vec<String>,
}

impl ScopeFilter {
    /// Create a filter with the default global-station aliases.
    #[must_use]
    pub fn new() -> Self {
        Self {
            aliases: GLOBAL_STATION_ALIASES.iter().map(|s| (*s).into()).collect(),
        }
    }

    /// Create a filter with custom global-station aliases.
    ///
    /// Aliases are normalized; blank aliases are dropped.
    #[must_use]
    pub fn with_aliases(aliases: Vec<String>) -> Self {
        let aliases = aliases
            .iter()
            .map(|a| normalize(a))
            .filter(|a| !a.is_empty())
            .collect();
        Self { aliases }
    }

    /// The alias list in effect, normalized.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Check whether a scope grants visibility over every station.
    #[must_use]
    pub fn is_global(&self, scope: &AccessScope) -> bool {
        if scope.view_all {
            return true;
        }
        scope
            .normalized_station()
            .is_some_and(|s| self.aliases.iter().any(|a| *a == s))
    }

    /// Return the records visible under the given scope.
    ///
    /// Global scopes see every record. A restricted scope with no usable
    /// station sees nothing. Otherwise a record is visible when its station,
    /// trimmed and lowercased, equals the scope's station treated the same
    /// way; records with no station are not visible to restricted callers.
    /// The input is not mutated and the output is newly allocated.
    #[must_use]
    pub fn filter<T>(&self, scope: &AccessScope, records: &[T]) -> Vec<T>
    where
        T: Stationed + Clone,
    {
        if self.is_global(scope) {
            return records.to_vec();
        }

        let Some(wanted) = scope.normalized_station() else {
            debug!("restricted scope without station, returning nothing");
            return Vec::new();
        };

        records
            .iter()
            .filter(|r| r.station().map(normalize).is_some_and(|s| s == wanted))
            .cloned()
            .collect()
    }
}

impl Default for ScopeFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Inspection, InspectionStatus};

    fn inspections() -> Vec<Inspection> {
        vec![
            Inspection::new("Bomba P-101", Some("Lima"), InspectionStatus::Approved),
            Inspection::new("Grúa G-7", Some("Cusco"), InspectionStatus::Observed),
            Inspection::new("Tanque T-3", None, InspectionStatus::Rejected),
        ]
    }

    #[test]
    fn test_scope_global() {
        let scope = AccessScope::global();
        assert!(scope.view_all);
        assert!(scope.station.is_none());
    }

    #[test]
    fn test_scope_for_station() {
        let scope = AccessScope::for_station("Lima");
        assert!(!scope.view_all);
        assert_eq!(scope.station.as_deref(), Some("Lima"));
    }

    #[test]
    fn test_normalized_station() {
        assert_eq!(
            AccessScope::for_station(" LIMA ").normalized_station(),
            Some("lima".to_string())
        );
        assert_eq!(AccessScope::for_station("  ").normalized_station(), None);
        assert_eq!(AccessScope::default().normalized_station(), None);
    }

    #[test]
    fn test_filter_matches_station() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::for_station("lima");

        let visible = filter.filter(&scope, &inspections());

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].station.as_deref(), Some("Lima"));
    }

    #[test]
    fn test_filter_is_whitespace_and_case_insensitive() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::for_station(" LIMA ");

        let visible = filter.filter(&scope, &inspections());

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].equipment, "Bomba P-101");
    }

    #[test]
    fn test_filter_todas_alias_sees_everything() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::for_station("Todas");

        let visible = filter.filter(&scope, &inspections());

        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_filter_all_alias_sees_everything() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::for_station("ALL");

        assert_eq!(filter.filter(&scope, &inspections()).len(), 3);
    }

    #[test]
    fn test_filter_view_all_flag_sees_everything() {
        let filter = ScopeFilter::new();
        let scope = AccessScope {
            station: Some("Lima".to_string()),
            view_all: true,
        };

        assert_eq!(filter.filter(&scope, &inspections()).len(), 3);
    }

    #[test]
    fn test_filter_fails_closed_without_station() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::default();

        assert!(filter.filter(&scope, &inspections()).is_empty());
    }

    #[test]
    fn test_filter_fails_closed_on_blank_station() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::for_station("   ");

        assert!(filter.filter(&scope, &inspections()).is_empty());
    }

    #[test]
    fn test_filter_excludes_stationless_records_when_restricted() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::for_station("cusco");

        let visible = filter.filter(&scope, &inspections());

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].equipment, "Grúa G-7");
    }

    #[test]
    fn test_filter_empty_input() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::for_station("lima");

        let visible: Vec<Inspection> = filter.filter(&scope, &[]);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let filter = ScopeFilter::new();
        let scope = AccessScope::for_station("lima");
        let input = inspections();
        let snapshot = input.clone();

        let _ = filter.filter(&scope, &input);

        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_custom_aliases() {
        let filter = ScopeFilter::with_aliases(vec!["GLOBAL".to_string(), "  ".to_string()]);

        assert_eq!(filter.aliases(), ["global"]);
        assert!(filter.is_global(&AccessScope::for_station("global")));
        // The defaults no longer apply on an injected alias list.
        assert!(!filter.is_global(&AccessScope::for_station("todas")));
    }

    #[test]
    fn test_is_global() {
        let filter = ScopeFilter::new();

        assert!(filter.is_global(&AccessScope::global()));
        assert!(filter.is_global(&AccessScope::for_station("todas")));
        assert!(!filter.is_global(&AccessScope::for_station("lima")));
        assert!(!filter.is_global(&AccessScope::default()));
    }
}

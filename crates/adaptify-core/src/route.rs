//! Site routes.

use serde::{Deserialize, Serialize};

/// Every page the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Landing page.
    Landing,
    /// Legal imprint.
    Impressum,
    /// Privacy policy.
    Datenschutz,
    /// Terms and conditions.
    Agb,
    /// About us.
    UeberUns,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Landing,
        Self::Impressum,
        Self::Datenschutz,
        Self::Agb,
        Self::UeberUns,
    ];

    /// Absolute path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Impressum => "/impressum",
            Self::Datenschutz => "/datenschutz",
            Self::Agb => "/agb",
            Self::UeberUns => "/ueber-uns",
        }
    }

    /// Document title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => "Adaptify | Digitalisierung für den Mittelstand",
            Self::Impressum => "Impressum | Adaptify",
            Self::Datenschutz => "Datenschutz | Adaptify",
            Self::Agb => "AGB | Adaptify",
            Self::UeberUns => "Über uns | Adaptify",
        }
    }

    /// Whether the page is one of the legal documents.
    #[must_use]
    pub const fn is_legal(self) -> bool {
        matches!(self, Self::Impressum | Self::Datenschutz | Self::Agb)
    }

    /// Match a location path, ignoring a trailing slash, query and fragment.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_tolerates_trailing_slash_and_query() {
        assert_eq!(Route::from_path("/agb/"), Some(Route::Agb));
        assert_eq!(Route::from_path(""), Some(Route::Landing));
        assert_eq!(
            Route::from_path("/ueber-uns?ref=nav#team"),
            Some(Route::UeberUns)
        );
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/blog"), None);
    }

    #[test]
    fn test_legal_pages() {
        let legal: Vec<Route> = Route::ALL.into_iter().filter(|r| r.is_legal()).collect();
        assert_eq!(legal.len(), 3);
        assert!(!Route::Landing.is_legal());
    }
}

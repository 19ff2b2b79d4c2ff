//! Cookie consent decision.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ConsentConfig;
use crate::error::Error;
use crate::preferences::{CONSENT_KEY, PreferenceStore, Preferences};

/// The visitor's answer to the cookie banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentDecision {
    /// Cookies accepted.
    Accepted,
    /// Cookies declined, including closing the banner.
    Declined,
}

impl ConsentDecision {
    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for ConsentDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentDecision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(Error::InvalidConsent(other.to_string())),
        }
    }
}

/// Reads and records the consent decision.
#[derive(Debug)]
pub struct Consent<S> {
    prefs: Preferences<S>,
    config: ConsentConfig,
}

impl<S: PreferenceStore> Consent<S> {
    /// Wrap `store`.
    pub const fn new(store: S, config: ConsentConfig) -> Self {
        Self {
            prefs: Preferences::new(store),
            config,
        }
    }

    /// The stored decision. Unreadable or unknown values count as none.
    pub fn decision(&self) -> Option<ConsentDecision> {
        self.prefs.read(CONSENT_KEY)?.parse().ok()
    }

    /// Whether the banner should be offered.
    pub fn banner_should_show(&self) -> bool {
        self.decision().is_none()
    }

    /// Persist the visitor's answer.
    pub fn record(&self, decision: ConsentDecision) {
        self.prefs.write(CONSENT_KEY, decision.as_str());
        info!(decision = %decision, "Cookie consent recorded");
    }

    /// Delay before the banner appears.
    pub const fn banner_delay(&self) -> Duration {
        Duration::from_millis(self.config.banner_delay_ms)
    }

    /// Length of the close animation.
    pub const fn close_duration(&self) -> Duration {
        Duration::from_millis(self.config.close_ms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::preferences::{MemoryStore, MockPreferenceStore};

    #[test]
    fn test_banner_shows_without_decision() {
        let consent = Consent::new(MemoryStore::new(), ConsentConfig::default());
        assert!(consent.banner_should_show());
        assert_eq!(consent.banner_delay(), Duration::from_millis(1500));
        assert_eq!(consent.close_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_record_then_read() {
        let consent = Consent::new(MemoryStore::new(), ConsentConfig::default());
        consent.record(ConsentDecision::Declined);
        assert_eq!(consent.decision(), Some(ConsentDecision::Declined));
        assert!(!consent.banner_should_show());
    }

    #[test]
    fn test_unknown_value_counts_as_undecided() {
        let store = MemoryStore::with_entries([(CONSENT_KEY, "maybe")]);
        let consent = Consent::new(store, ConsentConfig::default());
        assert_eq!(consent.decision(), None);
    }

    #[test]
    fn test_unavailable_storage_shows_banner() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_try_read()
            .returning(|key| Err(Error::storage(key, "blocked")));
        let consent = Consent::new(store, ConsentConfig::default());
        assert!(consent.banner_should_show());
    }
}

//! Page-level collaborators
//!
//! The import page only emits intents to these. Routing and downloads are
//! handled by the host shell.

use serde::{Deserialize, Serialize};

/// Destination of a navigation intent emitted by the import page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    /// The banking overview the import page was opened from
    BankingOverview,
}

impl NavigationTarget {
    pub fn id(&self) -> &'static str {
        match self {
            Self::BankingOverview => "banking",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Self::BankingOverview => "/banking",
        }
    }
}

/// Receives navigation intents (e.g. the back arrow in the page header)
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: NavigationTarget);
}

/// Starts a download of the sample statement file.
///
/// Fire-and-forget: the import page does not observe the response.
pub trait SampleFileSource: Send + Sync {
    fn request_sample_file(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banking_target() {
        let target = NavigationTarget::BankingOverview;
        assert_eq!(target.id(), "banking");
        assert_eq!(target.route(), "/banking");
    }
}

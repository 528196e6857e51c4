//! Top-level view identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::NavError;

/// One top-level screen the navigation core can show.
///
/// The set is closed: anything else is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Landing,
    Login,
    ExecutiveDashboard,
    ClientClubPortal,
    PartnerPortal,
    B2bPortal,
    CrewApp,
    OperatorPanel,
    ArchitectureDiagram,
    UnrecognizedRole,
}

impl ViewId {
    pub fn all() -> &'static [ViewId] {
        &[
            ViewId::Landing,
            ViewId::Login,
            ViewId::ExecutiveDashboard,
            ViewId::ClientClubPortal,
            ViewId::PartnerPortal,
            ViewId::B2bPortal,
            ViewId::CrewApp,
            ViewId::OperatorPanel,
            ViewId::ArchitectureDiagram,
            ViewId::UnrecognizedRole,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Landing => "landing",
            ViewId::Login => "login",
            ViewId::ExecutiveDashboard => "executive-dashboard",
            ViewId::ClientClubPortal => "client-club-portal",
            ViewId::PartnerPortal => "partner-portal",
            ViewId::B2bPortal => "b2b-portal",
            ViewId::CrewApp => "crew-app",
            ViewId::OperatorPanel => "operator-panel",
            ViewId::ArchitectureDiagram => "architecture-diagram",
            ViewId::UnrecognizedRole => "unrecognized-role",
        }
    }

    /// Returns true for role home dashboards.
    pub fn is_portal(self) -> bool {
        matches!(
            self,
            ViewId::ExecutiveDashboard
                | ViewId::ClientClubPortal
                | ViewId::PartnerPortal
                | ViewId::B2bPortal
                | ViewId::CrewApp
                | ViewId::OperatorPanel
        )
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::all()
            .iter()
            .copied()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| NavError::InvalidViewTransition {
                requested: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_views() {
        for view in ViewId::all() {
            assert_eq!(view.as_str().parse::<ViewId>().unwrap(), *view);
        }
    }

    #[test]
    fn test_parse_unknown_view_is_invalid_transition() {
        let err = "dashboard".parse::<ViewId>().unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidViewTransition {
                requested: "dashboard".to_string()
            }
        );
    }

    #[test]
    fn test_portals() {
        let portals: Vec<_> = ViewId::all().iter().filter(|v| v.is_portal()).collect();
        assert_eq!(portals.len(), 6);
        assert!(!ViewId::UnrecognizedRole.is_portal());
        assert!(!ViewId::Landing.is_portal());
    }
}

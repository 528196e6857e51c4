//! Role enumeration and role claims.
//!
//! `Role` is the closed set of access classes. `RoleClaim` is what a session
//! actually carries: either a known role or the raw string of something that
//! did not match. Keeping the unmatched value around lets the router send it
//! to a neutral screen instead of guessing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::NavError;

/// Access class of an authenticated actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Visitor,
    Executive,
    Manager,
    Dispatcher,
    Operator,
    Sales,
    Captain,
    Pilot,
    Guide,
    Mechanic,
    Agent,
    Contractor,
    BrandPartner,
    MemberBronze,
    MemberSilver,
    MemberGold,
    MemberPlatinum,
    B2bClient,
    CorporateManager,
    CompanyAdmin,
    Accountant,
}

/// Portal family a role belongs to.
///
/// Several roles share one group; the group decides the home view and the
/// default capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleGroup {
    Public,
    Executive,
    ClientClub,
    Partner,
    B2b,
    Crew,
    Operator,
}

impl Role {
    /// Returns every role, in picker order.
    pub fn all() -> &'static [Role] {
        &[
            Role::Visitor,
            Role::Executive,
            Role::Manager,
            Role::Accountant,
            Role::Operator,
            Role::Dispatcher,
            Role::Sales,
            Role::Captain,
            Role::Pilot,
            Role::Guide,
            Role::Mechanic,
            Role::Agent,
            Role::Contractor,
            Role::BrandPartner,
            Role::MemberBronze,
            Role::MemberSilver,
            Role::MemberGold,
            Role::MemberPlatinum,
            Role::B2bClient,
            Role::CorporateManager,
            Role::CompanyAdmin,
        ]
    }

    /// Roles that can be picked in the interactive login form.
    ///
    /// `visitor` has no account, so it never appears here.
    pub fn selectable() -> impl Iterator<Item = Role> {
        Self::all().iter().copied().filter(|r| r.is_selectable())
    }

    pub fn is_selectable(self) -> bool {
        self != Role::Visitor
    }

    /// Wire identifier (`member-gold`, `b2b-client`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::Executive => "executive",
            Role::Manager => "manager",
            Role::Dispatcher => "dispatcher",
            Role::Operator => "operator",
            Role::Sales => "sales",
            Role::Captain => "captain",
            Role::Pilot => "pilot",
            Role::Guide => "guide",
            Role::Mechanic => "mechanic",
            Role::Agent => "agent",
            Role::Contractor => "contractor",
            Role::BrandPartner => "brand-partner",
            Role::MemberBronze => "member-bronze",
            Role::MemberSilver => "member-silver",
            Role::MemberGold => "member-gold",
            Role::MemberPlatinum => "member-platinum",
            Role::B2bClient => "b2b-client",
            Role::CorporateManager => "corporate-manager",
            Role::CompanyAdmin => "company-admin",
            Role::Accountant => "accountant",
        }
    }

    /// Human-readable label for pickers and headers.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Visitor => "Visitor",
            Role::Executive => "Executive",
            Role::Manager => "Manager",
            Role::Dispatcher => "Dispatcher",
            Role::Operator => "Operator",
            Role::Sales => "Sales",
            Role::Captain => "Captain",
            Role::Pilot => "Pilot",
            Role::Guide => "Guide",
            Role::Mechanic => "Mechanic",
            Role::Agent => "Travel agent",
            Role::Contractor => "Contractor",
            Role::BrandPartner => "Brand partner",
            Role::MemberBronze => "Club member (Bronze)",
            Role::MemberSilver => "Club member (Silver)",
            Role::MemberGold => "Club member (Gold)",
            Role::MemberPlatinum => "Club member (Platinum)",
            Role::B2bClient => "B2B client",
            Role::CorporateManager => "Corporate manager",
            Role::CompanyAdmin => "Company admin",
            Role::Accountant => "Accountant",
        }
    }

    pub fn group(self) -> RoleGroup {
        match self {
            Role::Visitor => RoleGroup::Public,
            Role::Executive | Role::Manager | Role::Accountant => RoleGroup::Executive,
            Role::MemberBronze | Role::MemberSilver | Role::MemberGold | Role::MemberPlatinum => {
                RoleGroup::ClientClub
            }
            Role::Agent | Role::Contractor | Role::BrandPartner => RoleGroup::Partner,
            Role::B2bClient | Role::CorporateManager | Role::CompanyAdmin => RoleGroup::B2b,
            Role::Captain | Role::Pilot | Role::Guide | Role::Mechanic => RoleGroup::Crew,
            Role::Operator | Role::Dispatcher | Role::Sales => RoleGroup::Operator,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = NavError;

    /// Exact, case-sensitive match against the wire identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| NavError::UnrecognizedRole(s.to_string()))
    }
}

impl RoleGroup {
    pub fn all() -> &'static [RoleGroup] {
        &[
            RoleGroup::Public,
            RoleGroup::Executive,
            RoleGroup::ClientClub,
            RoleGroup::Partner,
            RoleGroup::B2b,
            RoleGroup::Crew,
            RoleGroup::Operator,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RoleGroup::Public => "Public",
            RoleGroup::Executive => "Management",
            RoleGroup::ClientClub => "Client club",
            RoleGroup::Partner => "Partners",
            RoleGroup::B2b => "Corporate",
            RoleGroup::Crew => "Crew",
            RoleGroup::Operator => "Operations",
        }
    }

    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::all().iter().copied().filter(move |r| r.group() == self)
    }

    /// Capabilities granted to a fresh session of this group.
    pub fn default_permissions(self) -> &'static [&'static str] {
        match self {
            RoleGroup::Public => &["catalog:read"],
            RoleGroup::Executive => &[
                "catalog:read",
                "bookings:read",
                "finance:read",
                "reports:export",
                "staff:manage",
            ],
            RoleGroup::ClientClub => &["catalog:read", "bookings:own", "loyalty:read"],
            RoleGroup::Partner => &["catalog:read", "bookings:create", "commissions:read"],
            RoleGroup::B2b => &["catalog:read", "bookings:create", "invoices:read"],
            RoleGroup::Crew => &["schedule:read", "fleet:read", "logbook:write"],
            RoleGroup::Operator => &[
                "catalog:read",
                "bookings:read",
                "bookings:manage",
                "fleet:read",
            ],
        }
    }
}

impl fmt::Display for RoleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Role value as carried by a session.
///
/// Deserializing never fails on an unknown role: the raw string is kept as
/// `Unrecognized` so the caller decides where to route it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleClaim {
    Known(Role),
    Unrecognized(String),
}

impl RoleClaim {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Role>() {
            Ok(role) => RoleClaim::Known(role),
            Err(_) => RoleClaim::Unrecognized(raw.to_string()),
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            RoleClaim::Known(role) => Some(*role),
            RoleClaim::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleClaim::Known(role) => role.as_str(),
            RoleClaim::Unrecognized(raw) => raw,
        }
    }
}

impl From<Role> for RoleClaim {
    fn from(role: Role) -> Self {
        RoleClaim::Known(role)
    }
}

impl From<String> for RoleClaim {
    fn from(raw: String) -> Self {
        match raw.parse::<Role>() {
            Ok(role) => RoleClaim::Known(role),
            Err(_) => RoleClaim::Unrecognized(raw),
        }
    }
}

impl From<&str> for RoleClaim {
    fn from(raw: &str) -> Self {
        RoleClaim::parse(raw)
    }
}

impl From<RoleClaim> for String {
    fn from(claim: RoleClaim) -> Self {
        match claim {
            RoleClaim::Known(role) => role.as_str().to_string(),
            RoleClaim::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for RoleClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_are_unique_and_complete() {
        let mut ids: Vec<&str> = Role::all().iter().map(|r| r.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 21);
    }

    #[test]
    fn test_parse_round_trips_every_identifier() {
        for role in Role::all() {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        for raw in ["Executive", "exec", " executive", "member-gold ", "member", "b2b"] {
            assert_eq!(
                raw.parse::<Role>(),
                Err(NavError::UnrecognizedRole(raw.to_string())),
                "{raw:?} must not match"
            );
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Role::CorporateManager).unwrap();
        assert_eq!(json, "\"corporate-manager\"");
        let json = serde_json::to_string(&Role::B2bClient).unwrap();
        assert_eq!(json, "\"b2b-client\"");
    }

    #[test]
    fn test_claim_keeps_unknown_value() {
        let claim: RoleClaim = serde_json::from_str("\"ghost-role\"").unwrap();
        assert_eq!(claim, RoleClaim::Unrecognized("ghost-role".to_string()));
        assert_eq!(claim.role(), None);

        let claim: RoleClaim = serde_json::from_str("\"member-gold\"").unwrap();
        assert_eq!(claim.role(), Some(Role::MemberGold));
    }

    #[test]
    fn test_visitor_is_not_selectable() {
        assert!(Role::selectable().all(|r| r != Role::Visitor));
        assert_eq!(Role::selectable().count(), Role::all().len() - 1);
    }

    #[test]
    fn test_groups_partition_roles() {
        let total: usize = RoleGroup::all().iter().map(|g| g.roles().count()).sum();
        assert_eq!(total, Role::all().len());
        assert_eq!(RoleGroup::Operator.roles().count(), 3);
        assert_eq!(RoleGroup::Crew.roles().count(), 4);
    }
}

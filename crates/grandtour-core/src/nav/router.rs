//! Role to home-view routing.
//!
//! Pure functions, no state. Every known role maps to exactly one view;
//! anything else resolves to [`Resolution::Unrecognized`] and it is up to the
//! caller to pick a safe screen for it.

use super::role::{Role, RoleClaim, RoleGroup};
use super::view::ViewId;

/// Outcome of routing a role claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Home(ViewId),
    Unrecognized,
}

impl Resolution {
    pub fn view(self) -> Option<ViewId> {
        match self {
            Resolution::Home(view) => Some(view),
            Resolution::Unrecognized => None,
        }
    }
}

/// Resolves the home view for whatever role a session carries.
pub fn resolve(claim: &RoleClaim) -> Resolution {
    match claim {
        RoleClaim::Known(role) => Resolution::Home(home_view(*role)),
        RoleClaim::Unrecognized(_) => Resolution::Unrecognized,
    }
}

/// Resolves a raw role string. Matching is exact.
pub fn resolve_str(raw: &str) -> Resolution {
    resolve(&RoleClaim::parse(raw))
}

/// Home view of a known role.
pub fn home_view(role: Role) -> ViewId {
    group_view(role.group())
}

pub fn group_view(group: RoleGroup) -> ViewId {
    match group {
        // Visitors own no portal; they stay on the public site.
        RoleGroup::Public => ViewId::Landing,
        RoleGroup::Executive => ViewId::ExecutiveDashboard,
        RoleGroup::ClientClub => ViewId::ClientClubPortal,
        RoleGroup::Partner => ViewId::PartnerPortal,
        RoleGroup::B2b => ViewId::B2bPortal,
        RoleGroup::Crew => ViewId::CrewApp,
        RoleGroup::Operator => ViewId::OperatorPanel,
    }
}

/// Roles whose home is `view`, in picker order.
pub fn roles_for(view: ViewId) -> Vec<Role> {
    Role::all()
        .iter()
        .copied()
        .filter(|role| home_view(*role) == view)
        .collect()
}

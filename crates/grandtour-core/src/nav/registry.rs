//! Static view registry.
//!
//! Maps each [`ViewId`] to the collaborator that draws it and to the inputs
//! that collaborator needs from the core. This is data, not logic: the
//! controller never branches on collaborators, and front ends dispatch on
//! [`Collaborator`] instead of on view ids.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::session::Session;
use super::view::ViewId;
use crate::portal::Portal;

/// One input a view collaborator receives from the navigation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prop {
    /// The signed-in session.
    User,
    OnLogout,
    OnBackToHome,
    /// Completes the login with a session.
    OnLogin,
    /// Leaves the login flow.
    OnBack,
    /// Opens the login flow from the landing page.
    OnLoginClick,
    /// Opens the architecture diagram from the landing page.
    OnShowDiagram,
}

impl Prop {
    pub fn as_str(self) -> &'static str {
        match self {
            Prop::User => "user",
            Prop::OnLogout => "on_logout",
            Prop::OnBackToHome => "on_back_to_home",
            Prop::OnLogin => "on_login",
            Prop::OnBack => "on_back",
            Prop::OnLoginClick => "on_login_click",
            Prop::OnShowDiagram => "on_show_diagram",
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renderer responsible for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "portal")]
pub enum Collaborator {
    Landing,
    LoginForm,
    Portal(Portal),
    ArchitectureDiagram,
    UnrecognizedRole,
}

impl Collaborator {
    pub fn name(self) -> &'static str {
        match self {
            Collaborator::Landing => "LandingPage",
            Collaborator::LoginForm => "LoginForm",
            Collaborator::Portal(Portal::Executive) => "ExecutiveDashboard",
            Collaborator::Portal(Portal::ClientClub) => "ClientClubPortal",
            Collaborator::Portal(Portal::Partner) => "PartnerPortal",
            Collaborator::Portal(Portal::B2b) => "B2bPortal",
            Collaborator::Portal(Portal::Crew) => "CrewApp",
            Collaborator::Portal(Portal::Operator) => "OperatorPanel",
            Collaborator::ArchitectureDiagram => "ArchitectureDiagram",
            Collaborator::UnrecognizedRole => "UnrecognizedRoleNotice",
        }
    }
}

/// Registry entry for one view.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ViewDescriptor {
    pub view: ViewId,
    pub title: &'static str,
    pub collaborator: Collaborator,
    pub props: &'static [Prop],
    /// Only enterable by a session whose role routes here.
    pub requires_session: bool,
}

impl ViewDescriptor {
    pub fn requires(&self, prop: Prop) -> bool {
        self.props.contains(&prop)
    }
}

const PORTAL_PROPS: &[Prop] = &[Prop::User, Prop::OnLogout, Prop::OnBackToHome];

static LANDING: ViewDescriptor = ViewDescriptor {
    view: ViewId::Landing,
    title: "Grand Tour Sochi",
    collaborator: Collaborator::Landing,
    props: &[Prop::OnLoginClick, Prop::OnShowDiagram],
    requires_session: false,
};

static LOGIN: ViewDescriptor = ViewDescriptor {
    view: ViewId::Login,
    title: "Sign in",
    collaborator: Collaborator::LoginForm,
    props: &[Prop::OnLogin, Prop::OnBack],
    requires_session: false,
};

static EXECUTIVE_DASHBOARD: ViewDescriptor = ViewDescriptor {
    view: ViewId::ExecutiveDashboard,
    title: "Executive dashboard",
    collaborator: Collaborator::Portal(Portal::Executive),
    props: PORTAL_PROPS,
    requires_session: true,
};

static CLIENT_CLUB_PORTAL: ViewDescriptor = ViewDescriptor {
    view: ViewId::ClientClubPortal,
    title: "Client club",
    collaborator: Collaborator::Portal(Portal::ClientClub),
    props: PORTAL_PROPS,
    requires_session: true,
};

static PARTNER_PORTAL: ViewDescriptor = ViewDescriptor {
    view: ViewId::PartnerPortal,
    title: "Partner portal",
    collaborator: Collaborator::Portal(Portal::Partner),
    props: PORTAL_PROPS,
    requires_session: true,
};

static B2B_PORTAL: ViewDescriptor = ViewDescriptor {
    view: ViewId::B2bPortal,
    title: "Corporate portal",
    collaborator: Collaborator::Portal(Portal::B2b),
    props: PORTAL_PROPS,
    requires_session: true,
};

static CREW_APP: ViewDescriptor = ViewDescriptor {
    view: ViewId::CrewApp,
    title: "Crew app",
    collaborator: Collaborator::Portal(Portal::Crew),
    props: PORTAL_PROPS,
    requires_session: true,
};

static OPERATOR_PANEL: ViewDescriptor = ViewDescriptor {
    view: ViewId::OperatorPanel,
    title: "Operator panel",
    collaborator: Collaborator::Portal(Portal::Operator),
    props: PORTAL_PROPS,
    requires_session: true,
};

static ARCHITECTURE_DIAGRAM: ViewDescriptor = ViewDescriptor {
    view: ViewId::ArchitectureDiagram,
    title: "Architecture (illustrative)",
    collaborator: Collaborator::ArchitectureDiagram,
    props: &[Prop::OnBackToHome],
    requires_session: false,
};

static UNRECOGNIZED_ROLE: ViewDescriptor = ViewDescriptor {
    view: ViewId::UnrecognizedRole,
    title: "Access unavailable",
    collaborator: Collaborator::UnrecognizedRole,
    props: &[Prop::OnLogout],
    requires_session: false,
};

/// Returns the descriptor for a view. Total over [`ViewId`].
pub fn lookup(view: ViewId) -> &'static ViewDescriptor {
    match view {
        ViewId::Landing => &LANDING,
        ViewId::Login => &LOGIN,
        ViewId::ExecutiveDashboard => &EXECUTIVE_DASHBOARD,
        ViewId::ClientClubPortal => &CLIENT_CLUB_PORTAL,
        ViewId::PartnerPortal => &PARTNER_PORTAL,
        ViewId::B2bPortal => &B2B_PORTAL,
        ViewId::CrewApp => &CREW_APP,
        ViewId::OperatorPanel => &OPERATOR_PANEL,
        ViewId::ArchitectureDiagram => &ARCHITECTURE_DIAGRAM,
        ViewId::UnrecognizedRole => &UNRECOGNIZED_ROLE,
    }
}

/// All descriptors in [`ViewId::all`] order.
pub fn all() -> impl Iterator<Item = &'static ViewDescriptor> {
    ViewId::all().iter().map(|view| lookup(*view))
}

/// A descriptor's inputs could not be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("view `{view}` needs `{prop}` but nobody is signed in")]
    MissingUser { view: ViewId, prop: Prop },
}

/// Inputs handed to a collaborator, checked against its descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ViewProps<'a> {
    pub descriptor: &'static ViewDescriptor,
    pub user: Option<&'a Session>,
}

impl<'a> ViewProps<'a> {
    /// Builds the props for `descriptor`, failing if a required input is
    /// missing.
    pub fn assemble(
        descriptor: &'static ViewDescriptor,
        session: Option<&'a Session>,
    ) -> Result<Self, ContractError> {
        let user = if descriptor.requires(Prop::User) {
            Some(session.ok_or(ContractError::MissingUser {
                view: descriptor.view,
                prop: Prop::User,
            })?)
        } else {
            session
        };
        Ok(Self { descriptor, user })
    }

    /// Whether the collaborator was handed this callback.
    pub fn offers(&self, prop: Prop) -> bool {
        self.descriptor.requires(prop)
    }
}

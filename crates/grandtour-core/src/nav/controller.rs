//! Navigation controller.
//!
//! Single owner of the session, the navigation state and the login flow.
//! Views never mutate these directly; they hand a [`NavCommand`] to
//! [`NavigationController::dispatch`] (or call the matching method).
//!
//! ## Invariants
//!
//! - A login flow exists exactly while `current_view == login`.
//! - `pending_role` is only set while the flow is on the two-factor step.
//! - Guarded views (portals) are entered only by a session whose role routes
//!   to them. An unresolvable role lands on `unrecognized-role`, never on a
//!   portal.

use secrecy::SecretString;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::context::NavigationContext;
use super::error::NavError;
use super::journal::{DEFAULT_JOURNAL_LIMIT, Journal, TransitionCause};
use super::login::{BackOutcome, LoginFlow, LoginStep};
use super::registry::{self, ContractError, ViewProps};
use super::role::Role;
use super::router::{self, Resolution};
use super::session::Session;
use super::view::ViewId;

/// Where the UI currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    current_view: ViewId,
    navigation_context: NavigationContext,
    pending_role: Option<Role>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_view: ViewId::Landing,
            navigation_context: NavigationContext::default(),
            pending_role: None,
        }
    }
}

impl NavigationState {
    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn navigation_context(&self) -> &NavigationContext {
        &self.navigation_context
    }

    pub fn pending_role(&self) -> Option<Role> {
        self.pending_role
    }
}

/// Navigation request emitted by a view.
///
/// This is the one capability handed to every view, instead of a separate
/// callback per destination.
#[derive(Debug)]
pub enum NavCommand {
    GoTo {
        view: ViewId,
        context: Option<NavigationContext>,
    },
    GoHome,
    Logout,
    Login(Session),
    SubmitCredentials {
        login: String,
        password: SecretString,
    },
    SelectRole(Role),
    SubmitTwoFactor(String),
    LoginBack,
}

#[derive(Debug)]
pub struct NavigationController {
    state: NavigationState,
    session: Option<Session>,
    login_flow: Option<LoginFlow>,
    journal: Journal,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self::with_journal_limit(DEFAULT_JOURNAL_LIMIT)
    }

    pub fn with_journal_limit(limit: usize) -> Self {
        Self {
            state: NavigationState::default(),
            session: None,
            login_flow: None,
            journal: Journal::with_limit(limit),
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_view(&self) -> ViewId {
        self.state.current_view
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn login_flow(&self) -> Option<&LoginFlow> {
        self.login_flow.as_ref()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Props for the collaborator of the current view.
    pub fn view_props(&self) -> Result<ViewProps<'_>, ContractError> {
        ViewProps::assemble(registry::lookup(self.state.current_view), self.session())
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Applies a command from a view.
    pub fn dispatch(&mut self, command: NavCommand) -> Result<(), NavError> {
        match command {
            NavCommand::GoTo { view, context } => self.go_to(view, context),
            NavCommand::GoHome => {
                self.go_home();
                Ok(())
            }
            NavCommand::Logout => {
                self.logout();
                Ok(())
            }
            NavCommand::Login(session) => {
                self.login(session);
                Ok(())
            }
            NavCommand::SubmitCredentials { login, password } => {
                self.submit_credentials(&login, password).map(|_| ())
            }
            NavCommand::SelectRole(role) => self.select_role(role).map(|_| ()),
            NavCommand::SubmitTwoFactor(code) => self.submit_two_factor(&code).map(|_| ()),
            NavCommand::LoginBack => self.login_back().map(|_| ()),
        }
    }

    /// Moves to `view`, replacing the navigation context with `context`.
    ///
    /// Guarded views are refused with [`NavError::AccessDenied`] unless the
    /// current session's role routes to them.
    pub fn go_to(
        &mut self,
        view: ViewId,
        context: Option<NavigationContext>,
    ) -> Result<(), NavError> {
        if registry::lookup(view).requires_session && !self.session_routes_to(view) {
            warn!(view = %view, "refused transition to guarded view");
            return Err(NavError::AccessDenied { view });
        }
        self.enter(view, context, TransitionCause::GoTo);
        Ok(())
    }

    /// Like [`go_to`](Self::go_to) for a raw identifier. Unknown identifiers
    /// fail with [`NavError::InvalidViewTransition`]; nothing is coerced.
    pub fn go_to_named(
        &mut self,
        view: &str,
        context: Option<NavigationContext>,
    ) -> Result<(), NavError> {
        let view = view
            .parse::<ViewId>()
            .inspect_err(|e| warn!(error = %e, "rejected view transition"))?;
        self.go_to(view, context)
    }

    /// Signs out (if signed in), drops any login in progress and shows the
    /// landing page.
    pub fn go_home(&mut self) {
        self.reset(TransitionCause::GoHome);
    }

    pub fn logout(&mut self) {
        self.reset(TransitionCause::Logout);
    }

    /// Installs `session` and shows its role's home view.
    ///
    /// Returns the view that was entered. Unknown roles land on
    /// `unrecognized-role`.
    pub fn login(&mut self, session: Session) -> ViewId {
        let target = match router::resolve(&session.role) {
            Resolution::Home(view) => view,
            Resolution::Unrecognized => {
                warn!(
                    user_id = %session.user_id,
                    role = %session.role,
                    "session carries an unrecognized role"
                );
                ViewId::UnrecognizedRole
            }
        };
        info!(user_id = %session.user_id, role = %session.role, "signed in");
        self.session = Some(session);
        self.enter(target, None, TransitionCause::Login);
        target
    }

    pub fn submit_credentials(
        &mut self,
        login: &str,
        password: SecretString,
    ) -> Result<LoginStep, NavError> {
        let flow = self.flow_mut()?;
        flow.submit_credentials(login, password)
            .inspect_err(|e| debug!(error = %e, "credentials step rejected"))?;
        Ok(flow.step())
    }

    pub fn select_role(&mut self, role: Role) -> Result<LoginStep, NavError> {
        let flow = self.flow_mut()?;
        flow.select_role(role)
            .inspect_err(|e| debug!(error = %e, "role step rejected"))?;
        let step = flow.step();
        self.state.pending_role = Some(role);
        Ok(step)
    }

    /// Completes the flow on a valid code and returns the entered view.
    pub fn submit_two_factor(&mut self, code: &str) -> Result<ViewId, NavError> {
        let session = self
            .flow_mut()?
            .submit_two_factor(code)
            .inspect_err(|e| debug!(error = %e, "two-factor step rejected"))?;
        Ok(self.login(session))
    }

    /// One step back in the login flow; backing out of the first step
    /// returns to the landing page.
    pub fn login_back(&mut self) -> Result<BackOutcome, NavError> {
        let outcome = self.flow_mut()?.back();
        match outcome {
            BackOutcome::Exit => self.enter(ViewId::Landing, None, TransitionCause::LoginBack),
            BackOutcome::Step(LoginStep::Role) => self.state.pending_role = None,
            BackOutcome::Step(_) => {}
        }
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn flow_mut(&mut self) -> Result<&mut LoginFlow, NavError> {
        let current = self.state.current_view;
        self.login_flow
            .as_mut()
            .ok_or(NavError::LoginNotActive { current })
    }

    fn session_routes_to(&self, view: ViewId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| router::resolve(&s.role) == Resolution::Home(view))
    }

    fn reset(&mut self, cause: TransitionCause) {
        if let Some(session) = self.session.take() {
            info!(user_id = %session.user_id, "signed out");
        }
        self.login_flow = None;
        self.enter(ViewId::Landing, None, cause);
    }

    fn enter(&mut self, view: ViewId, context: Option<NavigationContext>, cause: TransitionCause) {
        let from = self.state.current_view;
        if view == ViewId::Login {
            self.login_flow.get_or_insert_with(LoginFlow::new);
        } else {
            if self.login_flow.take().is_some() {
                debug!("login flow discarded");
            }
            self.state.pending_role = None;
        }
        self.state.current_view = view;
        self.state.navigation_context = context.unwrap_or_default();
        self.journal.record(from, view, cause);
        info!(from = %from, to = %view, cause = ?cause, "view changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::context::keys;
    use crate::nav::session::Contact;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    fn signed_in(role: Role) -> NavigationController {
        let mut nav = NavigationController::new();
        nav.login(Session::for_role(Contact::Email("a@b.com".into()), role));
        nav
    }

    /// One controller per distinct reachable situation.
    fn reachable_states() -> Vec<NavigationController> {
        let mut states = vec![NavigationController::new()];

        let mut at_login = NavigationController::new();
        at_login.go_to(ViewId::Login, None).unwrap();
        states.push(at_login);

        let mut at_role = NavigationController::new();
        at_role.go_to(ViewId::Login, None).unwrap();
        at_role.submit_credentials("a@b.com", secret("x")).unwrap();
        states.push(at_role);

        let mut at_code = NavigationController::new();
        at_code.go_to(ViewId::Login, None).unwrap();
        at_code.submit_credentials("a@b.com", secret("x")).unwrap();
        at_code.select_role(Role::Pilot).unwrap();
        states.push(at_code);

        let mut diagram = NavigationController::new();
        diagram.go_to(ViewId::ArchitectureDiagram, None).unwrap();
        states.push(diagram);

        for role in Role::all() {
            states.push(signed_in(*role));
        }

        let mut ghost = NavigationController::new();
        ghost.login(Session::new("Ghost", Contact::Email("g@b.com".into()), "ghost-role"));
        states.push(ghost);

        states
    }

    #[test]
    fn test_starts_on_landing() {
        let nav = NavigationController::new();
        assert_eq!(nav.current_view(), ViewId::Landing);
        assert!(nav.session().is_none());
        assert!(nav.login_flow().is_none());
        assert!(nav.journal().is_empty());
    }

    #[test]
    fn test_go_home_from_every_reachable_state() {
        for mut nav in reachable_states() {
            nav.go_home();
            assert_eq!(nav.current_view(), ViewId::Landing);
            assert!(nav.session().is_none());
            assert!(nav.login_flow().is_none());
            assert_eq!(nav.state().pending_role(), None);

            nav.go_home();
            assert_eq!(nav.current_view(), ViewId::Landing);
            assert!(nav.session().is_none());
        }
    }

    #[test]
    fn test_logout_from_every_reachable_state() {
        for mut nav in reachable_states() {
            nav.logout();
            assert_eq!(nav.current_view(), ViewId::Landing);
            assert!(nav.session().is_none());
            assert!(nav.login_flow().is_none());
        }
    }

    #[test]
    fn test_go_to_named_rejects_unknown_view() {
        let mut nav = NavigationController::new();
        let err = nav.go_to_named("dashboard", None).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidViewTransition {
                requested: "dashboard".into()
            }
        );
        assert_eq!(nav.current_view(), ViewId::Landing);
        assert!(nav.journal().is_empty());
    }

    #[test]
    fn test_go_to_stores_context_verbatim_and_overwrites() {
        let mut nav = NavigationController::new();
        let ctx = NavigationContext::new().with(keys::DEMO_ID, "yacht-7");
        nav.go_to(ViewId::Login, Some(ctx.clone())).unwrap();
        assert_eq!(nav.state().navigation_context(), &ctx);

        nav.go_to(ViewId::Landing, None).unwrap();
        assert!(nav.state().navigation_context().is_empty());
    }

    #[test]
    fn test_portals_are_guarded() {
        let mut nav = NavigationController::new();
        for view in ViewId::all().iter().filter(|v| v.is_portal()) {
            assert_eq!(
                nav.go_to(*view, None),
                Err(NavError::AccessDenied { view: *view })
            );
        }
        assert_eq!(nav.current_view(), ViewId::Landing);

        let mut nav = signed_in(Role::Guide);
        assert_eq!(
            nav.go_to(ViewId::ExecutiveDashboard, None),
            Err(NavError::AccessDenied {
                view: ViewId::ExecutiveDashboard
            })
        );
        nav.go_to(ViewId::Landing, None).unwrap();
        nav.go_to(ViewId::CrewApp, None).unwrap();
        assert_eq!(nav.current_view(), ViewId::CrewApp);
    }

    #[test]
    fn test_forged_role_cannot_reach_any_portal() {
        let mut nav = NavigationController::new();
        let view = nav.login(Session::new(
            "Mallory",
            Contact::Email("m@b.com".into()),
            "executive ",
        ));
        assert_eq!(view, ViewId::UnrecognizedRole);
        for portal in ViewId::all().iter().filter(|v| v.is_portal()) {
            assert!(nav.go_to(*portal, None).is_err());
        }
        assert_eq!(nav.current_view(), ViewId::UnrecognizedRole);
    }

    #[test]
    fn test_diagram_round_trip() {
        let mut nav = NavigationController::new();
        nav.go_to(ViewId::ArchitectureDiagram, None).unwrap();
        assert_eq!(nav.current_view(), ViewId::ArchitectureDiagram);
        nav.go_to(ViewId::Landing, None).unwrap();
        assert_eq!(nav.current_view(), ViewId::Landing);
    }

    #[test]
    fn test_login_flow_exists_only_on_login_view() {
        let mut nav = NavigationController::new();
        assert_eq!(
            nav.submit_credentials("a@b.com", secret("x")),
            Err(NavError::LoginNotActive {
                current: ViewId::Landing
            })
        );

        nav.go_to(ViewId::Login, None).unwrap();
        nav.submit_credentials("a@b.com", secret("x")).unwrap();
        nav.go_to(ViewId::Landing, None).unwrap();
        assert!(nav.login_flow().is_none());

        nav.go_to(ViewId::Login, None).unwrap();
        assert_eq!(
            nav.login_flow().map(LoginFlow::step),
            Some(LoginStep::Credentials)
        );
    }

    #[test]
    fn test_pending_role_tracks_two_factor_step() {
        let mut nav = NavigationController::new();
        nav.go_to(ViewId::Login, None).unwrap();
        nav.submit_credentials("a@b.com", secret("x")).unwrap();
        assert_eq!(nav.select_role(Role::Sales), Ok(LoginStep::TwoFactor));
        assert_eq!(nav.state().pending_role(), Some(Role::Sales));

        assert_eq!(nav.login_back(), Ok(BackOutcome::Step(LoginStep::Role)));
        assert_eq!(nav.state().pending_role(), None);
    }

    #[test]
    fn test_bad_code_keeps_flow_on_two_factor() {
        let mut nav = NavigationController::new();
        nav.go_to(ViewId::Login, None).unwrap();
        nav.submit_credentials("a@b.com", secret("x")).unwrap();
        nav.select_role(Role::Executive).unwrap();

        let err = nav.submit_two_factor("12345").unwrap_err();
        assert!(matches!(err, NavError::IncompleteLoginStep(_)));
        assert_eq!(nav.current_view(), ViewId::Login);
        assert_eq!(
            nav.login_flow().map(LoginFlow::step),
            Some(LoginStep::TwoFactor)
        );
        assert!(nav.session().is_none());
    }

    #[test]
    fn test_login_back_from_credentials_returns_to_landing() {
        let mut nav = NavigationController::new();
        nav.go_to(ViewId::Login, None).unwrap();
        assert_eq!(nav.login_back(), Ok(BackOutcome::Exit));
        assert_eq!(nav.current_view(), ViewId::Landing);
        assert!(nav.login_flow().is_none());
        assert_eq!(
            nav.journal().last().map(|r| r.cause),
            Some(TransitionCause::LoginBack)
        );
    }

    #[test]
    fn test_dispatch_drives_full_login() {
        let mut nav = NavigationController::new();
        let commands = vec![
            NavCommand::GoTo {
                view: ViewId::Login,
                context: None,
            },
            NavCommand::SubmitCredentials {
                login: "+7 999 123 45 67".into(),
                password: secret("pw"),
            },
            NavCommand::SelectRole(Role::CompanyAdmin),
            NavCommand::SubmitTwoFactor("654321".into()),
        ];
        for command in commands {
            nav.dispatch(command).unwrap();
        }
        assert_eq!(nav.current_view(), ViewId::B2bPortal);
        let session = nav.session().unwrap();
        assert_eq!(session.contact.phone(), Some("+7 999 123 45 67"));
        assert!(session.has_permission("invoices:read"));

        nav.dispatch(NavCommand::Logout).unwrap();
        assert_eq!(nav.current_view(), ViewId::Landing);
    }

    #[test]
    fn test_view_props_follow_current_view() {
        let nav = signed_in(Role::Agent);
        let props = nav.view_props().unwrap();
        assert_eq!(props.descriptor.view, ViewId::PartnerPortal);
        assert!(props.user.is_some());
    }

    #[test]
    fn test_journal_records_transitions() {
        let mut nav = NavigationController::with_journal_limit(8);
        nav.go_to(ViewId::Login, None).unwrap();
        nav.submit_credentials("a@b.com", secret("x")).unwrap();
        nav.select_role(Role::Mechanic).unwrap();
        nav.submit_two_factor("111111").unwrap();
        nav.logout();

        let path: Vec<(ViewId, ViewId, TransitionCause)> = nav
            .journal()
            .entries()
            .map(|r| (r.from, r.to, r.cause))
            .collect();
        assert_eq!(
            path,
            vec![
                (ViewId::Landing, ViewId::Login, TransitionCause::GoTo),
                (ViewId::Login, ViewId::CrewApp, TransitionCause::Login),
                (ViewId::CrewApp, ViewId::Landing, TransitionCause::Logout),
            ]
        );
    }
}

//! TUI state.
//!
//! Navigation lives in the [`NavigationController`]; everything else here is
//! presentation state (cursors, unsent form input, notices) that the
//! controller never sees.

use std::fmt;
use std::time::{Duration, Instant};

use grandtour_core::config::{Config, LoginConfig};
use grandtour_core::nav::{NavigationController, Role};

use crate::events::ViewFault;

/// How long a notice stays on the status line.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

pub struct AppState {
    pub nav: NavigationController,
    pub landing: LandingState,
    pub login: LoginFormState,
    pub diagram: DiagramState,
    /// Set by the error boundary; while present the recovery screen replaces
    /// the current view.
    pub fault: Option<ViewFault>,
    pub notice: Option<Notice>,
    pub show_status_line: bool,
    login_defaults: LoginConfig,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            nav: NavigationController::with_journal_limit(config.tui.journal_limit),
            landing: LandingState::default(),
            login: LoginFormState::new(&config.login),
            diagram: DiagramState::default(),
            fault: None,
            notice: None,
            show_status_line: config.tui.show_status_line,
            login_defaults: config.login.clone(),
        }
    }

    /// Clears the sign-in form back to its configured defaults.
    pub fn reset_login_form(&mut self) {
        self.login = LoginFormState::new(&self.login_defaults);
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn expire_notice(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.duration_since(n.shown_at) >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

#[derive(Debug, Default)]
pub struct LandingState {
    /// Highlighted offer.
    pub selected: usize,
}

#[derive(Debug, Default)]
pub struct DiagramState {
    /// Highlighted node.
    pub selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialField {
    #[default]
    Login,
    Password,
}

impl CredentialField {
    pub fn toggle(self) -> Self {
        match self {
            CredentialField::Login => CredentialField::Password,
            CredentialField::Password => CredentialField::Login,
        }
    }
}

/// Unsent input of the sign-in form.
///
/// The password only lives here until it is submitted; it is then moved into
/// a `SecretString` and this buffer is left empty.
pub struct LoginFormState {
    pub login: String,
    pub password: String,
    pub focus: CredentialField,
    /// Index into [`Role::selectable`].
    pub role_cursor: usize,
    pub code: String,
    /// Why the last submission was rejected.
    pub error: Option<String>,
}

impl LoginFormState {
    pub fn new(defaults: &LoginConfig) -> Self {
        let role_cursor = defaults
            .default_role
            .and_then(|role| Role::selectable().position(|r| r == role))
            .unwrap_or(0);
        Self {
            login: defaults.prefill_login.clone().unwrap_or_default(),
            password: String::new(),
            focus: CredentialField::Login,
            role_cursor,
            code: String::new(),
            error: None,
        }
    }

    pub fn highlighted_role(&self) -> Option<Role> {
        Role::selectable().nth(self.role_cursor)
    }
}

impl fmt::Debug for LoginFormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFormState")
            .field("login", &self.login)
            .field("password", &"[hidden]")
            .field("focus", &self.focus)
            .field("role_cursor", &self.role_cursor)
            .field("code", &self.code)
            .field("error", &self.error)
            .finish()
    }
}

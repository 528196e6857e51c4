//! Navigation error taxonomy.

use thiserror::Error;

use super::login::LoginStep;
use super::role::Role;
use super::view::ViewId;

/// Errors raised by the navigation core.
///
/// `InvalidViewTransition` and `AccessDenied` are caller bugs and should be
/// surfaced loudly. `IncompleteLoginStep` is meant to be shown inline in the
/// login form. `UnrecognizedRole` is produced when parsing role strings; the
/// controller itself never returns it and routes such sessions to the
/// neutral `unrecognized-role` view instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("invalid view transition: `{requested}` is not a known view")]
    InvalidViewTransition { requested: String },

    #[error("unrecognized role `{0}`")]
    UnrecognizedRole(String),

    #[error(transparent)]
    IncompleteLoginStep(#[from] LoginStepError),

    #[error("view `{view}` requires a signed-in user whose role opens it")]
    AccessDenied { view: ViewId },

    #[error("no login in progress (current view: {current})")]
    LoginNotActive { current: ViewId },
}

/// Local validation failures inside the login flow.
///
/// None of these advance the flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginStepError {
    #[error("enter an email address or phone number")]
    MissingLogin,

    #[error("`{0}` is not a valid email address or phone number")]
    InvalidLogin(String),

    #[error("enter your password")]
    MissingPassword,

    #[error("{} accounts cannot sign in here", .0.display_name())]
    RoleNotSelectable(Role),

    #[error("the verification code must be exactly 6 digits")]
    InvalidTwoFactorCode,

    #[error("expected the {expected} step, but the form is on {actual}")]
    OutOfOrder {
        expected: LoginStep,
        actual: LoginStep,
    },
}

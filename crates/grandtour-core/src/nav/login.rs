//! Three-step login flow: credentials, role, two-factor code.
//!
//! The flow only moves forward when the current step validates, and only
//! moves back through [`LoginFlow::back`]. Inputs for any other step are
//! rejected with [`LoginStepError::OutOfOrder`], so no step can be skipped.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::error::LoginStepError;
use super::role::Role;
use super::session::{Contact, Session};

/// Length of the verification code.
pub const TWO_FACTOR_CODE_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginStep {
    Credentials,
    Role,
    TwoFactor,
}

impl LoginStep {
    pub fn as_str(self) -> &'static str {
        match self {
            LoginStep::Credentials => "credentials",
            LoginStep::Role => "role",
            LoginStep::TwoFactor => "two-factor",
        }
    }

    /// 1-based position, for "step 2 of 3" style headers.
    pub fn number(self) -> usize {
        match self {
            LoginStep::Credentials => 1,
            LoginStep::Role => 2,
            LoginStep::TwoFactor => 3,
        }
    }
}

impl fmt::Display for LoginStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated credentials. The secret is never serialized or logged.
#[derive(Debug)]
pub struct Credentials {
    pub contact: Contact,
    secret: SecretString,
}

impl Credentials {
    /// Checks both fields locally. There is no backend to verify against.
    pub fn validate(login: &str, password: SecretString) -> Result<Self, LoginStepError> {
        let contact = Contact::parse(login)?;
        if password.expose_secret().is_empty() {
            return Err(LoginStepError::MissingPassword);
        }
        Ok(Self {
            contact,
            secret: password,
        })
    }

    pub fn has_secret(&self) -> bool {
        !self.secret.expose_secret().is_empty()
    }
}

/// Where [`LoginFlow::back`] ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Step(LoginStep),
    /// Backed out of the first step; the caller leaves the login view.
    Exit,
}

/// Transient state of one login attempt.
#[derive(Debug)]
pub struct LoginFlow {
    step: LoginStep,
    credentials: Option<Credentials>,
    selected_role: Option<Role>,
    two_factor_code: Option<String>,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            step: LoginStep::Credentials,
            credentials: None,
            selected_role: None,
            two_factor_code: None,
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.credentials.as_ref().map(|c| &c.contact)
    }

    pub fn selected_role(&self) -> Option<Role> {
        self.selected_role
    }

    /// Last code submitted on the two-factor step, accepted or not.
    pub fn two_factor_code(&self) -> Option<&str> {
        self.two_factor_code.as_deref()
    }

    fn expect_step(&self, expected: LoginStep) -> Result<(), LoginStepError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(LoginStepError::OutOfOrder {
                expected,
                actual: self.step,
            })
        }
    }

    /// Step 1. Advances to [`LoginStep::Role`] on success.
    pub fn submit_credentials(
        &mut self,
        login: &str,
        password: SecretString,
    ) -> Result<(), LoginStepError> {
        self.expect_step(LoginStep::Credentials)?;
        self.credentials = Some(Credentials::validate(login, password)?);
        self.step = LoginStep::Role;
        Ok(())
    }

    /// Step 2. Advances to [`LoginStep::TwoFactor`] on success.
    pub fn select_role(&mut self, role: Role) -> Result<(), LoginStepError> {
        self.expect_step(LoginStep::Role)?;
        if !role.is_selectable() {
            return Err(LoginStepError::RoleNotSelectable(role));
        }
        self.selected_role = Some(role);
        self.step = LoginStep::TwoFactor;
        Ok(())
    }

    /// Step 3. Produces the session when the code is exactly six ASCII
    /// digits; otherwise the flow stays on the two-factor step.
    pub fn submit_two_factor(&mut self, code: &str) -> Result<Session, LoginStepError> {
        self.expect_step(LoginStep::TwoFactor)?;
        self.two_factor_code = Some(code.to_string());
        validate_two_factor_code(code)?;

        let (Some(credentials), Some(role)) = (&self.credentials, self.selected_role) else {
            // Unreachable through the public API: both are set before the
            // flow can reach this step.
            return Err(LoginStepError::OutOfOrder {
                expected: LoginStep::Credentials,
                actual: self.step,
            });
        };
        Ok(Session::for_role(credentials.contact.clone(), role))
    }

    /// Moves one step back, dropping whatever the abandoned step collected.
    pub fn back(&mut self) -> BackOutcome {
        match self.step {
            LoginStep::Credentials => {
                self.credentials = None;
                BackOutcome::Exit
            }
            LoginStep::Role => {
                self.credentials = None;
                self.step = LoginStep::Credentials;
                BackOutcome::Step(self.step)
            }
            LoginStep::TwoFactor => {
                self.selected_role = None;
                self.two_factor_code = None;
                self.step = LoginStep::Role;
                BackOutcome::Step(self.step)
            }
        }
    }
}

/// Accepts exactly [`TWO_FACTOR_CODE_LEN`] ASCII digits.
pub fn validate_two_factor_code(code: &str) -> Result<(), LoginStepError> {
    if code.len() == TWO_FACTOR_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(LoginStepError::InvalidTwoFactorCode)
    }
}

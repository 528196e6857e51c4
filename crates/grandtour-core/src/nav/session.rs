//! In-memory session of the signed-in actor.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::LoginStepError;
use super::role::{Role, RoleClaim};

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// How the actor can be reached. Exactly one of email or phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contact {
    Email(String),
    Phone(String),
}

impl Contact {
    /// Classifies a login identifier as an email address or a phone number.
    ///
    /// Emails need a non-empty local part and a dotted domain. Phones may
    /// start with `+` and contain spaces, dashes and parentheses around
    /// 10 to 15 digits.
    pub fn parse(login: &str) -> Result<Self, LoginStepError> {
        let login = login.trim();
        if login.is_empty() {
            return Err(LoginStepError::MissingLogin);
        }

        if let Some((local, domain)) = login.split_once('@') {
            let domain_ok = !domain.contains('@')
                && domain
                    .split('.')
                    .filter(|label| !label.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.');
            if !local.is_empty() && domain_ok && !login.contains(char::is_whitespace) {
                return Ok(Contact::Email(login.to_string()));
            }
            return Err(LoginStepError::InvalidLogin(login.to_string()));
        }

        let body = login.strip_prefix('+').unwrap_or(login);
        let allowed = body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'));
        let digits = body.chars().filter(char::is_ascii_digit).count();
        if allowed && (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
            return Ok(Contact::Phone(login.to_string()));
        }

        Err(LoginStepError::InvalidLogin(login.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Contact::Email(value) | Contact::Phone(value) => value,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Contact::Email(value) => Some(value),
            Contact::Phone(_) => None,
        }
    }

    pub fn phone(&self) -> Option<&str> {
        match self {
            Contact::Phone(value) => Some(value),
            Contact::Email(_) => None,
        }
    }

    /// Name to greet the user with when nothing better is known.
    fn default_display_name(&self) -> String {
        match self {
            Contact::Email(email) => email
                .split('@')
                .next()
                .filter(|local| !local.is_empty())
                .unwrap_or(email)
                .to_string(),
            Contact::Phone(phone) => {
                let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
                let tail = digits.get(digits.len().saturating_sub(4)..).unwrap_or("");
                format!("Guest ···{tail}")
            }
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The currently signed-in actor.
///
/// `role` is a [`RoleClaim`] rather than a [`Role`] so corrupted or forged
/// data can be represented and routed to the neutral screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub contact: Contact,
    pub role: RoleClaim,
    #[serde(default)]
    pub permissions: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Session {
    /// Creates a session with a fresh user id and no permissions.
    pub fn new(
        display_name: impl Into<String>,
        contact: Contact,
        role: impl Into<RoleClaim>,
    ) -> Self {
        Self {
            user_id: uuid::Uuid::new_v4().to_string(),
            display_name: display_name.into(),
            contact,
            role: role.into(),
            permissions: BTreeSet::new(),
            avatar_url: None,
        }
    }

    /// Session produced by the login flow: display name derived from the
    /// contact and the default capabilities of the role's group.
    pub fn for_role(contact: Contact, role: Role) -> Self {
        let display_name = contact.default_display_name();
        Self::new(display_name, contact, role).with_permissions(
            role.group()
                .default_permissions()
                .iter()
                .map(|p| (*p).to_string()),
        )
    }

    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    #[must_use]
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_parses_email() {
        assert_eq!(
            Contact::parse("a@b.com").unwrap(),
            Contact::Email("a@b.com".to_string())
        );
        assert_eq!(
            Contact::parse("  guest@grandtour.example  ").unwrap(),
            Contact::Email("guest@grandtour.example".to_string())
        );
    }

    #[test]
    fn test_contact_parses_phone() {
        assert_eq!(
            Contact::parse("+7 (862) 555-01-23").unwrap(),
            Contact::Phone("+7 (862) 555-01-23".to_string())
        );
    }

    #[test]
    fn test_contact_rejects_garbage() {
        assert_eq!(Contact::parse("   "), Err(LoginStepError::MissingLogin));
        for raw in ["@b.com", "a@b", "a@@b.com", "a@.com", "12345", "not a login"] {
            assert!(
                matches!(Contact::parse(raw), Err(LoginStepError::InvalidLogin(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_for_role_grants_group_permissions() {
        let session = Session::for_role(Contact::Email("anna@b.com".into()), Role::Captain);
        assert_eq!(session.display_name, "anna");
        assert_eq!(session.role, RoleClaim::Known(Role::Captain));
        assert!(session.has_permission("logbook:write"));
        assert!(!session.has_permission("finance:read"));
    }

    #[test]
    fn test_phone_display_name_masks_number() {
        let session = Session::for_role(
            Contact::Phone("+7 862 555 0123".into()),
            Role::MemberSilver,
        );
        assert_eq!(session.display_name, "Guest ···0123");
    }

    #[test]
    fn test_deserialize_forged_role() {
        let json = r#"{
            "user_id": "u-1",
            "display_name": "Mallory",
            "contact": {"email": "m@x.io"},
            "role": "ghost-role"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.role, RoleClaim::Unrecognized("ghost-role".into()));
        assert!(session.permissions.is_empty());
    }

    #[test]
    fn test_serialize_round_trip_keeps_contact_kind() {
        let session = Session::new("Ivan", Contact::Phone("+79990000000".into()), Role::Pilot)
            .with_user_id("u-7");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["contact"]["phone"], "+79990000000");
        assert_eq!(json["role"], "pilot");
        assert!(json.get("avatar_url").is_none());
    }
}

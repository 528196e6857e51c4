use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known context keys.
pub mod keys {
    /// Demo/offer the landing page asked to open after navigation.
    pub const DEMO_ID: &str = "demo_id";
    /// Deep-link target inside the destination view.
    pub const TARGET: &str = "target";
}

/// Optional parameters handed to the destination view.
///
/// The core stores this verbatim and never interprets it; the receiving view
/// checks for the keys it understands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationContext(BTreeMap<String, String>);

impl NavigationContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NavigationContext {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overwrites_same_key() {
        let ctx = NavigationContext::new()
            .with(keys::DEMO_ID, "yacht-7")
            .with(keys::DEMO_ID, "heli-2");
        assert_eq!(ctx.get(keys::DEMO_ID), Some("heli-2"));
        assert_eq!(ctx.iter().count(), 1);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let ctx: NavigationContext = [("target", "fleet")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&ctx).unwrap(),
            r#"{"target":"fleet"}"#
        );
    }
}

use ketab_canonical::IdPolicy;
use serde::{Deserialize, Serialize};

/// Options shared by every builder of an [`EventFactory`](crate::EventFactory).
///
/// Missing fields fall back to their defaults when deserialized, so
/// `{}` is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Identifier namespace policy (default: bare slugs).
    pub id_policy: IdPolicy,
    /// Relay hint appended as the third element of every `a` tag (default: none).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay_hint: Option<String>,
}

impl BuildConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

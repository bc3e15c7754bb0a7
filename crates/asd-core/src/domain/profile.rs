//! Profile domain entity.
//!
//! A profile is the record the user builds in one add.  On disk it becomes a
//! JSON object with camelCase keys:
//!
//! ```json
//! {
//!   "name": "prod",
//!   "mirrorUrl": "https://mirror.example.com",
//!   "forceOverwrite": false,
//!   "repo": "nostalgia296/asd",
//!   "latest": true
//! }
//! ```
//!
//! Optional text fields are omitted entirely when absent; they are never
//! written as `""` or `null`.  Records already in a store are not read back
//! into this type; see [`StoredProfile`](super::record::StoredProfile).

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

/// Repository used when the user does not name one.
pub const DEFAULT_REPO: &str = "nostalgia296/asd";

/// Error returned when a profile name fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileNameError {
    /// The name is empty or consists only of whitespace.
    #[error("profile name must not be empty")]
    Empty,
}

/// The unique key of a profile inside a store.
///
/// Guaranteed non-empty after trimming.  The text is stored verbatim; callers
/// that read user input trim it before constructing the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileName(String);

impl ProfileName {
    /// Validates `name` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileNameError::Empty`] if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ProfileNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One named configuration record.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: ProfileName,
    pub mirror_url: Option<String>,
    pub force_overwrite: bool,
    pub repo: String,
    pub choose_tag: Option<String>,
    pub path: Option<String>,
    pub latest: bool,
}

impl Profile {
    /// Creates a profile with every optional field absent and every default
    /// applied.
    pub fn new(name: ProfileName) -> Self {
        Self {
            name,
            mirror_url: None,
            force_overwrite: false,
            repo: DEFAULT_REPO.to_string(),
            choose_tag: None,
            path: None,
            latest: false,
        }
    }

    /// Builds the JSON object written to disk, keys in on-disk order.
    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".into(), Value::from(self.name.as_str()));
        if let Some(url) = &self.mirror_url {
            map.insert("mirrorUrl".into(), Value::from(url.as_str()));
        }
        map.insert("forceOverwrite".into(), Value::from(self.force_overwrite));
        map.insert("repo".into(), Value::from(self.repo.as_str()));
        if let Some(tag) = &self.choose_tag {
            map.insert("chooseTag".into(), Value::from(tag.as_str()));
        }
        if let Some(path) = &self.path {
            map.insert("path".into(), Value::from(path.as_str()));
        }
        map.insert("latest".into(), Value::from(self.latest));
        map
    }

    /// Lists every present field as `(key, value)` in on-disk order.
    ///
    /// Absent optional fields are skipped, matching what is written.
    pub fn fields(&self) -> Vec<(String, String)> {
        self.to_json_map()
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ProfileName {
        ProfileName::new(s).expect("valid name")
    }

    // ── ProfileName ───────────────────────────────────────────────────────────

    #[test]
    fn test_profile_name_rejects_empty_string() {
        assert_eq!(ProfileName::new(""), Err(ProfileNameError::Empty));
    }

    #[test]
    fn test_profile_name_rejects_whitespace_only() {
        assert_eq!(ProfileName::new("  \t "), Err(ProfileNameError::Empty));
    }

    #[test]
    fn test_profile_name_keeps_text_verbatim() {
        let n = name("prod");
        assert_eq!(n.as_str(), "prod");
        assert_eq!(n.to_string(), "prod");
    }

    // ── Profile defaults ──────────────────────────────────────────────────────

    #[test]
    fn test_new_profile_applies_defaults() {
        // Arrange / Act
        let profile = Profile::new(name("prod"));

        // Assert
        assert_eq!(profile.repo, DEFAULT_REPO);
        assert!(!profile.force_overwrite);
        assert!(!profile.latest);
        assert!(profile.mirror_url.is_none());
        assert!(profile.choose_tag.is_none());
        assert!(profile.path.is_none());
    }

    // ── JSON shape ────────────────────────────────────────────────────────────

    #[test]
    fn test_absent_optional_fields_are_omitted_from_json() {
        // Arrange
        let profile = Profile::new(name("prod"));

        // Act
        let map = profile.to_json_map();

        // Assert
        assert!(!map.contains_key("mirrorUrl"));
        assert!(!map.contains_key("chooseTag"));
        assert!(!map.contains_key("path"));
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_json_keys_follow_field_order() {
        // Arrange
        let mut profile = Profile::new(name("prod"));
        profile.mirror_url = Some("https://m".to_string());
        profile.choose_tag = Some("v1".to_string());
        profile.path = Some("/opt".to_string());

        // Act
        let text = serde_json::to_string(&profile.to_json_map()).expect("serialize");

        // Assert
        assert_eq!(
            text,
            r#"{"name":"prod","mirrorUrl":"https://m","forceOverwrite":false,"repo":"nostalgia296/asd","chooseTag":"v1","path":"/opt","latest":false}"#
        );
    }

    // ── fields() ──────────────────────────────────────────────────────────────

    #[test]
    fn test_fields_lists_only_present_keys_in_order() {
        // Arrange
        let mut profile = Profile::new(name("prod"));
        profile.path = Some("/srv".to_string());
        profile.latest = true;

        // Act
        let fields = profile.fields();

        // Assert
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["name", "forceOverwrite", "repo", "path", "latest"]);
        assert_eq!(fields[4], ("latest".to_string(), "true".to_string()));
    }

    #[test]
    fn test_fields_renders_strings_without_quotes() {
        let profile = Profile::new(name("生产"));
        let fields = profile.fields();
        assert_eq!(fields[0], ("name".to_string(), "生产".to_string()));
        assert_eq!(fields[2].1, DEFAULT_REPO);
    }
}

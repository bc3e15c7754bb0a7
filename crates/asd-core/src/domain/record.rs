//! StoredProfile: one store entry exactly as it was read from disk.
//!
//! Records loaded from a file are never re-shaped.  Key order, `null`
//! values, missing defaults and keys this version does not know about all
//! survive a rewrite unchanged.  Only the `name` key is interpreted, since
//! the store is keyed by it.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use super::profile::{Profile, ProfileName, ProfileNameError};

/// Error returned when a JSON object cannot be used as a store entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The object has no `name` key, or its value is not a string.
    #[error("record has no string \"name\" field")]
    MissingName,

    /// The `name` value is blank.
    #[error(transparent)]
    InvalidName(#[from] ProfileNameError),
}

/// A store entry: its validated name plus the full object it came from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct StoredProfile {
    name: ProfileName,
    fields: Map<String, Value>,
}

impl StoredProfile {
    pub fn name(&self) -> &ProfileName {
        &self.name
    }

    /// The object as stored, in on-disk key order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl TryFrom<Map<String, Value>> for StoredProfile {
    type Error = RecordError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .ok_or(RecordError::MissingName)?;
        let name = ProfileName::new(name)?;
        Ok(Self { name, fields })
    }
}

impl From<&Profile> for StoredProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            fields: profile.to_json_map(),
        }
    }
}

impl From<Profile> for StoredProfile {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

impl Serialize for StoredProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

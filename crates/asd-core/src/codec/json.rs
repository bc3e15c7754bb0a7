//! JSON codec for the profile store file.
//!
//! File format:
//! ```text
//! [
//!   { "name": "prod", "forceOverwrite": false, "repo": "nostalgia296/asd", "latest": false },
//!   ...
//! ]
//! ```
//! Written with 2-space indentation, non-ASCII text kept literal, and no
//! trailing newline.
//!
//! Decoding distinguishes the recoverable cases (blank file, top-level value
//! that is not an array) from hard failures (invalid JSON, an element that is
//! not an object with a usable name).  The caller decides what to tell the
//! user about each.  Records are kept as the objects they were, so encoding a
//! decoded store reproduces each record's keys, order and values.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::record::StoredProfile;
use crate::domain::store::ProfileStore;

/// Errors that can occur while decoding or encoding store text.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not valid JSON.
    #[error("invalid JSON")]
    Syntax(#[source] serde_json::Error),

    /// An element of the top-level array is not a valid profile.
    #[error("profile at index {index} is invalid")]
    InvalidProfile {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The store could not be serialized.
    #[error("failed to serialize profiles")]
    Serialize(#[source] serde_json::Error),
}

/// Result of reading a store, including the cases that fall back to an
/// empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The file held a JSON array of profiles.
    Loaded(ProfileStore),
    /// The file does not exist yet.
    Missing,
    /// The file exists but is blank.
    Empty,
    /// The file is valid JSON but the top-level value is not an array.
    NotAList {
        /// JSON type name of the value found instead (e.g. `"string"`).
        found: &'static str,
    },
}

impl LoadOutcome {
    /// Returns the loaded store, or an empty one for every fallback case.
    pub fn into_store(self) -> ProfileStore {
        match self {
            LoadOutcome::Loaded(store) => store,
            LoadOutcome::Missing | LoadOutcome::Empty | LoadOutcome::NotAList { .. } => {
                ProfileStore::new()
            }
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes the text of a store file.
///
/// Never returns [`LoadOutcome::Missing`]; that case is decided by whoever
/// reads the file.
///
/// # Errors
///
/// Returns [`CodecError::Syntax`] if `text` is not JSON, or
/// [`CodecError::InvalidProfile`] if an array element is not a profile.
///
/// # Examples
///
/// ```rust
/// use asd_core::{decode_store, LoadOutcome};
///
/// assert_eq!(decode_store("  \n").unwrap(), LoadOutcome::Empty);
/// assert_eq!(
///     decode_store("\"not a list\"").unwrap(),
///     LoadOutcome::NotAList { found: "string" }
/// );
/// ```
pub fn decode_store(text: &str) -> Result<LoadOutcome, CodecError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(LoadOutcome::Empty);
    }

    let value: Value = serde_json::from_str(text).map_err(CodecError::Syntax)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Ok(LoadOutcome::NotAList {
                found: json_type_name(&other),
            })
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<StoredProfile>(item)
                .map_err(|source| CodecError::InvalidProfile { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = records.len(), "decoded profile store");
    Ok(LoadOutcome::Loaded(ProfileStore::from(records)))
}

/// Encodes `store` as pretty-printed JSON with 2-space indentation.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if serialization fails.
pub fn encode_store(store: &ProfileStore) -> Result<String, CodecError> {
    serde_json::to_string_pretty(store).map_err(CodecError::Serialize)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

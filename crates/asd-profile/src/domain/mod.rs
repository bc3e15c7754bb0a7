//! Domain types for the profile tool.
//!
//! Profiles themselves live in `asd_core`; this layer only adds the
//! per-invocation settings that decide *where* the store lives.

/// Store location settings resolved once per invocation.
pub mod config;

pub use config::{StoreConfig, CONFIG_DIR_ENV, STORE_FILE_NAME};

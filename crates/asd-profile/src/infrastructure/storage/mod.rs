//! Storage infrastructure: profile store persistence.
//!
//! The `json_store` sub-module handles:
//!
//! - Building the per-invocation [`StoreConfig`](crate::domain::StoreConfig)
//!   from the environment.
//! - Reading the store file and classifying its content.
//! - Replacing the file atomically when a profile is added.

pub mod json_store;

pub use json_store::{store_config_from, store_config_from_env, JsonFileRepository};

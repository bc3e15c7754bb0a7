//! Infrastructure layer for the profile tool.
//!
//! Contains OS-facing adapters: the JSON file repository and the terminal
//! prompt.
//!
//! **Dependency rule**: this layer may depend on `application` and `asd_core`,
//! but MUST NOT be imported by the `application` or domain layers outside of
//! tests.

pub mod storage;
pub mod terminal;

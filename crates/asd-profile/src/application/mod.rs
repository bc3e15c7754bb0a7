//! Application layer use cases for the profile tool.
//!
//! Use cases in this layer orchestrate `asd_core` domain objects to fulfil a
//! user goal.  They depend on the [`collect_profile::Prompt`] and
//! [`add_profile::ProfileRepository`] traits rather than on the terminal or
//! the file system directly.
//!
//! # Sub-modules
//!
//! - **`collect_profile`** – Asks the user for each profile field in turn,
//!   validating and defaulting answers.
//!
//! - **`add_profile`** – Loads the store, collects a profile, resolves name
//!   conflicts, writes the result and reports it.

pub mod add_profile;
pub mod collect_profile;

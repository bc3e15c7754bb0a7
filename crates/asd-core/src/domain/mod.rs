//! Domain entities for the profile manager.
//!
//! Pure data and rules with no I/O.  The invariants enforced here (a profile
//! always has a non-empty name, a store never gains a second record with the
//! same name through its public API) hold no matter which front end drives
//! them.

/// A single named configuration record.
pub mod profile;

/// A store entry kept exactly as it was read.
pub mod record;

/// The ordered collection of profiles persisted as one file.
pub mod store;

//! # asd-core
//!
//! Shared library for the ASD profile manager containing the profile domain
//! model and the JSON codec used to read and write the profile store.
//!
//! This crate has zero dependencies on the file system or the terminal: it
//! turns text into typed records and back.  Everything that touches disk or
//! prompts a user lives in the `asd-profile` crate.
//!
//! - **`domain`** – `Profile`, the validated `ProfileName`, `StoredProfile`
//!   (a record kept exactly as read), and `ProfileStore`, the ordered list
//!   that keeps one record per name.
//!
//! - **`codec`** – Decoding store text into a [`LoadOutcome`] (which also
//!   reports the recoverable "empty" and "not a list" cases) and encoding a
//!   store back to pretty-printed JSON.

pub mod codec;
pub mod domain;

pub use codec::json::{decode_store, encode_store, CodecError, LoadOutcome};
pub use domain::profile::{Profile, ProfileName, ProfileNameError, DEFAULT_REPO};
pub use domain::record::{RecordError, StoredProfile};
pub use domain::store::ProfileStore;

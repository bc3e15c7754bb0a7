//! Codec module converting between store file text and [`ProfileStore`](crate::ProfileStore).

pub mod json;

pub use json::{decode_store, encode_store, CodecError, LoadOutcome};

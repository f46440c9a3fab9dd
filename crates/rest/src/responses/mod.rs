//! Response building for collection envelopes.

pub mod envelope;

pub use envelope::collection_envelope;

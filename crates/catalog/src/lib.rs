//! # stacks-catalog - Catalog Resource Model
//!
//! Resource types exposed by the Stacks library catalog API. Every type here
//! is a plain serde record mirroring what the upstream ILS exports: the API
//! layer never creates, updates, or deletes these records, it only reads and
//! serializes them.
//!
//! ## Identity
//!
//! Resource keys are assigned by the upstream store and immutable:
//!
//! | Resource | Key |
//! |----------|-----|
//! | [`Item`], [`Bib`], [`MarcRecord`], [`EResource`] | numeric record number string |
//! | [`Location`], [`ItemType`], [`ItemStatus`] | short alphanumeric code |
//! | [`ApiUser`] | username |
//!
//! Wire names are camelCase throughout; field order in the structs matches
//! the documented response layout.

mod records;

pub use records::{
    ApiUser, Bib, EResource, Item, ItemStatus, ItemType, Location, MarcField, MarcRecord,
    MarcSubfield,
};

//! Catalog item record and its configuration input.
//!
//! `model` holds the record, `input` the optional per-field overrides and
//! `load` the helpers that read an input from TOML.

mod input;
mod load;
mod model;

pub use input::ItemInput;
pub use model::CatalogItem;

//! Media catalog entries.
//!
//! A [`CatalogItem`] is a plain record describing one track: artist, title,
//! album, release info, duration, a pause flag, notes and references to a
//! local file, a Spotify track and a YouTube video. It is built from an
//! optional [`ItemInput`]; every field the input leaves out takes its
//! documented default.

pub mod catalog;
mod error;

pub use catalog::{CatalogItem, ItemInput};
pub use error::{Error, Result};

use std::path::Path;

use super::{input::ItemInput, model::CatalogItem};
use crate::error::{Error, Result};

/// TOML loading helpers.
///
/// Values are taken with the types the document gives them; a value of the
/// wrong type is a parse error rather than being converted.
impl ItemInput {
    /// Parse an input from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let input: ItemInput = toml::from_str(contents)?;
        log::trace!("parsed item input: {input:?}");
        Ok(input)
    }

    /// Read and parse an input from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading item input from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

impl CatalogItem {
    /// Load an input from a TOML file and build the item from it.
    pub fn load(path: &Path) -> Result<Self> {
        ItemInput::load(path).map(Self::from)
    }
}

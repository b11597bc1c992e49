//! Item database loader.

use std::collections::HashSet;
use std::path::Path;

use equip_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or when two entries share
    /// a handle.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for definition in &catalog.items {
            if !seen.insert(definition.handle) {
                anyhow::bail!("Duplicate item handle {} in catalog", definition.handle);
            }
        }

        Ok(catalog.items)
    }
}

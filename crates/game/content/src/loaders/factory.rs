//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use equip_core::{AutoEquipConfig, ItemDefinition};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads auto-equip content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load auto-equip configuration from `config.toml`.
    ///
    /// A missing file is not an error; the default configuration is used.
    pub fn load_config(&self) -> LoadResult<AutoEquipConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(AutoEquipConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }
}

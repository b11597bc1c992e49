//! Auto-equip configuration loader.

use std::path::Path;

use equip_core::AutoEquipConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for auto-equip configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`AutoEquipConfig::default`].
    pub fn load(path: &Path) -> LoadResult<AutoEquipConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<AutoEquipConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equip_core::{PlacementFlags, SlotId};

    #[test]
    fn empty_document_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, AutoEquipConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = ConfigLoader::parse(
            r#"
            enabled = true
            allow_override = false
            disabled_slots = ["Throwable", "Consumable"]
            placement = "EMPTY_SLOTS"
            "#,
        )
        .unwrap();

        assert!(!config.allow_override);
        assert!(!config.slot_enabled(SlotId::Throwable));
        assert!(!config.slot_enabled(SlotId::Consumable));
        assert!(config.slot_enabled(SlotId::Melee));
        assert_eq!(config.placement, PlacementFlags::EMPTY_SLOTS);
    }

    #[test]
    fn rejects_unknown_slot() {
        let err = ConfigLoader::parse(r#"disabled_slots = ["Backpack"]"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}

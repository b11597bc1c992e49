//! Minimal [`equip_core::ItemOracle`] backed by an in-memory map.
use equip_core::{ItemDefinition, ItemHandle, ItemOracle};
use std::collections::HashMap;

/// ItemOracle implementation with static item definitions
#[derive(Debug, Default)]
pub struct ItemOracleImpl {
    definitions: HashMap<ItemHandle, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the oracle from a loaded catalog.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut oracle = Self::new();
        for def in definitions {
            oracle.add_definition(def);
        }
        oracle
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.handle, def);
    }

    /// Display name for logs, falling back to the handle.
    pub fn display_name(&self, handle: ItemHandle) -> String {
        match self.definitions.get(&handle) {
            Some(def) if !def.name.is_empty() => def.name.clone(),
            _ => handle.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.definitions.get(&handle).cloned()
    }
}

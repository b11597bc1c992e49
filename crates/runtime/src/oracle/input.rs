use std::sync::atomic::{AtomicBool, Ordering};

use equip_core::InputOracle;

/// Override modifier state, updated by whatever polls the input device.
#[derive(Debug, Default)]
pub struct InputOracleImpl {
    override_held: AtomicBool,
}

impl InputOracleImpl {
    pub fn new(override_held: bool) -> Self {
        Self {
            override_held: AtomicBool::new(override_held),
        }
    }

    pub fn set_override_held(&self, held: bool) {
        self.override_held.store(held, Ordering::Relaxed);
    }
}

impl InputOracle for InputOracleImpl {
    fn is_override_key_held(&self) -> bool {
        self.override_held.load(Ordering::Relaxed)
    }
}

//! Runtime implementations of the `equip-core` oracle traits.
//!
//! These implementations are bundled into an [`OracleManager`] so the
//! pipelines can build [`equip_core::Env`] values on demand. Item data is
//! immutable at runtime; per-player state lives in the pipeline inputs.
mod input;
mod items;
mod session;

use equip_core::Env;
use std::sync::Arc;

pub use input::InputOracleImpl;
pub use items::ItemOracleImpl;
pub use session::SessionOracleImpl;

/// Environment type produced by [`OracleManager::as_env`].
pub type RuntimeEnv<'a> = Env<'a, ItemOracleImpl, SessionOracleImpl, InputOracleImpl>;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) session: Arc<SessionOracleImpl>,
    pub(crate) input: Arc<InputOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        items: Arc<ItemOracleImpl>,
        session: Arc<SessionOracleImpl>,
        input: Arc<InputOracleImpl>,
    ) -> Self {
        Self {
            items,
            session,
            input,
        }
    }

    pub fn items(&self) -> &Arc<ItemOracleImpl> {
        &self.items
    }

    pub fn input(&self) -> &Arc<InputOracleImpl> {
        &self.input
    }

    /// Borrows the oracles as an [`Env`] for one pipeline invocation.
    pub fn as_env(&self) -> RuntimeEnv<'_> {
        Env::new(
            self.items.as_ref(),
            self.session.as_ref(),
            self.input.as_ref(),
        )
    }
}

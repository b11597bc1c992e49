use std::collections::HashSet;

use equip_core::{EntityId, SessionOracle};

/// Session facts fixed at construction time.
#[derive(Debug, Default)]
pub struct SessionOracleImpl {
    client_side: bool,
    blocked: HashSet<EntityId>,
}

impl SessionOracleImpl {
    /// Session running on the peer that owns world state.
    pub fn authority() -> Self {
        Self::default()
    }

    /// Session running on a peer that mirrors remote state.
    pub fn client() -> Self {
        Self {
            client_side: true,
            ..Self::default()
        }
    }

    /// Marks `actor` as unable to interact (downed, in a menu, dead).
    #[must_use]
    pub fn with_blocked(mut self, actor: EntityId) -> Self {
        self.blocked.insert(actor);
        self
    }
}

impl SessionOracle for SessionOracleImpl {
    fn is_client_side(&self) -> bool {
        self.client_side
    }

    fn can_interact(&self, actor: EntityId) -> bool {
        !self.blocked.contains(&actor)
    }
}

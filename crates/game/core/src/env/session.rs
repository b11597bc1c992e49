use crate::state::EntityId;

/// Session-level facts about who may act and where this code runs.
pub trait SessionOracle: Send + Sync {
    /// Returns true when this peer does not own canonical world state.
    fn is_client_side(&self) -> bool;

    /// Returns true when `actor` may currently interact with the world.
    fn can_interact(&self, actor: EntityId) -> bool;
}

/// Live user input, sampled once per decision.
pub trait InputOracle: Send + Sync {
    /// Returns true while the override modifier is held down.
    fn is_override_key_held(&self) -> bool;
}

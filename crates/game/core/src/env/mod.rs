//! Traits describing the collaborators the auto-equip decision depends on.
//!
//! Read-only oracles (item database, session facts, live input) are bundled in
//! [`Env`] so pipelines receive them as one request-scoped value. Mutable
//! containers (loot world, storage) are passed alongside as explicit
//! parameters.
mod items;
mod session;
mod world;

pub use items::{Category, ItemDefinition, ItemOracle};
pub use session::{InputOracle, SessionOracle};
pub use world::{LootWorld, Placement, PlacementFlags, StorageContainer};

/// Aggregates the read-only oracles consulted by both pipelines.
pub struct Env<'a, I, S, N>
where
    I: ItemOracle + ?Sized,
    S: SessionOracle + ?Sized,
    N: InputOracle + ?Sized,
{
    items: &'a I,
    session: &'a S,
    input: &'a N,
}

impl<I, S, N> Clone for Env<'_, I, S, N>
where
    I: ItemOracle + ?Sized,
    S: SessionOracle + ?Sized,
    N: InputOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, S, N> Copy for Env<'_, I, S, N>
where
    I: ItemOracle + ?Sized,
    S: SessionOracle + ?Sized,
    N: InputOracle + ?Sized,
{
}

impl<'a, I, S, N> Env<'a, I, S, N>
where
    I: ItemOracle + ?Sized,
    S: SessionOracle + ?Sized,
    N: InputOracle + ?Sized,
{
    pub fn new(items: &'a I, session: &'a S, input: &'a N) -> Self {
        Self {
            items,
            session,
            input,
        }
    }

    pub fn items(&self) -> &'a I {
        self.items
    }

    pub fn session(&self) -> &'a S {
        self.session
    }

    pub fn input(&self) -> &'a N {
        self.input
    }
}

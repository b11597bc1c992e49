use core::fmt;

/// Unique identifier for any entity in the session (players, loot objects).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to an item definition stored outside the core (lookup via [`crate::ItemOracle`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// A concrete item instance: its kind plus a mutable numeric payload.
///
/// `quantity` is the stack count for stackable goods and the remaining charge
/// for everything else. The kind never changes once the item exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub handle: ItemHandle,
    pub quantity: u32,
}

impl Item {
    pub fn new(handle: ItemHandle, quantity: u32) -> Self {
        Self { handle, quantity }
    }

    /// Creates a single unit of the given kind.
    pub fn single(handle: ItemHandle) -> Self {
        Self::new(handle, 1)
    }

    /// Returns true when both items share the same kind, regardless of payload.
    #[inline]
    pub fn same_kind(&self, other: &Item) -> bool {
        self.handle == other.handle
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.handle, self.quantity)
    }
}

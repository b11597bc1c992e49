use crate::state::ItemHandle;

/// Static item database keyed by item kind.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Category of the given kind; kinds the database does not know are
    /// [`Category::Unknown`], which keeps the lookup total.
    fn category_of(&self, handle: ItemHandle) -> Category {
        self.definition(handle)
            .map(|definition| definition.category)
            .unwrap_or(Category::Unknown)
    }

    /// Maximum stack size of the given kind (1 for unknown kinds).
    fn max_stack(&self, handle: ItemHandle) -> u32 {
        self.definition(handle)
            .map(|definition| u32::from(definition.max_stack.max(1)))
            .unwrap_or(1)
    }
}

/// Item definition as stored in the item database.
///
/// Display data is kept only for logs and tooling; decisions use `category`
/// and `max_stack` exclusively.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub category: Category,
    pub max_stack: u16,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, category: Category, max_stack: u16) -> Self {
        Self {
            handle,
            name: String::new(),
            category,
            max_stack,
        }
    }

    /// Sets the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Item classification used to select an equipment slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Category {
    /// Primary ranged weapon (rifles, shotguns)
    PrimaryGun,
    /// Secondary ranged weapon (pistols)
    SecondaryGun,
    Melee,
    /// Thrown weapon (grenades, molotovs)
    Throwable,
    /// Healing consumable (bandages, medkits)
    Healing,
    /// Food consumable
    Food,
    Ammo,
    Armor,
    Backpack,
    Material,
    Misc,
    /// Kind not present in the item database
    #[default]
    Unknown,
}

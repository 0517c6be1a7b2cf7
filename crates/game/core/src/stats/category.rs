//! Boost categories and the category → attribute dispatch table.
//!
//! A scalar boost (curse or level) only touches the attributes whose
//! category is selected. Categories are a tagged set rather than a raw bit
//! mask, and always iterate in declaration order.

use strum::{EnumCount, IntoEnumIterator};

use super::attributes::Attribute;

/// Groups of attributes that a scalar boost may select.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatCategory {
    Health,
    MoveSpeed,
    Damage,
    KnockbackMultiplier,
    Resistances,
    Recovery,
    Armor,
    Might,
    Area,
    ProjectileSpeed,
    Duration,
    Amount,
    Cooldown,
    Magnet,
}

impl StatCategory {
    /// Dispatch table: the attributes a category governs.
    pub const fn attributes(self) -> &'static [Attribute] {
        match self {
            Self::Health => &[Attribute::MaxHealth],
            Self::MoveSpeed => &[Attribute::MoveSpeed],
            Self::Damage => &[Attribute::Damage],
            Self::KnockbackMultiplier => &[Attribute::KnockbackMultiplier],
            Self::Resistances => &[
                Attribute::FreezeResistance,
                Attribute::KillResistance,
                Attribute::DebuffResistance,
            ],
            Self::Recovery => &[Attribute::Recovery],
            Self::Armor => &[Attribute::Armor],
            Self::Might => &[Attribute::Might],
            Self::Area => &[Attribute::Area],
            Self::ProjectileSpeed => &[Attribute::ProjectileSpeed],
            Self::Duration => &[Attribute::Duration],
            Self::Amount => &[Attribute::Amount],
            Self::Cooldown => &[Attribute::Cooldown],
            Self::Magnet => &[Attribute::Magnet],
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// A set of [`StatCategory`] values with stable iteration order.
///
/// Serialized as a plain list, e.g. `["health", "move_speed"]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<StatCategory>", into = "Vec<StatCategory>")
)]
pub struct CategorySet {
    members: [bool; StatCategory::COUNT],
}

impl CategorySet {
    pub const EMPTY: Self = Self {
        members: [false; StatCategory::COUNT],
    };

    /// Empty set.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Every category.
    pub const fn all() -> Self {
        Self {
            members: [true; StatCategory::COUNT],
        }
    }

    /// Default curse selection for hostiles: health and move speed.
    pub const fn hostile_curse_default() -> Self {
        Self::EMPTY
            .with(StatCategory::Health)
            .with(StatCategory::MoveSpeed)
    }

    /// Builder-style insert.
    #[must_use]
    pub const fn with(mut self, category: StatCategory) -> Self {
        self.members[category.slot()] = true;
        self
    }

    pub fn insert(&mut self, category: StatCategory) {
        self.members[category.slot()] = true;
    }

    pub fn remove(&mut self, category: StatCategory) {
        self.members[category.slot()] = false;
    }

    pub const fn contains(&self, category: StatCategory) -> bool {
        self.members[category.slot()]
    }

    pub fn is_empty(&self) -> bool {
        !self.members.iter().any(|&m| m)
    }

    pub fn len(&self) -> usize {
        self.members.iter().filter(|&&m| m).count()
    }

    /// Selected categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = StatCategory> + '_ {
        StatCategory::iter().filter(|c| self.contains(*c))
    }

    /// Attributes governed by the selected categories, in declaration order
    /// of the categories.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.iter().flat_map(|c| c.attributes().iter().copied())
    }

    /// Whether some selected category governs `attribute`.
    pub fn selects(&self, attribute: Attribute) -> bool {
        self.attributes().any(|a| a == attribute)
    }
}

impl FromIterator<StatCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = StatCategory>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl From<Vec<StatCategory>> for CategorySet {
    fn from(categories: Vec<StatCategory>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<StatCategory> {
    fn from(set: CategorySet) -> Self {
        set.iter().collect()
    }
}

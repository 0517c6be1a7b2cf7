//! Modifiers - passive effects folded into an actor's attributes.
//!
//! Each equipped passive contributes one [`Modifier`]: a source id, a
//! combination rule and a sparse list of `(attribute, value)` entries.
//! A [`ModifierSet`] keeps them in pickup order and folds them in that order.
//!
//! Order only matters when `Add` and `Multiply` modifiers touch the same
//! attribute: `(x + a) × m` differs from `x × m + a`. Pure chains of one rule
//! commute.

use arrayvec::ArrayVec;
use strum::{EnumCount, IntoEnumIterator};

use super::attributes::{Attribute, AttributeBlock};

/// Identifies the passive that contributed a modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceId(pub u32);

impl core::fmt::Display for SourceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "passive#{}", self.0)
    }
}

/// How a modifier's values combine with the current attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CombineRule {
    /// `value += entry`
    Add,
    /// `value *= entry`
    Multiply,
}

impl CombineRule {
    fn combine(self, current: f32, entry: f32) -> f32 {
        match self {
            Self::Add => current + entry,
            Self::Multiply => current * entry,
        }
    }
}

/// One passive's contribution.
///
/// Entries are unique per attribute; adding the same attribute twice merges
/// the values with the modifier's own rule, so a modifier never holds more
/// entries than there are attributes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub source: SourceId,
    pub rule: CombineRule,
    entries: ArrayVec<(Attribute, f32), { Attribute::COUNT }>,
}

impl Modifier {
    pub fn new(source: SourceId, rule: CombineRule) -> Self {
        Self {
            source,
            rule,
            entries: ArrayVec::new(),
        }
    }

    /// Additive modifier (`+value`).
    pub fn additive(source: SourceId) -> Self {
        Self::new(source, CombineRule::Add)
    }

    /// Multiplicative modifier (`×value`).
    pub fn multiplicative(source: SourceId) -> Self {
        Self::new(source, CombineRule::Multiply)
    }

    /// Additive modifier carrying every non-zero field of `delta`.
    pub fn from_delta(source: SourceId, delta: &AttributeBlock) -> Self {
        Attribute::iter()
            .map(|attribute| (attribute, delta.get(attribute)))
            .filter(|(_, value)| *value != 0.0)
            .fold(Self::additive(source), |modifier, (attribute, value)| {
                modifier.with(attribute, value)
            })
    }

    /// Builder-style entry insertion.
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: f32) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Inserts an entry, merging with an existing entry for the same attribute.
    pub fn insert(&mut self, attribute: Attribute, value: f32) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(a, _)| *a == attribute) {
            *existing = self.rule.combine(*existing, value);
        } else {
            // Unique attributes bound the length by Attribute::COUNT.
            self.entries.push((attribute, value));
        }
    }

    pub fn entries(&self) -> &[(Attribute, f32)] {
        &self.entries
    }

    pub fn value(&self, attribute: Attribute) -> Option<f32> {
        self.entries
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, v)| *v)
    }

    /// Applies this modifier to `block` in place.
    pub fn apply_to(&self, block: &mut AttributeBlock) {
        for &(attribute, value) in &self.entries {
            let current = block.get_mut(attribute);
            *current = self.rule.combine(*current, value);
        }
    }
}

/// Ordered collection of modifiers held by an actor.
///
/// Modifiers are appended on pickup and never individually removed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierSet {
    modifiers: Vec<Modifier>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    pub fn extend(&mut self, modifiers: impl IntoIterator<Item = Modifier>) {
        self.modifiers.extend(modifiers);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Whether a modifier from `source` has already been folded in.
    pub fn contains_source(&self, source: SourceId) -> bool {
        self.modifiers.iter().any(|m| m.source == source)
    }

    /// Folds every modifier into a copy of `block`, in insertion order.
    #[must_use]
    pub fn fold(&self, block: &AttributeBlock) -> AttributeBlock {
        let mut folded = *block;
        for modifier in &self.modifiers {
            modifier.apply_to(&mut folded);
        }
        folded
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self {
            modifiers: iter.into_iter().collect(),
        }
    }
}

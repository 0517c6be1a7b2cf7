//! Passive items: named modifiers the player can pick up.

use std::collections::BTreeMap;

use horde_core::{Attribute, CombineRule, Modifier, SourceId};

/// Authoring form of a passive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveSpec {
    pub rule: CombineRule,
    pub entries: Vec<(Attribute, f32)>,
}

impl PassiveSpec {
    pub fn modifier(&self, source: SourceId) -> Modifier {
        self.entries
            .iter()
            .fold(Modifier::new(source, self.rule), |modifier, &(attribute, value)| {
                modifier.with(attribute, value)
            })
    }
}

/// Passives keyed by name. Source ids follow the catalog's name order, so
/// they are stable for a given file.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PassiveCatalog {
    passives: BTreeMap<String, PassiveSpec>,
}

impl PassiveCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: PassiveSpec) {
        self.passives.insert(name.into(), spec);
    }

    pub fn len(&self) -> usize {
        self.passives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passives.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.passives.keys().map(String::as_str)
    }

    /// Builds the modifier for `name`, or `None` if unknown.
    pub fn modifier(&self, name: &str) -> Option<Modifier> {
        self.passives
            .iter()
            .enumerate()
            .find(|(_, (key, _))| key.as_str() == name)
            .map(|(index, (_, spec))| spec.modifier(SourceId(index as u32)))
    }
}

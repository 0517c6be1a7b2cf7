//! Passive catalog loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::passives::PassiveCatalog;

/// Loader for passive items (RON map of name → rule and entries).
///
/// ```ron
/// {
///     "armor": (rule: add, entries: [(armor, 1.0)]),
///     "spinach": (rule: multiply, entries: [(might, 1.1)]),
/// }
/// ```
pub struct PassiveLoader;

impl PassiveLoader {
    pub fn load(path: &Path) -> LoadResult<PassiveCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PassiveCatalog> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse passives RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::{Attribute, AttributeBlock, CombineRule, ModifierSet};

    #[test]
    fn passives_become_modifiers() {
        let catalog = PassiveLoader::parse(
            r#"{
                "armor": (rule: add, entries: [(armor, 1.0), (max_health, 20.0)]),
                "spinach": (rule: multiply, entries: [(might, 1.5)]),
            }"#,
        )
        .expect("passives parse");

        let armor = catalog.modifier("armor").expect("armor present");
        assert_eq!(armor.rule, CombineRule::Add);
        assert_eq!(armor.value(Attribute::MaxHealth), Some(20.0));

        let mut set = ModifierSet::new();
        set.extend(catalog.modifier("spinach"));
        assert_eq!(set.fold(&AttributeBlock::PLAYER).might, 1.5);
    }
}

//! Bestiary loader.

use std::path::Path;

use crate::bestiary::Bestiary;
use crate::loaders::{LoadResult, read_file};

/// Loader for the hostile catalog (RON map of kind → spec).
///
/// ```ron
/// {
///     "bat": (max_health: 4.0, move_speed: 2.5, damage: 1.0),
///     "reaper": (max_health: 5000.0, curse_boosts: [health, damage]),
/// }
/// ```
pub struct BestiaryLoader;

impl BestiaryLoader {
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::{CategorySet, StatCategory};

    #[test]
    fn omitted_fields_fall_back_to_baseline() {
        let bestiary = BestiaryLoader::parse(
            r#"{
                "bat": (max_health: 4.0, move_speed: 2.5),
                "reaper": (max_health: 5000.0, curse_boosts: [health, damage]),
            }"#,
        )
        .expect("bestiary parses");

        let bat = bestiary.get("bat").expect("bat present");
        assert_eq!(bat.damage, 3.0);
        assert_eq!(bat.knockback_multiplier, 1.0);
        assert_eq!(bat.curse_boosts, CategorySet::hostile_curse_default());

        let reaper = bestiary.get("reaper").expect("reaper present");
        assert!(reaper.curse_boosts.contains(StatCategory::Damage));
        assert!(!reaper.curse_boosts.contains(StatCategory::MoveSpeed));
    }
}

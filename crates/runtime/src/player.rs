//! The player character: resolved attributes, vitals and progression.
use horde_content::PlayerSpec;
use horde_core::{
    AttributeBlock, Modifier, ModifierSet, Participant, PlayerVitals, Progression, StatProfile,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    profile: StatProfile,
    modifiers: ModifierSet,
    attributes: AttributeBlock,
    pub vitals: PlayerVitals,
    pub progression: Progression,
}

impl Player {
    pub fn new(spec: &PlayerSpec, starting: impl IntoIterator<Item = Modifier>) -> Self {
        let profile = StatProfile {
            base: spec.base(),
            ..StatProfile::PLAYER
        };
        let modifiers: ModifierSet = starting.into_iter().collect();
        let attributes = profile.resolve(1.0, 1.0, &modifiers);
        Self {
            profile,
            modifiers,
            attributes,
            vitals: PlayerVitals::new(&attributes).with_invincibility(spec.invincibility_seconds),
            progression: Progression::new(spec.level_ranges.clone()),
        }
    }

    /// Folds a picked-up passive into the attributes.
    pub fn equip(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
        self.recalculate();
    }

    /// Returns the levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.progression.gain(amount)
    }

    /// Contribution to the global pressure: own curse and current level.
    pub fn participant(&self) -> Participant {
        Participant::new(self.attributes.curse, self.progression.level as f32)
    }

    pub fn attributes(&self) -> &AttributeBlock {
        &self.attributes
    }

    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.is_dead()
    }

    fn recalculate(&mut self) {
        self.attributes = self.profile.resolve(1.0, 1.0, &self.modifiers);
        self.vitals.refresh(&self.attributes);
    }
}

//! Scripted player for headless runs.
//!
//! Every `attack_interval` seconds the autopilot hits the oldest hostile
//! that is not already dying, for the player's base damage scaled by might.
use horde_core::{ActorId, Countdown, DamageOutcome};
use horde_runtime::{Result, Session};

#[derive(Clone, Debug)]
pub struct AutoPilot {
    attack_interval: f32,
    cooldown: Countdown,
}

impl AutoPilot {
    pub fn new(attack_interval: f32) -> Self {
        Self {
            attack_interval,
            cooldown: Countdown::IDLE,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.attack_interval > 0.0
    }

    /// Acts for one step; returns the outcome of the attack, if one was made.
    pub fn act(&mut self, session: &mut Session, dt: f32) -> Result<Option<DamageOutcome>> {
        if !self.is_enabled() {
            return Ok(None);
        }
        self.cooldown.tick(dt);
        if self.cooldown.is_running() {
            return Ok(None);
        }
        let Some(target) = target(session) else {
            return Ok(None);
        };

        let attributes = session.player().attributes();
        let damage = attributes.base_damage * attributes.might;
        let outcome = session.damage_hostile(target, damage)?;
        self.cooldown.start(self.attack_interval);
        Ok(Some(outcome))
    }
}

fn target(session: &Session) -> Option<ActorId> {
    session
        .world()
        .roster
        .iter()
        .find(|hostile| !hostile.vitals.is_dying())
        .map(|hostile| hostile.id)
}

#[cfg(test)]
mod tests {
    use horde_content::{Bestiary, CampaignSpec, HostileSpec};
    use horde_core::{Campaign, CountRange, IntervalRange, Wave};

    use super::*;

    fn session() -> Session {
        let mut bestiary = Bestiary::new();
        bestiary.insert("bat", HostileSpec::default());
        let wave = Wave::new("bats")
            .with_pool(["bat"])
            .with_interval(IntervalRange::fixed(1.0))
            .with_spawns_per_tick(CountRange::exactly(1));
        Session::builder()
            .campaign(CampaignSpec {
                waves: Campaign::new(vec![wave]),
                ..CampaignSpec::default()
            })
            .bestiary(bestiary)
            .build()
            .expect("session should build")
    }

    #[test]
    fn attacks_on_its_own_cadence() {
        let mut session = session();
        let mut pilot = AutoPilot::new(1.0);

        assert_eq!(pilot.act(&mut session, 0.5).expect("act"), None);
        session.advance(0.5).expect("step");

        // Base damage 5 against a 10 health bat.
        let first = pilot.act(&mut session, 0.5).expect("act");
        assert!(matches!(first, Some(DamageOutcome::Damaged { .. })));
        assert_eq!(pilot.act(&mut session, 0.5).expect("act"), None);
        let second = pilot.act(&mut session, 0.5).expect("act");
        assert!(second.is_some_and(|outcome| outcome.is_kill()));
    }

    #[test]
    fn zero_interval_disables_the_pilot() {
        let mut session = session();
        session.advance(1.0).expect("step");
        let mut pilot = AutoPilot::new(0.0);
        assert!(!pilot.is_enabled());
        assert_eq!(pilot.act(&mut session, 1.0).expect("act"), None);
    }
}

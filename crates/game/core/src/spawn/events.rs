//! Timed special events that run alongside the wave campaign.
//!
//! After a first-trigger delay, and then once per trigger interval, the
//! scheduler picks one event whose activation window contains the run's
//! elapsed time and rolls its chance. A started event runs for its duration
//! and activates every `spawn_interval` seconds; each activation asks the
//! host to place a group of `count` actors of `kind`.

use crate::env::{RngOracle, compute_seed};

use super::wave::IntervalRange;

/// RNG stream used by the event scheduler.
pub const EVENT_STREAM: u32 = 2;

/// Static description of an event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EventDefinition {
    pub name: String,
    pub kind: String,
    /// Actors per activation.
    pub count: u32,
    /// Run time (seconds) before which the event cannot be picked.
    pub active_after: f32,
    /// Run time after which the event cannot be picked; 0 means never.
    pub active_until: f32,
    /// How long a started event keeps activating.
    pub duration: f32,
    pub spawn_interval: IntervalRange,
    /// Chance in `[0, 1]` that a picked event starts; 1 or more always does.
    pub probability: f32,
    /// How strongly the roller's luck lowers the chance.
    pub luck_factor: f32,
}

impl EventDefinition {
    pub fn is_active(&self, elapsed: f32) -> bool {
        elapsed >= self.active_after && (self.active_until <= 0.0 || elapsed <= self.active_until)
    }

    /// Effective chance for a roller with the given luck.
    pub fn chance(&self, luck: f32) -> f32 {
        if self.probability >= 1.0 {
            return 1.0;
        }
        self.probability / (luck * self.luck_factor).max(1.0)
    }
}

impl Default for EventDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: String::new(),
            count: 1,
            active_after: 0.0,
            active_until: 0.0,
            duration: 30.0,
            spawn_interval: IntervalRange::fixed(5.0),
            probability: 1.0,
            luck_factor: 1.0,
        }
    }
}

/// One activation of a running event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventActivation {
    /// Index into the definitions slice.
    pub event: usize,
    pub kind: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct RunningEvent {
    event: usize,
    remaining: f32,
    cooldown: f32,
}

/// Picks, runs and expires events.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventScheduler {
    pub first_trigger_delay: f32,
    pub trigger_interval: f32,
    trigger_cooldown: f32,
    running: Vec<RunningEvent>,
    run_seed: u64,
    nonce: u64,
}

impl EventScheduler {
    pub const DEFAULT_FIRST_TRIGGER_DELAY: f32 = 180.0;
    pub const DEFAULT_TRIGGER_INTERVAL: f32 = 30.0;

    pub fn new(first_trigger_delay: f32, trigger_interval: f32, run_seed: u64) -> Self {
        let trigger_cooldown = if first_trigger_delay > 0.0 {
            first_trigger_delay
        } else {
            trigger_interval
        };
        Self {
            first_trigger_delay,
            trigger_interval,
            trigger_cooldown,
            running: Vec::new(),
            run_seed,
            nonce: 0,
        }
    }

    pub fn with_defaults(run_seed: u64) -> Self {
        Self::new(
            Self::DEFAULT_FIRST_TRIGGER_DELAY,
            Self::DEFAULT_TRIGGER_INTERVAL,
            run_seed,
        )
    }

    /// Number of events currently running.
    pub fn running(&self) -> usize {
        self.running.len()
    }

    /// Advances by `dt`. `elapsed` is the run time used for activation
    /// windows and `luck` the roller's luck.
    pub fn advance(
        &mut self,
        dt: f32,
        elapsed: f32,
        luck: f32,
        definitions: &[EventDefinition],
        rng: &dyn RngOracle,
    ) -> Vec<EventActivation> {
        self.trigger_cooldown -= dt;
        if self.trigger_cooldown <= 0.0 {
            self.try_start(elapsed, luck, definitions, rng);
            self.trigger_cooldown = self.trigger_interval;
        }

        let mut activations = Vec::new();
        let mut index = 0;
        while index < self.running.len() {
            let running = &mut self.running[index];
            running.remaining -= dt;
            if running.remaining <= 0.0 {
                self.running.remove(index);
                continue;
            }
            running.cooldown -= dt;
            if running.cooldown <= 0.0 {
                let event = running.event;
                let seed = self.next_seed();
                if let Some(definition) = definitions.get(event) {
                    activations.push(EventActivation {
                        event,
                        kind: definition.kind.clone(),
                        count: definition.count,
                    });
                    self.running[index].cooldown = rng.range_f32(
                        seed,
                        definition.spawn_interval.min,
                        definition.spawn_interval.max,
                    );
                }
            }
            index += 1;
        }
        activations
    }

    fn try_start(
        &mut self,
        elapsed: f32,
        luck: f32,
        definitions: &[EventDefinition],
        rng: &dyn RngOracle,
    ) {
        let candidates: Vec<usize> = definitions
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_active(elapsed))
            .map(|(index, _)| index)
            .collect();
        if candidates.is_empty() {
            return;
        }

        let pick_seed = self.next_seed();
        let roll_seed = self.next_seed();
        let event = candidates[rng.index(pick_seed, candidates.len())];
        let definition = &definitions[event];
        if rng.unit(roll_seed) < definition.chance(luck) {
            self.running.push(RunningEvent {
                event,
                remaining: definition.duration,
                cooldown: 0.0,
            });
        }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.run_seed, self.nonce, EVENT_STREAM, 0);
        self.nonce += 1;
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn swarm() -> EventDefinition {
        EventDefinition {
            name: "bat swarm".into(),
            kind: "bat".into(),
            count: 12,
            duration: 10.0,
            spawn_interval: IntervalRange::fixed(4.0),
            ..EventDefinition::default()
        }
    }

    #[test]
    fn nothing_happens_before_first_trigger_delay() {
        let mut scheduler = EventScheduler::new(5.0, 2.0, 1);
        let defs = [swarm()];
        for _ in 0..4 {
            assert!(scheduler.advance(1.0, 0.0, 1.0, &defs, &PcgRng).is_empty());
        }
        let activations = scheduler.advance(1.0, 5.0, 1.0, &defs, &PcgRng);
        assert_eq!(activations.len(), 1);
        assert_eq!(activations[0].kind, "bat");
        assert_eq!(activations[0].count, 12);
        assert_eq!(scheduler.running(), 1);
    }

    #[test]
    fn running_event_activates_on_interval_and_expires() {
        let mut scheduler = EventScheduler::new(1.0, 1000.0, 7);
        let defs = [swarm()];

        let mut total = 0;
        for _ in 0..12 {
            total += scheduler.advance(1.0, 0.0, 1.0, &defs, &PcgRng).len();
        }
        // Activations at t = 1, 5, 9; the event expires at t = 10.
        assert_eq!(total, 3);
        assert_eq!(scheduler.running(), 0);
    }

    #[test]
    fn inactive_or_unlucky_events_do_not_start() {
        let late = EventDefinition {
            active_after: 60.0,
            ..swarm()
        };
        let mut scheduler = EventScheduler::new(0.0, 1.0, 3);
        assert!(scheduler.advance(1.0, 10.0, 1.0, &[late], &PcgRng).is_empty());

        let never = EventDefinition {
            probability: 0.0,
            ..swarm()
        };
        let mut scheduler = EventScheduler::new(0.0, 1.0, 3);
        for _ in 0..20 {
            assert!(scheduler.advance(1.0, 0.0, 1.0, &[never.clone()], &PcgRng).is_empty());
        }
    }

    #[test]
    fn luck_lowers_the_chance() {
        let event = EventDefinition {
            probability: 0.5,
            luck_factor: 2.0,
            ..swarm()
        };
        assert_eq!(event.chance(1.0), 0.25);
        assert_eq!(event.chance(0.1), 0.5);
        assert!(event.is_active(0.0));
    }
}

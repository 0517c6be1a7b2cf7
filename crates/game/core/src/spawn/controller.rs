//! The wave/spawn admission controller.
//!
//! [`WaveController`] is a short-lived view over the host-owned
//! [`WaveRunnerState`]: build one per step with the current environment, call
//! [`WaveController::advance`], and act on the returned [`StepOutcome`].
//!
//! ```text
//!   Idle ──valid──▶ Spawning ──▶ Cooldown ──timer ≤ 0──▶ Spawning ─┐
//!    │                 ▲   │                                       │
//!    └──invalid──▶ Disabled │  └──last wave ended──▶ Finished       │
//!                      └────┴───────────────────────────────────────┘
//! ```
//!
//! A boss fight suspends everything: no timer advances and no transition
//! happens until the encounter oracle releases the controller.

use crate::config::GameConfig;
use crate::env::{OracleError, SpawnEnv, compute_seed};
use crate::geometry::{Bounds, Point};

use super::error::ConfigurationError;
use super::placement::edge_position;
use super::runner::{RunnerPhase, WaveRunnerState};
use super::wave::{Campaign, ExitConditions, Wave};

/// RNG stream used for every roll the controller makes.
pub const SPAWN_STREAM: u32 = 1;

/// A request for the host to instantiate one hostile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnRequest {
    pub kind: String,
    pub position: Point,
}

/// Notable transitions, reported in the order they happened.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaveEvent {
    /// The campaign was validated and the first wave began.
    Started { wave: usize },
    WaveAdvanced { from: usize, to: usize },
    CampaignFinished,
    Suspended,
    Resumed,
    Disabled(ConfigurationError),
    /// Tracked actors that died without an elimination notice.
    StalePurged { count: usize },
}

/// Everything produced by one step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutcome {
    pub spawns: Vec<SpawnRequest>,
    pub events: Vec<WaveEvent>,
}

impl StepOutcome {
    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty() && self.events.is_empty()
    }
}

/// Admission controller over borrowed state.
pub struct WaveController<'a> {
    state: &'a mut WaveRunnerState,
    campaign: &'a Campaign,
    config: &'a GameConfig,
    env: SpawnEnv<'a>,
    events: Vec<WaveEvent>,
}

impl<'a> WaveController<'a> {
    pub fn new(
        state: &'a mut WaveRunnerState,
        campaign: &'a Campaign,
        config: &'a GameConfig,
        env: SpawnEnv<'a>,
    ) -> Self {
        Self {
            state,
            campaign,
            config,
            env,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &WaveRunnerState {
        &*self.state
    }

    /// Advances the controller by `dt` seconds.
    ///
    /// Configuration problems never escape as errors: they move the runner to
    /// [`RunnerPhase::Disabled`] and are reported once as
    /// [`WaveEvent::Disabled`].
    pub fn advance(&mut self, dt: f32) -> StepOutcome {
        let mut spawns = Vec::new();
        if let Err(error) = self.step(dt, &mut spawns) {
            self.disable(error);
        }
        StepOutcome {
            spawns,
            events: core::mem::take(&mut self.events),
        }
    }

    fn step(&mut self, dt: f32, spawns: &mut Vec<SpawnRequest>) -> Result<(), ConfigurationError> {
        match self.state.phase {
            RunnerPhase::Finished | RunnerPhase::Disabled(_) => return Ok(()),
            RunnerPhase::Idle => self.start()?,
            RunnerPhase::Spawning | RunnerPhase::Cooldown { .. } => {}
        }

        if self.env.encounter()?.boss_fight_active() {
            if !self.state.suspended {
                self.state.suspended = true;
                self.events.push(WaveEvent::Suspended);
            }
            return Ok(());
        }
        if self.state.suspended {
            self.state.suspended = false;
            self.events.push(WaveEvent::Resumed);
        }

        self.state.wave_elapsed += dt;
        let carry = match self.state.phase {
            RunnerPhase::Cooldown { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.state.phase = RunnerPhase::Cooldown { remaining };
                    return Ok(());
                }
                remaining
            }
            _ => 0.0,
        };
        self.state.phase = RunnerPhase::Spawning;

        if self.has_wave_ended()? {
            let from = self.state.wave_index;
            self.state.start_next_wave();
            if self.state.wave_index >= self.campaign.len() {
                self.state.phase = RunnerPhase::Finished;
                self.events.push(WaveEvent::CampaignFinished);
                return Ok(());
            }
            self.events.push(WaveEvent::WaveAdvanced {
                from,
                to: self.state.wave_index,
            });
        }

        if self.can_spawn()? {
            self.burst(spawns)?;
        }
        self.cooldown(carry)
    }

    fn start(&mut self) -> Result<(), ConfigurationError> {
        self.campaign.validate()?;
        self.env.ensure_complete()?;
        self.spawn_bounds()?;
        self.state.phase = RunnerPhase::Spawning;
        self.events.push(WaveEvent::Started {
            wave: self.state.wave_index,
        });
        Ok(())
    }

    fn disable(&mut self, error: ConfigurationError) {
        self.state.phase = RunnerPhase::Disabled(error.clone());
        self.events.push(WaveEvent::Disabled(error));
    }

    fn current_wave(&self) -> Option<&'a Wave> {
        self.campaign.wave(self.state.wave_index)
    }

    fn spawn_bounds(&self) -> Result<Bounds, ConfigurationError> {
        self.env
            .boundary()?
            .bounds()
            .filter(Bounds::is_valid)
            .ok_or(ConfigurationError::InvalidSpawnBoundary)
    }

    fn next_seed(&mut self) -> u64 {
        let nonce = self.state.next_nonce();
        compute_seed(self.state.run_seed, nonce, SPAWN_STREAM, 0)
    }

    /// Whether the current wave is over: every selected exit condition holds.
    ///
    /// Evaluating `KILL_ALL` first purges tracked actors the population
    /// oracle no longer reports alive. A wave with no selected condition (or
    /// no current wave) counts as ended.
    pub fn has_wave_ended(&mut self) -> Result<bool, OracleError> {
        let Some(wave) = self.current_wave() else {
            return Ok(true);
        };
        let conditions = wave.exit_conditions;

        if conditions.contains(ExitConditions::WAVE_DURATION)
            && wave.is_timed()
            && self.state.wave_elapsed < wave.duration
        {
            return Ok(false);
        }
        if conditions.contains(ExitConditions::REACHED_TOTAL_SPAWNS)
            && wave.is_budgeted()
            && self.state.spawned_count < wave.total_spawns
        {
            return Ok(false);
        }
        if conditions.contains(ExitConditions::KILL_ALL) {
            let population = self.env.population()?;
            let purged = self.state.live.purge(|id| population.is_alive(id));
            if purged > 0 {
                self.events.push(WaveEvent::StalePurged { count: purged });
            }
            if !self.state.live.is_empty() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether one more actor may be admitted right now.
    pub fn can_spawn(&self) -> Result<bool, OracleError> {
        self.admits(0)
    }

    /// Admission with `pending` actors already emitted this step counted
    /// towards the population.
    fn admits(&self, pending: u32) -> Result<bool, OracleError> {
        let Some(wave) = self.current_wave() else {
            return Ok(false);
        };
        let population = self.env.population()?.population().saturating_add(pending);
        if population >= self.config.max_population {
            return Ok(false);
        }
        if wave.is_budgeted() && self.state.spawned_count >= wave.total_spawns {
            return Ok(false);
        }
        if wave.is_timed() && self.state.wave_elapsed >= wave.duration {
            return Ok(false);
        }
        Ok(true)
    }

    /// Schedules the next burst: a uniform interval from the wave, shortened
    /// by the cumulative curse when pressure boosting is on. `carry` is the
    /// (non-positive) time left on the expired cooldown.
    fn cooldown(&mut self, carry: f32) -> Result<(), ConfigurationError> {
        let Some(wave) = self.current_wave() else {
            return Ok(());
        };
        let seed = self.next_seed();
        let interval = self.env.rng()?.range_f32(
            seed,
            wave.spawn_interval.min,
            wave.spawn_interval.max,
        );
        let pressure = if self.config.boosted_by_pressure {
            self.env.pressure()?.curse()
        } else {
            1.0
        };
        let remaining = carry + interval / pressure.max(self.config.min_pressure);
        self.state.phase = RunnerPhase::Cooldown { remaining };
        Ok(())
    }

    fn burst(&mut self, spawns: &mut Vec<SpawnRequest>) -> Result<(), ConfigurationError> {
        let Some(wave) = self.current_wave() else {
            return Ok(());
        };
        let rng = self.env.rng()?;
        let population = self.env.population()?.population();
        let bounds = self.spawn_bounds()?;

        let seed = self.next_seed();
        let mut count = rng.range(seed, wave.spawns_per_tick.min, wave.spawns_per_tick.max);
        if population < wave.starting_count {
            count = count.max(wave.starting_count - population);
        }

        let mut emitted = 0u32;
        while emitted < count && self.admits(emitted)? {
            let kind_seed = self.next_seed();
            let edge_seed = self.next_seed();
            let along_seed = self.next_seed();
            let Some(kind) = wave
                .spawn_pool
                .get(rng.index(kind_seed, wave.spawn_pool.len()))
            else {
                return Err(ConfigurationError::EmptySpawnPool {
                    wave: self.state.wave_index,
                });
            };
            let position = edge_position(
                rng,
                edge_seed,
                along_seed,
                &bounds,
                self.config.spawn_margin,
            );
            spawns.push(SpawnRequest {
                kind: kind.clone(),
                position,
            });
            self.state.spawned_count += 1;
            emitted += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::env::{
        BoundaryOracle, Env, FixedBoundary, FixedPressure, PcgRng, PopulationOracle,
    };
    use crate::spawn::{ActorId, CountRange, IntervalRange};

    #[derive(Default)]
    struct Population {
        alive: BTreeSet<ActorId>,
        extra: u32,
    }

    impl PopulationOracle for Population {
        fn population(&self) -> u32 {
            self.alive.len() as u32 + self.extra
        }

        fn is_alive(&self, actor: ActorId) -> bool {
            self.alive.contains(&actor)
        }
    }

    struct NoBoundary;

    impl BoundaryOracle for NoBoundary {
        fn bounds(&self) -> Option<Bounds> {
            None
        }
    }

    fn viewport() -> FixedBoundary {
        FixedBoundary(Bounds::centered(Point::ORIGIN, 16.0, 9.0))
    }

    fn step(
        state: &mut WaveRunnerState,
        campaign: &Campaign,
        config: &GameConfig,
        population: &Population,
        boss: bool,
        dt: f32,
    ) -> StepOutcome {
        let pressure = FixedPressure::NEUTRAL;
        let boundary = viewport();
        let env = Env::with_all(population, &pressure, &boss, &boundary, &PcgRng);
        WaveController::new(state, campaign, config, env.as_spawn_env()).advance(dt)
    }

    fn five_spawn_wave() -> Wave {
        Wave::new("five")
            .with_pool(["bat"])
            .with_interval(IntervalRange::fixed(1.0))
            .with_spawns_per_tick(CountRange::exactly(1))
            .with_total_spawns(5)
            .with_duration(0.0)
            .with_exit_conditions(ExitConditions::REACHED_TOTAL_SPAWNS)
    }

    /// Host side: registers every request as a live actor.
    fn instantiate(
        outcome: &StepOutcome,
        state: &mut WaveRunnerState,
        population: &mut Population,
        next_id: &mut u64,
    ) {
        for _ in &outcome.spawns {
            let id = ActorId(*next_id);
            *next_id += 1;
            population.alive.insert(id);
            state.track(id);
        }
    }

    #[test]
    fn five_spawn_wave_emits_exactly_five_then_finishes() {
        let campaign = Campaign::new(vec![five_spawn_wave()]);
        let config = GameConfig::new();
        let mut state = WaveRunnerState::new(11);
        let mut population = Population::default();
        let mut next_id = 0;

        let mut total = 0;
        let mut finished_at = None;
        for frame in 0..20 {
            let outcome = step(&mut state, &campaign, &config, &population, false, 1.0);
            total += outcome.spawns.len();
            instantiate(&outcome, &mut state, &mut population, &mut next_id);
            if outcome.events.contains(&WaveEvent::CampaignFinished) {
                finished_at = Some(frame);
            }
        }

        assert_eq!(total, 5);
        assert_eq!(finished_at, Some(5));
        assert!(state.is_finished());
    }

    #[test]
    fn exit_conditions_combine_with_and() {
        let wave = five_spawn_wave()
            .with_duration(10.0)
            .with_exit_conditions(
                ExitConditions::REACHED_TOTAL_SPAWNS | ExitConditions::WAVE_DURATION,
            );
        let campaign = Campaign::new(vec![wave]);
        let config = GameConfig::new();
        let mut state = WaveRunnerState::new(3);
        let population = Population::default();

        let pressure = FixedPressure::NEUTRAL;
        let boundary = viewport();
        let env = Env::with_all(&population, &pressure, &false, &boundary, &PcgRng);

        state.phase = RunnerPhase::Spawning;
        state.spawned_count = 5;
        state.wave_elapsed = 4.0;
        let mut controller =
            WaveController::new(&mut state, &campaign, &config, env.as_spawn_env());
        assert_eq!(controller.has_wave_ended(), Ok(false));

        state.wave_elapsed = 10.0;
        state.spawned_count = 2;
        let mut controller =
            WaveController::new(&mut state, &campaign, &config, env.as_spawn_env());
        assert_eq!(controller.has_wave_ended(), Ok(false));

        state.spawned_count = 5;
        let mut controller =
            WaveController::new(&mut state, &campaign, &config, env.as_spawn_env());
        assert_eq!(controller.has_wave_ended(), Ok(true));
    }

    #[test]
    fn kill_all_purges_stale_ids_before_deciding() {
        let wave = five_spawn_wave().with_exit_conditions(ExitConditions::KILL_ALL);
        let campaign = Campaign::new(vec![wave]);
        let config = GameConfig::new();
        let mut state = WaveRunnerState::new(5);
        state.phase = RunnerPhase::Spawning;
        state.track(ActorId(1));
        state.track(ActorId(2));

        let mut population = Population::default();
        population.alive.insert(ActorId(2));

        let pressure = FixedPressure::NEUTRAL;
        let boundary = viewport();
        let env = Env::with_all(&population, &pressure, &false, &boundary, &PcgRng);
        let mut controller =
            WaveController::new(&mut state, &campaign, &config, env.as_spawn_env());
        assert_eq!(controller.has_wave_ended(), Ok(false));
        assert_eq!(controller.state().live.len(), 1);

        state.notify_eliminated(ActorId(2));
        let mut controller =
            WaveController::new(&mut state, &campaign, &config, env.as_spawn_env());
        assert_eq!(controller.has_wave_ended(), Ok(true));
    }

    #[test]
    fn stale_purge_is_reported_as_event() {
        let wave = five_spawn_wave()
            .with_total_spawns(0)
            .with_duration(0.0)
            .with_exit_conditions(ExitConditions::KILL_ALL);
        let campaign = Campaign::new(vec![wave.clone(), wave]);
        let config = GameConfig::new();
        let mut state = WaveRunnerState::new(5);
        state.phase = RunnerPhase::Spawning;
        state.track(ActorId(40));

        let outcome = step(&mut state, &campaign, &config, &Population::default(), false, 0.1);
        assert_eq!(outcome.events[0], WaveEvent::StalePurged { count: 1 });
        assert_eq!(outcome.events[1], WaveEvent::WaveAdvanced { from: 0, to: 1 });
    }

    #[test]
    fn population_cap_blocks_and_bounds_bursts() {
        let wave = Wave::new("crowd")
            .with_pool(["ghoul"])
            .with_interval(IntervalRange::fixed(1.0))
            .with_spawns_per_tick(CountRange::exactly(10))
            .with_duration(100.0);
        let campaign = Campaign::new(vec![wave]);
        let config = GameConfig::with_max_population(300);

        let full = Population {
            extra: 300,
            ..Population::default()
        };
        let mut state = WaveRunnerState::new(9);
        let outcome = step(&mut state, &campaign, &config, &full, false, 0.5);
        assert!(outcome.spawns.is_empty());
        assert!(matches!(state.phase, RunnerPhase::Cooldown { .. }));

        let nearly_full = Population {
            extra: 296,
            ..Population::default()
        };
        let mut state = WaveRunnerState::new(9);
        let outcome = step(&mut state, &campaign, &config, &nearly_full, false, 0.5);
        assert_eq!(outcome.spawns.len(), 4);
    }

    #[test]
    fn starting_count_raises_burst_size() {
        let wave = Wave::new("opening")
            .with_pool(["bat", "zombie"])
            .with_spawns_per_tick(CountRange::exactly(1))
            .with_starting_count(8);
        let campaign = Campaign::new(vec![wave]);
        let mut state = WaveRunnerState::new(1);
        let population = Population {
            extra: 3,
            ..Population::default()
        };
        let outcome = step(&mut state, &campaign, &GameConfig::new(), &population, false, 0.1);
        assert_eq!(outcome.spawns.len(), 5);
        assert_eq!(state.spawned_count, 5);
        for request in &outcome.spawns {
            assert!(request.kind == "bat" || request.kind == "zombie");
        }
    }

    #[test]
    fn boss_fight_freezes_state_until_released() {
        let wave = five_spawn_wave()
            .with_total_spawns(0)
            .with_duration(60.0)
            .with_exit_conditions(ExitConditions::WAVE_DURATION);
        let campaign = Campaign::new(vec![wave]);
        let config = GameConfig::new();
        let population = Population::default();
        let mut state = WaveRunnerState::new(2);

        step(&mut state, &campaign, &config, &population, false, 0.5);
        let snapshot = state.clone();

        let outcome = step(&mut state, &campaign, &config, &population, true, 5.0);
        assert_eq!(outcome.events, vec![WaveEvent::Suspended]);
        assert!(outcome.spawns.is_empty());
        for _ in 0..10 {
            let outcome = step(&mut state, &campaign, &config, &population, true, 5.0);
            assert!(outcome.is_empty());
        }
        assert_eq!(state.wave_elapsed, snapshot.wave_elapsed);
        assert_eq!(state.phase, snapshot.phase);
        assert_eq!(state.spawned_count, snapshot.spawned_count);
        assert!(state.suspended);

        let outcome = step(&mut state, &campaign, &config, &population, false, 0.1);
        assert_eq!(outcome.events.first(), Some(&WaveEvent::Resumed));
        assert!(!state.suspended);
    }

    #[test]
    fn pressure_shortens_cooldown() {
        let wave = five_spawn_wave().with_interval(IntervalRange::fixed(4.0));
        let campaign = Campaign::new(vec![wave]);
        let config = GameConfig::new();
        let population = Population::default();
        let pressure = FixedPressure::new(2.0, 1.0);
        let boundary = viewport();
        let env = Env::with_all(&population, &pressure, &false, &boundary, &PcgRng);

        let mut state = WaveRunnerState::new(0);
        WaveController::new(&mut state, &campaign, &config, env.as_spawn_env()).advance(0.0);
        assert_eq!(state.phase, RunnerPhase::Cooldown { remaining: 2.0 });

        // 0.5s of overshoot carries into the next cooldown.
        WaveController::new(&mut state, &campaign, &config, env.as_spawn_env()).advance(2.5);
        assert_eq!(state.phase, RunnerPhase::Cooldown { remaining: 1.5 });
    }

    #[test]
    fn invalid_configuration_disables_until_reset() {
        let campaign = Campaign::default();
        let config = GameConfig::new();
        let population = Population::default();
        let mut state = WaveRunnerState::new(0);

        let outcome = step(&mut state, &campaign, &config, &population, false, 0.1);
        assert_eq!(
            outcome.events,
            vec![WaveEvent::Disabled(ConfigurationError::EmptyWaveTable)]
        );
        let outcome = step(&mut state, &campaign, &config, &population, false, 0.1);
        assert!(outcome.is_empty());
        assert_eq!(state.disabled_reason(), Some(&ConfigurationError::EmptyWaveTable));

        state.reset();
        assert_eq!(state.phase, RunnerPhase::Idle);
    }

    #[test]
    fn missing_collaborators_disable_the_controller() {
        let campaign = Campaign::new(vec![five_spawn_wave()]);
        let config = GameConfig::new();
        let population = Population::default();
        let pressure = FixedPressure::NEUTRAL;

        let mut state = WaveRunnerState::new(0);
        let boundary = viewport();
        let env = Env::new(
            Some(&population),
            Some(&pressure),
            Some(&false),
            Some(&boundary),
            None::<&PcgRng>,
        );
        WaveController::new(&mut state, &campaign, &config, env.as_spawn_env()).advance(0.1);
        assert_eq!(
            state.disabled_reason(),
            Some(&ConfigurationError::MissingCollaborator(OracleError::RngNotAvailable))
        );

        let mut state = WaveRunnerState::new(0);
        let env = Env::with_all(&population, &pressure, &false, &NoBoundary, &PcgRng);
        WaveController::new(&mut state, &campaign, &config, env.as_spawn_env()).advance(0.1);
        assert_eq!(
            state.disabled_reason(),
            Some(&ConfigurationError::InvalidSpawnBoundary)
        );
    }

    #[test]
    fn same_seed_replays_identically() {
        let wave = Wave::new("mixed")
            .with_pool(["bat", "zombie", "ghoul"])
            .with_interval(IntervalRange::new(0.5, 1.5))
            .with_spawns_per_tick(CountRange::new(1, 4))
            .with_duration(20.0);
        let campaign = Campaign::new(vec![wave]);
        let config = GameConfig::new();
        let population = Population::default();

        let run = |seed| {
            let mut state = WaveRunnerState::new(seed);
            (0..40)
                .flat_map(|_| step(&mut state, &campaign, &config, &population, false, 0.25).spawns)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(77), run(77));
        assert!(!run(77).is_empty());
    }
}

//! Frame-stepped session host.
//!
//! A [`Session`] owns everything a run needs: loaded content, the wave
//! runner state, the event scheduler, the [`World`] that answers oracle
//! queries and the player. Clients call [`Session::advance`] once per frame,
//! feed combat through the damage methods and drain [`SessionEvent`]s.
//!
//! Per step, in order: boss clock, wave controller, event scheduler (paused
//! while the boss is up), then vitals.

use horde_content::{Bestiary, CampaignSpec, Content, PassiveCatalog};
use horde_core::{
    ActorId, BoundaryOracle, DamageOutcome, EventScheduler, GameConfig, GameError, Point,
    PressureOracle, RngOracle, WaveController, WaveEvent, WaveRunnerState, compute_seed,
    edge_position,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};
use crate::event::{SessionEvent, SpawnSource};
use crate::oracle::{Viewport, World};
use crate::player::Player;
use crate::report::RunReport;

/// RNG stream for kill-resistance rolls.
pub const COMBAT_STREAM: u32 = 3;
/// RNG stream for event and boss placement.
pub const PLACEMENT_STREAM: u32 = 4;

/// Runtime configuration for one session.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub run_seed: u64,
    /// Camera size in world units.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Overrides the campaign's boss time limit when set.
    pub boss_time_limit: Option<f32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            run_seed: 0,
            viewport_width: 24.0,
            viewport_height: 13.5,
            boss_time_limit: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Running,
    BossFight,
    Victory,
    Defeat,
}

impl SessionStatus {
    pub fn is_over(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

pub struct Session {
    config: RuntimeConfig,
    campaign: CampaignSpec,
    bestiary: Bestiary,
    passives: PassiveCatalog,
    runner: WaveRunnerState,
    scheduler: EventScheduler,
    world: World,
    player: Player,
    elapsed: f32,
    status: SessionStatus,
    kills: u64,
    nonce: u64,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Advances the run by `dt` seconds. A finished session ignores the call.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownKind`] if a spawn names a kind the
    /// bestiary does not know.
    pub fn advance(&mut self, dt: f32) -> Result<()> {
        if self.status.is_over() {
            return Ok(());
        }
        self.elapsed += dt;

        self.check_boss_clock()?;
        self.step_waves(dt)?;
        if self.status != SessionStatus::BossFight {
            self.step_events(dt)?;
        }
        self.tick_vitals(dt);
        Ok(())
    }

    /// Applies `amount` damage to a hostile.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownActor`] if `id` is not in the world.
    pub fn damage_hostile(&mut self, id: ActorId, amount: f32) -> Result<DamageOutcome> {
        if self.status.is_over() {
            return Ok(DamageOutcome::Ignored);
        }
        let roll_seed = self.next_seed(COMBAT_STREAM);
        let roll = self.world.rng().unit(roll_seed);

        let hostile = self
            .world
            .roster
            .get_mut(id)
            .ok_or(RuntimeError::UnknownActor(id))?;
        let outcome = hostile.vitals.take_damage(amount, roll);
        if outcome.is_kill() {
            let kind = hostile.kind.clone();
            let experience = hostile.experience;
            self.kills += 1;
            tracing::debug!(%id, %kind, "hostile killed");
            self.events.push(SessionEvent::HostileKilled {
                id,
                kind,
                experience,
            });
            self.grant_experience(experience);
        }
        Ok(outcome)
    }

    /// Attempts an insta-kill: damage equal to the hostile's max health,
    /// which its kill resistance may dodge.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownActor`] if `id` is not in the world.
    pub fn insta_kill(&mut self, id: ActorId) -> Result<DamageOutcome> {
        let max_health = self
            .world
            .roster
            .get(id)
            .map(|hostile| hostile.vitals.max_health)
            .ok_or(RuntimeError::UnknownActor(id))?;
        self.damage_hostile(id, max_health)
    }

    /// A hostile touching the player deals its resolved damage.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownActor`] if `id` is not in the world.
    pub fn contact(&mut self, id: ActorId) -> Result<DamageOutcome> {
        let hostile = self
            .world
            .roster
            .get(id)
            .ok_or(RuntimeError::UnknownActor(id))?;
        if hostile.vitals.is_dying() {
            return Ok(DamageOutcome::Ignored);
        }
        let damage = hostile.attributes.damage;
        Ok(self.damage_player(damage))
    }

    pub fn damage_player(&mut self, amount: f32) -> DamageOutcome {
        if self.status.is_over() {
            return DamageOutcome::Ignored;
        }
        let outcome = self.player.vitals.take_damage(amount);
        if outcome.is_kill() {
            tracing::info!(elapsed = self.elapsed, "player died");
            self.status = SessionStatus::Defeat;
            self.events.push(SessionEvent::PlayerDied);
        }
        outcome
    }

    /// Grants experience and returns the number of levels gained.
    pub fn grant_experience(&mut self, amount: u32) -> u32 {
        let gained = self.player.gain_experience(amount);
        let reached = self.player.level();
        for level in (reached + 1 - gained)..=reached {
            tracing::info!(level, "player leveled up");
            self.events.push(SessionEvent::LevelUp { level });
        }
        if gained > 0 {
            self.sync_pressure();
        }
        gained
    }

    /// Equips a passive from the catalog. Picking the same passive again
    /// stacks another copy of its modifier.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownPassive`] if the catalog has no such name.
    pub fn equip_passive(&mut self, name: &str) -> Result<()> {
        let modifier =
            self.passives
                .modifier(name)
                .ok_or_else(|| RuntimeError::UnknownPassive {
                    name: name.to_owned(),
                })?;
        tracing::debug!(passive = name, source = %modifier.source, "passive equipped");
        self.player.equip(modifier);
        self.sync_pressure();
        Ok(())
    }

    /// Moves the camera; spawn placement follows it.
    pub fn follow(&mut self, center: Point) {
        self.world.viewport.follow(center);
    }

    /// Puts the wave runner back to idle so the campaign is revalidated on
    /// the next step. This is the only way out of a disabled controller.
    pub fn reset_waves(&mut self) {
        tracing::info!("wave runner reset");
        self.runner.reset();
    }

    /// Takes every event raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn report(&self) -> RunReport {
        let waves = &self.campaign.waves;
        RunReport {
            status: self.status,
            elapsed: self.elapsed,
            wave_index: self.runner.wave_index,
            wave_name: self.runner.current_wave(waves).map(|w| w.name.clone()),
            waves: waves.len(),
            phase: self.runner.phase.as_str().to_owned(),
            disabled_reason: self.runner.disabled_reason().map(ToString::to_string),
            hostiles_alive: self.world.roster.len(),
            hostiles_spawned: self.world.roster.spawned_total(),
            hostiles_killed: self.kills,
            player_level: self.player.level(),
            player_health: self.player.vitals.health,
            experience: self.player.progression.experience,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn runner(&self) -> &WaveRunnerState {
        &self.runner
    }

    pub fn scheduler(&self) -> &EventScheduler {
        &self.scheduler
    }

    pub fn campaign(&self) -> &CampaignSpec {
        &self.campaign
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    fn check_boss_clock(&mut self) -> Result<()> {
        if self.world.encounter.has_spawned() {
            return Ok(());
        }
        let Some(boss) = self.campaign.boss.as_ref() else {
            return Ok(());
        };
        let time_limit = self.config.boss_time_limit.unwrap_or(boss.time_limit);
        if self.elapsed < time_limit {
            return Ok(());
        }
        let kind = boss.kind.clone();
        self.start_boss_fight(&kind)
    }

    fn start_boss_fight(&mut self, kind: &str) -> Result<()> {
        let position = self
            .edge_spawn_position()
            .unwrap_or(self.world.viewport.center);
        let id = self.spawn_hostile(kind, position, SpawnSource::Boss)?;
        self.world.encounter.begin(id);

        for removed in self.world.roster.clear_except(Some(id)) {
            self.runner.notify_eliminated(removed);
            self.events.push(SessionEvent::HostileRemoved { id: removed });
        }

        tracing::info!(boss = %id, kind, elapsed = self.elapsed, "boss fight started");
        self.status = SessionStatus::BossFight;
        self.events.push(SessionEvent::BossFightStarted {
            id,
            kind: kind.to_owned(),
        });
        Ok(())
    }

    fn step_waves(&mut self, dt: f32) -> Result<()> {
        let outcome = WaveController::new(
            &mut self.runner,
            &self.campaign.waves,
            &self.config.game_config,
            self.world.as_spawn_env(),
        )
        .advance(dt);

        for event in outcome.events {
            log_wave_event(&event);
            self.events.push(event.into());
        }

        if !outcome.spawns.is_empty() {
            tracing::debug!(
                wave = self.runner.wave_index,
                count = outcome.spawns.len(),
                spawned = self.runner.spawned_count,
                "burst admitted"
            );
        }
        for request in outcome.spawns {
            let id = self.spawn_hostile(&request.kind, request.position, SpawnSource::Wave)?;
            self.runner.track(id);
        }
        Ok(())
    }

    fn step_events(&mut self, dt: f32) -> Result<()> {
        let luck = self.player.attributes().luck;
        let activations = self.scheduler.advance(
            dt,
            self.elapsed,
            luck,
            &self.campaign.events,
            self.world.rng(),
        );

        for activation in activations {
            let name = self
                .campaign
                .events
                .get(activation.event)
                .map(|event| event.name.clone())
                .unwrap_or_default();
            tracing::info!(
                event = %name,
                kind = %activation.kind,
                count = activation.count,
                "event activated"
            );
            self.events.push(SessionEvent::EventActivated {
                name,
                kind: activation.kind.clone(),
                count: activation.count,
            });

            for _ in 0..activation.count {
                let Some(position) = self.edge_spawn_position() else {
                    tracing::warn!(kind = %activation.kind, "no spawn boundary; event group skipped");
                    break;
                };
                self.spawn_hostile(&activation.kind, position, SpawnSource::Event)?;
            }
        }
        Ok(())
    }

    fn tick_vitals(&mut self, dt: f32) {
        for id in self.world.roster.tick(dt) {
            if self.world.roster.remove(id).is_none() {
                continue;
            }
            self.runner.notify_eliminated(id);
            self.events.push(SessionEvent::HostileRemoved { id });

            if self.world.encounter.is_boss(id) {
                self.world.encounter.conclude();
                tracing::info!(elapsed = self.elapsed, "boss defeated");
                self.status = SessionStatus::Victory;
                self.events.push(SessionEvent::Victory);
            }
        }
        self.player.vitals.tick(dt);
    }

    fn spawn_hostile(
        &mut self,
        kind: &str,
        position: Point,
        source: SpawnSource,
    ) -> Result<ActorId> {
        let spec = self
            .bestiary
            .get(kind)
            .ok_or_else(|| RuntimeError::UnknownKind {
                kind: kind.to_owned(),
            })?;
        let pressure = (self.world.pressure.curse(), self.world.pressure.level());
        let id = self
            .world
            .roster
            .spawn(kind, position, &spec.profile(), spec.experience, pressure);
        self.events.push(SessionEvent::HostileSpawned {
            id,
            kind: kind.to_owned(),
            position,
            source,
        });
        Ok(id)
    }

    fn edge_spawn_position(&mut self) -> Option<Point> {
        let bounds = self.world.viewport.bounds()?;
        let edge_seed = self.next_seed(PLACEMENT_STREAM);
        let along_seed = self.next_seed(PLACEMENT_STREAM);
        Some(edge_position(
            self.world.rng(),
            edge_seed,
            along_seed,
            &bounds,
            self.config.game_config.spawn_margin,
        ))
    }

    fn sync_pressure(&mut self) {
        self.world.pressure.set(0, self.player.participant());
    }

    fn next_seed(&mut self, stream: u32) -> u64 {
        let seed = compute_seed(self.config.run_seed, self.nonce, stream, 0);
        self.nonce += 1;
        seed
    }
}

fn log_wave_event(event: &WaveEvent) {
    match event {
        WaveEvent::Started { wave } => tracing::info!(wave, "campaign started"),
        WaveEvent::WaveAdvanced { from, to } => tracing::info!(from, to, "wave advanced"),
        WaveEvent::CampaignFinished => tracing::info!("campaign finished"),
        WaveEvent::Suspended => tracing::info!("wave controller suspended for boss fight"),
        WaveEvent::Resumed => tracing::info!("wave controller resumed"),
        WaveEvent::Disabled(reason) => tracing::error!(
            code = reason.error_code(),
            %reason,
            "wave controller disabled"
        ),
        WaveEvent::StalePurged { count } => {
            tracing::warn!(count, "purged stale actors from live set")
        }
    }
}

/// Builder for [`Session`].
///
/// A campaign and a bestiary are required; the passive catalog and the
/// runtime configuration default to empty and [`RuntimeConfig::default`].
#[derive(Default)]
pub struct SessionBuilder {
    config: RuntimeConfig,
    campaign: Option<CampaignSpec>,
    bestiary: Option<Bestiary>,
    passives: PassiveCatalog,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Takes every piece of loaded content, including its `GameConfig`.
    pub fn content(mut self, content: Content) -> Self {
        self.config.game_config = content.config;
        self.campaign = Some(content.campaign);
        self.bestiary = Some(content.bestiary);
        self.passives = content.passives;
        self
    }

    pub fn campaign(mut self, campaign: CampaignSpec) -> Self {
        self.campaign = Some(campaign);
        self
    }

    pub fn bestiary(mut self, bestiary: Bestiary) -> Self {
        self.bestiary = Some(bestiary);
        self
    }

    pub fn passives(mut self, passives: PassiveCatalog) -> Self {
        self.passives = passives;
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// Returns an error if content is missing, if the campaign references a
    /// kind the bestiary lacks, or if a starting passive is unknown.
    pub fn build(self) -> Result<Session> {
        let campaign = self.campaign.ok_or(RuntimeError::MissingContent {
            part: "a campaign",
        })?;
        let bestiary = self.bestiary.ok_or(RuntimeError::MissingContent {
            part: "a bestiary",
        })?;

        let missing: Vec<String> = bestiary
            .missing(campaign.referenced_kinds())
            .into_iter()
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            return Err(RuntimeError::UnknownKinds { kinds: missing });
        }

        let starting = campaign
            .player
            .starting_passives
            .iter()
            .map(|name| {
                self.passives
                    .modifier(name)
                    .ok_or_else(|| RuntimeError::UnknownPassive { name: name.clone() })
            })
            .collect::<Result<Vec<_>>>()?;
        let player = Player::new(&campaign.player, starting);

        let mut world = World::new(Viewport::new(
            self.config.viewport_width,
            self.config.viewport_height,
        ));
        world.pressure.set(0, player.participant());

        let run_seed = self.config.run_seed;
        tracing::debug!(
            run_seed,
            waves = campaign.waves.len(),
            events = campaign.events.len(),
            "session built"
        );

        Ok(Session {
            runner: WaveRunnerState::new(run_seed),
            scheduler: campaign.scheduler(run_seed),
            config: self.config,
            campaign,
            bestiary,
            passives: self.passives,
            world,
            player,
            elapsed: 0.0,
            status: SessionStatus::Running,
            kills: 0,
            nonce: 0,
            events: Vec::new(),
        })
    }
}

//! Per-campaign mutable state of the wave controller.

use super::error::ConfigurationError;
use super::live::{ActorId, LiveSet};
use super::wave::{Campaign, Wave};

/// Where the controller is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunnerPhase {
    /// Not started; the first step validates the campaign.
    #[default]
    Idle,
    /// Ready to evaluate admission on the current step.
    Spawning,
    /// Waiting for the next burst.
    Cooldown { remaining: f32 },
    /// Every wave has ended.
    Finished,
    /// Configuration was rejected. Only [`WaveRunnerState::reset`] leaves
    /// this state.
    Disabled(ConfigurationError),
}

impl RunnerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Spawning => "spawning",
            Self::Cooldown { .. } => "cooldown",
            Self::Finished => "finished",
            Self::Disabled(_) => "disabled",
        }
    }

    /// Finished and disabled runners ignore further steps.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Disabled(_))
    }
}

/// Everything the controller remembers between steps.
///
/// The host owns this value and lends it to a
/// [`WaveController`](super::WaveController) each step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveRunnerState {
    pub phase: RunnerPhase,
    pub wave_index: usize,
    /// Actors admitted in the current wave.
    pub spawned_count: u32,
    /// Seconds since the current wave started, excluding suspended time.
    pub wave_elapsed: f32,
    pub live: LiveSet,
    /// Set while a boss fight holds the controller.
    pub suspended: bool,
    pub run_seed: u64,
    /// Number of random rolls made so far.
    pub nonce: u64,
}

impl WaveRunnerState {
    pub fn new(run_seed: u64) -> Self {
        Self {
            run_seed,
            ..Self::default()
        }
    }

    /// Registers an actor the host instantiated from a spawn request.
    pub fn track(&mut self, id: ActorId) -> bool {
        self.live.track(id)
    }

    /// Eager elimination notice. Unknown ids are ignored.
    pub fn notify_eliminated(&mut self, id: ActorId) -> bool {
        self.live.remove(id)
    }

    pub fn current_wave<'c>(&self, campaign: &'c Campaign) -> Option<&'c Wave> {
        campaign.wave(self.wave_index)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, RunnerPhase::Finished)
    }

    pub fn disabled_reason(&self) -> Option<&ConfigurationError> {
        match &self.phase {
            RunnerPhase::Disabled(reason) => Some(reason),
            _ => None,
        }
    }

    /// Back to `Idle` with the same seed, as if freshly created.
    pub fn reset(&mut self) {
        *self = Self::new(self.run_seed);
    }

    pub(crate) fn next_nonce(&mut self) -> u64 {
        let nonce = self.nonce;
        self.nonce += 1;
        nonce
    }

    pub(crate) fn start_next_wave(&mut self) {
        self.wave_index += 1;
        self.spawned_count = 0;
        self.wave_elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_seed_and_clears_progress() {
        let mut state = WaveRunnerState::new(42);
        state.track(ActorId(1));
        state.wave_index = 3;
        state.phase = RunnerPhase::Disabled(ConfigurationError::EmptyWaveTable);
        state.next_nonce();

        state.reset();
        assert_eq!(state, WaveRunnerState::new(42));
    }

    #[test]
    fn elimination_notice_removes_tracked_actor() {
        let mut state = WaveRunnerState::new(0);
        state.track(ActorId(9));
        assert!(state.notify_eliminated(ActorId(9)));
        assert!(!state.notify_eliminated(ActorId(9)));
        assert!(state.live.is_empty());
    }
}

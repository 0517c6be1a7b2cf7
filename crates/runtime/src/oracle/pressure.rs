use horde_core::{Participant, PressureOracle, cumulative_curse, cumulative_level};

/// Pressure aggregated over every participant of the run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PressureGauge {
    participants: Vec<Participant>,
}

impl PressureGauge {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    /// Replaces the contribution at `slot`, growing the roster if needed.
    pub fn set(&mut self, slot: usize, participant: Participant) {
        if slot >= self.participants.len() {
            self.participants.resize(slot + 1, Participant::default());
        }
        self.participants[slot] = participant;
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }
}

impl PressureOracle for PressureGauge {
    fn curse(&self) -> f32 {
        cumulative_curse(&self.participants)
    }

    fn level(&self) -> f32 {
        cumulative_level(&self.participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gauge_reports_neutral_pressure() {
        let gauge = PressureGauge::default();
        assert_eq!(gauge.curse(), 1.0);
        assert_eq!(gauge.level(), 1.0);
    }

    #[test]
    fn set_grows_and_replaces() {
        let mut gauge = PressureGauge::default();
        gauge.set(1, Participant::new(1.5, 3.0));
        gauge.set(0, Participant::new(0.5, 2.0));
        assert_eq!(gauge.participants().len(), 2);
        assert_eq!(gauge.curse(), 2.0);
        assert_eq!(gauge.level(), 5.0);
    }
}

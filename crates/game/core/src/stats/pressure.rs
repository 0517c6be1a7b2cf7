//! Global pressure scalars aggregated over every participant.
//!
//! Each player contributes its own curse and level. Hostile scaling uses the
//! sum over all players, floored at 1 so that an empty roster or a fresh run
//! never weakens hostiles.

/// One participant's contribution to the global pressure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub curse: f32,
    pub level: f32,
}

impl Participant {
    pub const fn new(curse: f32, level: f32) -> Self {
        Self { curse, level }
    }
}

/// `max(1, Σ curse)`.
pub fn cumulative_curse<'a>(participants: impl IntoIterator<Item = &'a Participant>) -> f32 {
    participants
        .into_iter()
        .map(|p| p.curse)
        .sum::<f32>()
        .max(1.0)
}

/// `max(1, Σ level)`.
pub fn cumulative_level<'a>(participants: impl IntoIterator<Item = &'a Participant>) -> f32 {
    participants
        .into_iter()
        .map(|p| p.level)
        .sum::<f32>()
        .max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_are_floored_at_one() {
        assert_eq!(cumulative_curse(&[]), 1.0);
        assert_eq!(cumulative_level(&[Participant::new(0.2, 0.0)]), 1.0);

        let roster = [Participant::new(1.5, 4.0), Participant::new(0.5, 3.0)];
        assert_eq!(cumulative_curse(&roster), 2.0);
        assert_eq!(cumulative_level(&roster), 7.0);
    }
}

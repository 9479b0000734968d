//! Duel domain: win detection and the end-of-match countdown.

use crate::combat::{HealthBar, PlayerId};

/// What the app should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSignal {
    Continue,
    ReturnToIntro,
}

/// Tracks defeats and counts ticks from the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    defeated: [bool; 2],
    end_ticks: Option<u32>,
}

impl MatchOutcome {
    /// Record this tick's health state. The tick on which the first bar
    /// empties counts as tick one of the countdown.
    pub fn update(&mut self, health: &[HealthBar; 2], end_delay_ticks: u32) -> MatchSignal {
        for bar in health {
            if bar.is_dead() {
                self.defeated[bar.owner.index()] = true;
            }
        }

        if !self.is_over() {
            return MatchSignal::Continue;
        }

        let ticks = self.end_ticks.get_or_insert(0);
        *ticks += 1;
        if *ticks >= end_delay_ticks {
            MatchSignal::ReturnToIntro
        } else {
            MatchSignal::Continue
        }
    }

    pub fn is_over(&self) -> bool {
        self.defeated.iter().any(|d| *d)
    }

    pub fn is_defeated(&self, player: PlayerId) -> bool {
        self.defeated[player.index()]
    }

    /// Players to announce as winners. A mutual kill announces both.
    pub fn winners(&self) -> Vec<PlayerId> {
        PlayerId::BOTH
            .into_iter()
            .filter(|player| self.is_defeated(player.other()))
            .collect()
    }

    /// Ticks elapsed since the first defeat, if any.
    pub fn end_ticks(&self) -> Option<u32> {
        self.end_ticks
    }
}

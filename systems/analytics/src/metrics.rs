//! Report types accumulated by the analytics system.

/// How an expedition concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpeditionOutcome {
    /// The player reached the exit alive.
    Escaped,
    /// A hazard claimed the player.
    Perished,
}

/// Running tallies for a single expedition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpeditionReport {
    /// Steps the player completed.
    pub steps: u32,
    /// Gold scooped up along the way.
    pub gold_collected: u64,
    /// Arrows loosed from the quiver.
    pub arrows_fired: u32,
    /// Pits the player fell into.
    pub pit_falls: u32,
    /// Times bats swarmed the player.
    pub bat_rides: u32,
    /// Gear minted into the inventory.
    pub gear_granted: u32,
    /// Gear merges completed.
    pub gear_merged: u32,
    /// Requests the world turned down.
    pub rejections: u32,
    /// Terminal state, once one is reached.
    pub outcome: Option<ExpeditionOutcome>,
}

impl ExpeditionReport {
    /// Reports whether the expedition reached a terminal state.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// One-line summary suitable for a closing status footer.
    #[must_use]
    pub fn summary(&self) -> String {
        let verdict = match self.outcome {
            Some(ExpeditionOutcome::Escaped) => "escaped",
            Some(ExpeditionOutcome::Perished) => "perished",
            None => "still underway",
        };
        format!(
            "Expedition {verdict}: {} steps, {} gold, {} arrows fired, {} pit falls, {} bat rides, {} gear merges.",
            self.steps,
            self.gold_collected,
            self.arrows_fired,
            self.pit_falls,
            self.bat_rides,
            self.gear_merged,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_the_verdict() {
        let mut report = ExpeditionReport {
            steps: 4,
            gold_collected: 40,
            ..ExpeditionReport::default()
        };
        assert!(!report.is_finished());
        assert!(report.summary().contains("still underway"));

        report.outcome = Some(ExpeditionOutcome::Escaped);
        assert!(report.is_finished());
        assert!(report.summary().contains("escaped"));
        assert!(report.summary().contains("4 steps"));
    }
}

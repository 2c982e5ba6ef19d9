#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure analytics system that folds the event stream into an expedition
//! report.
//!
//! The world broadcasts every observable state change as an event; this
//! system is the aggregation layer on top of that stream. Feeding it the
//! same log always yields the same report, and feeding it a log in chunks
//! yields the same report as feeding it whole.

use maze_hunt_core::{Event, Hazard};

mod metrics;

pub use metrics::{ExpeditionOutcome, ExpeditionReport};

/// Pure system that tallies world events into a running report.
#[derive(Debug, Default)]
pub struct Analytics {
    report: ExpeditionReport,
}

impl Analytics {
    /// Creates an analytics system with an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The report accumulated so far.
    #[must_use]
    pub fn report(&self) -> &ExpeditionReport {
        &self.report
    }

    /// Folds a batch of world events into the running report.
    ///
    /// A `MazeConfigured` event starts a fresh report, since it marks the
    /// beginning of a new expedition.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::MazeConfigured { .. } => self.report = ExpeditionReport::default(),
                Event::PlayerMoved { .. } => {
                    self.report.steps = self.report.steps.saturating_add(1);
                }
                Event::GoldCollected { amount, .. } => {
                    self.report.gold_collected = self.report.gold_collected.saturating_add(*amount);
                }
                Event::HazardTriggered { hazard, .. } => match hazard {
                    Hazard::Pit => {
                        self.report.pit_falls = self.report.pit_falls.saturating_add(1);
                    }
                    Hazard::Bats => {
                        self.report.bat_rides = self.report.bat_rides.saturating_add(1);
                    }
                },
                Event::ArrowFired { .. } => {
                    self.report.arrows_fired = self.report.arrows_fired.saturating_add(1);
                }
                Event::GearGranted { .. } => {
                    self.report.gear_granted = self.report.gear_granted.saturating_add(1);
                }
                Event::GearCombined { .. } => {
                    self.report.gear_merged = self.report.gear_merged.saturating_add(1);
                }
                Event::MazeRejected { .. }
                | Event::MoveRejected { .. }
                | Event::ArrowRejected { .. }
                | Event::GearRejected { .. } => {
                    self.report.rejections = self.report.rejections.saturating_add(1);
                }
                Event::PlayerEscaped { .. } => {
                    self.report.outcome = Some(ExpeditionOutcome::Escaped);
                }
                Event::PlayerPerished { .. } => {
                    self.report.outcome = Some(ExpeditionOutcome::Perished);
                }
                Event::BatsCarried { .. } => {}
            }
        }
    }
}

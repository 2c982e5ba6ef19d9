use maze_hunt_core::{Event, Hazard, Location, MazeSettings, MoveError};
use maze_hunt_system_analytics::{Analytics, ExpeditionOutcome};

fn at(column: u32, row: u32) -> Location {
    Location::new(column, row)
}

#[test]
fn report_tallies_a_full_expedition() {
    let mut analytics = Analytics::new();

    analytics.handle(&[
        Event::MazeConfigured {
            settings: MazeSettings::medium(),
            seed: 9,
        },
        Event::PlayerMoved {
            from: at(0, 0),
            to: at(1, 0),
        },
        Event::GoldCollected {
            at: at(1, 0),
            amount: 25,
            total: 25,
        },
        Event::MoveRejected {
            direction: maze_hunt_core::Direction::North,
            reason: MoveError::OutOfBounds,
        },
        Event::PlayerMoved {
            from: at(1, 0),
            to: at(1, 1),
        },
        Event::HazardTriggered {
            at: at(1, 1),
            hazard: Hazard::Bats,
        },
        Event::BatsCarried {
            from: at(1, 1),
            to: at(3, 2),
        },
        Event::ArrowFired {
            from: at(3, 2),
            to: at(4, 2),
            remaining: 2,
        },
        Event::PlayerMoved {
            from: at(3, 2),
            to: at(3, 3),
        },
        Event::HazardTriggered {
            at: at(3, 3),
            hazard: Hazard::Pit,
        },
        Event::PlayerPerished { at: at(3, 3) },
    ]);

    let report = analytics.report();
    assert_eq!(report.steps, 3);
    assert_eq!(report.gold_collected, 25);
    assert_eq!(report.arrows_fired, 1);
    assert_eq!(report.bat_rides, 1);
    assert_eq!(report.pit_falls, 1);
    assert_eq!(report.rejections, 1);
    assert_eq!(report.outcome, Some(ExpeditionOutcome::Perished));
    assert!(report.is_finished());
}

#[test]
fn escape_sets_the_outcome() {
    let mut analytics = Analytics::new();

    analytics.handle(&[
        Event::PlayerMoved {
            from: at(0, 0),
            to: at(1, 0),
        },
        Event::PlayerEscaped { at: at(1, 0) },
    ]);

    let report = analytics.report();
    assert_eq!(report.steps, 1);
    assert_eq!(report.outcome, Some(ExpeditionOutcome::Escaped));
    assert!(report.summary().contains("escaped"));
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure movement system that vets directional intents before the world
//! sees them.
//!
//! The world remains the authority — it re-validates every step — but
//! running the same checks here lets adapters refuse an illegal step
//! immediately and explain why, without a command round-trip. The checks
//! deliberately mirror the world's: a step must stay in bounds, must not
//! land on a wall, and the expedition must still be running.

use maze_hunt_core::{Command, Direction, Location, MazeView, MoveError, PlayerSnapshot};

/// Outcome of vetting a single directional step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepPreview {
    direction: Direction,
    destination: Option<Location>,
    rejection: Option<MoveError>,
}

impl StepPreview {
    /// Direction the preview was computed for.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell the step would land on, when one exists in bounds.
    #[must_use]
    pub const fn destination(&self) -> Option<Location> {
        self.destination
    }

    /// Reason the step would be rejected, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<MoveError> {
        self.rejection
    }

    /// Reports whether the step would be accepted by the world.
    #[must_use]
    pub const fn is_legal(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Pure system that turns legal directional intents into movement commands.
#[derive(Debug, Default)]
pub struct Movement;

impl Movement {
    /// Vets a step in `direction` against read-only state.
    #[must_use]
    pub fn preview(
        &self,
        direction: Direction,
        player: &PlayerSnapshot,
        maze: MazeView<'_>,
    ) -> StepPreview {
        let (columns, rows) = maze.dimensions();

        if player.status.is_terminal() {
            return StepPreview {
                direction,
                destination: None,
                rejection: Some(MoveError::ExpeditionOver),
            };
        }

        let Some(destination) = player.location.step(direction, columns, rows) else {
            return StepPreview {
                direction,
                destination: None,
                rejection: Some(MoveError::OutOfBounds),
            };
        };

        if !maze.is_passable(destination) {
            return StepPreview {
                direction,
                destination: Some(destination),
                rejection: Some(MoveError::WallBlocked),
            };
        }

        StepPreview {
            direction,
            destination: Some(destination),
            rejection: None,
        }
    }

    /// Emits a `MovePlayer` command for every legal intent, in order.
    pub fn handle(
        &self,
        intents: &[Direction],
        player: &PlayerSnapshot,
        maze: MazeView<'_>,
        out: &mut Vec<Command>,
    ) {
        for &direction in intents {
            if self.preview(direction, player, maze).is_legal() {
                out.push(Command::MovePlayer { direction });
            }
        }
    }
}

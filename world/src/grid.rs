//! Dense cell storage for the expedition maze.

use maze_hunt_core::{CellKind, Location};

/// Row-major grid of cells plus the reserved entry and exit locations.
///
/// The shape is fixed once constructed; only cell payloads (gold stashes)
/// mutate afterwards.
#[derive(Clone, Debug)]
pub(crate) struct CellGrid {
    columns: u32,
    rows: u32,
    entry: Location,
    exit: Location,
    cells: Vec<CellKind>,
}

impl CellGrid {
    /// Assembles a grid from already-placed cells.
    pub(crate) fn new(
        columns: u32,
        rows: u32,
        entry: Location,
        exit: Location,
        cells: Vec<CellKind>,
    ) -> Self {
        debug_assert_eq!(
            cells.len() as u64,
            u64::from(columns) * u64::from(rows),
            "cell storage must cover the whole grid",
        );
        Self {
            columns,
            rows,
            entry,
            exit,
            cells,
        }
    }

    /// Returns the kind of the cell at `location`, if in bounds.
    pub(crate) fn kind(&self, location: Location) -> Option<CellKind> {
        self.index(location)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Empties the gold stash at `location`; other kinds are untouched.
    pub(crate) fn clear_gold(&mut self, location: Location) {
        if let Some(index) = self.index(location) {
            if let Some(slot) = self.cells.get_mut(index) {
                if let CellKind::Gold { amount } = slot {
                    *amount = 0;
                }
            }
        }
    }

    /// Row-major slice of every cell, for read-only views.
    pub(crate) fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Grid dimensions as `(columns, rows)`.
    pub(crate) fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// The reserved cell the player starts on.
    pub(crate) fn entry(&self) -> Location {
        self.entry
    }

    /// The reserved cell the player escapes through.
    pub(crate) fn exit(&self) -> Location {
        self.exit
    }

    fn index(&self, location: Location) -> Option<usize> {
        if location.column() < self.columns && location.row() < self.rows {
            let row = usize::try_from(location.row()).ok()?;
            let column = usize::try_from(location.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

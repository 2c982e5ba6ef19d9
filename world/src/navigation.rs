//! Breadth-first distance field used to certify maze traversability.

use std::collections::VecDeque;

use maze_hunt_core::Location;

/// Dense distance-to-exit grid seeded from the exit cell.
///
/// The field stores the reverse breadth-first search results over the maze
/// shape, treating wall cells as blocked. Distances default to `u32::MAX`
/// for unreachable cells so callers can distinguish walled-off cells from
/// traversable ones.
#[derive(Clone, Debug, Default)]
pub(crate) struct DistanceField {
    columns: u32,
    rows: u32,
    distances: Vec<u32>,
}

impl DistanceField {
    /// Rebuilds the distances with a breadth-first search from `exit`.
    pub(crate) fn rebuild_with<F>(&mut self, columns: u32, rows: u32, exit: Location, mut is_blocked: F)
    where
        F: FnMut(Location) -> bool,
    {
        let columns_usize = usize::try_from(columns).unwrap_or(0);
        let rows_usize = usize::try_from(rows).unwrap_or(0);
        let cell_count = columns_usize.checked_mul(rows_usize).unwrap_or(0);

        self.columns = columns;
        self.rows = rows;
        if self.distances.len() != cell_count {
            self.distances = vec![u32::MAX; cell_count];
        } else {
            self.distances.fill(u32::MAX);
        }

        if cell_count == 0 {
            return;
        }

        let mut frontier = VecDeque::new();
        if exit.column() < columns && exit.row() < rows && !is_blocked(exit) {
            self.set_distance(exit, 0);
            frontier.push_back(exit);
        }

        while let Some(current) = frontier.pop_front() {
            let Some(current_distance) = self.distance(current) else {
                continue;
            };

            for neighbor in current.neighbors(columns, rows) {
                if is_blocked(neighbor) {
                    continue;
                }
                if self.distance(neighbor).is_some() {
                    continue;
                }
                self.set_distance(neighbor, current_distance.saturating_add(1));
                frontier.push_back(neighbor);
            }
        }
    }

    /// Steps from `location` to the exit, or `None` when the location is
    /// out of bounds or cut off.
    pub(crate) fn distance(&self, location: Location) -> Option<u32> {
        let value = *self.distances.get(self.index(location)?)?;
        if value == u32::MAX {
            None
        } else {
            Some(value)
        }
    }

    fn set_distance(&mut self, location: Location, value: u32) {
        if let Some(index) = self.index(location) {
            if let Some(slot) = self.distances.get_mut(index) {
                *slot = value;
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_flow_around_walls() {
        // 3x3 grid; a wall at (1, 1) forces the detour around the center.
        let blocked = Location::new(1, 1);
        let mut field = DistanceField::default();
        field.rebuild_with(3, 3, Location::new(2, 2), |cell| cell == blocked);

        assert_eq!(field.distance(Location::new(2, 2)), Some(0));
        assert_eq!(field.distance(Location::new(2, 0)), Some(2));
        assert_eq!(field.distance(Location::new(0, 0)), Some(4));
        assert_eq!(field.distance(blocked), None);
    }

    #[test]
    fn walled_off_cells_stay_unreachable() {
        // Column 1 is a full wall, cutting column 0 off from the exit.
        let mut field = DistanceField::default();
        field.rebuild_with(3, 3, Location::new(2, 1), |cell| cell.column() == 1);

        assert_eq!(field.distance(Location::new(0, 0)), None);
        assert_eq!(field.distance(Location::new(0, 2)), None);
        assert_eq!(field.distance(Location::new(2, 0)), Some(1));
    }

    #[test]
    fn out_of_bounds_lookups_return_none() {
        let mut field = DistanceField::default();
        field.rebuild_with(2, 2, Location::new(1, 1), |_| false);
        assert_eq!(field.distance(Location::new(5, 0)), None);
    }
}

//! Seeded maze generation honoring exact special-cell counts.

use std::collections::BTreeSet;

use maze_hunt_core::{CellKind, Direction, Location, MazeSettings};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::grid::CellGrid;

const GOLD_STASH_MIN: u64 = 10;
const GOLD_STASH_MAX: u64 = 50;

/// Builds a grid for validated settings.
///
/// One monotone route from entry to exit is carved first and shielded from
/// walls, so a traversable path always survives placement. The requested
/// counts of walls, pits, bats and gold stashes are honored exactly; gold
/// amounts are drawn from a fixed range. Every decision comes from the
/// provided generator, so equal seeds produce equal mazes.
pub(crate) fn generate(settings: MazeSettings, rng: &mut ChaCha8Rng) -> CellGrid {
    let columns = settings.columns();
    let rows = settings.rows();
    let entry = Location::new(0, 0);
    let exit = Location::new(columns - 1, rows - 1);

    let route = carve_route(entry, columns, rows, rng);
    let shielded: BTreeSet<Location> = route.iter().copied().collect();

    let mut off_route: Vec<Location> = Vec::new();
    let mut on_route: Vec<Location> = Vec::new();
    for row in 0..rows {
        for column in 0..columns {
            let cell = Location::new(column, row);
            if cell == entry || cell == exit {
                continue;
            }
            if shielded.contains(&cell) {
                on_route.push(cell);
            } else {
                off_route.push(cell);
            }
        }
    }
    off_route.shuffle(rng);

    let mut cells = vec![CellKind::Empty; cell_capacity(columns, rows)];
    place(&mut cells, columns, exit, CellKind::Exit);

    // Walls only ever land off the shielded route; validate() guarantees
    // enough off-route cells exist.
    let wall_count = usize::try_from(settings.walls())
        .unwrap_or(usize::MAX)
        .min(off_route.len());
    for cell in off_route.drain(..wall_count) {
        place(&mut cells, columns, cell, CellKind::Wall);
    }

    let mut open: Vec<Location> = off_route;
    open.append(&mut on_route);
    open.shuffle(rng);

    let mut remaining = open.into_iter();
    for _ in 0..settings.pits() {
        if let Some(cell) = remaining.next() {
            place(&mut cells, columns, cell, CellKind::Pit);
        }
    }
    for _ in 0..settings.bats() {
        if let Some(cell) = remaining.next() {
            place(&mut cells, columns, cell, CellKind::Bats);
        }
    }
    for _ in 0..settings.gold_cells() {
        if let Some(cell) = remaining.next() {
            let amount = rng.gen_range(GOLD_STASH_MIN..=GOLD_STASH_MAX);
            let stash = CellKind::stocked_gold(amount).expect("stash range starts above zero");
            place(&mut cells, columns, cell, stash);
        }
    }

    CellGrid::new(columns, rows, entry, exit, cells)
}

/// Walks a monotone lattice path from `entry` to the far corner, shuffling
/// the order of east and south steps.
fn carve_route(entry: Location, columns: u32, rows: u32, rng: &mut ChaCha8Rng) -> Vec<Location> {
    let east_steps = columns.saturating_sub(1) as usize;
    let south_steps = rows.saturating_sub(1) as usize;

    let mut steps: Vec<Direction> = Vec::with_capacity(east_steps + south_steps);
    steps.extend(std::iter::repeat(Direction::East).take(east_steps));
    steps.extend(std::iter::repeat(Direction::South).take(south_steps));
    steps.shuffle(rng);

    let mut route = Vec::with_capacity(steps.len() + 1);
    let mut current = entry;
    route.push(current);
    for direction in steps {
        current = current
            .step(direction, columns, rows)
            .expect("monotone route stays in bounds");
        route.push(current);
    }
    route
}

fn cell_capacity(columns: u32, rows: u32) -> usize {
    usize::try_from(u64::from(columns) * u64::from(rows)).unwrap_or(0)
}

fn place(cells: &mut [CellKind], columns: u32, cell: Location, kind: CellKind) {
    let row = usize::try_from(cell.row()).unwrap_or(usize::MAX);
    let column = usize::try_from(cell.column()).unwrap_or(usize::MAX);
    let width = usize::try_from(columns).unwrap_or(0);
    if let Some(index) = row.checked_mul(width).and_then(|base| base.checked_add(column)) {
        if let Some(slot) = cells.get_mut(index) {
            *slot = kind;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn census(grid: &CellGrid) -> (u32, u32, u32, u32) {
        let mut walls = 0;
        let mut pits = 0;
        let mut bats = 0;
        let mut gold = 0;
        for cell in grid.cells() {
            match cell {
                CellKind::Wall => walls += 1,
                CellKind::Pit => pits += 1,
                CellKind::Bats => bats += 1,
                CellKind::Gold { .. } => gold += 1,
                CellKind::Empty | CellKind::Exit => {}
            }
        }
        (walls, pits, bats, gold)
    }

    #[test]
    fn generation_honors_requested_counts() {
        for preset in [
            MazeSettings::small(),
            MazeSettings::medium(),
            MazeSettings::large(),
        ] {
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            let grid = generate(preset, &mut rng);
            let (walls, pits, bats, gold) = census(&grid);
            assert_eq!(walls, preset.walls());
            assert_eq!(pits, preset.pits());
            assert_eq!(bats, preset.bats());
            assert_eq!(gold, preset.gold_cells());
        }
    }

    #[test]
    fn entry_and_exit_stay_reserved() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let grid = generate(MazeSettings::medium(), &mut rng);
        assert_eq!(grid.kind(grid.entry()), Some(CellKind::Empty));
        assert_eq!(grid.kind(grid.exit()), Some(CellKind::Exit));
    }

    #[test]
    fn equal_seeds_build_equal_mazes() {
        let mut first_rng = ChaCha8Rng::seed_from_u64(29);
        let mut second_rng = ChaCha8Rng::seed_from_u64(29);
        let first = generate(MazeSettings::large(), &mut first_rng);
        let second = generate(MazeSettings::large(), &mut second_rng);
        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn gold_stashes_start_within_the_fixed_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let grid = generate(MazeSettings::large(), &mut rng);
        for cell in grid.cells() {
            if let CellKind::Gold { amount } = cell {
                assert!((GOLD_STASH_MIN..=GOLD_STASH_MAX).contains(amount));
            }
        }
    }
}

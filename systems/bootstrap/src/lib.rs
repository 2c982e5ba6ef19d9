#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the start of an expedition.

use maze_hunt_core::{MazeSettings, PlayerSnapshot};
use maze_hunt_world::{query, World};

/// Produces the data adapters need to greet the player.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the expedition starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Settings of the maze about to be explored.
    #[must_use]
    pub fn settings(&self, world: &World) -> MazeSettings {
        query::settings(world)
    }

    /// Snapshot of the freshly provisioned player.
    #[must_use]
    pub fn player(&self, world: &World) -> PlayerSnapshot {
        query::player(world)
    }

    /// Formats the multi-line greeting adapters print at startup.
    #[must_use]
    pub fn greeting(&self, world: &World) -> String {
        let settings = self.settings(world);
        let player = self.player(world);
        format!(
            "{banner}\nA {rows}x{columns} maze awaits: {walls} walls, {pits} pits, \
             {bats} bat roosts, {gold} gold stashes.\nQuiver: {arrows} arrows. Seed: {seed}.",
            banner = self.welcome_banner(world),
            rows = settings.rows(),
            columns = settings.columns(),
            walls = settings.walls(),
            pits = settings.pits(),
            bats = settings.bats(),
            gold = settings.gold_cells(),
            arrows = player.arrows,
            seed = query::generation_seed(world),
        )
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Maze Hunt.
//!
//! The world owns the cell grid, the player and the gear inventory. All
//! mutation funnels through [`apply`]; read access goes through the free
//! functions in [`query`]. Every rule the engine enforces — movement
//! legality, cell-entry effects, arrow bookkeeping, gear merging — lives
//! behind that single entry point, so an expedition is fully determined by
//! its settings, its seed and the command sequence.

use maze_hunt_core::{
    ArrowError, CellKind, Command, Direction, Event, GearId, GearSpec, Hazard, Health, Location,
    MazeSettings, MoveError, PlayerSnapshot, PlayerStatus, WELCOME_BANNER,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod gear;
mod generation;
mod grid;
mod navigation;

use crate::gear::GearRegistry;
use crate::grid::CellGrid;
use crate::navigation::DistanceField;

/// Seed used when a world is created without an explicit configuration.
const MAZE_GENERATION_SEED: u64 = 0x6d61_7a65_6875_6e74;

/// Vitality the player starts each expedition with.
const FULL_HEALTH: Health = Health::new(3);

/// Represents the authoritative Maze Hunt world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    settings: MazeSettings,
    seed: u64,
    grid: CellGrid,
    navigation: DistanceField,
    player: Player,
    gear: GearRegistry,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a new world holding a medium-preset maze ready to explore.
    #[must_use]
    pub fn new() -> Self {
        let settings = MazeSettings::medium();
        let seed = MAZE_GENERATION_SEED;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generation::generate(settings, &mut rng);
        let mut navigation = DistanceField::default();
        rebuild_navigation(&mut navigation, &grid);
        let player = Player::at_entry(grid.entry(), settings.arrows());
        Self {
            banner: WELCOME_BANNER,
            settings,
            seed,
            navigation,
            player,
            gear: GearRegistry::new(),
            rng,
            grid,
        }
    }

    fn configure(&mut self, settings: MazeSettings, seed: u64, out_events: &mut Vec<Event>) {
        if let Err(reason) = settings.validate() {
            out_events.push(Event::MazeRejected { reason });
            return;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generation::generate(settings, &mut rng);
        rebuild_navigation(&mut self.navigation, &grid);
        self.player = Player::at_entry(grid.entry(), settings.arrows());
        self.gear = GearRegistry::new();
        self.settings = settings;
        self.seed = seed;
        self.grid = grid;
        self.rng = rng;
        out_events.push(Event::MazeConfigured { settings, seed });
    }

    fn move_player(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        if self.player.status.is_terminal() {
            out_events.push(Event::MoveRejected {
                direction,
                reason: MoveError::ExpeditionOver,
            });
            return;
        }

        let (columns, rows) = self.grid.dimensions();
        let Some(destination) = self.player.location.step(direction, columns, rows) else {
            out_events.push(Event::MoveRejected {
                direction,
                reason: MoveError::OutOfBounds,
            });
            return;
        };

        if self
            .grid
            .kind(destination)
            .map_or(true, |kind| kind.is_wall())
        {
            out_events.push(Event::MoveRejected {
                direction,
                reason: MoveError::WallBlocked,
            });
            return;
        }

        let from = self.player.location;
        self.player.move_to(destination);
        out_events.push(Event::PlayerMoved {
            from,
            to: destination,
        });
        self.enter_cell(destination, out_events);
    }

    /// Applies the effect of the cell the player just landed on. Bats may
    /// drop the player onto another cell, whose effect then applies in turn;
    /// relocation never targets a roost, so the chain ends after one hop.
    fn enter_cell(&mut self, at: Location, out_events: &mut Vec<Event>) {
        let Some(kind) = self.grid.kind(at) else {
            return;
        };

        match kind {
            CellKind::Empty | CellKind::Wall => {}
            CellKind::Gold { amount } => {
                if amount > 0 {
                    self.grid.clear_gold(at);
                    let total = self.player.pick_gold(amount);
                    out_events.push(Event::GoldCollected { at, amount, total });
                }
            }
            CellKind::Pit => {
                out_events.push(Event::HazardTriggered {
                    at,
                    hazard: Hazard::Pit,
                });
                self.player.perish();
                out_events.push(Event::PlayerPerished { at });
            }
            CellKind::Bats => {
                out_events.push(Event::HazardTriggered {
                    at,
                    hazard: Hazard::Bats,
                });
                self.player.jostle();
                if self.player.health.is_depleted() {
                    self.player.perish();
                    out_events.push(Event::PlayerPerished { at });
                    return;
                }
                if let Some(destination) = self.relocation_target(at) {
                    self.player.move_to(destination);
                    out_events.push(Event::BatsCarried {
                        from: at,
                        to: destination,
                    });
                    self.enter_cell(destination, out_events);
                }
            }
            CellKind::Exit => {
                self.player.escape();
                out_events.push(Event::PlayerEscaped { at });
            }
        }
    }

    /// Picks the cell the bats drop the player on: any cell that is neither
    /// a wall nor another roost, drawn from the world's seeded generator.
    fn relocation_target(&mut self, roost: Location) -> Option<Location> {
        let (columns, rows) = self.grid.dimensions();
        let mut candidates = Vec::new();
        for row in 0..rows {
            for column in 0..columns {
                let cell = Location::new(column, row);
                if cell == roost {
                    continue;
                }
                match self.grid.kind(cell) {
                    Some(CellKind::Wall) | Some(CellKind::Bats) | None => {}
                    Some(_) => candidates.push(cell),
                }
            }
        }

        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..candidates.len());
        Some(candidates[index])
    }

    fn fire_arrow(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        if self.player.status.is_terminal() {
            out_events.push(Event::ArrowRejected {
                reason: ArrowError::ExpeditionOver,
            });
            return;
        }
        if !self.player.spend_arrow() {
            out_events.push(Event::ArrowRejected {
                reason: ArrowError::OutOfArrows,
            });
            return;
        }

        let (columns, rows) = self.grid.dimensions();
        let from = self.player.location;
        let mut tip = from;
        while let Some(next) = tip.step(direction, columns, rows) {
            match self.grid.kind(next) {
                Some(kind) if kind.is_passable() => tip = next,
                _ => break,
            }
        }

        out_events.push(Event::ArrowFired {
            from,
            to: tip,
            remaining: self.player.arrows,
        });
    }

    fn grant_gear(&mut self, spec: GearSpec, out_events: &mut Vec<Event>) {
        match self.gear.mint(spec) {
            Ok(gear) => out_events.push(Event::GearGranted { gear }),
            Err(reason) => out_events.push(Event::GearRejected { reason }),
        }
    }

    fn combine_gear(&mut self, first: GearId, second: GearId, out_events: &mut Vec<Event>) {
        match self.gear.merge(first, second) {
            Ok(result) => out_events.push(Event::GearCombined {
                first,
                second,
                result,
            }),
            Err(reason) => out_events.push(Event::GearRejected { reason }),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn rebuild_navigation(navigation: &mut DistanceField, grid: &CellGrid) {
    let (columns, rows) = grid.dimensions();
    navigation.rebuild_with(columns, rows, grid.exit(), |cell| {
        grid.kind(cell).map_or(true, |kind| kind.is_wall())
    });
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureMaze { settings, seed } => world.configure(settings, seed, out_events),
        Command::MovePlayer { direction } => world.move_player(direction, out_events),
        Command::FireArrow { direction } => world.fire_arrow(direction, out_events),
        Command::GrantGear { spec } => world.grant_gear(spec, out_events),
        Command::CombineGear { first, second } => world.combine_gear(first, second, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use maze_hunt_core::{
        CellKind, Gear, Location, MazeSettings, MazeView, Neighbors, OutOfBounds, PlayerSnapshot,
    };

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Settings the current maze was generated from.
    #[must_use]
    pub fn settings(world: &World) -> MazeSettings {
        world.settings
    }

    /// Seed the current maze was generated from, for replaying expeditions.
    #[must_use]
    pub fn generation_seed(world: &World) -> u64 {
        world.seed
    }

    /// Captures a read-only snapshot of the player.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        world.player.snapshot()
    }

    /// Exposes a read-only view of the cell grid.
    #[must_use]
    pub fn maze_view(world: &World) -> MazeView<'_> {
        let (columns, rows) = world.grid.dimensions();
        MazeView::new(world.grid.cells(), columns, rows)
    }

    /// The reserved cell the player starts on.
    #[must_use]
    pub fn entry(world: &World) -> Location {
        world.grid.entry()
    }

    /// The reserved cell the player escapes through.
    #[must_use]
    pub fn exit(world: &World) -> Location {
        world.grid.exit()
    }

    /// Held gear in ascending identifier order.
    #[must_use]
    pub fn gear_inventory(world: &World) -> Vec<Gear> {
        world.gear.iter().cloned().collect()
    }

    /// Looks up the cell at `location`.
    pub fn cell_at(world: &World, location: Location) -> Result<CellKind, OutOfBounds> {
        world.grid.kind(location).ok_or(OutOfBounds { location })
    }

    /// Enumerates the (up to four) in-bounds locations adjacent to
    /// `location`, for movement legality checks.
    #[must_use]
    pub fn neighbors(world: &World, location: Location) -> Neighbors {
        let (columns, rows) = world.grid.dimensions();
        location.neighbors(columns, rows)
    }

    /// Number of steps from `location` to the exit, walls respected, or
    /// `None` when the location is walled off or out of bounds.
    #[must_use]
    pub fn exit_distance(world: &World, location: Location) -> Option<u32> {
        world.navigation.distance(location)
    }
}

#[derive(Clone, Debug)]
struct Player {
    location: Location,
    gold: u64,
    arrows: u32,
    health: Health,
    status: PlayerStatus,
}

impl Player {
    fn at_entry(entry: Location, arrows: u32) -> Self {
        Self {
            location: entry,
            gold: 0,
            arrows,
            health: FULL_HEALTH,
            status: PlayerStatus::Exploring,
        }
    }

    fn move_to(&mut self, location: Location) {
        self.location = location;
    }

    fn pick_gold(&mut self, amount: u64) -> u64 {
        self.gold = self.gold.saturating_add(amount);
        self.gold
    }

    fn spend_arrow(&mut self) -> bool {
        if self.arrows == 0 {
            return false;
        }
        self.arrows -= 1;
        true
    }

    fn jostle(&mut self) {
        self.health = self.health.saturating_damage(1);
    }

    fn perish(&mut self) {
        self.health = Health::new(0);
        self.status = PlayerStatus::Perished;
    }

    fn escape(&mut self) {
        self.status = PlayerStatus::Escaped;
    }

    fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            location: self.location,
            gold: self.gold,
            arrows: self.arrows,
            health: self.health,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_hunt_core::{GearError, GearId, GearKind, GearSpec, SettingsError};

    /// Builds a world around a handcrafted grid so cell effects can be
    /// exercised without depending on random placement.
    fn scripted_world(cells: Vec<CellKind>, columns: u32, rows: u32, arrows: u32) -> World {
        let entry = Location::new(0, 0);
        let exit = Location::new(columns - 1, rows - 1);
        let grid = CellGrid::new(columns, rows, entry, exit, cells);
        let mut navigation = DistanceField::default();
        rebuild_navigation(&mut navigation, &grid);
        World {
            banner: WELCOME_BANNER,
            settings: MazeSettings::new(rows, columns, 0, 0, 0, 0, arrows),
            seed: 0,
            navigation,
            player: Player::at_entry(entry, arrows),
            gear: GearRegistry::new(),
            rng: ChaCha8Rng::seed_from_u64(7),
            grid,
        }
    }

    fn sword_spec(adjective: &str, noun: &str, attack: u32, defense: u32) -> GearSpec {
        GearSpec::new(GearKind::Sword, adjective, noun, attack, defense)
    }

    #[test]
    fn apply_configures_maze_from_settings() {
        let mut world = World::new();
        let mut events = Vec::new();
        let settings = MazeSettings::large();

        apply(
            &mut world,
            Command::ConfigureMaze { settings, seed: 99 },
            &mut events,
        );

        assert_eq!(events, vec![Event::MazeConfigured { settings, seed: 99 }]);
        assert_eq!(query::settings(&world), settings);
        assert_eq!(query::generation_seed(&world), 99);

        let player = query::player(&world);
        assert_eq!(player.location, query::entry(&world));
        assert_eq!(player.arrows, settings.arrows());
        assert_eq!(player.status, PlayerStatus::Exploring);

        let view = query::maze_view(&world);
        let mut walls = 0;
        let mut pits = 0;
        let mut bats = 0;
        let mut gold = 0;
        for kind in view.iter() {
            match kind {
                CellKind::Wall => walls += 1,
                CellKind::Pit => pits += 1,
                CellKind::Bats => bats += 1,
                CellKind::Gold { .. } => gold += 1,
                CellKind::Empty | CellKind::Exit => {}
            }
        }
        assert_eq!(walls, settings.walls());
        assert_eq!(pits, settings.pits());
        assert_eq!(bats, settings.bats());
        assert_eq!(gold, settings.gold_cells());
    }

    #[test]
    fn invalid_settings_are_rejected_without_side_effects() {
        let mut world = World::new();
        let before = query::settings(&world);
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::ConfigureMaze {
                settings: MazeSettings::new(5, 5, 100, 2, 2, 3, 3),
                seed: 1,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![Event::MazeRejected {
                reason: SettingsError::CapacityExceeded {
                    requested: 107,
                    capacity: 23,
                },
            }]
        );
        assert_eq!(query::settings(&world), before);
    }

    #[test]
    fn configuration_is_deterministic_for_equal_seeds() {
        let mut first = World::new();
        let mut second = World::new();
        let mut first_events = Vec::new();
        let mut second_events = Vec::new();
        let command = Command::ConfigureMaze {
            settings: MazeSettings::medium(),
            seed: 424_242,
        };

        apply(&mut first, command.clone(), &mut first_events);
        apply(&mut second, command, &mut second_events);

        assert_eq!(first_events, second_events);
        let first_cells: Vec<CellKind> = query::maze_view(&first).iter().collect();
        let second_cells: Vec<CellKind> = query::maze_view(&second).iter().collect();
        assert_eq!(first_cells, second_cells);
    }

    #[test]
    fn entry_always_reaches_exit() {
        let mut world = World::new();
        for preset in [
            MazeSettings::small(),
            MazeSettings::medium(),
            MazeSettings::large(),
        ] {
            for seed in 0..8 {
                let mut events = Vec::new();
                apply(
                    &mut world,
                    Command::ConfigureMaze {
                        settings: preset,
                        seed,
                    },
                    &mut events,
                );
                assert!(
                    query::exit_distance(&world, query::entry(&world)).is_some(),
                    "entry must reach the exit for seed {seed}",
                );
            }
        }
    }

    #[test]
    fn gold_transfers_once_and_empties_the_stash() {
        let mut world = scripted_world(
            vec![
                CellKind::Empty,
                CellKind::Gold { amount: 25 },
                CellKind::Empty,
                CellKind::Exit,
            ],
            4,
            1,
            0,
        );
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::East,
            },
            &mut events,
        );
        assert_eq!(
            events,
            vec![
                Event::PlayerMoved {
                    from: Location::new(0, 0),
                    to: Location::new(1, 0),
                },
                Event::GoldCollected {
                    at: Location::new(1, 0),
                    amount: 25,
                    total: 25,
                },
            ]
        );
        assert_eq!(
            query::cell_at(&world, Location::new(1, 0)),
            Ok(CellKind::Gold { amount: 0 })
        );

        // Stepping away and back transfers nothing further.
        events.clear();
        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::West,
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::East,
            },
            &mut events,
        );

        assert!(events
            .iter()
            .all(|event| !matches!(event, Event::GoldCollected { .. })));
        assert_eq!(query::player(&world).gold, 25);
    }

    #[test]
    fn pits_end_the_expedition() {
        let mut world = scripted_world(
            vec![CellKind::Empty, CellKind::Pit, CellKind::Exit],
            3,
            1,
            1,
        );
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::East,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::PlayerMoved {
                    from: Location::new(0, 0),
                    to: Location::new(1, 0),
                },
                Event::HazardTriggered {
                    at: Location::new(1, 0),
                    hazard: Hazard::Pit,
                },
                Event::PlayerPerished {
                    at: Location::new(1, 0),
                },
            ]
        );
        assert_eq!(query::player(&world).status, PlayerStatus::Perished);
        assert!(query::player(&world).health.is_depleted());

        events.clear();
        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::West,
            },
            &mut events,
        );
        assert_eq!(
            events,
            vec![Event::MoveRejected {
                direction: Direction::West,
                reason: MoveError::ExpeditionOver,
            }]
        );
    }

    #[test]
    fn walls_and_bounds_reject_movement() {
        let mut world = scripted_world(
            vec![CellKind::Empty, CellKind::Wall, CellKind::Exit],
            3,
            1,
            0,
        );
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::East,
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::North,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::MoveRejected {
                    direction: Direction::East,
                    reason: MoveError::WallBlocked,
                },
                Event::MoveRejected {
                    direction: Direction::North,
                    reason: MoveError::OutOfBounds,
                },
            ]
        );
        assert_eq!(query::player(&world).location, Location::new(0, 0));
    }

    #[test]
    fn bats_carry_the_player_to_a_safe_cell() {
        let mut world = scripted_world(
            vec![
                CellKind::Empty,
                CellKind::Bats,
                CellKind::Empty,
                CellKind::Exit,
            ],
            4,
            1,
            0,
        );
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::East,
            },
            &mut events,
        );

        let carried = events.iter().find_map(|event| match event {
            Event::BatsCarried { from, to } => Some((*from, *to)),
            _ => None,
        });
        let (from, to) = carried.expect("bats must carry the player");
        assert_eq!(from, Location::new(1, 0));
        assert_ne!(to, Location::new(1, 0));
        assert_ne!(query::cell_at(&world, to), Ok(CellKind::Bats));

        let player = query::player(&world);
        assert_eq!(player.health, Health::new(2));
        if player.status == PlayerStatus::Exploring {
            assert_eq!(player.location, to);
        }
    }

    #[test]
    fn bats_finish_off_an_exhausted_player() {
        let mut world = scripted_world(
            vec![CellKind::Empty, CellKind::Bats, CellKind::Exit],
            3,
            1,
            0,
        );
        world.player.health = Health::new(1);
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::East,
            },
            &mut events,
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, Event::PlayerPerished { .. })));
        assert!(events
            .iter()
            .all(|event| !matches!(event, Event::BatsCarried { .. })));
        assert_eq!(query::player(&world).status, PlayerStatus::Perished);
    }

    #[test]
    fn reaching_the_exit_escapes_the_maze() {
        let mut world = scripted_world(vec![CellKind::Empty, CellKind::Exit], 2, 1, 1);
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::MovePlayer {
                direction: Direction::East,
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::PlayerMoved {
                    from: Location::new(0, 0),
                    to: Location::new(1, 0),
                },
                Event::PlayerEscaped {
                    at: Location::new(1, 0),
                },
            ]
        );
        assert_eq!(query::player(&world).status, PlayerStatus::Escaped);

        events.clear();
        apply(
            &mut world,
            Command::FireArrow {
                direction: Direction::East,
            },
            &mut events,
        );
        assert_eq!(
            events,
            vec![Event::ArrowRejected {
                reason: ArrowError::ExpeditionOver,
            }]
        );
    }

    #[test]
    fn arrows_stop_at_walls_and_deplete() {
        let mut world = scripted_world(
            vec![
                CellKind::Empty,
                CellKind::Empty,
                CellKind::Wall,
                CellKind::Exit,
            ],
            4,
            1,
            1,
        );
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::FireArrow {
                direction: Direction::East,
            },
            &mut events,
        );
        assert_eq!(
            events,
            vec![Event::ArrowFired {
                from: Location::new(0, 0),
                to: Location::new(1, 0),
                remaining: 0,
            }]
        );

        events.clear();
        apply(
            &mut world,
            Command::FireArrow {
                direction: Direction::East,
            },
            &mut events,
        );
        assert_eq!(
            events,
            vec![Event::ArrowRejected {
                reason: ArrowError::OutOfArrows,
            }]
        );
    }

    #[test]
    fn gear_flows_through_grant_and_combine_commands() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::GrantGear {
                spec: sword_spec("sharp", "blade", 5, 1),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::GrantGear {
                spec: sword_spec("heavy", "axe", 3, 4),
            },
            &mut events,
        );

        let granted: Vec<GearId> = events
            .iter()
            .filter_map(|event| match event {
                Event::GearGranted { gear } => Some(gear.id()),
                _ => None,
            })
            .collect();
        assert_eq!(granted, vec![GearId::new(0), GearId::new(1)]);

        events.clear();
        apply(
            &mut world,
            Command::CombineGear {
                first: GearId::new(0),
                second: GearId::new(1),
            },
            &mut events,
        );

        let Some(Event::GearCombined { result, .. }) = events.first() else {
            panic!("expected a combined-gear event, got {events:?}");
        };
        assert_eq!(result.adjective(), "heavy, sharp");
        assert_eq!(result.noun(), "axe");
        assert_eq!(result.attack(), 8);
        assert_eq!(result.defense(), 5);
        assert!(result.has_combined());

        let inventory = query::gear_inventory(&world);
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].id(), GearId::new(2));
    }

    #[test]
    fn gear_rejections_surface_their_reasons() {
        let mut world = World::new();
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::GrantGear {
                spec: sword_spec("", "blade", 5, 1),
            },
            &mut events,
        );
        apply(
            &mut world,
            Command::CombineGear {
                first: GearId::new(0),
                second: GearId::new(1),
            },
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                Event::GearRejected {
                    reason: GearError::EmptyAdjective,
                },
                Event::GearRejected {
                    reason: GearError::UnknownGear,
                },
            ]
        );
    }

    #[test]
    fn cell_lookups_reject_out_of_bounds_locations() {
        let world = World::new();
        let outside = Location::new(40, 2);

        assert!(query::cell_at(&world, query::entry(&world)).is_ok());
        assert_eq!(
            query::cell_at(&world, outside),
            Err(maze_hunt_core::OutOfBounds { location: outside })
        );

        assert_eq!(query::neighbors(&world, query::entry(&world)).count_total(), 2);
        assert_eq!(query::neighbors(&world, Location::new(2, 2)).count_total(), 4);
    }
}

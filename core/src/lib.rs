#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Hunt engine.
//!
//! Adapters describe desired mutations as [`Command`] values, the
//! authoritative world executes them through its `apply` entry point, and
//! every observable state change comes back out as an [`Event`]. Pure systems
//! never reach into world internals: they read immutable snapshots and views
//! defined here and answer exclusively with fresh command batches. Rejected
//! requests are events carrying a typed reason rather than panics or silent
//! drops.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when an expedition starts.
pub const WELCOME_BANNER: &str = "Welcome to Maze Hunt.";

/// Position of a single grid cell expressed as column and row indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    column: u32,
    row: u32,
}

impl Location {
    /// Creates a new cell location.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two locations.
    #[must_use]
    pub fn manhattan_distance(self, other: Location) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }

    /// Returns the location one step away in `direction`, or `None` when the
    /// step would leave a grid of the given dimensions.
    #[must_use]
    pub fn step(self, direction: Direction, columns: u32, rows: u32) -> Option<Location> {
        match direction {
            Direction::North => self
                .row
                .checked_sub(1)
                .map(|row| Location::new(self.column, row)),
            Direction::East => self
                .column
                .checked_add(1)
                .filter(|&column| column < columns)
                .map(|column| Location::new(column, self.row)),
            Direction::South => self
                .row
                .checked_add(1)
                .filter(|&row| row < rows)
                .map(|row| Location::new(self.column, row)),
            Direction::West => self
                .column
                .checked_sub(1)
                .map(|column| Location::new(column, self.row)),
        }
    }

    /// Enumerates the (up to four) in-bounds locations adjacent to this one.
    #[must_use]
    pub fn neighbors(self, columns: u32, rows: u32) -> Neighbors {
        let mut neighbors = Neighbors::default();
        for direction in Direction::ALL {
            if let Some(neighbor) = self.step(direction, columns, rows) {
                neighbors.push(neighbor);
            }
        }
        neighbors
    }
}

/// Cardinal directions the player may face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing row indices.
    North,
    /// Toward increasing column indices.
    East,
    /// Toward increasing row indices.
    South,
    /// Toward decreasing column indices.
    West,
}

impl Direction {
    /// All four cardinal directions in a fixed deterministic order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

/// Iterator over the in-bounds neighbors of a location.
#[derive(Clone, Debug, Default)]
pub struct Neighbors {
    buffer: [Option<Location>; 4],
    len: usize,
    cursor: usize,
}

impl Neighbors {
    fn push(&mut self, location: Location) {
        if self.len < self.buffer.len() {
            self.buffer[self.len] = Some(location);
            self.len += 1;
        }
    }

    /// Number of neighbors the iterator yields in total.
    #[must_use]
    pub const fn count_total(&self) -> usize {
        self.len
    }
}

impl Iterator for Neighbors {
    type Item = Location;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }

        let value = self.buffer[self.cursor];
        self.cursor += 1;
        value
    }
}

/// Remaining vitality of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Health(u32);

impl Health {
    /// Creates a health value with the provided number of points.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the remaining health points.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether no health remains.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.0 == 0
    }

    /// Returns the health left after absorbing `damage`, never below zero.
    #[must_use]
    pub const fn saturating_damage(self, damage: u32) -> Health {
        Health(self.0.saturating_sub(damage))
    }
}

/// Unique identifier assigned to a piece of gear by the world's allocator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GearId(u64);

impl GearId {
    /// Creates a new gear identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Categories of gear; only gear of matching kinds can be merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GearKind {
    /// Bladed weaponry carried in hand.
    Sword,
    /// Protective headwear.
    Helmet,
    /// Sturdy footwear.
    Boots,
}

/// Description of a gear to mint, before an identifier is allocated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearSpec {
    /// Category the minted gear belongs to.
    pub kind: GearKind,
    /// Descriptive adjective, e.g. "sharp".
    pub adjective: String,
    /// Base noun, e.g. "blade".
    pub noun: String,
    /// Attack power contributed when worn.
    pub attack: u32,
    /// Defense strength contributed when worn.
    pub defense: u32,
}

impl GearSpec {
    /// Creates a gear description from its parts.
    #[must_use]
    pub fn new(
        kind: GearKind,
        adjective: impl Into<String>,
        noun: impl Into<String>,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            kind,
            adjective: adjective.into(),
            noun: noun.into(),
            attack,
            defense,
        }
    }
}

/// An equippable item with combat stats and a one-shot merge rule.
///
/// Gear values are immutable: combination never edits either source in
/// place. [`Gear::combine`] yields a brand-new value whose combined flag is
/// already set, so a merged gear can never take part in a second merge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    id: GearId,
    kind: GearKind,
    adjective: String,
    noun: String,
    attack: u32,
    defense: u32,
    combined: bool,
}

impl Gear {
    /// Mints gear from a spec and a freshly allocated identifier.
    ///
    /// The adjective and noun must both be non-empty.
    pub fn new(id: GearId, spec: GearSpec) -> Result<Self, GearError> {
        if spec.adjective.is_empty() {
            return Err(GearError::EmptyAdjective);
        }
        if spec.noun.is_empty() {
            return Err(GearError::EmptyNoun);
        }

        Ok(Self {
            id,
            kind: spec.kind,
            adjective: spec.adjective,
            noun: spec.noun,
            attack: spec.attack,
            defense: spec.defense,
            combined: false,
        })
    }

    /// Identifier allocated to this gear.
    #[must_use]
    pub const fn id(&self) -> GearId {
        self.id
    }

    /// Category this gear belongs to; fixed at creation.
    #[must_use]
    pub const fn kind(&self) -> GearKind {
        self.kind
    }

    /// Descriptive adjective of this gear.
    #[must_use]
    pub fn adjective(&self) -> &str {
        &self.adjective
    }

    /// Base noun of this gear.
    #[must_use]
    pub fn noun(&self) -> &str {
        &self.noun
    }

    /// Attack power contributed when worn.
    #[must_use]
    pub const fn attack(&self) -> u32 {
        self.attack
    }

    /// Defense strength contributed when worn.
    #[must_use]
    pub const fn defense(&self) -> u32 {
        self.defense
    }

    /// Reports whether this gear already resulted from a merge.
    #[must_use]
    pub const fn has_combined(&self) -> bool {
        self.combined
    }

    /// Full display name, adjective followed by noun.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.adjective, self.noun)
    }

    /// Merges this gear with another of the same kind into a new value.
    ///
    /// The merged adjective is the lexicographically ordered concatenation of
    /// both adjectives joined by ", "; the merged noun is the
    /// lexicographically smaller of the two nouns; attack and defense are
    /// summed. The numeric outcome is order-independent and the textual
    /// outcome deterministic regardless of argument order. The result carries
    /// the provided fresh identifier with its combined flag set.
    pub fn combine(&self, other: &Gear, id: GearId) -> Result<Gear, GearError> {
        if self.id == other.id {
            return Err(GearError::SelfCombination);
        }
        if self.kind != other.kind {
            return Err(GearError::MismatchedKinds);
        }
        if self.combined || other.combined {
            return Err(GearError::AlreadyCombined);
        }

        let adjective = if self.adjective <= other.adjective {
            format!("{}, {}", self.adjective, other.adjective)
        } else {
            format!("{}, {}", other.adjective, self.adjective)
        };
        let noun = if self.noun <= other.noun {
            self.noun.clone()
        } else {
            other.noun.clone()
        };

        Ok(Gear {
            id,
            kind: self.kind,
            adjective,
            noun,
            attack: self.attack.saturating_add(other.attack),
            defense: self.defense.saturating_add(other.defense),
            combined: true,
        })
    }
}

/// Reasons a gear request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum GearError {
    /// The adjective of a gear spec was empty.
    #[error("gear adjective must not be empty")]
    EmptyAdjective,
    /// The noun of a gear spec was empty.
    #[error("gear noun must not be empty")]
    EmptyNoun,
    /// The two gears belong to different categories.
    #[error("only gear of the same kind can be merged")]
    MismatchedKinds,
    /// One of the gears already resulted from a merge.
    #[error("gear that is already a combination cannot merge again")]
    AlreadyCombined,
    /// A merge named the same gear twice.
    #[error("a gear cannot merge with itself")]
    SelfCombination,
    /// No gear with the requested identifier is held.
    #[error("no gear with that id is held")]
    UnknownGear,
}

/// Generation parameters for one expedition maze.
///
/// This is the tuple the settings surface produces; [`MazeSettings::validate`]
/// is the single source of truth for its validity, consulted both at
/// generation time and whenever a configuration is saved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MazeSettings {
    rows: u32,
    columns: u32,
    walls: u32,
    pits: u32,
    bats: u32,
    gold_cells: u32,
    arrows: u32,
}

impl MazeSettings {
    /// Creates a settings tuple from explicit counts.
    #[must_use]
    pub const fn new(
        rows: u32,
        columns: u32,
        walls: u32,
        pits: u32,
        bats: u32,
        gold_cells: u32,
        arrows: u32,
    ) -> Self {
        Self {
            rows,
            columns,
            walls,
            pits,
            bats,
            gold_cells,
            arrows,
        }
    }

    /// The gentle introductory preset.
    #[must_use]
    pub const fn small() -> Self {
        Self::new(4, 4, 3, 1, 1, 2, 2)
    }

    /// The documented medium preset: 5x5 with 7 walls, 2 pits and 2 bats.
    #[must_use]
    pub const fn medium() -> Self {
        Self::new(5, 5, 7, 2, 2, 3, 3)
    }

    /// The sprawling preset for long expeditions.
    #[must_use]
    pub const fn large() -> Self {
        Self::new(8, 8, 16, 4, 3, 6, 5)
    }

    /// Number of rows laid out in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns laid out in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of wall cells to place.
    #[must_use]
    pub const fn walls(&self) -> u32 {
        self.walls
    }

    /// Number of pit cells to place.
    #[must_use]
    pub const fn pits(&self) -> u32 {
        self.pits
    }

    /// Number of bat roosts to place.
    #[must_use]
    pub const fn bats(&self) -> u32 {
        self.bats
    }

    /// Number of gold stashes to place.
    #[must_use]
    pub const fn gold_cells(&self) -> u32 {
        self.gold_cells
    }

    /// Number of arrows in the player's starting quiver.
    #[must_use]
    pub const fn arrows(&self) -> u32 {
        self.arrows
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.rows as u64 * self.columns as u64
    }

    /// Cells available for special placement once entry and exit are
    /// reserved.
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.cell_count().saturating_sub(2)
    }

    /// Cells that may hold walls while a route from entry to exit stays
    /// open. The generator shields one monotone route of
    /// `rows + columns - 1` cells from walls.
    #[must_use]
    pub const fn wall_capacity(&self) -> u64 {
        (self.rows.saturating_sub(1)) as u64 * (self.columns.saturating_sub(1)) as u64
    }

    /// Total number of special cells requested.
    #[must_use]
    pub const fn special_cells(&self) -> u64 {
        self.walls as u64 + self.pits as u64 + self.bats as u64 + self.gold_cells as u64
    }

    /// Single source of truth for settings validity.
    ///
    /// Dimensions must be positive and leave room for the reserved entry and
    /// exit cells; the requested special cells must fit in the remaining
    /// grid; and the wall count must leave at least one traversable route.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rows == 0 || self.columns == 0 || self.cell_count() < 2 {
            return Err(SettingsError::GridTooSmall {
                rows: self.rows,
                columns: self.columns,
            });
        }

        let requested = self.special_cells();
        let capacity = self.capacity();
        if requested > capacity {
            return Err(SettingsError::CapacityExceeded {
                requested,
                capacity,
            });
        }

        let wall_capacity = self.wall_capacity();
        if self.walls as u64 > wall_capacity {
            return Err(SettingsError::TooManyWalls {
                requested: self.walls,
                capacity: wall_capacity,
            });
        }

        Ok(())
    }

    /// Convenience predicate equivalent to `validate().is_ok()`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Reasons a settings tuple may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum SettingsError {
    /// The grid cannot host both an entry and an exit.
    #[error("a {rows}x{columns} grid cannot host an expedition")]
    GridTooSmall {
        /// Requested number of rows.
        rows: u32,
        /// Requested number of columns.
        columns: u32,
    },
    /// More special cells were requested than the grid can hold.
    #[error("{requested} special cells requested but only {capacity} fit")]
    CapacityExceeded {
        /// Total special cells requested.
        requested: u64,
        /// Cells available once entry and exit are reserved.
        capacity: u64,
    },
    /// The wall count would close every route from entry to exit.
    #[error("{requested} walls requested but only {capacity} cells may hold walls")]
    TooManyWalls {
        /// Wall cells requested.
        requested: u32,
        /// Cells that may hold walls.
        capacity: u64,
    },
}

/// Kind of a single maze cell, including any mutable payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Plain floor with no effect on entry.
    Empty,
    /// Impassable cell; movement into it is rejected.
    Wall,
    /// Floor holding a stash of gold, emptied on the first visit.
    Gold {
        /// Remaining gold; zero once collected.
        amount: u64,
    },
    /// Bottomless pit; entering ends the expedition.
    Pit,
    /// Bat roost; entering jostles the player and carries them elsewhere.
    Bats,
    /// The way out; entering completes the expedition.
    Exit,
}

impl CellKind {
    /// Creates a gold cell; the initial stash must be positive.
    pub fn stocked_gold(amount: u64) -> Result<Self, EmptyStash> {
        if amount == 0 {
            return Err(EmptyStash);
        }
        Ok(CellKind::Gold { amount })
    }

    /// Reports whether the player may step onto this cell.
    #[must_use]
    pub const fn is_passable(&self) -> bool {
        !self.is_wall()
    }

    /// Reports whether this cell is a wall.
    #[must_use]
    pub const fn is_wall(&self) -> bool {
        matches!(self, CellKind::Wall)
    }

    /// Gold currently stored in the cell; zero for non-gold cells and for
    /// emptied stashes.
    #[must_use]
    pub const fn gold(&self) -> u64 {
        match self {
            CellKind::Gold { amount } => *amount,
            _ => 0,
        }
    }
}

/// Error raised when a gold cell is constructed without any gold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("a gold cell must start with a positive stash")]
pub struct EmptyStash;

/// Error raised when a location lookup falls outside the grid extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("location ({}, {}) is outside the maze", .location.column(), .location.row())]
pub struct OutOfBounds {
    /// The offending location.
    pub location: Location,
}

/// Hazards a cell can spring on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hazard {
    /// A bottomless pit.
    Pit,
    /// A roost of giant bats.
    Bats,
}

/// Lifecycle state of the expedition's player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Still roaming the maze.
    Exploring,
    /// Reached the exit alive.
    Escaped,
    /// Lost to a hazard.
    Perished,
}

impl PlayerStatus {
    /// Reports whether the expedition has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, PlayerStatus::Escaped | PlayerStatus::Perished)
    }
}

/// Reasons a movement request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The destination lies outside the grid.
    #[error("the maze does not extend that way")]
    OutOfBounds,
    /// The destination cell is a wall.
    #[error("a wall blocks the way")]
    WallBlocked,
    /// The expedition already ended.
    #[error("the expedition is already over")]
    ExpeditionOver,
}

/// Reasons an arrow request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ArrowError {
    /// The quiver is empty.
    #[error("the quiver is empty")]
    OutOfArrows,
    /// The expedition already ended.
    #[error("the expedition is already over")]
    ExpeditionOver,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Rebuilds the maze from a settings tuple and a generation seed.
    ConfigureMaze {
        /// Generation parameters; validated before any state changes.
        settings: MazeSettings,
        /// Seed driving every pseudo-random generation decision.
        seed: u64,
    },
    /// Attempts to move the player one step.
    MovePlayer {
        /// Direction of the attempted step.
        direction: Direction,
    },
    /// Looses an arrow in a straight line from the player's cell.
    FireArrow {
        /// Direction of the shot.
        direction: Direction,
    },
    /// Mints new gear into the player's inventory.
    GrantGear {
        /// Description of the gear to mint.
        spec: GearSpec,
    },
    /// Merges two held gears into one.
    CombineGear {
        /// Identifier of the first gear consumed by the merge.
        first: GearId,
        /// Identifier of the second gear consumed by the merge.
        second: GearId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that a maze was rebuilt from validated settings.
    MazeConfigured {
        /// Settings the maze was generated from.
        settings: MazeSettings,
        /// Seed the generation consumed.
        seed: u64,
    },
    /// Reports that a maze configuration request was rejected.
    MazeRejected {
        /// Specific reason the settings failed validation.
        reason: SettingsError,
    },
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before the step.
        from: Location,
        /// Cell the player occupies after the step.
        to: Location,
    },
    /// Reports that a movement request was rejected.
    MoveRejected {
        /// Direction of the rejected step.
        direction: Direction,
        /// Specific reason the step failed.
        reason: MoveError,
    },
    /// Confirms that the player scooped up a gold stash.
    GoldCollected {
        /// Cell the stash was found in.
        at: Location,
        /// Amount transferred to the player.
        amount: u64,
        /// Player's gold total after the transfer.
        total: u64,
    },
    /// Announces that a hazard sprang on the player.
    HazardTriggered {
        /// Cell the hazard lives in.
        at: Location,
        /// Which hazard was triggered.
        hazard: Hazard,
    },
    /// Confirms that bats carried the player to another cell.
    BatsCarried {
        /// The roost the player stumbled into.
        from: Location,
        /// The cell the bats dropped the player on.
        to: Location,
    },
    /// Announces that the expedition ended in the player's death.
    PlayerPerished {
        /// Cell the player perished in.
        at: Location,
    },
    /// Announces that the player escaped the maze.
    PlayerEscaped {
        /// The exit cell.
        at: Location,
    },
    /// Confirms that an arrow was loosed.
    ArrowFired {
        /// Cell the arrow was fired from.
        from: Location,
        /// Last cell the arrow reached before stopping.
        to: Location,
        /// Arrows left in the quiver.
        remaining: u32,
    },
    /// Reports that an arrow request was rejected.
    ArrowRejected {
        /// Specific reason the shot failed.
        reason: ArrowError,
    },
    /// Confirms that gear was minted into the inventory.
    GearGranted {
        /// The freshly minted gear.
        gear: Gear,
    },
    /// Reports that a gear request was rejected.
    GearRejected {
        /// Specific reason the request failed.
        reason: GearError,
    },
    /// Confirms that two gears merged into a new one.
    GearCombined {
        /// Identifier of the first consumed gear.
        first: GearId,
        /// Identifier of the second consumed gear.
        second: GearId,
        /// The merged gear now held instead.
        result: Gear,
    },
}

/// Immutable description of the player used for queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Cell the player currently occupies.
    pub location: Location,
    /// Gold carried so far.
    pub gold: u64,
    /// Arrows left in the quiver.
    pub arrows: u32,
    /// Remaining vitality.
    pub health: Health,
    /// Lifecycle state of the expedition.
    pub status: PlayerStatus,
}

/// Read-only view into the dense cell grid.
#[derive(Clone, Copy, Debug)]
pub struct MazeView<'a> {
    cells: &'a [CellKind],
    columns: u32,
    rows: u32,
}

impl<'a> MazeView<'a> {
    /// Captures a view backed by the provided row-major cell slice.
    #[must_use]
    pub fn new(cells: &'a [CellKind], columns: u32, rows: u32) -> Self {
        Self {
            cells,
            columns,
            rows,
        }
    }

    /// Returns the kind of the cell at `location`, if in bounds.
    #[must_use]
    pub fn kind(&self, location: Location) -> Option<CellKind> {
        self.index(location)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether the player may step onto `location`. Out-of-bounds
    /// locations are never passable.
    #[must_use]
    pub fn is_passable(&self, location: Location) -> bool {
        self.kind(location).is_some_and(|kind| kind.is_passable())
    }

    /// Reports whether `location` lies within the grid.
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        location.column() < self.columns && location.row() < self.rows
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellKind> + 'a {
        self.cells.iter().copied()
    }

    /// Provides the dimensions of the underlying grid.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    fn index(&self, location: Location) -> Option<usize> {
        if !self.contains(location) {
            return None;
        }
        let row = usize::try_from(location.row()).ok()?;
        let column = usize::try_from(location.column()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        Some(row * width + column)
    }
}

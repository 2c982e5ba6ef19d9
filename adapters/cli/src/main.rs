#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Maze Hunt expedition in the terminal.
//!
//! The adapter owns no rules: it parses player input into commands, submits
//! them through the world's `apply` entry point, and narrates the resulting
//! events. Movement intents are vetted by the movement system first so an
//! illegal step can be refused with its reason before any command is sent.

mod config;

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use maze_hunt_core::{
    CellKind, Command, Direction, Event, GearId, GearKind, GearSpec, Hazard, Location,
    MazeSettings,
};
use maze_hunt_system_analytics::Analytics;
use maze_hunt_system_bootstrap::Bootstrap;
use maze_hunt_system_movement::Movement;
use maze_hunt_world::{apply, query, World};

const HELP_TEXT: &str = "\
Actions:
  n / e / s / w            step north / east / south / west
  fire <n|e|s|w>           loose an arrow
  loot <kind> <adj> <noun> <atk> <def>
                           mint gear (kind: sword, helmet, boots)
  combine <id> <id>        merge two held gears
  gear                     list the inventory
  map                      redraw the maze
  status                   show the status line
  quit                     abandon the expedition";

/// Difficulty presets selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// 4x4 maze with a handful of hazards.
    Small,
    /// The documented 5x5 maze with 7 walls, 2 pits and 2 bats.
    Medium,
    /// 8x8 maze for long expeditions.
    Large,
}

impl Preset {
    fn settings(self) -> MazeSettings {
        match self {
            Preset::Small => MazeSettings::small(),
            Preset::Medium => MazeSettings::medium(),
            Preset::Large => MazeSettings::large(),
        }
    }
}

/// Command-line arguments for the Maze Hunt terminal adapter.
#[derive(Debug, Parser)]
#[command(name = "maze-hunt", about = "Explore a seeded maze from the terminal")]
struct Args {
    /// Difficulty preset the maze starts from.
    #[arg(long, value_enum, default_value = "medium")]
    preset: Preset,

    /// TOML file overriding individual settings fields.
    #[arg(long)]
    settings: Option<std::path::PathBuf>,

    /// Seed for maze generation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Semicolon-separated actions to run instead of reading stdin.
    #[arg(long)]
    script: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let base = args.preset.settings();
    let settings = match &args.settings {
        Some(path) => config::load_overlay(path, base)?,
        None => base,
    };
    settings.validate().context("rejected maze settings")?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut session = Session::new(settings, seed);
    println!("{}", Bootstrap::default().greeting(&session.world));
    println!("{}", render_map(&session.world));
    println!("{}", status_line(&session.world));

    match &args.script {
        Some(script) => session.run_script(script)?,
        None => session.run_interactive()?,
    }

    println!("{}", session.analytics.report().summary());
    Ok(())
}

/// Player input decoded into a single intent.
#[derive(Clone, Debug, PartialEq)]
enum Action {
    Move(Direction),
    Fire(Direction),
    Loot(GearSpec),
    Combine(GearId, GearId),
    Inventory,
    Map,
    Status,
    Help,
    Quit,
}

/// What the loop should do after executing an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Finished,
    Quit,
}

/// One expedition plus the systems that interpret it.
struct Session {
    world: World,
    movement: Movement,
    analytics: Analytics,
}

impl Session {
    fn new(settings: MazeSettings, seed: u64) -> Self {
        let mut world = World::new();
        let mut analytics = Analytics::new();
        let mut events = Vec::new();
        apply(&mut world, Command::ConfigureMaze { settings, seed }, &mut events);
        analytics.handle(&events);
        Self {
            world,
            movement: Movement::default(),
            analytics,
        }
    }

    fn run_interactive(&mut self) -> Result<()> {
        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush().context("failed to flush stdout")?;

            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .context("failed to read from stdin")?;
            if read == 0 {
                break;
            }

            match parse_action(line.trim()) {
                Err(message) => println!("{message}"),
                Ok(action) => match self.execute(action) {
                    Flow::Continue => {}
                    Flow::Finished | Flow::Quit => break,
                },
            }
        }
        Ok(())
    }

    fn run_script(&mut self, script: &str) -> Result<()> {
        for part in script.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let action = parse_action(part).map_err(|message| anyhow!(message))?;
            match self.execute(action) {
                Flow::Continue => {}
                Flow::Finished | Flow::Quit => break,
            }
        }
        Ok(())
    }

    fn execute(&mut self, action: Action) -> Flow {
        match action {
            Action::Move(direction) => {
                let player = query::player(&self.world);
                let preview =
                    self.movement
                        .preview(direction, &player, query::maze_view(&self.world));
                match preview.rejection() {
                    Some(reason) => println!("You stay put: {reason}."),
                    None => self.submit(Command::MovePlayer { direction }),
                }
            }
            Action::Fire(direction) => self.submit(Command::FireArrow { direction }),
            Action::Loot(spec) => self.submit(Command::GrantGear { spec }),
            Action::Combine(first, second) => {
                self.submit(Command::CombineGear { first, second });
            }
            Action::Inventory => self.print_inventory(),
            Action::Map => println!("{}", render_map(&self.world)),
            Action::Status => println!("{}", status_line(&self.world)),
            Action::Help => println!("{HELP_TEXT}"),
            Action::Quit => return Flow::Quit,
        }

        if query::player(&self.world).status.is_terminal() {
            Flow::Finished
        } else {
            Flow::Continue
        }
    }

    fn submit(&mut self, command: Command) {
        let mut events = Vec::new();
        apply(&mut self.world, command, &mut events);
        self.analytics.handle(&events);
        for event in &events {
            println!("{}", describe(event));
        }
    }

    fn print_inventory(&self) {
        let inventory = query::gear_inventory(&self.world);
        if inventory.is_empty() {
            println!("You carry no gear.");
            return;
        }
        for gear in inventory {
            println!(
                "#{} {} [{:?}] atk {} def {}{}",
                gear.id().get(),
                gear.full_name(),
                gear.kind(),
                gear.attack(),
                gear.defense(),
                if gear.has_combined() { " (combined)" } else { "" },
            );
        }
    }
}

fn parse_action(input: &str) -> Result<Action, String> {
    let mut tokens = input.split_whitespace();
    let Some(head) = tokens.next() else {
        return Err("Say something; try \"help\".".to_string());
    };

    let action = match head {
        "n" | "north" => Action::Move(Direction::North),
        "e" | "east" => Action::Move(Direction::East),
        "s" | "south" => Action::Move(Direction::South),
        "w" | "west" => Action::Move(Direction::West),
        "fire" => {
            let token = tokens
                .next()
                .ok_or_else(|| "Fire which way? e.g. \"fire n\".".to_string())?;
            Action::Fire(parse_direction(token)?)
        }
        "loot" => {
            let kind = parse_kind(tokens.next().ok_or_else(loot_usage)?)?;
            let adjective = tokens.next().ok_or_else(loot_usage)?.to_string();
            let noun = tokens.next().ok_or_else(loot_usage)?.to_string();
            let attack = parse_number(tokens.next().ok_or_else(loot_usage)?)?;
            let defense = parse_number(tokens.next().ok_or_else(loot_usage)?)?;
            Action::Loot(GearSpec::new(kind, adjective, noun, attack, defense))
        }
        "combine" => {
            let first = parse_gear_id(tokens.next().ok_or_else(combine_usage)?)?;
            let second = parse_gear_id(tokens.next().ok_or_else(combine_usage)?)?;
            Action::Combine(first, second)
        }
        "gear" | "inventory" => Action::Inventory,
        "map" => Action::Map,
        "status" => Action::Status,
        "help" | "?" => Action::Help,
        "quit" | "q" | "exit" => Action::Quit,
        other => return Err(format!("Unknown action \"{other}\"; try \"help\".")),
    };

    if tokens.next().is_some() {
        return Err("Trailing words after the action; try \"help\".".to_string());
    }
    Ok(action)
}

fn parse_direction(token: &str) -> Result<Direction, String> {
    match token {
        "n" | "north" => Ok(Direction::North),
        "e" | "east" => Ok(Direction::East),
        "s" | "south" => Ok(Direction::South),
        "w" | "west" => Ok(Direction::West),
        other => Err(format!("\"{other}\" is not a direction.")),
    }
}

fn parse_kind(token: &str) -> Result<GearKind, String> {
    match token {
        "sword" => Ok(GearKind::Sword),
        "helmet" => Ok(GearKind::Helmet),
        "boots" => Ok(GearKind::Boots),
        other => Err(format!("\"{other}\" is not a gear kind.")),
    }
}

fn parse_number(token: &str) -> Result<u32, String> {
    token
        .parse()
        .map_err(|_| format!("\"{token}\" is not a number."))
}

fn parse_gear_id(token: &str) -> Result<GearId, String> {
    let trimmed = token.trim_start_matches('#');
    trimmed
        .parse()
        .map(GearId::new)
        .map_err(|_| format!("\"{token}\" is not a gear id."))
}

fn loot_usage() -> String {
    "Usage: loot <kind> <adjective> <noun> <attack> <defense>.".to_string()
}

fn combine_usage() -> String {
    "Usage: combine <id> <id>.".to_string()
}

fn describe(event: &Event) -> String {
    match event {
        Event::MazeConfigured { settings, seed } => format!(
            "The maze rearranges itself ({}x{}, seed {seed}).",
            settings.rows(),
            settings.columns(),
        ),
        Event::MazeRejected { reason } => format!("Those settings will not do: {reason}."),
        Event::PlayerMoved { to, .. } => {
            format!("You step to ({}, {}).", to.column(), to.row())
        }
        Event::MoveRejected { reason, .. } => format!("You stay put: {reason}."),
        Event::GoldCollected { amount, total, .. } => {
            format!("You scoop up {amount} gold ({total} total).")
        }
        Event::HazardTriggered {
            hazard: Hazard::Pit,
            ..
        } => "The floor gives way beneath you!".to_string(),
        Event::HazardTriggered {
            hazard: Hazard::Bats,
            ..
        } => "Giant bats swarm out of the dark!".to_string(),
        Event::BatsCarried { to, .. } => {
            format!("The bats drop you at ({}, {}).", to.column(), to.row())
        }
        Event::PlayerPerished { .. } => "The expedition ends here.".to_string(),
        Event::PlayerEscaped { .. } => "Daylight! You escape the maze.".to_string(),
        Event::ArrowFired { to, remaining, .. } => format!(
            "Your arrow clatters down at ({}, {}); {remaining} left.",
            to.column(),
            to.row(),
        ),
        Event::ArrowRejected { reason } => format!("No shot: {reason}."),
        Event::GearGranted { gear } => format!(
            "You now carry the {} (#{}).",
            gear.full_name(),
            gear.id().get(),
        ),
        Event::GearRejected { reason } => format!("The gear resists: {reason}."),
        Event::GearCombined { result, .. } => format!(
            "The pieces fuse into the {} (#{}).",
            result.full_name(),
            result.id().get(),
        ),
    }
}

fn render_map(world: &World) -> String {
    let view = query::maze_view(world);
    let (columns, rows) = view.dimensions();
    let player = query::player(world);

    let mut map = String::new();
    for row in 0..rows {
        for column in 0..columns {
            let cell = Location::new(column, row);
            if cell == player.location {
                map.push('@');
            } else {
                map.push(glyph_for(view.kind(cell)));
            }
        }
        if row + 1 < rows {
            map.push('\n');
        }
    }
    map
}

fn glyph_for(kind: Option<CellKind>) -> char {
    match kind {
        Some(CellKind::Wall) => '#',
        Some(CellKind::Gold { amount }) if amount > 0 => '$',
        Some(CellKind::Pit) => '^',
        Some(CellKind::Bats) => '~',
        Some(CellKind::Exit) => '>',
        Some(CellKind::Gold { .. }) | Some(CellKind::Empty) | None => '.',
    }
}

fn status_line(world: &World) -> String {
    let player = query::player(world);
    let to_exit = query::exit_distance(world, player.location)
        .map_or_else(|| "unknown".to_string(), |distance| distance.to_string());
    format!(
        "At ({}, {}) | gold {} | arrows {} | health {} | exit {} steps away",
        player.location.column(),
        player.location.row(),
        player.gold,
        player.arrows,
        player.health.get(),
        to_exit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_shots() {
        assert_eq!(parse_action("n"), Ok(Action::Move(Direction::North)));
        assert_eq!(parse_action("east"), Ok(Action::Move(Direction::East)));
        assert_eq!(parse_action("fire w"), Ok(Action::Fire(Direction::West)));
        assert!(parse_action("fire").is_err());
    }

    #[test]
    fn parses_gear_actions() {
        assert_eq!(
            parse_action("loot sword sharp blade 5 1"),
            Ok(Action::Loot(GearSpec::new(
                GearKind::Sword,
                "sharp",
                "blade",
                5,
                1,
            )))
        );
        assert_eq!(
            parse_action("combine #0 1"),
            Ok(Action::Combine(GearId::new(0), GearId::new(1)))
        );
        assert!(parse_action("loot wand shiny stick 1 1").is_err());
        assert!(parse_action("combine one two").is_err());
    }

    #[test]
    fn rejects_nonsense_and_trailing_words() {
        assert!(parse_action("").is_err());
        assert!(parse_action("dance").is_err());
        assert!(parse_action("n please").is_err());
    }

    #[test]
    fn map_marks_the_player_at_the_entry() {
        let session = Session::new(MazeSettings::medium(), 4);
        let map = render_map(&session.world);

        assert_eq!(map.lines().count(), 5);
        assert!(map.lines().all(|line| line.chars().count() == 5));
        assert_eq!(map.chars().next(), Some('@'));
        assert!(map.contains('>'));
    }

    #[test]
    fn status_line_reports_the_quiver() {
        let session = Session::new(MazeSettings::medium(), 4);
        assert!(status_line(&session.world).contains("arrows 3"));
    }
}

//! Optional TOML settings file support for the terminal adapter.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use maze_hunt_core::MazeSettings;
use serde::Deserialize;

/// Partial settings overlay read from disk; absent fields keep the values of
/// the selected preset.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    rows: Option<u32>,
    columns: Option<u32>,
    walls: Option<u32>,
    pits: Option<u32>,
    bats: Option<u32>,
    gold_cells: Option<u32>,
    arrows: Option<u32>,
}

impl SettingsFile {
    fn over(self, base: MazeSettings) -> MazeSettings {
        MazeSettings::new(
            self.rows.unwrap_or(base.rows()),
            self.columns.unwrap_or(base.columns()),
            self.walls.unwrap_or(base.walls()),
            self.pits.unwrap_or(base.pits()),
            self.bats.unwrap_or(base.bats()),
            self.gold_cells.unwrap_or(base.gold_cells()),
            self.arrows.unwrap_or(base.arrows()),
        )
    }
}

/// Reads a settings file and overlays it onto `base`.
pub(crate) fn load_overlay(path: &Path, base: MazeSettings) -> Result<MazeSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    let file: SettingsFile =
        toml::from_str(&contents).context("failed to parse settings toml contents")?;
    Ok(file.over(base))
}

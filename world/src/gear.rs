//! Authoritative gear inventory and identifier allocation.

use std::collections::BTreeMap;

use maze_hunt_core::{Gear, GearError, GearId, GearSpec};

/// Inventory that stores held gear and allocates monotonically increasing
/// identifiers.
///
/// There is no ambient counter: every identifier comes from this registry,
/// and the counter only advances when a mint or merge actually succeeds.
#[derive(Debug)]
pub(crate) struct GearRegistry {
    entries: BTreeMap<GearId, Gear>,
    next_gear_id: GearId,
}

impl GearRegistry {
    /// Creates an empty registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_gear_id: GearId::new(0),
        }
    }

    /// Mints gear from a spec and stores it in the inventory.
    pub(crate) fn mint(&mut self, spec: GearSpec) -> Result<Gear, GearError> {
        let id = self.next_gear_id;
        let gear = Gear::new(id, spec)?;
        self.next_gear_id = GearId::new(id.get() + 1);
        let _ = self.entries.insert(id, gear.clone());
        Ok(gear)
    }

    /// Merges two held gears into a new one; the consumed pair leaves the
    /// inventory and the merged gear takes a fresh identifier.
    pub(crate) fn merge(&mut self, first: GearId, second: GearId) -> Result<Gear, GearError> {
        let Some(left) = self.entries.get(&first) else {
            return Err(GearError::UnknownGear);
        };
        let Some(right) = self.entries.get(&second) else {
            return Err(GearError::UnknownGear);
        };

        let id = self.next_gear_id;
        let merged = left.combine(right, id)?;
        self.next_gear_id = GearId::new(id.get() + 1);
        let _ = self.entries.remove(&first);
        let _ = self.entries.remove(&second);
        let _ = self.entries.insert(id, merged.clone());
        Ok(merged)
    }

    /// Iterates over held gear in ascending identifier order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Gear> {
        self.entries.values()
    }
}

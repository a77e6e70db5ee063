//! Per-location state for blocks the player can operate.
//!
//! Door states and crate contents live outside the chunk grid, keyed by
//! world coordinate and created lazily on first interaction.

use rustc_hash::FxHashMap;

use crate::core::block::BlockType;
use crate::systems::inventory::Inventory;

/// World-coordinate keyed state for doors and storage crates.
#[derive(Default)]
pub struct InteractiveBlocks {
    /// Airlock door states; open when true. Closed doors have no entry.
    pub door_states: FxHashMap<(i32, i32, i32), bool>,
    /// Crate contents per location.
    pub crate_inventories: FxHashMap<(i32, i32, i32), FxHashMap<BlockType, u32>>,
}

impl InteractiveBlocks {
    pub fn new() -> Self {
        InteractiveBlocks::default()
    }

    pub fn is_door_open(&self, x: i32, y: i32, z: i32) -> bool {
        self.door_states.get(&(x, y, z)).copied().unwrap_or(false)
    }

    /// Flip a door between its two states; returns the new state.
    pub fn toggle_door(&mut self, x: i32, y: i32, z: i32) -> bool {
        let open = !self.is_door_open(x, y, z);
        self.door_states.insert((x, y, z), open);
        open
    }

    pub fn crate_inventory(&mut self, x: i32, y: i32, z: i32) -> &mut FxHashMap<BlockType, u32> {
        self.crate_inventories.entry((x, y, z)).or_default()
    }

    /// Move one block from the player inventory into a crate.
    pub fn deposit_to_crate(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        block: BlockType,
        player_inv: &mut Inventory,
    ) -> bool {
        if !player_inv.remove(block, 1) {
            return false;
        }
        let crate_inv = self.crate_inventory(x, y, z);
        *crate_inv.entry(block).or_insert(0) += 1;
        true
    }

    /// Move one block from a crate into the player inventory.
    pub fn withdraw_from_crate(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        block: BlockType,
        player_inv: &mut Inventory,
    ) -> bool {
        let crate_inv = self.crate_inventory(x, y, z);
        match crate_inv.get_mut(&block) {
            Some(qty) if *qty > 1 => *qty -= 1,
            Some(_) => {
                crate_inv.remove(&block);
            }
            None => return false,
        }
        player_inv.add(block, 1);
        true
    }
}

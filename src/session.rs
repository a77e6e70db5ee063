//! The game-loop context.
//!
//! One explicitly constructed object owns all per-session state: the chunk
//! store, interactive-block maps, the player, and the survival systems.
//! The host drives it with one `update` per frame plus discrete actions
//! (mine/place/interact) between frames; nothing in here blocks or runs
//! concurrently.

use crate::constants::*;
use crate::core::block::BlockType;
use crate::player::physics::{Player, ThrustInput};
use crate::player::raycast::{RayHit, raycast};
use crate::render::atlas::TextureAtlas;
use crate::systems::fuel::Fuel;
use crate::systems::health::Health;
use crate::systems::inventory::Inventory;
use crate::systems::oxygen::Oxygen;
use crate::systems::trading::TradingPost;
use crate::world::interactive::InteractiveBlocks;
use crate::world::store::{World, split_axis};

/// What opening a crate or toggling a door produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    DoorToggled { open: bool },
    CrateOpened { at: (i32, i32, i32) },
}

pub struct GameSession {
    pub world: World,
    pub interactive: InteractiveBlocks,
    pub atlas: TextureAtlas,
    pub player: Player,
    pub inventory: Inventory,
    pub trading: TradingPost,
    pub health: Health,
    pub oxygen: Oxygen,
    pub fuel: Fuel,
    pub selected_block: BlockType,
}

impl GameSession {
    pub fn new(seed: u32) -> Self {
        GameSession {
            world: World::new(seed),
            interactive: InteractiveBlocks::new(),
            atlas: TextureAtlas::new(),
            player: Player::new(),
            inventory: Inventory::new(),
            trading: TradingPost::new(),
            health: Health::new(),
            oxygen: Oxygen::new(),
            fuel: Fuel::new(),
            selected_block: BlockType::Basalt,
        }
    }

    /// Realize the whole asteroid field and build every mesh. Runs once at
    /// world start.
    pub fn start(&mut self) {
        self.world
            .generate_all(Some(&self.interactive), Some(&self.atlas));
    }

    /// One simulation tick.
    pub fn update(&mut self, dt: f32, input: &ThrustInput) {
        let thrusting = input.any() && self.fuel.can_thrust();
        self.player.update(dt, input, thrusting, &self.world);
        self.fuel.update(dt, thrusting);
        self.oxygen
            .update(dt, self.player.position, self.player.velocity, &self.world);
        if self.oxygen.is_depleted() {
            self.health.damage(SUFFOCATION_DAMAGE_RATE * dt);
        }
    }

    /// The block the player is looking at, within reach.
    pub fn target(&self) -> Option<RayHit> {
        raycast(
            &self.world,
            self.player.position,
            self.player.look_dir(),
            REACH_DISTANCE,
        )
    }

    /// Mine the targeted block into the inventory. Returns what was mined.
    pub fn mine(&mut self) -> Option<BlockType> {
        let hit = self.target()?;
        let (x, y, z) = hit.block;
        let block = self.world.get_block(x, y, z);
        if block == BlockType::Air {
            return None;
        }
        self.world.set_block(x, y, z, BlockType::Air);
        self.rebuild_around(x, y, z);
        self.inventory.add(block, 1);
        tracing::debug!(?block, x, y, z, "mined");
        Some(block)
    }

    /// Place the selected block against the targeted face. Refunds the
    /// inventory take if the cell would overlap the player.
    pub fn place(&mut self) -> bool {
        let Some(hit) = self.target() else {
            return false;
        };
        if !self.inventory.remove(self.selected_block, 1) {
            return false;
        }
        let x = hit.block.0 + hit.normal.0;
        let y = hit.block.1 + hit.normal.1;
        let z = hit.block.2 + hit.normal.2;

        if self.would_overlap_player(x, y, z) {
            self.inventory.add(self.selected_block, 1);
            return false;
        }

        self.world.set_block(x, y, z, self.selected_block);
        self.rebuild_around(x, y, z);
        tracing::debug!(block = ?self.selected_block, x, y, z, "placed");
        true
    }

    /// Operate the targeted interactive block, if any.
    pub fn interact(&mut self) -> Option<Interaction> {
        let hit = self.target()?;
        let (x, y, z) = hit.block;
        match self.world.get_block(x, y, z) {
            BlockType::AirlockDoor => {
                let open = self.interactive.toggle_door(x, y, z);
                self.rebuild_around(x, y, z);
                Some(Interaction::DoorToggled { open })
            }
            BlockType::StorageCrate => Some(Interaction::CrateOpened { at: (x, y, z) }),
            _ => None,
        }
    }

    fn would_overlap_player(&self, x: i32, y: i32, z: i32) -> bool {
        let eye = self.player.position;
        let px = eye.x.floor() as i32;
        let py = eye.y.floor() as i32;
        let pz = eye.z.floor() as i32;
        px == x && pz == z && (py == y || py - 1 == y)
    }

    /// Rebuild the chunk containing a changed block, plus any neighbor chunk
    /// whose shared border the block sits on.
    fn rebuild_around(&mut self, wx: i32, wy: i32, wz: i32) {
        let (cx, lx) = split_axis(wx);
        let (cy, ly) = split_axis(wy);
        let (cz, lz) = split_axis(wz);

        let interactive = &self.interactive;
        let atlas = &self.atlas;
        self.world
            .rebuild_chunk_mesh(cx, cy, cz, Some(interactive), Some(atlas));

        if lx == 0 {
            self.world
                .rebuild_chunk_mesh(cx - 1, cy, cz, Some(interactive), Some(atlas));
        }
        if lx == CHUNK_SIZE - 1 {
            self.world
                .rebuild_chunk_mesh(cx + 1, cy, cz, Some(interactive), Some(atlas));
        }
        if ly == 0 {
            self.world
                .rebuild_chunk_mesh(cx, cy - 1, cz, Some(interactive), Some(atlas));
        }
        if ly == CHUNK_SIZE - 1 {
            self.world
                .rebuild_chunk_mesh(cx, cy + 1, cz, Some(interactive), Some(atlas));
        }
        if lz == 0 {
            self.world
                .rebuild_chunk_mesh(cx, cy, cz - 1, Some(interactive), Some(atlas));
        }
        if lz == CHUNK_SIZE - 1 {
            self.world
                .rebuild_chunk_mesh(cx, cy, cz + 1, Some(interactive), Some(atlas));
        }
    }
}

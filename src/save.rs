use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::core::block::BlockType;
use crate::session::GameSession;

const MAGIC_HEADER: &[u8; 4] = b"ASTM";
const VERSION: u32 = 1;

pub const SAVE_FILE_EXTENSION: &str = "astm";
pub const DEFAULT_SAVE_FILE: &str = "world.astm";

/// One player-modified chunk, raw block codes in storage order.
#[derive(Serialize, Deserialize)]
pub struct SavedChunk {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
    pub blocks: Vec<u8>,
}

#[derive(Serialize, Deserialize)]
pub struct SavedPlayer {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub vx: f32,
    pub vy: f32,
    pub vz: f32,
    pub yaw: f32,
    pub pitch: f32,
}

/// Everything a session needs to come back: the world seed regenerates the
/// base asteroid field, the dirty chunks overlay the player's edits on top.
#[derive(Serialize, Deserialize)]
pub struct SavedGame {
    pub seed: u32,
    pub chunks: Vec<SavedChunk>,
    pub player: SavedPlayer,
    pub inventory: Vec<(u8, u32)>,
    pub credits: u32,
    pub health: f32,
    pub oxygen: f32,
    pub fuel: f32,
    pub door_states: Vec<((i32, i32, i32), bool)>,
    pub crate_inventories: Vec<((i32, i32, i32), Vec<(u8, u32)>)>,
}

impl SavedGame {
    /// Snapshot a session. Only chunks in the dirty set are captured.
    pub fn from_session(session: &GameSession) -> Self {
        let mut chunks = Vec::with_capacity(session.world.dirty.len());
        for &(cx, cy, cz) in &session.world.dirty {
            if let Some(chunk) = session.world.chunks.get(&(cx, cy, cz)) {
                chunks.push(SavedChunk {
                    cx,
                    cy,
                    cz,
                    blocks: chunk.to_bytes(),
                });
            }
        }

        let p = &session.player;
        let inventory = session
            .inventory
            .iter()
            .map(|(block, count)| (block.code(), count))
            .collect();

        let door_states = session
            .interactive
            .door_states
            .iter()
            .map(|(&pos, &open)| (pos, open))
            .collect();
        let crate_inventories = session
            .interactive
            .crate_inventories
            .iter()
            .map(|(&pos, contents)| {
                (
                    pos,
                    contents
                        .iter()
                        .map(|(block, &qty)| (block.code(), qty))
                        .collect(),
                )
            })
            .collect();

        SavedGame {
            seed: session.world.seed().unwrap_or(0),
            chunks,
            player: SavedPlayer {
                x: p.position.x,
                y: p.position.y,
                z: p.position.z,
                vx: p.velocity.x,
                vy: p.velocity.y,
                vz: p.velocity.z,
                yaw: p.yaw,
                pitch: p.pitch,
            },
            inventory,
            credits: session.trading.credits,
            health: session.health.hp,
            oxygen: session.oxygen.level,
            fuel: session.fuel.level,
            door_states,
            crate_inventories,
        }
    }

    /// Rebuild a full session: regenerate the base world from the saved
    /// seed, overlay the saved chunks, restore collaborator state, then
    /// rebuild every mesh.
    pub fn into_session(self) -> GameSession {
        let mut session = GameSession::new(self.seed);
        session
            .world
            .generate_all(Some(&session.interactive), Some(&session.atlas));

        for saved in &self.chunks {
            // Materialize first so edits outside any asteroid's bounds come
            // back too, then overwrite with the saved blocks
            session.world.get_chunk(saved.cx, saved.cy, saved.cz);
            session.world.mark_generated(saved.cx, saved.cy, saved.cz);
            if let Some(chunk) = session
                .world
                .chunks
                .get_mut(&(saved.cx, saved.cy, saved.cz))
            {
                chunk.fill_from_bytes(&saved.blocks);
            }
            session.world.dirty.insert((saved.cx, saved.cy, saved.cz));
        }

        session.player.position = glam::Vec3::new(self.player.x, self.player.y, self.player.z);
        session.player.velocity = glam::Vec3::new(self.player.vx, self.player.vy, self.player.vz);
        session.player.yaw = self.player.yaw;
        session.player.pitch = self.player.pitch;

        session.inventory.clear();
        for (code, count) in self.inventory {
            session.inventory.add(BlockType::from_code(code), count);
        }

        session.trading.credits = self.credits;
        session.health.hp = self.health;
        session.oxygen.level = self.oxygen;
        session.fuel.level = self.fuel;

        session.interactive.door_states.clear();
        for (pos, open) in self.door_states {
            session.interactive.door_states.insert(pos, open);
        }
        session.interactive.crate_inventories.clear();
        for (pos, contents) in self.crate_inventories {
            let crate_inv = session.interactive.crate_inventory(pos.0, pos.1, pos.2);
            for (code, qty) in contents {
                crate_inv.insert(BlockType::from_code(code), qty);
            }
        }

        session
            .world
            .rebuild_all_meshes(Some(&session.interactive), Some(&session.atlas));
        session
    }
}

pub fn save_game<P: AsRef<Path>>(path: P, game: &SavedGame) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("Cannot create save file: {}", e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(MAGIC_HEADER).map_err(|e| e.to_string())?;
    writer
        .write_all(&VERSION.to_le_bytes())
        .map_err(|e| e.to_string())?;

    let data = bincode::serialize(game).map_err(|e| format!("Serialization error: {}", e))?;

    let size = data.len() as u64;
    writer
        .write_all(&size.to_le_bytes())
        .map_err(|e| e.to_string())?;
    writer.write_all(&data).map_err(|e| e.to_string())?;
    writer.flush().map_err(|e| e.to_string())?;

    tracing::info!(chunks = game.chunks.len(), "game saved");
    Ok(())
}

pub fn load_game<P: AsRef<Path>>(path: P) -> Result<SavedGame, String> {
    let file = File::open(path).map_err(|e| format!("Cannot open save file: {}", e))?;
    let mut reader = BufReader::new(file);
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(|e| e.to_string())?;
    if &magic != MAGIC_HEADER {
        return Err("Invalid save file format".to_string());
    }

    let mut version_bytes = [0u8; 4];
    reader
        .read_exact(&mut version_bytes)
        .map_err(|e| e.to_string())?;
    let version = u32::from_le_bytes(version_bytes);
    if version != VERSION {
        return Err(format!("Unsupported save version: {}", version));
    }

    let mut size_bytes = [0u8; 8];
    reader
        .read_exact(&mut size_bytes)
        .map_err(|e| e.to_string())?;
    let size = u64::from_le_bytes(size_bytes) as usize;

    let mut data = vec![0u8; size];
    reader.read_exact(&mut data).map_err(|e| e.to_string())?;

    bincode::deserialize(&data).map_err(|e| format!("Deserialization error: {}", e))
}

/// Platform save directory, e.g. ~/.local/share/astromine on Linux.
pub fn default_save_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "astromine")
        .map(|dirs| dirs.data_dir().join(DEFAULT_SAVE_FILE))
}

// Core module with fundamental types
pub mod core;

// Player module with physics and aiming
pub mod player;

// Render module with mesh buffers and atlas addressing
pub mod render;

// World module with generation, storage, and meshing
pub mod world;

// Survival and economy systems
pub mod systems;

// Other modules
pub mod constants;
pub mod save;
pub mod session;

// Re-exports
pub use constants::*;
pub use crate::core::{BlockType, Chunk, Vertex};
pub use player::{Player, RayHit, ThrustInput, raycast};
pub use render::{ChunkMesh, TextureAtlas, UvRect, add_quad};
pub use save::{DEFAULT_SAVE_FILE, SavedGame, default_save_path, load_game, save_game};
pub use session::{GameSession, Interaction};
pub use systems::{Fuel, Health, Inventory, Oxygen, TradingPost};
pub use world::{
    AsteroidDef, AsteroidGenerator, ChunkPos, InteractiveBlocks, Noise3d, World, build_chunk_mesh,
    split_axis,
};

// World constants
pub const CHUNK_SIZE: i32 = 16;
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;

// Asteroid field constants
pub const ASTEROID_COUNT_MIN: u32 = 12;
pub const ASTEROID_COUNT_SPAN: f64 = 8.0;
pub const ASTEROID_PLACEMENT_SPAN: f64 = 200.0;
pub const ASTEROID_RADIUS_MIN: i32 = 4;
pub const ASTEROID_RADIUS_SPAN: f64 = 10.0;
// Cells within radius + margin of a center are candidates for solid fill
pub const ASTEROID_MARGIN: i32 = 3;

// Asteroid shaping: shape noise biased by inverse normalized radius vs a cutoff
pub const SHAPE_FREQUENCY: f64 = 0.15;
pub const SOLID_CUTOFF: f64 = 0.5;
pub const RADIAL_BIAS: f64 = 1.2;
// Secondary, phase-offset noise field partitions the interior into ore bands
pub const ORE_FREQUENCY: f64 = 0.3;
pub const ORE_PHASE_OFFSET: f64 = 100.0;
pub const SHELL_FRACTION: f64 = 0.75;
pub const IRON_THRESHOLD: f64 = 0.4;
pub const ICE_THRESHOLD: f64 = -0.3;
pub const NICKEL_THRESHOLD: f64 = -0.1;

// Open airlock doors render as a thin slab flush with the cell's low-Z face
pub const DOOR_SLAB_THICKNESS: f32 = 0.15;

// Texture atlas: one 16px strip per block type, single row
pub const ATLAS_TILE_SIZE: u32 = 16;

// Player constants
pub const PLAYER_HALF_WIDTH: f32 = 0.3;
pub const PLAYER_HEIGHT: f32 = 1.7;
pub const THRUST_ACCELERATION: f32 = 20.0;
pub const VELOCITY_DRAG: f32 = 0.97;
pub const BOOT_GRAVITY: f32 = 15.0;
pub const REACH_DISTANCE: f32 = 8.0;

// Survival constants
pub const OXYGEN_MAX: f32 = 100.0;
pub const OXYGEN_DEPLETE_RATE: f32 = 1.0;
pub const OXYGEN_REFILL_RATE: f32 = 5.0;
pub const OXYGEN_SHELTER_RADIUS: i32 = 2;
pub const OXYGEN_REST_SPEED: f32 = 1.0;
pub const FUEL_MAX: f32 = 100.0;
pub const FUEL_DEPLETE_RATE: f32 = 15.0;
pub const FUEL_RECHARGE_RATE: f32 = 3.0;
pub const HEALTH_MAX: f32 = 20.0;
pub const SUFFOCATION_DAMAGE_RATE: f32 = 2.0;
pub const STARTING_CREDITS: u32 = 1000;

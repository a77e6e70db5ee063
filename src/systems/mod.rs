//! Survival and economy systems
//! Simple stateful counters that collaborate with the voxel core.

pub mod crafting;
pub mod fuel;
pub mod health;
pub mod inventory;
pub mod oxygen;
pub mod trading;

// Re-export commonly used types
pub use crafting::{RECIPES, Recipe, can_craft, craft};
pub use fuel::Fuel;
pub use health::Health;
pub use inventory::Inventory;
pub use oxygen::Oxygen;
pub use trading::{PriceEntry, TradingPost};

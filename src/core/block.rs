use serde::{Deserialize, Serialize};

/// Block type codes. Zero is always empty space: no collision, no render.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Air = 0,
    Basalt = 1,
    IronOre = 2,
    Ice = 3,
    Nickel = 4,
    Regolith = 5,
    SteelPlank = 6,
    Glass = 7,
    AirlockDoor = 8,
    StorageCrate = 9,
    WaterTank = 10,
    ReinforcedHull = 11,
}

impl BlockType {
    /// Number of block types, atlas strip count included Air.
    pub const COUNT: u32 = 12;

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a raw persistence byte. Unknown codes decode to Air.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => BlockType::Basalt,
            2 => BlockType::IronOre,
            3 => BlockType::Ice,
            4 => BlockType::Nickel,
            5 => BlockType::Regolith,
            6 => BlockType::SteelPlank,
            7 => BlockType::Glass,
            8 => BlockType::AirlockDoor,
            9 => BlockType::StorageCrate,
            10 => BlockType::WaterTank,
            11 => BlockType::ReinforcedHull,
            _ => BlockType::Air,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Air => "Air",
            BlockType::Basalt => "Basalt",
            BlockType::IronOre => "Iron Ore",
            BlockType::Ice => "Ice",
            BlockType::Nickel => "Nickel",
            BlockType::Regolith => "Regolith",
            BlockType::SteelPlank => "Steel Plank",
            BlockType::Glass => "Glass",
            BlockType::AirlockDoor => "Airlock Door",
            BlockType::StorageCrate => "Storage Crate",
            BlockType::WaterTank => "Water Tank",
            BlockType::ReinforcedHull => "Reinforced Hull",
        }
    }

    pub fn color(&self) -> [f32; 3] {
        match self {
            BlockType::Air => [0.0, 0.0, 0.0],
            BlockType::Basalt => [0.25, 0.25, 0.28],
            BlockType::IronOre => [0.55, 0.33, 0.2],
            BlockType::Ice => [0.7, 0.85, 0.95],
            BlockType::Nickel => [0.5, 0.55, 0.45],
            BlockType::Regolith => [0.45, 0.4, 0.35],
            BlockType::SteelPlank => [0.55, 0.6, 0.65],
            BlockType::Glass => [0.8, 0.9, 0.95],
            BlockType::AirlockDoor => [0.4, 0.45, 0.5],
            BlockType::StorageCrate => [0.6, 0.5, 0.3],
            BlockType::WaterTank => [0.3, 0.5, 0.8],
            BlockType::ReinforcedHull => [0.4, 0.42, 0.38],
        }
    }

    pub fn is_solid(&self) -> bool {
        *self != BlockType::Air
    }

    /// Blocks the player can activate with the interact key.
    pub fn is_interactive(&self) -> bool {
        matches!(self, BlockType::AirlockDoor | BlockType::StorageCrate)
    }

    /// Horizontal strip index in the shared atlas texture.
    pub fn atlas_index(&self) -> u32 {
        self.code() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for code in 0..BlockType::COUNT as u8 {
            let block = BlockType::from_code(code);
            assert_eq!(block.code(), code);
        }
    }

    #[test]
    fn unknown_codes_decode_to_air() {
        assert_eq!(BlockType::from_code(12), BlockType::Air);
        assert_eq!(BlockType::from_code(255), BlockType::Air);
    }

    #[test]
    fn only_air_is_empty() {
        assert!(!BlockType::Air.is_solid());
        for code in 1..BlockType::COUNT as u8 {
            assert!(BlockType::from_code(code).is_solid());
        }
    }
}

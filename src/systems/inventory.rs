use rustc_hash::FxHashMap;

use crate::core::block::BlockType;

/// Counted block stacks. Zero-count entries are removed so iteration only
/// ever sees what the player actually holds.
#[derive(Default)]
pub struct Inventory {
    items: FxHashMap<BlockType, u32>,
}

impl Inventory {
    /// The starter kit: enough hull material to build a first shelter.
    pub fn new() -> Self {
        let mut inventory = Inventory::empty();
        inventory.add(BlockType::Basalt, 64);
        inventory.add(BlockType::SteelPlank, 32);
        inventory.add(BlockType::Glass, 16);
        inventory.add(BlockType::AirlockDoor, 8);
        inventory.add(BlockType::StorageCrate, 4);
        inventory
    }

    pub fn empty() -> Self {
        Inventory::default()
    }

    pub fn count(&self, block: BlockType) -> u32 {
        self.items.get(&block).copied().unwrap_or(0)
    }

    pub fn add(&mut self, block: BlockType, count: u32) {
        if count > 0 {
            *self.items.entry(block).or_insert(0) += count;
        }
    }

    /// Remove `count` blocks if present; false (and no change) otherwise.
    pub fn remove(&mut self, block: BlockType, count: u32) -> bool {
        let current = self.count(block);
        if current < count {
            return false;
        }
        if current == count {
            self.items.remove(&block);
        } else {
            self.items.insert(block, current - count);
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockType, u32)> + '_ {
        self.items.iter().map(|(&block, &count)| (block, count))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut inv = Inventory::empty();
        inv.add(BlockType::IronOre, 3);
        assert_eq!(inv.count(BlockType::IronOre), 3);
        assert!(inv.remove(BlockType::IronOre, 2));
        assert_eq!(inv.count(BlockType::IronOre), 1);
        assert!(!inv.remove(BlockType::IronOre, 2));
        assert_eq!(inv.count(BlockType::IronOre), 1);
        assert!(inv.remove(BlockType::IronOre, 1));
        assert_eq!(inv.count(BlockType::IronOre), 0);
    }

    #[test]
    fn emptied_stacks_disappear_from_iteration() {
        let mut inv = Inventory::empty();
        inv.add(BlockType::Ice, 1);
        assert!(inv.remove(BlockType::Ice, 1));
        assert_eq!(inv.iter().count(), 0);
    }

    #[test]
    fn starter_kit_contents() {
        let inv = Inventory::new();
        assert_eq!(inv.count(BlockType::Basalt), 64);
        assert_eq!(inv.count(BlockType::AirlockDoor), 8);
        assert_eq!(inv.count(BlockType::IronOre), 0);
    }
}

use crate::core::block::BlockType;
use crate::systems::inventory::Inventory;

/// A fixed conversion of input stacks to output stacks.
pub struct Recipe {
    pub inputs: &'static [(BlockType, u32)],
    pub outputs: &'static [(BlockType, u32)],
    pub label: &'static str,
}

pub const RECIPES: &[Recipe] = &[
    Recipe {
        inputs: &[(BlockType::IronOre, 4)],
        outputs: &[(BlockType::SteelPlank, 2)],
        label: "4 Iron Ore -> 2 Steel Plank",
    },
    Recipe {
        inputs: &[(BlockType::Ice, 2)],
        outputs: &[(BlockType::WaterTank, 1)],
        label: "2 Ice -> 1 Water Tank",
    },
    Recipe {
        inputs: &[(BlockType::Basalt, 4)],
        outputs: &[(BlockType::Regolith, 4)],
        label: "4 Basalt -> 4 Regolith",
    },
    Recipe {
        inputs: &[(BlockType::SteelPlank, 4), (BlockType::Glass, 2)],
        outputs: &[(BlockType::AirlockDoor, 1)],
        label: "4 Steel Plank + 2 Glass -> 1 Airlock Door",
    },
    Recipe {
        inputs: &[(BlockType::SteelPlank, 6)],
        outputs: &[(BlockType::StorageCrate, 1)],
        label: "6 Steel Plank -> 1 Storage Crate",
    },
    Recipe {
        inputs: &[(BlockType::Nickel, 2), (BlockType::IronOre, 2)],
        outputs: &[(BlockType::ReinforcedHull, 1)],
        label: "2 Nickel + 2 Iron Ore -> 1 Reinforced Hull",
    },
];

pub fn can_craft(recipe: &Recipe, inventory: &Inventory) -> bool {
    recipe
        .inputs
        .iter()
        .all(|&(block, qty)| inventory.count(block) >= qty)
}

/// Consume inputs and add outputs. Atomic: nothing is consumed unless every
/// input is present.
pub fn craft(recipe: &Recipe, inventory: &mut Inventory) -> bool {
    if !can_craft(recipe, inventory) {
        return false;
    }
    for &(block, qty) in recipe.inputs {
        inventory.remove(block, qty);
    }
    for &(block, qty) in recipe.outputs {
        inventory.add(block, qty);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn craft_consumes_inputs_and_yields_outputs() {
        let mut inv = Inventory::empty();
        inv.add(BlockType::IronOre, 5);

        assert!(craft(&RECIPES[0], &mut inv));
        assert_eq!(inv.count(BlockType::IronOre), 1);
        assert_eq!(inv.count(BlockType::SteelPlank), 2);
    }

    #[test]
    fn craft_is_atomic_on_missing_inputs() {
        let mut inv = Inventory::empty();
        // Door needs 4 planks and 2 glass; give planks only
        inv.add(BlockType::SteelPlank, 4);

        let door = &RECIPES[3];
        assert!(!can_craft(door, &inv));
        assert!(!craft(door, &mut inv));
        assert_eq!(inv.count(BlockType::SteelPlank), 4);
        assert_eq!(inv.count(BlockType::AirlockDoor), 0);
    }

    #[test]
    fn multi_input_recipe() {
        let mut inv = Inventory::empty();
        inv.add(BlockType::Nickel, 2);
        inv.add(BlockType::IronOre, 2);

        assert!(craft(&RECIPES[5], &mut inv));
        assert_eq!(inv.count(BlockType::Nickel), 0);
        assert_eq!(inv.count(BlockType::IronOre), 0);
        assert_eq!(inv.count(BlockType::ReinforcedHull), 1);
    }
}

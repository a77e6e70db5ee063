use crate::constants::STARTING_CREDITS;
use crate::core::block::BlockType;
use crate::systems::inventory::Inventory;

/// Station prices per unit. Buy is what the player pays, sell is what the
/// station pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceEntry {
    pub buy: u32,
    pub sell: u32,
}

const PRICES: &[(BlockType, PriceEntry)] = &[
    (BlockType::Basalt, PriceEntry { buy: 5, sell: 2 }),
    (BlockType::Regolith, PriceEntry { buy: 5, sell: 2 }),
    (BlockType::Ice, PriceEntry { buy: 8, sell: 4 }),
    (BlockType::Nickel, PriceEntry { buy: 20, sell: 12 }),
    (BlockType::IronOre, PriceEntry { buy: 30, sell: 18 }),
    (BlockType::SteelPlank, PriceEntry { buy: 40, sell: 25 }),
    (BlockType::Glass, PriceEntry { buy: 35, sell: 20 }),
    (BlockType::AirlockDoor, PriceEntry { buy: 80, sell: 50 }),
    (BlockType::StorageCrate, PriceEntry { buy: 60, sell: 35 }),
];

/// Credit balance plus buy/sell against the fixed price table.
pub struct TradingPost {
    pub credits: u32,
}

impl TradingPost {
    pub fn new() -> Self {
        TradingPost {
            credits: STARTING_CREDITS,
        }
    }

    pub fn price(block: BlockType) -> Option<PriceEntry> {
        PRICES
            .iter()
            .find(|(b, _)| *b == block)
            .map(|(_, price)| *price)
    }

    pub fn tradeable() -> &'static [(BlockType, PriceEntry)] {
        PRICES
    }

    /// Buy `qty` blocks into the inventory; false if the block is not traded
    /// or credits run short.
    pub fn buy(&mut self, block: BlockType, qty: u32, inventory: &mut Inventory) -> bool {
        let Some(price) = Self::price(block) else {
            return false;
        };
        let cost = price.buy * qty;
        if cost > self.credits {
            return false;
        }
        self.credits -= cost;
        inventory.add(block, qty);
        true
    }

    /// Sell `qty` blocks out of the inventory; false if the block is not
    /// traded or the stock is short.
    pub fn sell(&mut self, block: BlockType, qty: u32, inventory: &mut Inventory) -> bool {
        let Some(price) = Self::price(block) else {
            return false;
        };
        if !inventory.remove(block, qty) {
            return false;
        }
        self.credits += price.sell * qty;
        true
    }
}

impl Default for TradingPost {
    fn default() -> Self {
        TradingPost::new()
    }
}

//! Item catalog
//!
//! The knapsack instance data: a list of named items with value and weight.
//! Catalogs are plain values passed explicitly to the fitness evaluator and
//! reporter; nothing in the crate holds catalog state.

use serde::{Deserialize, Serialize};

/// A single knapsack item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Human-readable item name
    pub name: String,
    /// Value contributed when the item is packed
    pub value: u64,
    /// Weight consumed when the item is packed
    pub weight: u64,
}

impl Item {
    /// Create a new item
    pub fn new(name: impl Into<String>, value: u64, weight: u64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

/// The seven-item sample catalog
pub fn travel_items() -> Vec<Item> {
    vec![
        Item::new("laptop", 500, 2200),
        Item::new("smartphone", 400, 300),
        Item::new("solar cream", 60, 100),
        Item::new("skateboard", 600, 5000),
        Item::new("mug", 100, 500),
        Item::new("cap", 120, 350),
        Item::new("headphones", 300, 250),
    ]
}

/// The twelve-item sample catalog: five small extras followed by the
/// seven items of [`travel_items`]
pub fn extended_travel_items() -> Vec<Item> {
    let mut items = vec![
        Item::new("notepad", 40, 333),
        Item::new("water bottle", 30, 192),
        Item::new("mints", 5, 25),
        Item::new("socks", 10, 38),
        Item::new("tissues", 15, 80),
    ];
    items.extend(travel_items());
    items
}

//! Player -- the adventurer's inventory.

use crate::view::{View, ViewItem};

use log::info;

/// The player character. Holds every item collected so far in pickup
/// order; duplicates are allowed and nothing is ever dropped.
#[derive(Debug, Default)]
pub struct Player {
    pub inventory: Vec<String>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to inventory and notify the player.
    pub fn add_item(&mut self, name: &str, view: &mut View) {
        info!("player picked up \"{name}\"");
        view.push(ViewItem::Pickup(name.to_string()));
        self.inventory.push(name.to_string());
    }

    /// Exact-match membership test.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|held| held == name)
    }

    /// Push the full inventory listing for display.
    pub fn show_inventory(&self, view: &mut View) {
        view.push(ViewItem::Inventory(self.inventory.clone()));
    }
}

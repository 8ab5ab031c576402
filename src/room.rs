//! Room definitions.
//!
//! Any place the player can stand is represented as a "Room". A room
//! carries the text shown on each visit, the items still waiting to be
//! collected, and an ordered exit list that becomes the numbered travel
//! menu.

use crate::world::RoomId;

/// Any visitable location in the game world.
#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Items lying here, in the order they were placed.
    pub items: Vec<String>,
    /// Exit ordering is stable and defines the numbered travel menu.
    pub exits: Vec<RoomId>,
    pub is_end: bool,
}

impl Room {
    /// Create an ordinary room with no items or exits yet.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            items: Vec::new(),
            exits: Vec::new(),
            is_end: false,
        }
    }

    /// Create a room that ends the adventure when entered.
    pub fn new_end(name: &str, description: &str) -> Self {
        Self {
            is_end: true,
            ..Self::new(name, description)
        }
    }

    /// Place an item in the room. Items are listed in placement order.
    pub fn add_item(&mut self, name: &str) {
        self.items.push(name.to_string());
    }

    /// Remove and return every item in placement order, leaving the room
    /// bare. A second call finds nothing.
    pub fn take_items(&mut self) -> Vec<String> {
        std::mem::take(&mut self.items)
    }
}

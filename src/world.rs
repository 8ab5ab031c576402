//! Arena storage for the location graph.
//!
//! Rooms live in a `Vec` and are addressed by stable [`RoomId`] indices.
//! Exits are stored as lists of ids, so rooms may reference each other
//! freely (the fixed map contains cycles) without any shared-ownership
//! bookkeeping.

use crate::room::Room;

use log::{info, warn};
use std::fmt;
use thiserror::Error;

/// Stable handle to a room in a [`World`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Wiring mistakes caught by [`World::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("world has no rooms")]
    Empty,
    #[error("exit {exit} of room '{room}' leads to missing room {target}")]
    DanglingExit { room: String, exit: usize, target: RoomId },
}

/// The complete location graph.
///
/// Built once at startup and read-only afterwards, except for room item
/// lists which empty out as the player collects things.
#[derive(Debug, Default)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room to the arena and return its id.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Append an exit from one room to another.
    ///
    /// No uniqueness or symmetry is enforced; callers wanting two-way
    /// travel connect both directions.
    pub fn connect(&mut self, from: RoomId, to: RoomId) {
        if let Some(room) = self.rooms.get_mut(from.0) {
            room.exits.push(to);
        } else {
            warn!("connect: no room at {from}, exit to {to} dropped");
        }
    }

    /// Check that the graph is usable: at least one room, and every exit
    /// resolves to a room in the arena.
    ///
    /// # Errors
    /// Returns the first wiring mistake found.
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.rooms.is_empty() {
            return Err(WorldError::Empty);
        }
        for room in &self.rooms {
            for (slot, target) in room.exits.iter().enumerate() {
                if target.0 >= self.rooms.len() {
                    return Err(WorldError::DanglingExit {
                        room: room.name.clone(),
                        exit: slot + 1,
                        target: *target,
                    });
                }
            }
        }
        info!("world graph validated: {} room(s)", self.rooms.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_room_returns_sequential_ids() {
        let mut world = World::new();
        let a = world.add_room(Room::new("A", ""));
        let b = world.add_room(Room::new("B", ""));
        assert_ne!(a, b);
        assert_eq!(world.room(a).unwrap().name, "A");
        assert_eq!(world.room(b).unwrap().name, "B");
        assert_eq!(world.room_count(), 2);
    }

    #[test]
    fn connect_appends_in_call_order() {
        let mut world = World::new();
        let a = world.add_room(Room::new("A", ""));
        let b = world.add_room(Room::new("B", ""));
        let c = world.add_room(Room::new("C", ""));
        world.connect(a, c);
        world.connect(a, b);
        assert_eq!(world.room(a).unwrap().exits, vec![c, b]);
    }

    #[test]
    fn connect_allows_duplicates_and_self_loops() {
        let mut world = World::new();
        let a = world.add_room(Room::new("A", ""));
        let b = world.add_room(Room::new("B", ""));
        world.connect(a, b);
        world.connect(a, b);
        world.connect(a, a);
        assert_eq!(world.room(a).unwrap().exits, vec![b, b, a]);
    }

    #[test]
    fn validate_rejects_empty_world() {
        assert_eq!(World::new().validate(), Err(WorldError::Empty));
    }

    #[test]
    fn validate_rejects_dangling_exit() {
        let mut world = World::new();
        let a = world.add_room(Room::new("A", ""));
        world.connect(a, RoomId(7));
        let err = world.validate().unwrap_err();
        assert_eq!(
            err,
            WorldError::DanglingExit {
                room: "A".into(),
                exit: 1,
                target: RoomId(7),
            }
        );
    }

    #[test]
    fn validate_accepts_cycles() {
        let mut world = World::new();
        let a = world.add_room(Room::new("A", ""));
        let b = world.add_room(Room::new("B", ""));
        world.connect(a, b);
        world.connect(b, a);
        assert!(world.validate().is_ok());
    }
}

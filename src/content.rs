//! Fixed world content.
//!
//! The adventure is a four-room trek: a cave opening onto a forest,
//! ruins beyond that, and the temple at the end of the line. Three items
//! wait along the way.

use crate::room::Room;
use crate::world::{RoomId, World};

use log::info;

/// Assemble the world and return it along with the starting room.
pub fn build() -> (World, RoomId) {
    let mut world = World::new();

    let mut cave_room = Room::new("Cave", "You're in a dimly lit cave. Water drips from the ceiling.");
    cave_room.add_item("Torch");
    let cave = world.add_room(cave_room);

    let mut forest_room = Room::new("Forest", "You're in a dense forest. Sunlight filters through the leaves.");
    forest_room.add_item("Magic Stone");
    let forest = world.add_room(forest_room);

    let mut ruins_room = Room::new(
        "Ancient Ruins",
        "You stand before crumbling stone walls covered in mysterious symbols.",
    );
    ruins_room.add_item("Ancient Key");
    let ruins = world.add_room(ruins_room);

    let temple = world.add_room(Room::new_end(
        "Temple",
        "You've reached a magnificent temple atop a mountain.",
    ));

    // exit order defines the travel menu numbering
    world.connect(cave, forest);
    world.connect(forest, cave);
    world.connect(forest, ruins);
    world.connect(ruins, forest);
    world.connect(ruins, temple);

    info!(
        "world content assembled: {} rooms, 3 items seeded",
        world.room_count()
    );
    (world, cave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_world_passes_validation() {
        let (world, _) = build();
        assert!(world.validate().is_ok());
    }

    #[test]
    fn trek_starts_in_the_cave() {
        let (world, start) = build();
        assert_eq!(world.room(start).unwrap().name, "Cave");
    }

    #[test]
    fn rooms_are_wired_as_mapped() {
        let (world, start) = build();
        let cave = world.room(start).unwrap();
        assert_eq!(cave.exits.len(), 1);

        let forest_id = cave.exits[0];
        let forest = world.room(forest_id).unwrap();
        assert_eq!(forest.name, "Forest");
        assert_eq!(forest.exits.len(), 2);
        assert_eq!(world.room(forest.exits[0]).unwrap().name, "Cave");

        let ruins = world.room(forest.exits[1]).unwrap();
        assert_eq!(ruins.name, "Ancient Ruins");
        assert_eq!(world.room(ruins.exits[0]).unwrap().name, "Forest");

        let temple = world.room(ruins.exits[1]).unwrap();
        assert_eq!(temple.name, "Temple");
        assert!(temple.exits.is_empty());
    }

    #[test]
    fn items_are_seeded_where_expected() {
        let (world, start) = build();
        let cave = world.room(start).unwrap();
        assert_eq!(cave.items, vec!["Torch"]);

        let forest = world.room(cave.exits[0]).unwrap();
        assert_eq!(forest.items, vec!["Magic Stone"]);

        let ruins = world.room(forest.exits[1]).unwrap();
        assert_eq!(ruins.items, vec!["Ancient Key"]);

        let temple = world.room(ruins.exits[1]).unwrap();
        assert!(temple.items.is_empty());
    }

    #[test]
    fn only_the_temple_ends_the_trek() {
        let (world, start) = build();
        let cave = world.room(start).unwrap();
        let forest = world.room(cave.exits[0]).unwrap();
        let ruins = world.room(forest.exits[1]).unwrap();
        let temple = world.room(ruins.exits[1]).unwrap();

        assert!(!cave.is_end);
        assert!(!forest.is_end);
        assert!(!ruins.is_end);
        assert!(temple.is_end);
    }
}

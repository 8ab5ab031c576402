//! View module.
//!
//! Rather than printing to the console from each handler, messages for the
//! current pass through the game loop accumulate here and are composed and
//! displayed together on flush.

use crate::style::GameStyle;

use std::io::{self, Write};

use textwrap::{fill, termwidth};

/// A single numbered entry in the exit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitLine {
    pub number: usize,
    pub destination: String,
}

/// Everything the game can show the player in one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    RoomTitle(String),
    RoomDescription(String),
    RoomItems(Vec<String>),
    ExitMenu(Vec<ExitLine>),
    ActionMenu { exit_count: usize },
    Pickup(String),
    Inventory(Vec<String>),
    EngineMessage(String),
    Error(String),
    Victory(String),
    Farewell(String),
}

/// Aggregates [`ViewItem`]s pushed during one pass through the loop, then
/// renders them in push order.
#[derive(Debug, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Wipe the terminal before redrawing a room frame.
    pub fn clear_screen() {
        print!("\x1B[2J\x1B[H");
        let _ = io::stdout().flush();
    }

    /// Compose and display all message contents in the current frame.
    pub fn flush(&mut self) {
        let width = termwidth();
        for item in self.items.drain(..) {
            match item {
                ViewItem::RoomTitle(name) => {
                    println!("\n{}", format!("=== {name} ===").room_titlebar_style());
                },
                ViewItem::RoomDescription(text) => {
                    println!("{}", fill(&text, width).description_style());
                },
                ViewItem::RoomItems(names) => {
                    println!("\nYou see:");
                    for name in names {
                        println!("- {}", name.item_style());
                    }
                },
                ViewItem::ExitMenu(exits) => {
                    println!("\nPossible exits:");
                    for exit in exits {
                        println!("{}. Go to {}", exit.number, exit.destination.exit_style());
                    }
                },
                ViewItem::ActionMenu { exit_count } => {
                    println!("\nWhat would you like to do?");
                    println!("1-{exit_count}. Move to a new location");
                    println!("i. Check inventory");
                    println!("q. Quit game");
                },
                ViewItem::Pickup(name) => {
                    println!("You picked up: {}", name.item_style());
                },
                ViewItem::Inventory(names) => {
                    println!("\n{}", "Inventory:".subheading_style());
                    if names.is_empty() {
                        println!("Empty");
                    } else {
                        for name in names {
                            println!("- {}", name.item_style());
                        }
                    }
                },
                ViewItem::EngineMessage(text) | ViewItem::Farewell(text) => {
                    println!("{text}");
                },
                ViewItem::Error(text) => {
                    println!("{}", text.error_style());
                },
                ViewItem::Victory(text) => {
                    println!("\n{}", fill(&text, width).victory_style());
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_accumulates_in_order() {
        let mut view = View::new();
        view.push(ViewItem::RoomTitle("Cave".into()));
        view.push(ViewItem::Error("Invalid choice.".into()));
        assert_eq!(
            view.items,
            vec![
                ViewItem::RoomTitle("Cave".into()),
                ViewItem::Error("Invalid choice.".into()),
            ]
        );
    }

    #[test]
    fn flush_empties_the_frame() {
        let mut view = View::new();
        view.push(ViewItem::EngineMessage("hello".into()));
        view.flush();
        assert!(view.items.is_empty());
    }
}

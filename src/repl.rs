//! Session state machine and the blocking game loop.
//!
//! The game runs as a read-eval-print loop over a numbered travel menu.
//! Each pass renders the current room as one frame, offers any items
//! lying there, then prompts for a menu choice until the player moves,
//! quits, or reaches the end of the trek.

mod input;

use crate::command::{Command, parse_command};
use crate::player::Player;
use crate::room::Room;
use crate::style::GameStyle;
use crate::view::{ExitLine, View, ViewItem};
use crate::world::{RoomId, World};

use anyhow::{Result, anyhow};
use log::info;

use input::{InputEvent, InputManager};

/// Control flow signal used by choice handling to exit the loop.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Exploring(RoomId),
    Ended,
}

/// A running game: the world graph, the player, and the current state.
#[derive(Debug)]
pub struct Session {
    world: World,
    player: Player,
    state: SessionState,
}

impl Session {
    /// Start a session with a fresh player at the given room.
    pub fn new(world: World, start: RoomId) -> Self {
        Self {
            world,
            player: Player::new(),
            state: SessionState::Exploring(start),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn room_ref(&self, id: RoomId) -> Result<&Room> {
        self.world.room(id).ok_or_else(|| anyhow!("room {id} not found in world"))
    }

    /// The room the player is standing in.
    ///
    /// # Errors
    /// - if the session has ended or the current id is not in the world
    pub fn current_room(&self) -> Result<&Room> {
        match self.state {
            SessionState::Exploring(id) => self.room_ref(id),
            SessionState::Ended => Err(anyhow!("session has ended; no current room")),
        }
    }

    /// True when the player is standing in the adventure's final room.
    pub fn at_end_room(&self) -> bool {
        match self.state {
            SessionState::Exploring(id) => self.world.room(id).is_some_and(|room| room.is_end),
            SessionState::Ended => false,
        }
    }

    /// True if the current room still holds items worth offering.
    pub fn pickup_available(&self) -> bool {
        match self.state {
            SessionState::Exploring(id) => self.world.room(id).is_some_and(|room| !room.items.is_empty()),
            SessionState::Ended => false,
        }
    }

    /// Push the full frame for the current room: title, description, any
    /// remaining items, and the numbered exit list.
    ///
    /// # Errors
    /// - if the current room or an exit destination cannot be resolved
    pub fn render_room(&self, view: &mut View) -> Result<()> {
        let room = self.current_room()?;
        view.push(ViewItem::RoomTitle(room.name.clone()));
        view.push(ViewItem::RoomDescription(room.description.clone()));
        if !room.items.is_empty() {
            view.push(ViewItem::RoomItems(room.items.clone()));
        }
        let mut exits = Vec::new();
        for (slot, id) in room.exits.iter().enumerate() {
            let destination = self.room_ref(*id)?.name.clone();
            exits.push(ExitLine {
                number: slot + 1,
                destination,
            });
        }
        view.push(ViewItem::ExitMenu(exits));
        Ok(())
    }

    /// Apply the answer to the pickup prompt. Only an affirmative `y`
    /// collects; anything else declines and the items stay put.
    ///
    /// # Errors
    /// - if the current room id is not in the world
    pub fn apply_pickup_answer(&mut self, answer: &str, view: &mut View) -> Result<()> {
        let SessionState::Exploring(here) = self.state else {
            return Ok(());
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        let (room_name, items) = {
            let room = self
                .world
                .room_mut(here)
                .ok_or_else(|| anyhow!("room {here} not found in world"))?;
            (room.name.clone(), room.take_items())
        };
        for item in &items {
            self.player.add_item(item, view);
        }
        if !items.is_empty() {
            info!("player cleared {} item(s) out of \"{room_name}\"", items.len());
        }
        Ok(())
    }

    /// Apply one line of travel-menu input: move through an exit, show
    /// the inventory, quit, or reject the input with the state unchanged.
    ///
    /// # Errors
    /// - if a room or exit destination cannot be resolved
    pub fn apply_choice(&mut self, line: &str, view: &mut View) -> Result<ReplControl> {
        let SessionState::Exploring(here) = self.state else {
            return Ok(ReplControl::Quit);
        };
        let (exit_count, room_name) = {
            let room = self.room_ref(here)?;
            (room.exits.len(), room.name.clone())
        };
        match parse_command(line, exit_count) {
            Command::Move(choice) => {
                let dest_id = self
                    .room_ref(here)?
                    .exits
                    .get(choice - 1)
                    .copied()
                    .ok_or_else(|| anyhow!("exit {choice} of '{room_name}' is out of range"))?;
                let dest_name = self.room_ref(dest_id)?.name.clone();
                info!("player moved from \"{room_name}\" to \"{dest_name}\"");
                self.state = SessionState::Exploring(dest_id);
                Ok(ReplControl::Continue)
            },
            Command::Inventory => {
                self.player.show_inventory(view);
                Ok(ReplControl::Continue)
            },
            Command::Quit => {
                info!(
                    "player quit from \"{room_name}\" holding {} item(s)",
                    self.player.inventory.len()
                );
                view.push(ViewItem::Farewell("Thanks for playing!".to_string()));
                self.state = SessionState::Ended;
                Ok(ReplControl::Quit)
            },
            Command::Unknown => {
                view.push(ViewItem::Error("Invalid choice.".to_string()));
                Ok(ReplControl::Continue)
            },
        }
    }

    /// Close out the session at the end location.
    pub fn complete(&mut self, view: &mut View) {
        info!(
            "player reached the end holding {} item(s)",
            self.player.inventory.len()
        );
        view.push(ViewItem::Victory(
            "Congratulations! You've reached the end of your adventure!".to_string(),
        ));
        self.state = SessionState::Ended;
    }

    /// Run the blocking read-eval-print loop until the player quits or
    /// reaches the end location.
    ///
    /// # Errors
    /// - if the line editor cannot be initialized or a room lookup fails
    pub fn run(&mut self) -> Result<()> {
        let mut input = InputManager::new()?;
        let mut view = View::new();
        let pickup_prompt = "\nWould you like to pick up any items? (y/n): ".prompt_style().to_string();
        let choice_prompt = "\nEnter your choice: ".prompt_style().to_string();

        loop {
            View::clear_screen();
            self.render_room(&mut view)?;
            if self.at_end_room() {
                self.complete(&mut view);
                view.flush();
                return Ok(());
            }
            view.flush();

            if self.pickup_available() {
                match input.read_line(&pickup_prompt)? {
                    InputEvent::Line(answer) => self.apply_pickup_answer(&answer, &mut view)?,
                    InputEvent::Eof => {
                        self.apply_choice("q", &mut view)?;
                        view.flush();
                        return Ok(());
                    },
                    InputEvent::Interrupted => {
                        view.push(ViewItem::EngineMessage("Leaving them be.".to_string()));
                    },
                }
                view.flush();
            }

            // menu loop: inventory checks and invalid input re-present
            // the menu without changing state
            loop {
                let exit_count = self.current_room()?.exits.len();
                view.push(ViewItem::ActionMenu { exit_count });
                view.flush();

                let line = match input.read_line(&choice_prompt)? {
                    InputEvent::Line(line) => line,
                    InputEvent::Eof => "q".to_string(),
                    InputEvent::Interrupted => {
                        view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                        view.flush();
                        continue;
                    },
                };

                let before = self.state;
                let control = self.apply_choice(&line, &mut view)?;
                view.flush();
                match control {
                    ReplControl::Quit => return Ok(()),
                    ReplControl::Continue => {
                        if self.state != before {
                            break;
                        }
                    },
                }
            }
        }
    }
}

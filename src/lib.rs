#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const WAYFARE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod content;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{Command, parse_command};
pub use player::Player;
pub use repl::{ReplControl, Session, SessionState};
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::{RoomId, World, WorldError};

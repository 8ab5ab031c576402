#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Wayfare **
//! A short menu-driven adventure through cave, forest, and ruins

use wayfare::style::GameStyle;
use wayfare::{Session, View, content};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: assembling the world...");
    let (world, start) = content::build();
    world.validate().context("while validating world wiring")?;
    info!("world ready: {} rooms", world.room_count());

    View::clear_screen();
    println!("{:^80}", "WAYFARE: A SHORT TREK TO THE TEMPLE".bright_yellow().underline());
    println!("\n{}", "Welcome to the Adventure Game!".description_style());

    print!("Press Enter to begin...");
    let _ = io::stdout().flush();
    let mut gate = String::new();
    io::stdin()
        .lock()
        .read_line(&mut gate)
        .context("while waiting for the player to begin")?;

    info!("Starting the game!");
    let mut session = Session::new(world, start);
    session.run()
}
